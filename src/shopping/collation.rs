use std::cmp::Ordering;

use crate::shopping::constants::{FOREIGN_LETTER_FOLDS, POLISH_LETTER_RANKS};

/// Primary weight classes, compared before the value inside the class.
const CLASS_SEPARATOR: u8 = 0;
const CLASS_DIGIT: u8 = 1;
const CLASS_LETTER: u8 = 2;
const CLASS_OTHER_LETTER: u8 = 3;

/// Primary collation weight of one character.
///
/// Whitespace and punctuation sort before digits, digits before letters.
/// Letters are case-insensitive and follow the Polish alphabet; accented
/// letters from other languages fold onto their base letter.
fn primary_weight(c: char) -> (u8, u32) {
    let lower = lowercase(c);

    if let Some(rank) = POLISH_LETTER_RANKS.get(&lower) {
        return (CLASS_LETTER, *rank);
    }
    if let Some(base) = FOREIGN_LETTER_FOLDS.get(&lower) {
        if let Some(rank) = POLISH_LETTER_RANKS.get(base) {
            return (CLASS_LETTER, *rank);
        }
    }
    if let Some(digit) = lower.to_digit(10) {
        return (CLASS_DIGIT, digit);
    }
    if lower.is_alphabetic() {
        return (CLASS_OTHER_LETTER, lower as u32);
    }
    (CLASS_SEPARATOR, lower as u32)
}

fn lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Compare two display names the way a Polish reader expects.
///
/// `ą` sorts right after `a`, `ł` after `l`, `ż` last, and so on. Strings
/// equal at the primary level are ordered by accent (unaccented first),
/// then lowercase-first, then by their raw bytes, so the result is a total
/// order.
pub fn polish_cmp(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .map(primary_weight)
        .cmp(b.chars().map(primary_weight));
    if primary != Ordering::Equal {
        return primary;
    }

    // Primary-equal strings line up char by char; folded letters only
    // differ here, and base letters have the lower code point.
    let accents = a.chars().map(lowercase).cmp(b.chars().map(lowercase));
    if accents != Ordering::Equal {
        return accents;
    }

    let case = a
        .chars()
        .map(char::is_uppercase)
        .cmp(b.chars().map(char::is_uppercase));
    if case != Ordering::Equal {
        return case;
    }

    a.cmp(b)
}
