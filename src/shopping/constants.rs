use std::collections::HashMap;
use std::sync::LazyLock;

/// Bucket for ingredients whose catalog record carries no category.
pub const INGREDIENT_FALLBACK_CATEGORY: &str = "inne";

/// Bucket for non-ingredient supplies without a category.
pub const SUPPLY_FALLBACK_CATEGORY: &str = "Pozostałe produkty";

/// Polish alphabet in collation order; each diacritic follows its base letter.
pub const POLISH_ALPHABET: &str = "aąbcćdeęfghijklłmnńoópqrsśtuvwxyzźż";

/// Rank of each lowercase letter of [`POLISH_ALPHABET`].
pub static POLISH_LETTER_RANKS: LazyLock<HashMap<char, u32>> = LazyLock::new(|| {
    POLISH_ALPHABET
        .chars()
        .enumerate()
        .map(|(i, c)| (c, i as u32))
        .collect()
});

/// Accented Latin letters outside the Polish alphabet, folded onto their base letter.
pub static FOREIGN_LETTER_FOLDS: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    let table: [(&str, char); 12] = [
        ("àáâäãåāă", 'a'),
        ("çčĉ", 'c'),
        ("ďđ", 'd'),
        ("èéêëěē", 'e'),
        ("ìíîïī", 'i'),
        ("ñň", 'n'),
        ("òôöõøō", 'o'),
        ("řŕ", 'r'),
        ("šş", 's'),
        ("ùúûüůū", 'u'),
        ("ýÿ", 'y'),
        ("žẑ", 'z'),
    ];
    let mut m = HashMap::new();
    for (accented, base) in table {
        for c in accented.chars() {
            m.insert(c, base);
        }
    }
    m
});
