use std::fmt;

use crate::models::{AggregatedItem, AmountSource};

/// Recipe occurrences sharing the same recipe and the same amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeBreakdown {
    pub recipe_name: String,
    /// Distinct day numbers, ascending.
    pub days: Vec<u32>,
    /// Number of occurrences folded into this line; exceeds `days.len()`
    /// when a recipe is planned more than once on the same day.
    pub occurrences: usize,
    pub per_person: f64,
    pub scaled: f64,
}

/// Human-readable account of how an item's total was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Provenance {
    pub unit: String,
    pub crew: u32,
    pub recipes: Vec<RecipeBreakdown>,
    /// Sum of all manual entries, `None` if there were none.
    pub additional_total: Option<f64>,
}

/// Explain an aggregated item.
///
/// Recipe sources are grouped by recipe name, then by the
/// (per-person, scaled) amount pair, both in first-seen order. Manual
/// entries collapse into a single summed line.
pub fn explain(item: &AggregatedItem, crew: u32) -> Provenance {
    let mut recipes: Vec<RecipeBreakdown> = Vec::new();
    let mut additional_total: Option<f64> = None;

    for source in &item.sources {
        match source {
            AmountSource::Recipe {
                amount,
                per_person,
                recipe_name,
                day_number,
                ..
            } => {
                let existing = recipes.iter_mut().find(|r| {
                    r.recipe_name == *recipe_name
                        && r.per_person.to_bits() == per_person.to_bits()
                        && r.scaled.to_bits() == amount.to_bits()
                });
                match existing {
                    Some(line) => {
                        line.occurrences += 1;
                        if !line.days.contains(day_number) {
                            line.days.push(*day_number);
                        }
                    }
                    None => recipes.push(RecipeBreakdown {
                        recipe_name: recipe_name.clone(),
                        days: vec![*day_number],
                        occurrences: 1,
                        per_person: *per_person,
                        scaled: *amount,
                    }),
                }
            }
            AmountSource::Additional { amount } => {
                *additional_total.get_or_insert(0.0) += amount;
            }
        }
    }

    // Keep lines of the same recipe together, in the order recipes first appeared.
    let mut order: Vec<&str> = Vec::new();
    for line in &recipes {
        if !order.contains(&line.recipe_name.as_str()) {
            order.push(&line.recipe_name);
        }
    }
    let mut grouped: Vec<RecipeBreakdown> = Vec::with_capacity(recipes.len());
    for name in order {
        grouped.extend(recipes.iter().filter(|r| r.recipe_name == name).cloned());
    }
    for line in &mut grouped {
        line.days.sort_unstable();
    }

    Provenance {
        unit: item.supply.unit.clone(),
        crew,
        recipes: grouped,
        additional_total,
    }
}

fn join_days(days: &[u32]) -> String {
    days.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.recipes.is_empty() {
            write!(f, "From recipes (crew: {}):", self.crew)?;
            for line in &self.recipes {
                let label = if line.days.len() == 1 { "day" } else { "days" };
                write!(f, "\n- {} ({} {}", line.recipe_name, label, join_days(&line.days))?;
                if line.occurrences > line.days.len() {
                    write!(f, "; {} times", line.occurrences)?;
                }
                write!(
                    f,
                    "): {} {} × {} crew = {} {}",
                    line.per_person, self.unit, self.crew, line.scaled, self.unit
                )?;
            }
        }

        if let Some(total) = self.additional_total {
            if !self.recipes.is_empty() {
                write!(f, "\n\n")?;
            }
            write!(f, "From additional purchases: {} {}", total, self.unit)?;
        }

        Ok(())
    }
}
