use std::path::Path;

use crate::error::Result;
use crate::models::{AggregatedItem, AmountSource, ShoppingList};

/// Short, single-line description of where an item's amount comes from.
fn describe_sources(item: &AggregatedItem) -> String {
    item.sources
        .iter()
        .map(|source| match source {
            AmountSource::Recipe {
                amount,
                recipe_name,
                day_number,
                ..
            } => format!("{} (day {}): {}", recipe_name, day_number, amount),
            AmountSource::Additional { amount } => format!("additional: {}", amount),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Rows of the CSV export, one per item, in display order.
pub fn shopping_rows(list: &ShoppingList) -> Vec<[String; 5]> {
    list.iter()
        .map(|(category, item)| {
            [
                category.to_string(),
                item.supply.name.clone(),
                item.total_amount.to_string(),
                item.supply.unit.clone(),
                describe_sources(item),
            ]
        })
        .collect()
}

/// Write the shopping list to a CSV file.
pub fn write_shopping_csv(list: &ShoppingList, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["category", "name", "amount", "unit", "sources"])?;
    for row in shopping_rows(list) {
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
