use std::fmt::Write;

use crate::catalog::{Catalog, CatalogLookup, ResolvedLine, SupplyCatalog};
use crate::models::{Cruise, Recipe, ShoppingList};
use crate::shopping::{category_for, explain, GroupingConfig};
use crate::state::upsert_by;

/// Display the shopping list grouped by category.
///
/// With `with_provenance`, each item is followed by its calculation breakdown.
pub fn display_shopping_list(list: &ShoppingList, crew: u32, with_provenance: bool) {
    if list.is_empty() {
        println!("No items on the shopping list. Plan some recipes or add supplies first.");
        return;
    }

    println!();
    println!("=== Shopping List ({} items) ===", list.len());

    let max_name_len = list
        .iter()
        .map(|(_, item)| item.supply.name.chars().count())
        .max()
        .unwrap_or(10);

    for category in list.category_names() {
        println!();
        println!("--- {} ---", category);
        for item in list.items(category) {
            let padding = max_name_len - item.supply.name.chars().count();
            println!(
                "  {}{}  {} {}",
                item.supply.name,
                " ".repeat(padding),
                item.total_amount,
                item.supply.unit
            );
            if with_provenance {
                for line in explain(item, crew).to_string().lines() {
                    println!("      {}", line);
                }
            }
        }
    }

    println!();
}

/// Display a one-line summary per cruise.
pub fn display_cruise_list(cruises: &[Cruise]) {
    if cruises.is_empty() {
        println!("No cruises yet. Use 'new' to plan one.");
        return;
    }

    println!();
    println!("=== Cruises ({}) ===", cruises.len());
    println!();
    for cruise in cruises {
        println!(
            "  [{}] {} - {} days, crew {}, {} recipes planned",
            cruise.id,
            cruise.name,
            cruise.length,
            cruise.crew,
            cruise.planned_recipe_count()
        );
    }
    println!();
}

/// Display cruise details: info, day plan and additional supplies.
pub fn display_cruise(cruise: &Cruise, catalog: &Catalog) {
    println!();
    println!("=== {} ===", cruise.name);
    println!("Id: {}", cruise.id);
    println!("Length: {} days", cruise.length);
    println!("Crew: {}", cruise.crew);
    println!("Created: {}", cruise.date_created);
    println!("Modified: {}", cruise.date_modified);

    println!();
    println!("--- Meal plan ---");
    for day in &cruise.days {
        if day.recipes.is_empty() {
            println!("  Day {}: (nothing planned)", day.day_number);
            continue;
        }
        println!("  Day {}:", day.day_number);
        for recipe_id in &day.recipes {
            match catalog.resolve_recipe(*recipe_id) {
                Some(recipe) => {
                    println!("    - {} [{}]", recipe.name, recipe.meal_type_labels())
                }
                None => println!("    - Recipe #{} (missing from catalog)", recipe_id),
            }
        }
    }

    println!();
    println!("--- Additional supplies ---");
    if cruise.additional_supplies.is_empty() {
        println!("  (none)");
    }
    for entry in &cruise.additional_supplies {
        match catalog.resolve_supply(&entry.id) {
            Some(supply) => println!("  {} - {} {}", supply.name, entry.amount, supply.unit),
            None => println!("  {} - {} (missing from catalog)", entry.id, entry.amount),
        }
    }
    println!();
}

fn diet_badge(recipe: &Recipe, catalog: &Catalog) -> &'static str {
    if catalog.is_recipe_vegan(recipe) {
        " [vegan]"
    } else if catalog.is_recipe_vegetarian(recipe) {
        " [vegetarian]"
    } else {
        ""
    }
}

/// Minutes as "45 min", "2 h" or "1 h 30 min".
pub fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{} min", m),
        (h, 0) => format!("{} h", h),
        (h, m) => format!("{} h {} min", h, m),
    }
}

/// Full recipe card: ratings, time, description, ingredients by category,
/// equipment and steps. Sections with no data are left out.
pub fn recipe_detail(recipe: &Recipe, catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", recipe.name);
    let _ = writeln!(
        out,
        "#{} ({}){}",
        recipe.id,
        recipe.meal_type_labels(),
        diet_badge(recipe, catalog)
    );
    let _ = writeln!(out, "Difficulty: {}/5", recipe.difficulty);
    if let Some(score) = recipe.taste_score {
        let _ = writeln!(out, "Taste: {}/5", score);
    }
    if let Some(minutes) = recipe.preparation_time {
        let _ = writeln!(out, "Preparation time: {}", format_minutes(minutes));
    }
    if let Some(author) = &recipe.developed_by {
        let _ = writeln!(out, "Developed by: {}", author);
    }
    if !recipe.description.trim().is_empty() {
        let _ = writeln!(out, "\n{}", recipe.description.trim());
    }

    // Grouped in first-seen order; lines missing from the catalog go last.
    let config = GroupingConfig::default();
    let mut groups: Vec<(String, Vec<ResolvedLine>)> = Vec::new();
    let mut unknown: Vec<ResolvedLine> = Vec::new();
    for line in catalog.recipe_ingredient_lines(recipe) {
        match catalog.resolve_ingredient(&line.supply_id) {
            Some(supply) => {
                let category = category_for(supply, &config);
                let (group, _) =
                    upsert_by(&mut groups, |(c, _)| *c == category, || (category.clone(), Vec::new()));
                group.1.push(line);
            }
            None => unknown.push(line),
        }
    }
    if !unknown.is_empty() {
        groups.push(("?".to_string(), unknown));
    }

    let _ = writeln!(out, "\n--- Ingredients (per person) ---");
    if groups.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (category, lines) in &groups {
        let _ = writeln!(out, "  {}:", category);
        for line in lines {
            let _ = writeln!(out, "    {} {} {}", line.name, line.amount, line.unit);
        }
    }

    if !recipe.equipment.is_empty() {
        let _ = writeln!(out, "\n--- Equipment ---");
        for item in &recipe.equipment {
            let _ = writeln!(out, "  - {}", item);
        }
    }

    if !recipe.instructions.is_empty() {
        let _ = writeln!(out, "\n--- Steps ---");
        for (i, step) in recipe.instructions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, step);
        }
    }
    out
}

/// Display one recipe in full.
pub fn display_recipe(recipe: &Recipe, catalog: &Catalog) {
    println!();
    print!("{}", recipe_detail(recipe, catalog));
    println!();
}

/// Display recipes with meal types, difficulty and diet badge.
pub fn display_recipe_list(recipes: &[&Recipe], catalog: &Catalog) {
    if recipes.is_empty() {
        println!("No recipes match.");
        return;
    }

    println!();
    println!("=== Recipes ({}) ===", recipes.len());
    println!();
    for recipe in recipes {
        let badge = diet_badge(recipe, catalog);
        println!(
            "  #{:<4} {} ({}) difficulty {}/5{}",
            recipe.id,
            recipe.name,
            recipe.meal_type_labels(),
            recipe.difficulty,
            badge
        );
        for line in catalog.recipe_ingredient_lines(recipe) {
            println!("         {} {} {}", line.name, line.amount, line.unit);
        }
    }
    println!();
}

/// Display ingredients grouped by category, or the non-ingredient supplies.
pub fn display_supply_catalog(supplies: &SupplyCatalog, ingredients: bool) {
    println!();
    if ingredients {
        println!("=== Ingredients ({}) ===", supplies.ingredients().len());
        for (category, group) in supplies.ingredients_by_category() {
            println!();
            println!("--- {} ---", category);
            for supply in group {
                println!("  [{}] {} ({})", supply.id, supply.name, supply.unit);
            }
        }
    } else {
        let others = supplies.non_ingredients();
        println!("=== Other supplies ({}) ===", others.len());
        println!();
        for supply in others {
            let category = supply.category.as_deref().unwrap_or("-");
            println!("  [{}] {} ({}) {}", supply.id, supply.name, supply.unit, category);
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IngredientAmount, MealType, Supply};

    fn supply(id: &str, name: &str, category: Option<&str>, vegan: bool) -> Supply {
        Supply {
            id: id.to_string(),
            name: name.to_string(),
            unit: "kg".to_string(),
            is_ingredient: true,
            category: category.map(str::to_string),
            is_vegetarian: true,
            is_vegan: vegan,
            freshness_days: 30,
            storage_type: None,
        }
    }

    fn pancakes() -> Recipe {
        Recipe {
            id: 3,
            name: "Naleśniki".to_string(),
            description: "Cienkie placki z patelni.".to_string(),
            meal_type: vec![MealType::Breakfast],
            difficulty: 2,
            ingredients: vec![
                IngredientAmount::new("maka", 0.1),
                IngredientAmount::new("mleko", 0.2),
                IngredientAmount::new("cukier", 0.01),
                IngredientAmount::new("ghost", 1.0),
            ],
            instructions: vec!["Wymieszaj".to_string(), "Smaż".to_string()],
            equipment: vec!["Patelnia".to_string()],
            developed_by: Some("Kambuz".to_string()),
            taste_score: Some(5),
            preparation_time: Some(90),
        }
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45), "45 min");
        assert_eq!(format_minutes(120), "2 h");
        assert_eq!(format_minutes(90), "1 h 30 min");
    }

    #[test]
    fn test_recipe_detail() {
        let catalog = Catalog::new(
            vec![
                supply("maka", "Mąka", Some("zboża"), true),
                supply("mleko", "Mleko", Some("dairy"), false),
                supply("cukier", "Cukier", None, true),
            ],
            vec![pancakes()],
        );

        let text = recipe_detail(&pancakes(), &catalog);
        assert_eq!(
            text,
            "=== Naleśniki ===\n\
             #3 (śniadanie) [vegetarian]\n\
             Difficulty: 2/5\n\
             Taste: 5/5\n\
             Preparation time: 1 h 30 min\n\
             Developed by: Kambuz\n\
             \n\
             Cienkie placki z patelni.\n\
             \n\
             --- Ingredients (per person) ---\n  \
             zboża:\n    \
             Mąka 0.1 kg\n  \
             nabiał:\n    \
             Mleko 0.2 kg\n  \
             inne:\n    \
             Cukier 0.01 kg\n  \
             ?:\n    \
             Unknown (ghost) 1 \n\
             \n\
             --- Equipment ---\n  \
             - Patelnia\n\
             \n\
             --- Steps ---\n  \
             1. Wymieszaj\n  \
             2. Smaż\n"
        );
    }

    #[test]
    fn test_recipe_detail_skips_empty_sections() {
        let mut bare = pancakes();
        bare.ingredients.clear();
        bare.equipment.clear();
        bare.instructions.clear();
        bare.description.clear();
        bare.taste_score = None;
        bare.preparation_time = None;
        bare.developed_by = None;

        let text = recipe_detail(&bare, &Catalog::default());
        assert_eq!(
            text,
            "=== Naleśniki ===\n#3 (śniadanie) [vegan]\nDifficulty: 2/5\n\n--- Ingredients (per person) ---\n  (none)\n"
        );
    }
}
