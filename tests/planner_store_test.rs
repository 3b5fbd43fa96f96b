use std::fs;

use cruise_provisioner_rs::catalog::load_catalog;
use cruise_provisioner_rs::error::ProvisionError;
use cruise_provisioner_rs::shopping::GroupingConfig;
use cruise_provisioner_rs::state::{CruisePlanner, CruiseRepository, JsonCruiseStore};

const SUPPLIES: &str = r#"[
    {"id": "maka", "name": "Mąka pszenna", "unit": "kg", "isIngredient": true, "category": "zboża",
     "isVegetarian": true, "isVegan": true, "freshnessDays": 180, "storageType": "room"},
    {"id": "jajka", "name": "Jajka", "unit": "szt", "isIngredient": true, "category": "nabiał",
     "isVegetarian": true, "isVegan": false, "freshnessDays": 21, "storageType": "fridge"},
    {"id": "woda", "name": "Woda butelkowana", "unit": "l", "isIngredient": false}
]"#;

const RECIPES: &str = r#"[
    {"id": 1, "name": "Naleśniki", "mealType": ["śniadanie"], "difficulty": 2,
     "ingredients": [{"id": "maka", "amount": 0.1}, {"id": "jajka", "amount": 1}]}
]"#;

#[test]
fn test_plan_and_shop_through_json_store() {
    let dir = tempfile::tempdir().unwrap();
    let supplies = dir.path().join("supplies.json");
    let recipes = dir.path().join("recipes.json");
    fs::write(&supplies, SUPPLIES).unwrap();
    fs::write(&recipes, RECIPES).unwrap();
    let catalog = load_catalog(&supplies, &recipes).unwrap();

    let mut planner = CruisePlanner::new(JsonCruiseStore::new(dir.path().join("cruises.json")));
    let cruise = planner.create_cruise("Mazury", 3, 6).unwrap();

    planner.add_recipe_to_day(&cruise.id, 1, 1).unwrap();
    planner.add_recipe_to_day(&cruise.id, 3, 1).unwrap();
    planner.add_additional_supply(&cruise.id, "woda", 30.0).unwrap();
    planner.add_additional_supply(&cruise.id, "jajka", 6.0).unwrap();

    let list = planner
        .shopping_list(&cruise.id, &catalog, &GroupingConfig::default())
        .unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(list.find("jajka").unwrap().total_amount, 18.0);
    assert_eq!(list.find("woda").unwrap().total_amount, 30.0);
    assert_eq!(list.items("Pozostałe produkty")[0].supply.id, "woda");

    planner.remove_recipe_from_day(&cruise.id, 3, 1).unwrap();
    planner.remove_additional_supply(&cruise.id, "jajka").unwrap();

    let list = planner
        .shopping_list(&cruise.id, &catalog, &GroupingConfig::default())
        .unwrap();
    assert_eq!(list.find("jajka").unwrap().total_amount, 6.0);
    assert_eq!(list.find("jajka").unwrap().sources.len(), 1);
}

#[test]
fn test_shopping_list_for_missing_cruise_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let supplies = dir.path().join("supplies.json");
    let recipes = dir.path().join("recipes.json");
    fs::write(&supplies, SUPPLIES).unwrap();
    fs::write(&recipes, RECIPES).unwrap();
    let catalog = load_catalog(&supplies, &recipes).unwrap();

    let planner = CruisePlanner::new(JsonCruiseStore::new(dir.path().join("cruises.json")));
    let result = planner.shopping_list("nope", &catalog, &GroupingConfig::default());
    assert!(matches!(result, Err(ProvisionError::CruiseNotFound(_))));
}

#[test]
fn test_legacy_store_is_migrated_before_planning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cruises.json");
    fs::write(
        &path,
        r#"[{"id": "old", "name": "Stary rejs", "dateCreated": "2024-05-01T00:00:00Z",
             "dateModified": "2024-05-01T00:00:00Z", "length": 2, "crew": 3}]"#,
    )
    .unwrap();

    let mut planner = CruisePlanner::new(JsonCruiseStore::new(&path));
    let cruise = planner.get_cruise("old").unwrap();
    assert_eq!(cruise.days.len(), 2);
    assert!(cruise.additional_supplies.is_empty());

    assert!(planner.add_recipe_to_day("old", 2, 1).unwrap());

    let stored = planner.repository().get_by_id("old").unwrap().unwrap();
    assert_eq!(stored.day(2).unwrap().recipes, vec![1]);
    assert_ne!(stored.date_modified, "2024-05-01T00:00:00Z");
    assert_eq!(stored.date_created, "2024-05-01T00:00:00Z");
}

#[test]
fn test_created_cruises_are_listed_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut planner = CruisePlanner::new(JsonCruiseStore::new(dir.path().join("cruises.json")));

    let first = planner.create_cruise("Pierwszy", 1, 2).unwrap();
    let second = planner.create_cruise("Drugi", 5, 8).unwrap();
    assert_ne!(first.id, second.id);

    let names: Vec<String> = planner
        .list_cruises()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Pierwszy", "Drugi"]);

    planner.delete_cruise(&first.id).unwrap();
    assert_eq!(planner.list_cruises().unwrap().len(), 1);
}

#[test]
fn test_bundled_catalog_is_consistent() {
    use cruise_provisioner_rs::catalog::CatalogLookup;

    let root = env!("CARGO_MANIFEST_DIR");
    let catalog = load_catalog(
        format!("{}/data/supplies.json", root),
        format!("{}/data/recipes.json", root),
    )
    .unwrap();

    assert_eq!(catalog.recipes.len(), 6);
    for recipe in catalog.recipes.all() {
        for line in &recipe.ingredients {
            assert!(
                catalog.resolve_ingredient(&line.id).is_some(),
                "{} references unknown ingredient {}",
                recipe.name,
                line.id
            );
        }
    }
}

#[test]
fn test_loaded_recipe_with_zero_line_keeps_its_other_lines() {
    let dir = tempfile::tempdir().unwrap();
    let supplies = dir.path().join("supplies.json");
    let recipes = dir.path().join("recipes.json");
    fs::write(&supplies, SUPPLIES).unwrap();
    fs::write(
        &recipes,
        r#"[
            {"id": 1, "name": "Placki", "mealType": ["obiad"], "difficulty": 1,
             "ingredients": [{"id": "maka", "amount": 0.5}, {"id": "jajka", "amount": 0}]}
        ]"#,
    )
    .unwrap();
    let catalog = load_catalog(&supplies, &recipes).unwrap();
    assert_eq!(catalog.recipes.len(), 1);

    let mut planner = CruisePlanner::new(JsonCruiseStore::new(dir.path().join("cruises.json")));
    let cruise = planner.create_cruise("Hel", 1, 4).unwrap();
    planner.add_recipe_to_day(&cruise.id, 1, 1).unwrap();

    let list = planner
        .shopping_list(&cruise.id, &catalog, &GroupingConfig::default())
        .unwrap();
    assert_eq!(list.find("maka").unwrap().total_amount, 2.0);
    let eggs = list.find("jajka").unwrap();
    assert_eq!(eggs.total_amount, 0.0);
    assert_eq!(eggs.sources.len(), 1);
}
