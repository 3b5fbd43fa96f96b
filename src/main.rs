use std::path::Path;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cruise_provisioner_rs::catalog::{load_catalog, Catalog, CatalogLookup};
use cruise_provisioner_rs::cli::{Cli, Command, Diet};
use cruise_provisioner_rs::error::{ProvisionError, Result};
use cruise_provisioner_rs::interface::{
    display_cruise, display_cruise_list, display_recipe, display_recipe_list,
    display_shopping_list, display_supply_catalog, prompt_crew, prompt_cruise_length,
    prompt_cruise_name, prompt_yes_no, resolve_recipe_input, resolve_supply_input,
    write_shopping_csv,
};
use cruise_provisioner_rs::models::MealType;
use cruise_provisioner_rs::shopping::GroupingConfig;
use cruise_provisioner_rs::state::{CruisePlanner, JsonCruiseStore};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cruise_provisioner_rs={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();
    let mut planner = CruisePlanner::new(JsonCruiseStore::new(&cli.store));
    debug!(store = %cli.store, ?command, "running command");

    match command {
        Command::Cruises => {
            display_cruise_list(&planner.list_cruises()?);
            Ok(())
        }
        Command::New { name, length, crew } => cmd_new(&mut planner, name, length, crew),
        Command::Show { cruise } => {
            let catalog = open_catalog(&cli.supplies, &cli.recipes)?;
            display_cruise(&planner.get_cruise(&cruise)?, &catalog);
            Ok(())
        }
        Command::Delete { cruise, yes } => cmd_delete(&mut planner, &cruise, yes),
        Command::AddRecipe { cruise, day, recipe } => {
            let catalog = open_catalog(&cli.supplies, &cli.recipes)?;
            let recipe_id = resolve_recipe_input(&catalog, &recipe)?;
            let name = recipe_name(&catalog, recipe_id);
            if planner.add_recipe_to_day(&cruise, day, recipe_id)? {
                println!("Planned {} on day {}.", name, day);
            } else {
                println!("{} is already planned on day {}.", name, day);
            }
            Ok(())
        }
        Command::RemoveRecipe { cruise, day, recipe } => {
            let catalog = open_catalog(&cli.supplies, &cli.recipes)?;
            let recipe_id = resolve_recipe_input(&catalog, &recipe)?;
            let removed = planner.remove_recipe_from_day(&cruise, day, recipe_id)?;
            println!(
                "Removed {} from day {} ({} occurrence(s)).",
                recipe_name(&catalog, recipe_id),
                day,
                removed
            );
            Ok(())
        }
        Command::AddSupply {
            cruise,
            supply,
            amount,
        } => {
            let catalog = open_catalog(&cli.supplies, &cli.recipes)?;
            let supply_id = resolve_supply_input(&catalog, &supply)?;
            planner.add_additional_supply(&cruise, &supply_id, amount)?;
            println!("Additional purchase set: {} = {}.", supply_id, amount);
            Ok(())
        }
        Command::SetSupply {
            cruise,
            supply,
            amount,
        } => {
            let catalog = open_catalog(&cli.supplies, &cli.recipes)?;
            let supply_id = resolve_supply_input(&catalog, &supply)?;
            planner.update_additional_supply_amount(&cruise, &supply_id, amount)?;
            println!("Updated {} to {}.", supply_id, amount);
            Ok(())
        }
        Command::RemoveSupply { cruise, supply } => {
            let catalog = open_catalog(&cli.supplies, &cli.recipes)?;
            let supply_id = resolve_supply_input(&catalog, &supply)?;
            if planner.remove_additional_supply(&cruise, &supply_id)? {
                println!("Removed {} from additional purchases.", supply_id);
            } else {
                println!("{} was not on the additional purchases list.", supply_id);
            }
            Ok(())
        }
        Command::Shopping {
            cruise,
            explain,
            csv,
        } => {
            let catalog = open_catalog(&cli.supplies, &cli.recipes)?;
            let (cruise, list) =
                planner.cruise_with_shopping_list(&cruise, &catalog, &GroupingConfig::default())?;
            display_shopping_list(&list, cruise.crew, explain);
            if let Some(path) = csv {
                write_shopping_csv(&list, Path::new(&path))?;
                println!("Shopping list written to {}.", path);
            }
            Ok(())
        }
        Command::Supplies { ingredients } => {
            let catalog = open_catalog(&cli.supplies, &cli.recipes)?;
            display_supply_catalog(&catalog.supplies, ingredients);
            Ok(())
        }
        Command::Recipe { recipe } => {
            let catalog = open_catalog(&cli.supplies, &cli.recipes)?;
            let recipe_id = resolve_recipe_input(&catalog, &recipe)?;
            let recipe = catalog
                .resolve_recipe(recipe_id)
                .ok_or_else(|| ProvisionError::RecipeNotFound(recipe_id.to_string()))?;
            display_recipe(recipe, &catalog);
            Ok(())
        }
        Command::Recipes { meal_type, diet } => {
            let catalog = open_catalog(&cli.supplies, &cli.recipes)?;
            cmd_recipes(&catalog, meal_type.as_deref(), diet)
        }
    }
}

fn open_catalog(supplies: &str, recipes: &str) -> Result<Catalog> {
    for path in [supplies, recipes] {
        if !Path::new(path).exists() {
            return Err(ProvisionError::InvalidInput(format!(
                "Catalog file not found: {}",
                path
            )));
        }
    }
    load_catalog(supplies, recipes)
}

fn recipe_name(catalog: &Catalog, recipe_id: u32) -> String {
    catalog
        .resolve_recipe(recipe_id)
        .map(|r| r.name.clone())
        .unwrap_or_else(|| format!("Recipe #{}", recipe_id))
}

/// Create a cruise, prompting for any field not given on the command line.
fn cmd_new(
    planner: &mut CruisePlanner<JsonCruiseStore>,
    name: Option<String>,
    length: Option<u32>,
    crew: Option<u32>,
) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => prompt_cruise_name()?,
    };
    let length = match length {
        Some(length) => length,
        None => prompt_cruise_length()?,
    };
    let crew = match crew {
        Some(crew) => crew,
        None => prompt_crew()?,
    };

    let cruise = planner.create_cruise(&name, length, crew)?;
    println!(
        "Created cruise '{}' [{}]: {} days, crew {}.",
        cruise.name, cruise.id, cruise.length, cruise.crew
    );
    Ok(())
}

/// Delete a cruise after confirmation.
fn cmd_delete(planner: &mut CruisePlanner<JsonCruiseStore>, cruise_id: &str, yes: bool) -> Result<()> {
    let cruise = planner.get_cruise(cruise_id)?;

    if !yes {
        let confirm = prompt_yes_no(&format!("Delete cruise '{}'?", cruise.name), false)?;
        if !confirm {
            println!("Nothing deleted.");
            return Ok(());
        }
    }

    planner.delete_cruise(cruise_id)?;
    println!("Deleted cruise '{}'.", cruise.name);
    Ok(())
}

/// List recipes filtered by meal type and diet.
fn cmd_recipes(catalog: &Catalog, meal_type: Option<&str>, diet: Diet) -> Result<()> {
    let meal_type = match meal_type {
        Some(value) => Some(MealType::parse(value).ok_or_else(|| {
            ProvisionError::InvalidInput(format!("Unknown meal type: {}", value))
        })?),
        None => None,
    };

    let recipes = catalog.filter_recipes(meal_type, diet.into());
    display_recipe_list(&recipes, catalog);
    Ok(())
}
