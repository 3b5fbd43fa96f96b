use clap::{Parser, Subcommand, ValueEnum};

use crate::catalog::DietFilter;

/// Cruise provisioner: plan meals per cruise day and build a crew-scaled shopping list.
#[derive(Parser, Debug)]
#[command(name = "cruise_provisioner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the supply catalog JSON file.
    #[arg(long, default_value = "data/supplies.json")]
    pub supplies: String,

    /// Path to the recipe catalog JSON file.
    #[arg(long, default_value = "data/recipes.json")]
    pub recipes: String,

    /// Path to the cruise store JSON file.
    #[arg(short, long, default_value = "cruises.json")]
    pub store: String,

    /// Log debug events (overridden by RUST_LOG).
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// List all cruises.
    #[default]
    Cruises,

    /// Create a new cruise; missing fields are prompted for.
    New {
        #[arg(long)]
        name: Option<String>,

        /// Number of days.
        #[arg(long)]
        length: Option<u32>,

        /// Number of crew members.
        #[arg(long)]
        crew: Option<u32>,
    },

    /// Show cruise details and its day-by-day plan.
    Show { cruise: String },

    /// Delete a cruise.
    Delete {
        cruise: String,

        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Plan a recipe (id or name) on a day.
    AddRecipe {
        cruise: String,
        day: u32,
        recipe: String,
    },

    /// Remove a recipe (id or name) from a day.
    RemoveRecipe {
        cruise: String,
        day: u32,
        recipe: String,
    },

    /// Add a supply (id or name) to the additional purchases.
    AddSupply {
        cruise: String,
        supply: String,
        amount: f64,
    },

    /// Change the amount of an additional purchase.
    SetSupply {
        cruise: String,
        supply: String,
        amount: f64,
    },

    /// Remove a supply from the additional purchases.
    RemoveSupply { cruise: String, supply: String },

    /// Print the aggregated shopping list.
    Shopping {
        cruise: String,

        /// Show how every amount was calculated.
        #[arg(long)]
        explain: bool,

        /// Also write the list to a CSV file.
        #[arg(long)]
        csv: Option<String>,
    },

    /// List catalog supplies: ingredients by category, or other supplies.
    Supplies {
        /// List recipe ingredients instead of other supplies.
        #[arg(long)]
        ingredients: bool,
    },

    /// Show one recipe (id or name) in full.
    Recipe { recipe: String },

    /// List recipes in the catalog.
    Recipes {
        /// Meal type, e.g. "obiad" or "dinner".
        #[arg(long)]
        meal_type: Option<String>,

        #[arg(long, value_enum, default_value_t = Diet::All)]
        diet: Diet,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Diet {
    #[default]
    All,
    Vegetarian,
    Vegan,
}

impl From<Diet> for DietFilter {
    fn from(diet: Diet) -> Self {
        match diet {
            Diet::All => DietFilter::All,
            Diet::Vegetarian => DietFilter::Vegetarian,
            Diet::Vegan => DietFilter::Vegan,
        }
    }
}
