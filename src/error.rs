use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Cruise not found: {0}")]
    CruiseNotFound(String),

    #[error("Cruise {cruise_id} has no day {day}")]
    DayNotFound { cruise_id: String, day: u32 },

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Supply not found: {0}")]
    SupplyNotFound(String),

    #[error("Supply {supply_id} is not on the additional list of cruise {cruise_id}")]
    SupplyNotInCruise { cruise_id: String, supply_id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
