pub mod export;
pub mod prompts;
pub mod render;

pub use export::{shopping_rows, write_shopping_csv};
pub use prompts::{
    prompt_crew, prompt_cruise_length, prompt_cruise_name, prompt_yes_no, resolve_recipe_input,
    resolve_supply_input,
};
pub use render::{
    display_cruise, display_cruise_list, display_recipe, display_recipe_list,
    display_shopping_list, display_supply_catalog, format_minutes, recipe_detail,
};
