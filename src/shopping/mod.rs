pub mod aggregation;
pub mod collation;
pub mod constants;
pub mod provenance;

pub use aggregation::{
    aggregate_shopping_list, category_for, collect_items, group_by_category, upsert_with,
    GroupingConfig,
};
pub use collation::polish_cmp;
pub use constants::*;
pub use provenance::{explain, Provenance, RecipeBreakdown};
