//! Menu domain
//!
//! Menu entities, the five fixed variant styles, the deterministic variant
//! builder and the parser for generated menus.

pub mod entities;
pub mod parsing;
pub mod style;
pub mod variants;

pub use entities::{BudgetContext, Course, DEFAULT_FOOD_COST, DEFAULT_WINE_COST, MenuVariant};
pub use parsing::parse_menus_response;
pub use style::{VARIANT_STYLES, VariantStyle};
pub use variants::{SOMMELIER_SELECTION, build_variant_menus, build_variant_menus_from_ideas};
