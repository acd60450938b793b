/// Record model module
///
/// This module owns the cocktail record:
/// - Field layout, JSON construction, and file loading (data.rs)
/// - Ingredient display lines (ingredients.rs)

pub mod data;
pub mod ingredients;

pub use data::{CocktailRecord, RecordError};
pub use ingredients::ingredient_lines;
