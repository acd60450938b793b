/// Cocktail record data model
///
/// A record is a flat mapping with a handful of scalar fields plus fifteen
/// indexed ingredient/measure pairs. Source data is messy: any field can be
/// missing, null, or hold a non-string value, and none of that is an error.
/// Absent is a normal state here.

use serde_json::Value;
use thiserror::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Number of indexed ingredient/measure pairs a record carries
pub const SLOT_COUNT: usize = 15;

/// Window title used when a record has no name
pub const DEFAULT_NAME: &str = "Cocktail";

/// One indexed ingredient/measure pair.
///
/// Either side can be absent independently. A measure whose ingredient is
/// absent is never displayed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientSlot {
    /// Ingredient text, e.g. "Tequila"
    pub ingredient: Option<String>,
    /// Free-form quantity, e.g. "1 1/2 oz"
    pub measure: Option<String>,
}

/// One cocktail record, immutable for the lifetime of a detail view.
///
/// The wire shape is a JSON object with keyed fields: `name`,
/// `thumbnailUrl`, `instructions`, and `ingredient1`..`ingredient15` paired
/// with `measure1`..`measure15`. Slot order is the display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CocktailRecord {
    /// Drink name, shown as the window title
    pub name: Option<String>,
    /// Remote thumbnail location, gated before any fetch
    pub thumbnail_url: Option<String>,
    /// Free-form preparation text
    pub instructions: Option<String>,
    /// The indexed ingredient slots, in display order
    pub ingredients: [IngredientSlot; SLOT_COUNT],
}

impl CocktailRecord {
    /// Build a record from a keyed JSON object.
    ///
    /// Missing keys, `null`, and non-string values all map to an absent
    /// field. Anything that is not a JSON object yields the empty record.
    pub fn from_json(value: &Value) -> Self {
        let mut record = CocktailRecord::default();

        record.name = string_field(value, "name");
        record.thumbnail_url = string_field(value, "thumbnailUrl");
        record.instructions = string_field(value, "instructions");

        // Indexed fields count from 1 in the source data
        for (index, slot) in record.ingredients.iter_mut().enumerate() {
            let position = index + 1;
            slot.ingredient = string_field(value, &format!("ingredient{position}"));
            slot.measure = string_field(value, &format!("measure{position}"));
        }

        record
    }

    /// Load a record from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, RecordError> {
        let contents = fs::read_to_string(path).map_err(|source| RecordError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let value: Value =
            serde_json::from_str(&contents).map_err(|source| RecordError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(CocktailRecord::from_json(&value))
    }

    /// The drink name, or the fallback title for unnamed records.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }
}

/// Read one string field from a JSON object.
/// `null` and non-string values count as absent, same as a missing key.
fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Failures while loading a record file.
///
/// The view itself has no fatal paths; these can only happen in the shell,
/// before a window exists.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("could not read record file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("record file {} is not valid JSON", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_reads_keyed_fields() {
        let value = json!({
            "name": "Margarita",
            "thumbnailUrl": "https://example.com/m.jpg",
            "instructions": "Shake with ice.",
            "ingredient1": "Tequila",
            "measure1": "2 oz",
            "ingredient3": "Lime juice",
        });

        let record = CocktailRecord::from_json(&value);

        assert_eq!(record.name.as_deref(), Some("Margarita"));
        assert_eq!(record.thumbnail_url.as_deref(), Some("https://example.com/m.jpg"));
        assert_eq!(record.instructions.as_deref(), Some("Shake with ice."));
        assert_eq!(record.ingredients[0].ingredient.as_deref(), Some("Tequila"));
        assert_eq!(record.ingredients[0].measure.as_deref(), Some("2 oz"));
        assert!(record.ingredients[1].ingredient.is_none());
        assert_eq!(record.ingredients[2].ingredient.as_deref(), Some("Lime juice"));
        assert!(record.ingredients[2].measure.is_none());
    }

    #[test]
    fn test_from_json_treats_non_strings_as_absent() {
        let value = json!({
            "name": null,
            "ingredient1": 42,
            "measure1": ["not", "a", "string"],
            "ingredient2": "Gin",
        });

        let record = CocktailRecord::from_json(&value);

        assert!(record.name.is_none());
        assert!(record.ingredients[0].ingredient.is_none());
        assert!(record.ingredients[0].measure.is_none());
        assert_eq!(record.ingredients[1].ingredient.as_deref(), Some("Gin"));
    }

    #[test]
    fn test_from_json_ignores_out_of_range_indexes() {
        let value = json!({
            "ingredient0": "Ghost",
            "ingredient16": "Also ghost",
            "ingredient15": "Salt",
        });

        let record = CocktailRecord::from_json(&value);

        assert_eq!(record.ingredients[14].ingredient.as_deref(), Some("Salt"));
        assert!(record
            .ingredients
            .iter()
            .take(14)
            .all(|slot| slot.ingredient.is_none()));
    }

    #[test]
    fn test_from_json_on_non_object_yields_empty_record() {
        let record = CocktailRecord::from_json(&json!(["not", "an", "object"]));
        assert_eq!(record, CocktailRecord::default());
    }

    #[test]
    fn test_display_name_falls_back() {
        assert_eq!(CocktailRecord::default().display_name(), "Cocktail");

        let named = CocktailRecord {
            name: Some("Mojito".to_string()),
            ..Default::default()
        };
        assert_eq!(named.display_name(), "Mojito");
    }

    #[test]
    fn test_load_missing_file_is_a_read_error() {
        let result = CocktailRecord::load(Path::new("/nonexistent/record.json"));
        assert!(matches!(result, Err(RecordError::Read { .. })));
    }
}
