/// Ingredient display lines
///
/// Flattens a record's sparse slots into the strings shown in the
/// ingredient list. This is the only place ingredient text is formatted.

use crate::record::data::CocktailRecord;

/// Build the display lines for a record's ingredients.
///
/// Slots are visited in index order. A slot whose ingredient is absent or
/// trims to nothing is skipped entirely, even when it carries a measure.
/// A present measure is prefixed to its ingredient with a single space.
pub fn ingredient_lines(record: &CocktailRecord) -> Vec<String> {
    record
        .ingredients
        .iter()
        .filter_map(|slot| {
            let ingredient = non_blank(slot.ingredient.as_deref())?;

            Some(match non_blank(slot.measure.as_deref()) {
                Some(measure) => format!("{measure} {ingredient}"),
                None => ingredient.to_string(),
            })
        })
        .collect()
}

/// Trim an optional field, mapping whitespace-only values to absent.
fn non_blank(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::data::IngredientSlot;

    fn slot(ingredient: Option<&str>, measure: Option<&str>) -> IngredientSlot {
        IngredientSlot {
            ingredient: ingredient.map(str::to_string),
            measure: measure.map(str::to_string),
        }
    }

    #[test]
    fn test_measure_and_ingredient_join_with_one_space() {
        let mut record = CocktailRecord::default();
        record.ingredients[0] = slot(Some("Tequila"), Some("2 oz"));

        assert_eq!(ingredient_lines(&record), vec!["2 oz Tequila"]);
    }

    #[test]
    fn test_ingredient_without_measure_stands_alone() {
        let mut record = CocktailRecord::default();
        record.ingredients[0] = slot(Some("Salt"), None);

        assert_eq!(ingredient_lines(&record), vec!["Salt"]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut record = CocktailRecord::default();
        record.ingredients[0] = slot(Some("  Lime juice "), Some(" 1 oz  "));

        assert_eq!(ingredient_lines(&record), vec!["1 oz Lime juice"]);
    }

    #[test]
    fn test_blank_measure_is_treated_as_missing() {
        let mut record = CocktailRecord::default();
        record.ingredients[0] = slot(Some("Gin"), Some("   "));

        assert_eq!(ingredient_lines(&record), vec!["Gin"]);
    }

    #[test]
    fn test_blank_ingredient_suppresses_its_measure() {
        let mut record = CocktailRecord::default();
        record.ingredients[0] = slot(Some("   "), Some("2 oz"));
        record.ingredients[1] = slot(None, Some("1 dash"));

        assert!(ingredient_lines(&record).is_empty());
    }

    #[test]
    fn test_sparse_slots_keep_index_order() {
        let mut record = CocktailRecord::default();
        record.ingredients[0] = slot(Some("Tequila"), Some("2 oz"));
        record.ingredients[2] = slot(Some("Lime juice"), Some("1 oz"));
        record.ingredients[6] = slot(Some("Salt"), None);

        assert_eq!(
            ingredient_lines(&record),
            vec!["2 oz Tequila", "1 oz Lime juice", "Salt"]
        );
    }

    #[test]
    fn test_empty_record_yields_no_lines() {
        assert!(ingredient_lines(&CocktailRecord::default()).is_empty());
    }

    #[test]
    fn test_all_fifteen_slots_are_visited() {
        let mut record = CocktailRecord::default();
        for (index, entry) in record.ingredients.iter_mut().enumerate() {
            entry.ingredient = Some(format!("Ingredient {}", index + 1));
        }

        let lines = ingredient_lines(&record);

        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "Ingredient 1");
        assert_eq!(lines[14], "Ingredient 15");
    }
}
