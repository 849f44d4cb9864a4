use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::ValidationErrors;

use super::validation::PayloadFields;

/// Request payload for logging a diet entry, also used to replace one.
///
/// On replacement every field is overwritten: macros left out of the payload
/// are cleared rather than kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietRequest {
    pub name: String,
    pub calories: i64,
    /// `YYYY-MM-DD`
    pub date: String,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fats: Option<f64>,
}

impl DietRequest {
    /// Validates a raw JSON body, reporting every invalid field.
    pub fn from_json(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = PayloadFields::new(payload);

        let name = fields.name("name");
        let calories = fields.count("calories");
        let date = fields.date("date");
        let protein = fields.amount("protein");
        let carbs = fields.amount("carbs");
        let fats = fields.amount("fats");

        match (name, calories, date) {
            (Some(name), Some(calories), Some(date)) if fields.is_clean() => Ok(Self {
                name,
                calories,
                date,
                protein,
                carbs,
                fats,
            }),
            _ => Err(fields.into_errors()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_macros_are_optional() {
        let payload = json!({ "name": "Rice", "calories": 200, "date": "2024-01-01" });
        let req = DietRequest::from_json(&payload).unwrap();

        assert_eq!(req.protein, None);
        assert_eq!(req.carbs, None);
        assert_eq!(req.fats, None);
    }

    #[test]
    fn test_macros_keep_their_exact_value() {
        let payload = json!({
            "name": "Chicken",
            "calories": 300,
            "date": "2024-01-01",
            "protein": 20.5,
            "carbs": 0,
            "fats": 3.25
        });
        let req = DietRequest::from_json(&payload).unwrap();

        assert_eq!(req.protein, Some(20.5));
        assert_eq!(req.carbs, Some(0.0));
        assert_eq!(req.fats, Some(3.25));
    }

    #[test]
    fn test_invalid_macro_is_reported_with_missing_fields() {
        let payload = json!({ "name": "Rice", "protein": "high" });
        let errors = DietRequest::from_json(&payload).unwrap_err();

        let fields = errors.field_errors();
        assert_eq!(fields.len(), 3);
        assert!(fields.contains_key("calories"));
        assert!(fields.contains_key("date"));
        assert!(fields.contains_key("protein"));
    }
}
