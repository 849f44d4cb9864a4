use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A single logged food entry. Macros are in grams and may be unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Diet {
    pub id: i64,
    /// Food name
    pub name: String,
    pub calories: i64,
    pub date: String,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fats: Option<f64>,
}
