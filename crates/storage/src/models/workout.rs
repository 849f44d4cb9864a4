use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A single logged exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Workout {
    pub id: i64,
    /// Exercise name
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    /// Calendar date as provided by the client (`YYYY-MM-DD`)
    pub date: String,
}

/// Sums over a set of workouts, computed by the database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow)]
pub struct WorkoutTotals {
    pub total_sets: i64,
    pub total_reps: i64,
    pub unique_exercises: i64,
}
