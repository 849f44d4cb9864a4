use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_workout, list_workouts, monthly_summary, weekly_summary};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route("/summary/weekly", get(weekly_summary))
        .route("/summary/monthly", get(monthly_summary))
}
