use axum::{
    Router,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{create_diet, delete_diet, list_diets, update_diet};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_diets).post(create_diet))
        .route("/:id", put(update_diet).delete(delete_diet))
}
