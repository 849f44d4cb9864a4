use axum::{Router, routing::get};
use storage::Database;

use super::handlers::home;

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(home))
}
