use axum::Router;
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;
pub mod openapi;

use openapi::ApiDoc;

/// Builds the full application router around an already-migrated database.
pub fn app(db: Database) -> Router {
    let api = Router::new()
        .merge(features::home::routes())
        .nest("/workouts", features::workouts::routes())
        .nest("/diets", features::diets::routes())
        .with_state(db);

    api.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
