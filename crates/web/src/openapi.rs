use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    info(title = "fitlog", description = "Workout and diet tracking API"),
    paths(
        features::home::handlers::home,
        features::workouts::handlers::list_workouts,
        features::workouts::handlers::create_workout,
        features::workouts::handlers::weekly_summary,
        features::workouts::handlers::monthly_summary,
        features::diets::handlers::list_diets,
        features::diets::handlers::create_diet,
        features::diets::handlers::update_diet,
        features::diets::handlers::delete_diet,
    ),
    components(
        schemas(
            storage::dto::common::MessageResponse,
            storage::dto::workout::CreateWorkoutRequest,
            storage::dto::workout::WeeklySummaryResponse,
            storage::dto::workout::MonthlySummaryResponse,
            storage::dto::diet::DietRequest,
            storage::models::Workout,
            storage::models::Diet,
        )
    ),
    tags(
        (name = "workouts", description = "Workout log and summaries"),
        (name = "diets", description = "Diet log"),
    )
)]
pub struct ApiDoc;
