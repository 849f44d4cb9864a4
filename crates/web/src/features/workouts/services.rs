use sqlx::SqlitePool;
use storage::{
    dto::workout::{
        CreateWorkoutRequest, MonthlySummaryResponse, SummaryWindow, WeeklySummaryResponse,
    },
    error::Result,
    models::Workout,
    repository::workout::WorkoutRepository,
};

/// List workouts, optionally restricted to one date
pub async fn list_workouts(pool: &SqlitePool, date: Option<&str>) -> Result<Vec<Workout>> {
    let repo = WorkoutRepository::new(pool);
    repo.list(date).await
}

/// Log a new workout
pub async fn create_workout(pool: &SqlitePool, request: &CreateWorkoutRequest) -> Result<Workout> {
    let repo = WorkoutRepository::new(pool);
    let workout = repo.create(request).await?;

    tracing::info!(workout_id = workout.id, date = %workout.date, "Workout logged");

    Ok(workout)
}

/// Aggregate the 7 days covered by `window`
pub async fn weekly_summary(
    pool: &SqlitePool,
    window: &SummaryWindow,
) -> Result<WeeklySummaryResponse> {
    let repo = WorkoutRepository::new(pool);
    let totals = repo.totals_between(window).await?;

    Ok(WeeklySummaryResponse::new(window, totals))
}

/// Aggregate every workout dated in `month`
pub async fn monthly_summary(pool: &SqlitePool, month: &str) -> Result<MonthlySummaryResponse> {
    let repo = WorkoutRepository::new(pool);
    let totals = repo.totals_for_month(month).await?;

    Ok(MonthlySummaryResponse::new(month, totals))
}
