use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use storage::{
    Database,
    dto::{
        common::DateFilter,
        workout::{
            CreateWorkoutRequest, MonthlySummaryQuery, MonthlySummaryResponse, WeeklySummaryQuery,
            WeeklySummaryResponse,
        },
    },
    models::Workout,
};

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    get,
    path = "/workouts",
    params(DateFilter),
    responses(
        (status = 200, description = "Workouts in the order they were logged", body = Vec<Workout>)
    ),
    tag = "workouts"
)]
pub async fn list_workouts(
    State(db): State<Database>,
    filter: Result<Query<DateFilter>, QueryRejection>,
) -> WebResult<Response> {
    let Query(filter) = filter?;
    let workouts = services::list_workouts(db.pool(), filter.date()).await?;

    Ok(Json(workouts).into_response())
}

#[utoipa::path(
    post,
    path = "/workouts",
    request_body = CreateWorkoutRequest,
    responses(
        (status = 201, description = "Workout logged", body = Workout),
        (status = 400, description = "Validation error")
    ),
    tag = "workouts"
)]
pub async fn create_workout(
    State(db): State<Database>,
    payload: Result<Json<Value>, JsonRejection>,
) -> WebResult<Response> {
    let Json(payload) = payload?;
    let req = CreateWorkoutRequest::from_json(&payload)?;

    let workout = services::create_workout(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(workout)).into_response())
}

#[utoipa::path(
    get,
    path = "/workouts/summary/weekly",
    params(WeeklySummaryQuery),
    responses(
        (status = 200, description = "Totals for the 7 days starting at start_date", body = WeeklySummaryResponse),
        (status = 400, description = "Missing or malformed start_date")
    ),
    tag = "workouts"
)]
pub async fn weekly_summary(
    State(db): State<Database>,
    query: Result<Query<WeeklySummaryQuery>, QueryRejection>,
) -> WebResult<Response> {
    let Query(query) = query?;
    let window = query.window().map_err(WebError::BadRequest)?;

    let summary = services::weekly_summary(db.pool(), &window).await?;

    Ok(Json(summary).into_response())
}

#[utoipa::path(
    get,
    path = "/workouts/summary/monthly",
    params(MonthlySummaryQuery),
    responses(
        (status = 200, description = "Totals for workouts dated in the month", body = MonthlySummaryResponse),
        (status = 400, description = "Missing month")
    ),
    tag = "workouts"
)]
pub async fn monthly_summary(
    State(db): State<Database>,
    query: Result<Query<MonthlySummaryQuery>, QueryRejection>,
) -> WebResult<Response> {
    let Query(query) = query?;
    let month = query.month().map_err(WebError::BadRequest)?;

    let summary = services::monthly_summary(db.pool(), month).await?;

    Ok(Json(summary).into_response())
}
