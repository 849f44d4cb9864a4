use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use storage::{
    Database,
    dto::{common::DateFilter, common::MessageResponse, diet::DietRequest},
    models::Diet,
};

use crate::error::{WebError, WebResult};

use super::services;

/// Non-numeric ids cannot name an entry, so they read as unknown ids.
fn diet_id(path: Result<Path<i64>, PathRejection>) -> WebResult<i64> {
    path.map(|Path(id)| id).map_err(|_| WebError::NotFound)
}

#[utoipa::path(
    get,
    path = "/diets",
    params(DateFilter),
    responses(
        (status = 200, description = "Diet entries in the order they were logged", body = Vec<Diet>)
    ),
    tag = "diets"
)]
pub async fn list_diets(
    State(db): State<Database>,
    filter: Result<Query<DateFilter>, QueryRejection>,
) -> WebResult<Response> {
    let Query(filter) = filter?;
    let diets = services::list_diets(db.pool(), filter.date()).await?;

    Ok(Json(diets).into_response())
}

#[utoipa::path(
    post,
    path = "/diets",
    request_body = DietRequest,
    responses(
        (status = 201, description = "Diet entry logged", body = Diet),
        (status = 400, description = "Validation error")
    ),
    tag = "diets"
)]
pub async fn create_diet(
    State(db): State<Database>,
    payload: Result<Json<Value>, JsonRejection>,
) -> WebResult<Response> {
    let Json(payload) = payload?;
    let req = DietRequest::from_json(&payload)?;

    let diet = services::create_diet(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(diet)).into_response())
}

#[utoipa::path(
    put,
    path = "/diets/{id}",
    params(
        ("id" = i64, Path, description = "Diet entry id")
    ),
    request_body = DietRequest,
    responses(
        (status = 200, description = "Diet entry replaced", body = Diet),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Diet entry not found")
    ),
    tag = "diets"
)]
pub async fn update_diet(
    State(db): State<Database>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> WebResult<Response> {
    let id = diet_id(path)?;

    // An unknown id wins over an invalid payload
    services::get_diet(db.pool(), id).await?;

    let Json(payload) = payload?;
    let req = DietRequest::from_json(&payload)?;

    let updated = services::replace_diet(db.pool(), id, &req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/diets/{id}",
    params(
        ("id" = i64, Path, description = "Diet entry id")
    ),
    responses(
        (status = 200, description = "Diet entry deleted", body = MessageResponse),
        (status = 404, description = "Diet entry not found")
    ),
    tag = "diets"
)]
pub async fn delete_diet(
    State(db): State<Database>,
    path: Result<Path<i64>, PathRejection>,
) -> WebResult<Response> {
    let id = diet_id(path)?;

    services::delete_diet(db.pool(), id).await?;

    Ok(Json(MessageResponse::new(format!("Diet {} deleted", id))).into_response())
}
