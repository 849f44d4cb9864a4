use axum::Json;
use storage::dto::common::MessageResponse;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse)
    )
)]
pub async fn home() -> Json<MessageResponse> {
    Json(MessageResponse::new("Workout and diet tracking API"))
}
