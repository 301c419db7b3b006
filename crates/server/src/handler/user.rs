use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde_json::{Value, json};
use shared::{
    domain::{
        request::RegisterRequest,
        response::{ApiResponse, ErrorResponse, UserResponse},
    },
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

use crate::middleware::SimpleValidatedJson;

#[utoipa::path(
    post,
    path = "/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<UserResponse>),
        (status = 400, description = "User already exists", body = ErrorResponse)
    ),
    tag = "User"
)]
pub async fn register_user_handler(
    State(data): State<Arc<AppState>>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data.di_container.auth_service.register_user(&body).await {
        Ok(response) => Ok((StatusCode::CREATED, Json(json!(response)))),
        Err(e) => Err((e.status_code(), Json(json!(ErrorResponse::from(e))))),
    }
}

pub fn users_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/users", post(register_user_handler))
        .with_state(app_state)
}
