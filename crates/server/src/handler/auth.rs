use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use shared::{
    domain::{
        request::LoginRequest,
        response::{ApiResponse, ErrorResponse, LoginResponse, UserResponse},
    },
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

use crate::middleware::{SimpleValidatedJson, jwt};

pub async fn health_checker_handler() -> impl IntoResponse {
    const MESSAGE: &str = "Personal finance ledger in Rust using Axum, Postgres, and SQLx";

    Json(json!({
        "status": "success",
        "message": MESSAGE
    }))
}

#[utoipa::path(
    post,
    path = "/sessions",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Incorrect email or password", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login_user_handler(
    State(data): State<Arc<AppState>>,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data.di_container.auth_service.login_user(&body).await {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((e.status_code(), Json(json!(ErrorResponse::from(e))))),
    }
}

#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, description = "Authenticated user profile", body = ApiResponse<UserResponse>),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Auth"
)]
pub async fn get_profile_handler(
    State(data): State<Arc<AppState>>,
    Extension(user_id): Extension<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data.di_container.auth_service.get_me(user_id).await {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((e.status_code(), Json(json!(ErrorResponse::from(e))))),
    }
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/sessions", post(login_user_handler))
        .route("/healthchecker", get(health_checker_handler));

    let private_routes = OpenApiRouter::new()
        .route("/profile", get(get_profile_handler))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), jwt::auth));

    public_routes.merge(private_routes).with_state(app_state)
}
