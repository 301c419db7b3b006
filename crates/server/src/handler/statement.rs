use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use shared::{
    domain::{
        request::CreateStatementRequest,
        response::{ApiResponse, BalanceResponse, ErrorResponse, StatementResponse},
    },
    model::statement::OperationType,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

use crate::middleware::{SimpleValidatedJson, jwt};

#[utoipa::path(
    post,
    path = "/statements/deposit",
    request_body = CreateStatementRequest,
    responses(
        (status = 201, description = "Deposit created", body = ApiResponse<StatementResponse>),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Statement"
)]
pub async fn deposit_statement_handler(
    State(data): State<Arc<AppState>>,
    Extension(user_id): Extension<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateStatementRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data
        .di_container
        .statement_service
        .create_statement(user_id, &body, OperationType::Deposit)
        .await
    {
        Ok(response) => Ok((StatusCode::CREATED, Json(json!(response)))),
        Err(e) => Err((e.status_code(), Json(json!(ErrorResponse::from(e))))),
    }
}

#[utoipa::path(
    post,
    path = "/statements/withdraw",
    request_body = CreateStatementRequest,
    responses(
        (status = 201, description = "Withdrawal created", body = ApiResponse<StatementResponse>),
        (status = 400, description = "Insufficient funds", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Statement"
)]
pub async fn withdraw_statement_handler(
    State(data): State<Arc<AppState>>,
    Extension(user_id): Extension<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateStatementRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data
        .di_container
        .statement_service
        .create_statement(user_id, &body, OperationType::Withdraw)
        .await
    {
        Ok(response) => Ok((StatusCode::CREATED, Json(json!(response)))),
        Err(e) => Err((e.status_code(), Json(json!(ErrorResponse::from(e))))),
    }
}

#[utoipa::path(
    get,
    path = "/statements/balance",
    responses(
        (status = 200, description = "Derived balance with statement history", body = ApiResponse<BalanceResponse>),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Statement"
)]
pub async fn get_balance_handler(
    State(data): State<Arc<AppState>>,
    Extension(user_id): Extension<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data
        .di_container
        .statement_service
        .get_balance(user_id)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((e.status_code(), Json(json!(ErrorResponse::from(e))))),
    }
}

#[utoipa::path(
    get,
    path = "/statements/{id}",
    params(
        ("id" = Uuid, Path, description = "Statement ID")
    ),
    responses(
        (status = 200, description = "Statement detail", body = ApiResponse<StatementResponse>),
        (status = 404, description = "Statement not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Statement"
)]
pub async fn get_statement_handler(
    State(data): State<Arc<AppState>>,
    Extension(user_id): Extension<Uuid>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    match data
        .di_container
        .statement_service
        .get_statement(user_id, id)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((e.status_code(), Json(json!(ErrorResponse::from(e))))),
    }
}

pub fn statements_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/statements/deposit", post(deposit_statement_handler))
        .route("/statements/withdraw", post(withdraw_statement_handler))
        .route("/statements/balance", get(get_balance_handler))
        .route("/statements/{id}", get(get_statement_handler))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), jwt::auth))
        .with_state(app_state)
}
