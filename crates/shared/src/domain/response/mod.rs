use crate::utils::AppError;
use core::fmt;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod auth;
pub mod statement;
pub mod user;

pub use self::auth::LoginResponse;
pub use self::statement::{BalanceResponse, StatementResponse};
pub use self::user::UserResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: T,
}

impl<T: std::fmt::Debug> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ApiResponse {{ status: {}, message: {}, data: {:?} }}",
            self.status, self.message, self.data
        )
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        let message = match error {
            AppError::SqlxError(_) => "Database error occurred".to_string(),
            AppError::HashingError(_) => "Error during password hashing".to_string(),
            AppError::NotFound(ref msg) => msg.clone(),
            AppError::TokenExpiredError => "Token has expired".to_string(),
            AppError::TokenValidationError => "Token validation failed".to_string(),
            AppError::TokenGenerationError(_) => "Token generation failed".to_string(),
            AppError::InvalidCredentials => "Incorrect email or password".to_string(),
            AppError::UserAlreadyExists => "User already exists".to_string(),
            AppError::InsufficientFunds => "Insufficient funds".to_string(),
            AppError::ValidationError(ref errs) => format!("Validation error: {errs}"),
            AppError::InternalError(ref msg) => msg.clone(),
        };

        ErrorResponse {
            status: "error".to_string(),
            message,
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status: {}, Message: {}", self.status, self.message)
    }
}
