use anyhow::Error as AnyhowError;
use axum::http::StatusCode;
use bcrypt::BcryptError;
use jsonwebtoken::errors::Error as JwtError;
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    SqlxError(#[from] SqlxError),

    #[error("Hashing error: {0}")]
    HashingError(#[from] BcryptError),

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpiredError,

    #[error("Token validation error")]
    TokenValidationError,

    #[error("Token generation error: {0}")]
    TokenGenerationError(#[from] JwtError),

    #[error("{0}")]
    NotFound(String),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Validation error: {0}")]
    ValidationError(ValidationErrors),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// HTTP status every variant maps to. The message itself comes from
    /// `ErrorResponse::from`.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UserAlreadyExists
            | AppError::InsufficientFunds
            | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials
            | AppError::TokenExpiredError
            | AppError::TokenValidationError => StatusCode::UNAUTHORIZED,
            AppError::SqlxError(_)
            | AppError::HashingError(_)
            | AppError::TokenGenerationError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AnyhowError> for AppError {
    fn from(err: AnyhowError) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}
