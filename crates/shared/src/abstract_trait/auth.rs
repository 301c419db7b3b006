use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        request::{LoginRequest, RegisterRequest},
        response::{ApiResponse, LoginResponse, UserResponse},
    },
    utils::AppError,
};

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn register_user(
        &self,
        input: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError>;
    async fn login_user(&self, input: &LoginRequest)
    -> Result<ApiResponse<LoginResponse>, AppError>;
    async fn get_me(&self, id: Uuid) -> Result<ApiResponse<UserResponse>, AppError>;
}
