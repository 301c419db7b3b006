use std::sync::Arc;
use uuid::Uuid;

use crate::utils::AppError;

pub trait JwtServiceTrait: Send + Sync + std::fmt::Debug {
    fn generate_token(&self, user_id: Uuid) -> Result<String, AppError>;
    fn verify_token(&self, token: &str) -> Result<Uuid, AppError>;
}

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;
