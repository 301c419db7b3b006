use async_trait::async_trait;
use bcrypt::BcryptError;
use std::sync::Arc;

use crate::utils::AppError;

#[async_trait]
pub trait HashingTrait: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, BcryptError>;
    async fn compare_password(&self, hashed_password: &str, password: &str)
    -> Result<(), AppError>;
}

pub type DynHashing = Arc<dyn HashingTrait + Send + Sync>;
