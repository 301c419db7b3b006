use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::UserResponse;

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub token: String,
}
