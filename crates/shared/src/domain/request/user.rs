use serde::{Deserialize, Serialize};

/// Repository-level create payload. `password` is already hashed by the time
/// this struct is built; raw passwords only exist inside `RegisterRequest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}
