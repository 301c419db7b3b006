pub mod auth;
pub mod statement;
pub mod user;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::statement::CreateStatementRequest;
pub use self::user::CreateUserRequest;
