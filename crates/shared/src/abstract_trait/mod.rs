pub mod auth;
pub mod hashing;
pub mod jwt;
pub mod statement;
pub mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::statement::{
    DynStatementRepository, DynStatementService, StatementRepositoryTrait, StatementServiceTrait,
};
pub use self::user::{DynUserRepository, UserRepositoryTrait};
