pub mod auth;
pub mod statement;
