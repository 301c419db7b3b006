pub mod statement;
pub mod user;
