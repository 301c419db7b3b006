pub mod jwt;
pub mod validate;

pub use self::validate::SimpleValidatedJson;
