mod di;
mod errors;
mod logger;

pub use self::di::DependenciesInject;
pub use self::errors::AppError;
pub use self::logger::init_logger;
