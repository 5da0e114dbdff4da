pub mod error;
pub mod fruits;
pub mod health;

pub use error::AppError;
