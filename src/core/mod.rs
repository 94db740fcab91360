pub mod error;

pub use error::{AppError, IntegrityError, Result};
