pub mod error;

pub use error::{ApiError, UNAUTHORIZED_MESSAGE};
