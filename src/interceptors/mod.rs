pub mod error;
pub mod response;

pub use error::{AppError, AppResult, UNAUTHORIZED_MESSAGE};
pub use response::{ApiError, Created};
