pub mod auth;
pub mod logging;

pub use auth::{has_valid_credential, require_credential, ACCEPTED_CREDENTIAL};
pub use logging::setup_logging;
