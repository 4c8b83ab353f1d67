mod guards;
mod json_error;

pub use guards::{CurrentUser, PolkaWebhookKey};
pub use json_error::json_error_middleware;
