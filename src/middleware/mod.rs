mod auth;
mod correlation;
mod error_handler;

pub use auth::with_bearer;
pub use correlation::{REQUEST_ID_FIELD, attach_request_id};
pub use error_handler::{check_status, empty_body, parse_body};
