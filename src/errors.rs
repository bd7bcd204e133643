use astra::Response;
// errors.rs
use crate::domain::FilterParseError;
use thiserror::Error;

/// Errors surfaced by route handlers, rendered as HTML error pages.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl From<FilterParseError> for ServerError {
    fn from(err: FilterParseError) -> Self {
        ServerError::BadRequest(err.to_string())
    }
}
