// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors surfaced by request handling. Each variant maps to one HTTP status
/// in `responses::error_to_response`.
#[derive(Error, Debug, PartialEq)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Client error; the message is returned to the caller verbatim.
    #[error("{0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::MethodNotAllowed => 405,
            ServerError::BadRequest(_) => 400,
            ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
