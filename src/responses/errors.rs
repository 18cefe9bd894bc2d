// responses/errors.rs
use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;

pub use crate::errors::ResultResp;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Convert a ServerError into a JSON `{"error": ...}` response.
pub fn error_to_response(err: ServerError) -> Response {
    let message = err.to_string();
    let body = serde_json::to_string(&ErrorBody { error: &message })
        .unwrap_or_else(|_| r#"{"error":"Internal Server Error"}"#.to_string());

    let mut builder = ResponseBuilder::new()
        .status(err.status())
        .header("Content-Type", "application/json");

    if err == ServerError::MethodNotAllowed {
        builder = builder.header("Allow", "GET, POST");
    }

    builder
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
