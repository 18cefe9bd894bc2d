use crate::domain::{filter_properties, FilterCriteria, PropertySummary};
use crate::errors::ServerError;
use crate::responses::{error_to_response, json_response, text_response, ResultResp};
use astra::{Request, Response};
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use tracing::{error, info, warn};

pub const ERR_DEFAULT: &str = "Could not decode request: JSON parsing failed";
pub const ERR_CONTENT_TYPE: &str = "Could not decode request. Please ensure that the content-type of the POST data is 'application/json'";

/// Request bodies larger than this are rejected unread.
pub const MAX_BODY_BYTES: u64 = 1024 * 1024;

pub const DEAD_END: &str = "Tough luck! You have reached the dead end. Nothing to see here! Perhaps, you could try POSTing valid JSON to this URL!";

#[derive(Serialize)]
struct FilterResponse {
    response: Vec<PropertySummary>,
}

/// Handle `req`, rendering any error as its JSON response, and log the outcome.
pub fn respond(req: Request) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let resp = match handle(req) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                error!(%method, %path, "request failed: {err}");
            } else {
                warn!(%method, %path, "request rejected: {err}");
            }
            error_to_response(err)
        }
    };

    info!(%method, %path, status = resp.status().as_u16(), "handled request");
    resp
}

pub fn handle(req: Request) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => text_response(DEAD_END),
        ("POST", "/") => filter_request(req),
        (_, "/") => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

/// POST / : summarise the completed HTV properties in `{"payload": [...]}`.
fn filter_request(mut req: Request) -> ResultResp {
    if !is_json(&req) {
        return Err(ServerError::BadRequest(ERR_CONTENT_TYPE.into()));
    }

    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| {
            warn!("failed to read request body: {e}");
            ServerError::BadRequest(ERR_DEFAULT.into())
        })?;

    if bytes.len() as u64 > MAX_BODY_BYTES {
        warn!("request body exceeds {MAX_BODY_BYTES} bytes");
        return Err(ServerError::BadRequest(ERR_DEFAULT.into()));
    }

    let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
        warn!("request body is not valid JSON: {e}");
        ServerError::BadRequest(ERR_DEFAULT.into())
    })?;

    let payload = body
        .get("payload")
        .ok_or_else(|| ServerError::BadRequest(ERR_DEFAULT.into()))?;

    let response = filter_properties(payload, Some(&FilterCriteria::completed_htv()))
        .map_err(|e| ServerError::BadRequest(format!("{ERR_DEFAULT}: {e}")))?;

    json_response(200, &FilterResponse { response })
}

// Parameters such as `charset` are ignored.
fn is_json(req: &Request) -> bool {
    req.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<mime::Mime>().ok())
        .is_some_and(|m| m.essence_str() == mime::APPLICATION_JSON.essence_str())
}
