// src/tests/router_tests/routing_tests.rs

use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::{handle, respond, DEAD_END};
use crate::tests::utils::{read_body, read_json, request};
use http::Method;
use serde_json::json;

#[test]
fn get_root_returns_plain_text() {
    let mut resp = handle(request(Method::GET, "/", None, "")).unwrap();

    assert_eq!(resp.status(), 200);
    let ct = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("text/plain"), "unexpected content type {ct}");
    assert_eq!(read_body(&mut resp), DEAD_END);
}

#[test]
fn unknown_path_is_not_found() {
    let err = handle(request(Method::GET, "/properties", None, "")).unwrap_err();
    assert_eq!(err, ServerError::NotFound);

    let mut resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert_eq!(read_json(&mut resp), json!({ "error": "Not Found" }));
}

#[test]
fn other_methods_on_root_are_not_allowed() {
    for method in [Method::PUT, Method::DELETE, Method::PATCH] {
        let err = handle(request(method, "/", Some("application/json"), "{}")).unwrap_err();
        assert_eq!(err, ServerError::MethodNotAllowed);
    }

    let resp = error_to_response(ServerError::MethodNotAllowed);
    assert_eq!(resp.status(), 405);
    assert_eq!(resp.headers().get("Allow").unwrap(), "GET, POST");
}

#[test]
fn internal_errors_render_as_json() {
    let mut resp = error_to_response(ServerError::InternalError);

    assert_eq!(resp.status(), 500);
    assert_eq!(read_json(&mut resp), json!({ "error": "Internal Server Error" }));
}

#[test]
fn respond_renders_success_and_errors() {
    let mut ok = respond(request(Method::GET, "/", None, ""));
    assert_eq!(ok.status(), 200);
    assert_eq!(read_body(&mut ok), DEAD_END);

    let mut missing = respond(request(Method::GET, "/nowhere", None, ""));
    assert_eq!(missing.status(), 404);
    assert_eq!(read_json(&mut missing), json!({ "error": "Not Found" }));

    let not_allowed = respond(request(Method::PUT, "/", None, ""));
    assert_eq!(not_allowed.status(), 405);
    assert_eq!(not_allowed.headers().get("Allow").unwrap(), "GET, POST");
}
