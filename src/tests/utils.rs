use astra::{Body, Request, Response};
use http::header::CONTENT_TYPE;
use http::Method;
use serde_json::Value;
use std::io::Read;

/// Build a request for `path` with an optional Content-Type header.
pub fn request(method: Method, path: &str, content_type: Option<&str>, body: &str) -> Request {
    let mut req = Request::new(Body::from(body.to_string()));
    *req.method_mut() = method;
    *req.uri_mut() = path.parse().unwrap();

    if let Some(ct) = content_type {
        req.headers_mut().insert(CONTENT_TYPE, ct.parse().unwrap());
    }

    req
}

/// POST `body` to `/` as application/json.
pub fn post_json(body: &str) -> Request {
    request(Method::POST, "/", Some("application/json"), body)
}

pub fn read_body(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

pub fn read_json(resp: &mut Response) -> Value {
    serde_json::from_str(&read_body(resp)).expect("response body was not JSON")
}

/// A property carrying every required key.
pub fn property(property_type: &str, workflow: &str, address: Value) -> Value {
    serde_json::json!({
        "address": address,
        "propertyTypeId": 3,
        "readyState": "init",
        "reference": "aqsdasd",
        "shortId": "6Laj49N3PiwZ",
        "status": 0,
        "type": property_type,
        "workflow": workflow
    })
}
