pub mod errors;
pub mod json;
pub mod text;

pub use errors::{error_to_response, ResultResp};

pub use json::json_response;
pub use text::text_response;
