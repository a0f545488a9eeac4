use serde::{Deserialize, Serialize};
use serde_json::json;

/// One request from the UI process: a correlation id chosen by the caller,
/// the method to run, and a free-form params object the handler interprets.
/// Params default to null so list-style methods can omit them entirely.
#[derive(Debug, Deserialize)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct OkResp {
    id: String,
    ok: bool,
    result: serde_json::Value,
}

/// Wrap a successful result in the response envelope.
pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!(OkResp {
        id: id.to_string(),
        ok: true,
        result,
    })
}
