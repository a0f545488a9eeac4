//! Per-domain request handlers. Each module owns one method family and
//! exposes `try_handle`, returning `None` when the method belongs to another
//! family so the router can keep walking the chain.

pub mod admin;
pub mod courses;
pub mod students;
pub mod stubs;
pub mod subjects;
pub mod teachers;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::RpcError;
use super::types::Request;

/// Deserialize the request params into the shape a handler expects. A
/// mismatch is reported as `bad_params` before the store is touched.
fn parse_params<T: DeserializeOwned>(req: &Request) -> Result<T, RpcError> {
    serde_json::from_value(req.params.clone())
        .map_err(|err| RpcError::BadParams(format!("invalid params for {}: {err}", req.method)))
}

/// Params for delete-style methods that address a row by id.
#[derive(Debug, Deserialize)]
struct IdParams {
    id: i64,
}

/// Params for update-style methods: the id of the row plus the replacement
/// data in the same shape the matching create takes.
#[derive(Debug, Deserialize)]
struct UpdateParams<T> {
    id: i64,
    data: T,
}
