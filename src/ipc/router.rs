use rusqlite::Connection;
use serde_json::Value;
use tracing::error;

use super::error::{err, RpcError};
use super::handlers;
use super::types::{ok, Request};

/// Dispatch one request to the handler that owns its method family and wrap
/// the outcome in the response envelope. Failures are logged here, at the
/// boundary, and then relayed to the caller.
pub fn handle_request(conn: &Connection, req: &Request) -> Value {
    if let Some(outcome) = handlers::teachers::try_handle(conn, req) {
        return respond(req, outcome);
    }
    if let Some(outcome) = handlers::students::try_handle(conn, req) {
        return respond(req, outcome);
    }
    if let Some(outcome) = handlers::subjects::try_handle(conn, req) {
        return respond(req, outcome);
    }
    if let Some(outcome) = handlers::courses::try_handle(conn, req) {
        return respond(req, outcome);
    }
    if let Some(outcome) = handlers::admin::try_handle(conn, req) {
        return respond(req, outcome);
    }
    if let Some(outcome) = handlers::stubs::try_handle(conn, req) {
        return respond(req, outcome);
    }

    respond(req, Err(RpcError::UnknownMethod(req.method.clone())))
}

fn respond(req: &Request, outcome: Result<Value, RpcError>) -> Value {
    match outcome {
        Ok(result) => ok(&req.id, result),
        Err(failure) => {
            error!(method = %req.method, code = failure.code(), "{failure:#}");
            err(&req.id, failure.code(), format!("{failure:#}"))
        }
    }
}
