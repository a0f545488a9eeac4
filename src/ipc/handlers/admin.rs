use rusqlite::Connection;
use serde_json::{json, Value};

use crate::db;
use crate::ipc::error::RpcError;
use crate::ipc::types::Request;

pub fn try_handle(conn: &Connection, req: &Request) -> Option<Result<Value, RpcError>> {
    let outcome = match req.method.as_str() {
        "seed.run" => seed(conn),
        "health" => health(conn),
        _ => return None,
    };
    Some(outcome)
}

fn seed(conn: &Connection) -> Result<Value, RpcError> {
    db::seed_demo_data(conn)?;
    Ok(json!({ "seeded": true }))
}

/// Liveness probe: reports the build version and where the store lives so a
/// misconfigured UI process can tell which database it is talking to.
fn health(conn: &Connection) -> Result<Value, RpcError> {
    Ok(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "databasePath": conn.path(),
    }))
}
