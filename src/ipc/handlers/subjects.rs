use rusqlite::Connection;
use serde_json::Value;

use super::parse_params;
use crate::db;
use crate::ipc::error::RpcError;
use crate::ipc::types::Request;
use crate::models::SubjectData;

/// Subjects only expose list and create over the boundary; renaming and
/// retiring them stays an administrative task inside this process.
pub fn try_handle(conn: &Connection, req: &Request) -> Option<Result<Value, RpcError>> {
    let outcome = match req.method.as_str() {
        "subjects.list" => list(conn),
        "subjects.create" => create(conn, req),
        _ => return None,
    };
    Some(outcome)
}

fn list(conn: &Connection) -> Result<Value, RpcError> {
    let subjects = db::fetch_subjects(conn)?;
    Ok(serde_json::to_value(subjects)?)
}

fn create(conn: &Connection, req: &Request) -> Result<Value, RpcError> {
    let subject: SubjectData = parse_params(req)?;
    let receipt = db::create_subject(conn, &subject)?;
    Ok(serde_json::to_value(receipt)?)
}
