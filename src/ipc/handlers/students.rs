use rusqlite::Connection;
use serde_json::{json, Value};

use super::{parse_params, IdParams, UpdateParams};
use crate::db;
use crate::ipc::error::RpcError;
use crate::ipc::types::Request;
use crate::models::StudentData;

pub fn try_handle(conn: &Connection, req: &Request) -> Option<Result<Value, RpcError>> {
    let outcome = match req.method.as_str() {
        "students.list" => list(conn),
        "students.create" => create(conn, req),
        "students.update" => update(conn, req),
        "students.delete" => delete(conn, req),
        _ => return None,
    };
    Some(outcome)
}

fn list(conn: &Connection) -> Result<Value, RpcError> {
    let students = db::fetch_students(conn)?;
    Ok(serde_json::to_value(students)?)
}

fn create(conn: &Connection, req: &Request) -> Result<Value, RpcError> {
    let student: StudentData = parse_params(req)?;
    let receipt = db::create_student(conn, &student)?;
    Ok(serde_json::to_value(receipt)?)
}

fn update(conn: &Connection, req: &Request) -> Result<Value, RpcError> {
    let params: UpdateParams<StudentData> = parse_params(req)?;
    let changes = db::update_student(conn, params.id, &params.data)?;
    Ok(json!({ "changes": changes }))
}

fn delete(conn: &Connection, req: &Request) -> Result<Value, RpcError> {
    let params: IdParams = parse_params(req)?;
    let changes = db::delete_student(conn, params.id)?;
    Ok(json!({ "changes": changes }))
}
