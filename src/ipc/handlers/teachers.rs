use rusqlite::Connection;
use serde_json::{json, Value};

use super::{parse_params, IdParams, UpdateParams};
use crate::db;
use crate::ipc::error::RpcError;
use crate::ipc::types::Request;
use crate::models::{NewTeacher, TeacherUpdate};

pub fn try_handle(conn: &Connection, req: &Request) -> Option<Result<Value, RpcError>> {
    let outcome = match req.method.as_str() {
        "teachers.list" => list(conn),
        "teachers.create" => create(conn, req),
        "teachers.update" => update(conn, req),
        "teachers.delete" => delete(conn, req),
        _ => return None,
    };
    Some(outcome)
}

fn list(conn: &Connection) -> Result<Value, RpcError> {
    let teachers = db::fetch_teachers(conn)?;
    Ok(serde_json::to_value(teachers)?)
}

fn create(conn: &Connection, req: &Request) -> Result<Value, RpcError> {
    let teacher: NewTeacher = parse_params(req)?;
    let receipt = db::create_teacher(conn, &teacher)?;
    Ok(serde_json::to_value(receipt)?)
}

fn update(conn: &Connection, req: &Request) -> Result<Value, RpcError> {
    let params: UpdateParams<TeacherUpdate> = parse_params(req)?;
    let changes = db::update_teacher(conn, params.id, &params.data)?;
    Ok(json!({ "changes": changes }))
}

fn delete(conn: &Connection, req: &Request) -> Result<Value, RpcError> {
    let params: IdParams = parse_params(req)?;
    let changes = db::delete_teacher(conn, params.id)?;
    Ok(json!({ "changes": changes }))
}
