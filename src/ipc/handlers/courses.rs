use rusqlite::Connection;
use serde_json::{json, Value};

use super::{parse_params, IdParams, UpdateParams};
use crate::db;
use crate::ipc::error::RpcError;
use crate::ipc::types::Request;
use crate::models::CourseData;

pub fn try_handle(conn: &Connection, req: &Request) -> Option<Result<Value, RpcError>> {
    let outcome = match req.method.as_str() {
        "courses.list" => list(conn),
        "courses.create" => create(conn, req),
        "courses.update" => update(conn, req),
        "courses.delete" => delete(conn, req),
        _ => return None,
    };
    Some(outcome)
}

/// The listing carries the joined teacher and subject names, exactly what the
/// course table in the UI renders.
fn list(conn: &Connection) -> Result<Value, RpcError> {
    let courses = db::fetch_courses(conn)?;
    Ok(serde_json::to_value(courses)?)
}

fn create(conn: &Connection, req: &Request) -> Result<Value, RpcError> {
    let course: CourseData = parse_params(req)?;
    let receipt = db::create_course(conn, &course)?;
    Ok(serde_json::to_value(receipt)?)
}

fn update(conn: &Connection, req: &Request) -> Result<Value, RpcError> {
    let params: UpdateParams<CourseData> = parse_params(req)?;
    let changes = db::update_course(conn, params.id, &params.data)?;
    Ok(json!({ "changes": changes }))
}

fn delete(conn: &Connection, req: &Request) -> Result<Value, RpcError> {
    let params: IdParams = parse_params(req)?;
    let changes = db::delete_course(conn, params.id)?;
    Ok(json!({ "changes": changes }))
}
