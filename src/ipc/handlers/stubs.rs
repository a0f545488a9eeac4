use rusqlite::Connection;
use serde_json::Value;

use crate::ipc::error::RpcError;
use crate::ipc::types::Request;

/// Methods the UI contract declares ahead of the access layer: session,
/// attendance, payment and evaluation management plus the statistics views.
/// Each answers with an explicit `not_implemented` error so the surface stays
/// truthful, instead of blending into the unknown-method fallback.
const DECLARED_METHODS: &[&str] = &[
    "sessions.list",
    "sessions.create",
    "sessions.update",
    "sessions.delete",
    "attendance.list",
    "attendance.create",
    "attendance.update",
    "payments.list",
    "payments.create",
    "payments.update",
    "evaluations.list",
    "evaluations.create",
    "evaluations.update",
    "stats.dashboard",
    "stats.attendance",
    "stats.payments",
];

pub fn try_handle(_conn: &Connection, req: &Request) -> Option<Result<Value, RpcError>> {
    if DECLARED_METHODS.contains(&req.method.as_str()) {
        return Some(Err(RpcError::NotImplemented(req.method.clone())));
    }
    None
}
