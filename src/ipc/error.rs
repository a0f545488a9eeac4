use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::db;

/// Everything that can go wrong while answering a request. Storage failures
/// arrive wrapped in the access layer's context chain; the other variants are
/// boundary failures that never touch the store.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("{0}")]
    BadParams(String),

    #[error("method {0} is not implemented yet")]
    NotImplemented(String),

    #[error("unknown method: {0}")]
    UnknownMethod(String),

    #[error("failed to encode response payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl RpcError {
    /// Stable machine-readable code the UI matches on. Constraint violations
    /// get their own code so a form can tell "duplicate email" apart from a
    /// broken store without parsing messages.
    pub fn code(&self) -> &'static str {
        match self {
            RpcError::BadParams(_) => "bad_params",
            RpcError::NotImplemented(_) => "not_implemented",
            RpcError::UnknownMethod(_) => "unknown_method",
            RpcError::Encode(_) => "internal_error",
            RpcError::Store(err) if db::is_constraint_violation(err) => "constraint_violation",
            RpcError::Store(_) => "storage_error",
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrObj {
    code: String,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrResp {
    id: String,
    ok: bool,
    error: ErrObj,
}

/// Wrap a failure in the response envelope.
pub fn err(id: &str, code: &str, message: impl Into<String>) -> serde_json::Value {
    json!(ErrResp {
        id: id.to_string(),
        ok: false,
        error: ErrObj {
            code: code.to_string(),
            message: message.into(),
        },
    })
}

#[cfg(test)]
mod tests {
    use anyhow::Context;
    use rusqlite::Connection;

    use super::*;

    #[test]
    fn storage_errors_split_on_constraint_violations() {
        let conn = Connection::open_in_memory().unwrap();
        db::create_tables(&conn).unwrap();
        conn.execute("INSERT INTO subjects (name) VALUES ('Math')", [])
            .unwrap();

        let constraint = conn
            .execute("INSERT INTO subjects (name) VALUES ('Math')", [])
            .context("failed to insert subject")
            .map_err(RpcError::Store)
            .unwrap_err();
        assert_eq!(constraint.code(), "constraint_violation");

        let other = RpcError::Store(anyhow::anyhow!("store unreachable"));
        assert_eq!(other.code(), "storage_error");
    }

    #[test]
    fn boundary_failures_carry_their_own_codes() {
        assert_eq!(RpcError::BadParams("no id".into()).code(), "bad_params");
        assert_eq!(
            RpcError::NotImplemented("stats.dashboard".into()).code(),
            "not_implemented"
        );
        assert_eq!(
            RpcError::UnknownMethod("teachers.lsit".into()).code(),
            "unknown_method"
        );
    }
}
