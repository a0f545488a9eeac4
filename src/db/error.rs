use rusqlite::{Error as SqlError, ErrorCode};

/// True when an error chain bottoms out in a SQLite constraint violation
/// (unique column, CHECK clause or foreign key reference). The access layer
/// wraps storage errors in context strings, so this walks the whole chain
/// instead of inspecting only the outermost error.
pub fn is_constraint_violation(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<SqlError>()
            .and_then(|sql_err| sql_err.sqlite_error_code())
            == Some(ErrorCode::ConstraintViolation)
    })
}

#[cfg(test)]
mod tests {
    use anyhow::Context;
    use rusqlite::Connection;

    use super::*;
    use crate::db::schema;

    #[test]
    fn recognizes_wrapped_constraint_errors() {
        let conn = Connection::open_in_memory().unwrap();
        schema::create_tables(&conn).unwrap();
        conn.execute("INSERT INTO subjects (name) VALUES ('Math')", [])
            .unwrap();

        let err = conn
            .execute("INSERT INTO subjects (name) VALUES ('Math')", [])
            .context("failed to insert subject")
            .unwrap_err();

        assert!(is_constraint_violation(&err));
    }

    #[test]
    fn ignores_unrelated_errors() {
        let err = anyhow::anyhow!("disk on fire");
        assert!(!is_constraint_violation(&err));
    }
}
