use anyhow::{Context, Result};
use rusqlite::{params, Connection, Error as SqlError, ErrorCode, OptionalExtension, Row};

use crate::models::{MutationReceipt, Subject, SubjectData};

/// Retrieve every active subject, ordered case-insensitively by name so
/// mixed-case entries group together in pick lists.
pub fn fetch_subjects(conn: &Connection) -> Result<Vec<Subject>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, description, active, created_at
             FROM subjects
             WHERE active = 1
             ORDER BY name COLLATE NOCASE",
        )
        .context("failed to prepare subject query")?;

    let subjects = stmt
        .query_map([], subject_from_row)
        .context("failed to load subjects")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect subjects")?;

    Ok(subjects)
}

/// Look up a single subject by id, soft-deleted rows included.
pub fn get_subject(conn: &Connection, id: i64) -> Result<Option<Subject>> {
    conn.query_row(
        "SELECT id, name, description, active, created_at FROM subjects WHERE id = ?1",
        params![id],
        subject_from_row,
    )
    .optional()
    .context("failed to load subject")
}

/// Insert a new subject. Names are unique, so creating "Math" twice reports
/// a readable uniqueness error and leaves the first row alone.
pub fn create_subject(conn: &Connection, subject: &SubjectData) -> Result<MutationReceipt> {
    let changes = conn
        .execute(
            "INSERT INTO subjects (name, description) VALUES (?1, ?2)",
            params![subject.name, subject.description],
        )
        .map_err(|err| map_unique_name(err, &subject.name))
        .context("failed to insert subject")?;

    Ok(MutationReceipt {
        id: conn.last_insert_rowid(),
        changes,
    })
}

/// Rename a subject or replace its description. Returns the affected-row
/// count, 0 when no subject has that id.
pub fn update_subject(conn: &Connection, id: i64, subject: &SubjectData) -> Result<usize> {
    conn.execute(
        "UPDATE subjects SET name = ?1, description = ?2 WHERE id = ?3",
        params![subject.name, subject.description, id],
    )
    .map_err(|err| map_unique_name(err, &subject.name))
    .context("failed to update subject")
}

/// Soft-delete a subject so it disappears from pick lists while existing
/// courses keep a valid reference. Returns the affected-row count.
pub fn delete_subject(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("UPDATE subjects SET active = 0 WHERE id = ?1", params![id])
        .context("failed to deactivate subject")
}

fn subject_from_row(row: &Row<'_>) -> rusqlite::Result<Subject> {
    Ok(Subject {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        active: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Coerce a uniqueness violation on the name column into a readable message
/// while keeping the SQLite error in the chain for classification.
fn map_unique_name(err: SqlError, name: &str) -> anyhow::Error {
    if matches!(
        err.sqlite_error_code(),
        Some(ErrorCode::ConstraintViolation)
    ) {
        anyhow::Error::new(err).context(format!("subject {name} already exists"))
    } else {
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{error::is_constraint_violation, schema};

    fn memory_store() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("PRAGMA foreign_keys = ON", []).unwrap();
        schema::create_tables(&conn).unwrap();
        conn
    }

    fn named(name: &str) -> SubjectData {
        SubjectData {
            name: name.to_string(),
            description: None,
        }
    }

    #[test]
    fn duplicate_name_is_a_constraint_violation() {
        let conn = memory_store();
        create_subject(&conn, &named("Math")).unwrap();

        let err = create_subject(&conn, &named("Math")).unwrap_err();
        assert!(is_constraint_violation(&err));

        assert_eq!(fetch_subjects(&conn).unwrap().len(), 1);
    }

    #[test]
    fn listing_ignores_case_when_sorting() {
        let conn = memory_store();
        create_subject(&conn, &named("physics")).unwrap();
        create_subject(&conn, &named("Chemistry")).unwrap();
        create_subject(&conn, &named("biology")).unwrap();

        let names: Vec<_> = fetch_subjects(&conn)
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["biology", "Chemistry", "physics"]);
    }

    #[test]
    fn delete_is_soft() {
        let conn = memory_store();
        let receipt = create_subject(&conn, &named("Math")).unwrap();

        assert_eq!(delete_subject(&conn, receipt.id).unwrap(), 1);
        assert!(fetch_subjects(&conn).unwrap().is_empty());

        let hidden = get_subject(&conn, receipt.id).unwrap().unwrap();
        assert!(!hidden.active);
        assert_eq!(hidden.name, "Math");
    }

    #[test]
    fn rename_to_taken_name_is_rejected() {
        let conn = memory_store();
        create_subject(&conn, &named("Math")).unwrap();
        let second = create_subject(&conn, &named("Physics")).unwrap();

        let err = update_subject(&conn, second.id, &named("Math")).unwrap_err();
        assert!(is_constraint_violation(&err));

        let unchanged = get_subject(&conn, second.id).unwrap().unwrap();
        assert_eq!(unchanged.name, "Physics");
    }

    #[test]
    fn update_missing_id_affects_nothing() {
        let conn = memory_store();
        assert_eq!(update_subject(&conn, 7, &named("Art")).unwrap(), 0);
    }
}
