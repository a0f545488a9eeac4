use anyhow::{Context, Result};
use rusqlite::{params, Connection, Error as SqlError, ErrorCode, OptionalExtension, Row};

use crate::models::{MutationReceipt, NewTeacher, Teacher, TeacherUpdate};

/// Retrieve every active teacher, newest first. Soft-deleted rows stay in the
/// table but never show up here; use [`get_teacher`] to reach them by id.
pub fn fetch_teachers(conn: &Connection) -> Result<Vec<Teacher>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, email, password, name, phone, address, specialty,
                    hourly_rate, experience_years, rating, active, created_at
             FROM teachers
             WHERE active = 1
             ORDER BY created_at DESC, id DESC",
        )
        .context("failed to prepare teacher query")?;

    let teachers = stmt
        .query_map([], teacher_from_row)
        .context("failed to load teachers")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect teachers")?;

    Ok(teachers)
}

/// Look up a single teacher by id, soft-deleted rows included. `None` means
/// the id was never issued; it is not an error.
pub fn get_teacher(conn: &Connection, id: i64) -> Result<Option<Teacher>> {
    conn.query_row(
        "SELECT id, email, password, name, phone, address, specialty,
                hourly_rate, experience_years, rating, active, created_at
         FROM teachers
         WHERE id = ?1",
        params![id],
        teacher_from_row,
    )
    .optional()
    .context("failed to load teacher")
}

/// Register a new teacher and report the issued id together with the
/// affected-row count. Email doubles as the login identity, so a duplicate
/// comes back as a readable uniqueness error.
pub fn create_teacher(conn: &Connection, teacher: &NewTeacher) -> Result<MutationReceipt> {
    let changes = conn
        .execute(
            "INSERT INTO teachers (email, password, name, phone, address, specialty,
                                   hourly_rate, experience_years)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                teacher.email,
                teacher.password,
                teacher.name,
                teacher.phone,
                teacher.address,
                teacher.specialty,
                teacher.hourly_rate,
                teacher.experience_years,
            ],
        )
        .map_err(|err| map_unique_email(err, &teacher.email))
        .context("failed to insert teacher")?;

    Ok(MutationReceipt {
        id: conn.last_insert_rowid(),
        changes,
    })
}

/// Replace the mutable columns of a teacher. Email and password are fixed at
/// registration and never touched here; neither are the rating aggregate nor
/// the creation timestamp. Returns the affected-row count, which is 0 when no
/// teacher has that id.
pub fn update_teacher(conn: &Connection, id: i64, update: &TeacherUpdate) -> Result<usize> {
    conn.execute(
        "UPDATE teachers
         SET name = ?1, phone = ?2, address = ?3, specialty = ?4,
             hourly_rate = ?5, experience_years = ?6
         WHERE id = ?7",
        params![
            update.name,
            update.phone,
            update.address,
            update.specialty,
            update.hourly_rate,
            update.experience_years,
            id,
        ],
    )
    .context("failed to update teacher")
}

/// Soft-delete a teacher: the row flips inactive so listings skip it while
/// courses and evaluations keep pointing at a real row. Returns the
/// affected-row count, 0 when the id does not exist.
pub fn delete_teacher(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("UPDATE teachers SET active = 0 WHERE id = ?1", params![id])
        .context("failed to deactivate teacher")
}

fn teacher_from_row(row: &Row<'_>) -> rusqlite::Result<Teacher> {
    Ok(Teacher {
        id: row.get(0)?,
        email: row.get(1)?,
        password: row.get(2)?,
        name: row.get(3)?,
        phone: row.get(4)?,
        address: row.get(5)?,
        specialty: row.get(6)?,
        hourly_rate: row.get(7)?,
        experience_years: row.get(8)?,
        rating: row.get(9)?,
        active: row.get(10)?,
        created_at: row.get(11)?,
    })
}

/// Coerce a uniqueness violation on the email column into a readable message
/// while keeping the SQLite error in the chain so callers can still classify
/// the failure as a constraint violation.
fn map_unique_email(err: SqlError, email: &str) -> anyhow::Error {
    if matches!(
        err.sqlite_error_code(),
        Some(ErrorCode::ConstraintViolation)
    ) {
        anyhow::Error::new(err).context(format!("email {email} is already registered"))
    } else {
        err.into()
    }
}
