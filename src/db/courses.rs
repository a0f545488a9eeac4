use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::models::{Course, CourseData, CourseSummary, MutationReceipt};

/// Retrieve every active course, newest first, with the owning teacher and
/// subject names joined in for display. The inner join means a course whose
/// teacher or subject row is missing drops out of the listing silently; such
/// rows stay reachable through [`get_course`].
pub fn fetch_courses(conn: &Connection) -> Result<Vec<CourseSummary>> {
    let mut stmt = conn
        .prepare(
            "SELECT c.id, c.teacher_id, c.subject_id, c.title, c.description,
                    c.price, c.kind, c.active, c.created_at,
                    t.name AS teacher_name, s.name AS subject_name
             FROM courses c
             INNER JOIN teachers t ON t.id = c.teacher_id
             INNER JOIN subjects s ON s.id = c.subject_id
             WHERE c.active = 1
             ORDER BY c.created_at DESC, c.id DESC",
        )
        .context("failed to prepare course query")?;

    let courses = stmt
        .query_map([], |row| {
            Ok(CourseSummary {
                id: row.get(0)?,
                teacher_id: row.get(1)?,
                subject_id: row.get(2)?,
                title: row.get(3)?,
                description: row.get(4)?,
                price: row.get(5)?,
                kind: row.get(6)?,
                active: row.get(7)?,
                created_at: row.get(8)?,
                teacher_name: row.get(9)?,
                subject_name: row.get(10)?,
            })
        })
        .context("failed to load courses")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect courses")?;

    Ok(courses)
}

/// Look up a single course by id without the display join, soft-deleted and
/// dangling rows included.
pub fn get_course(conn: &Connection, id: i64) -> Result<Option<Course>> {
    conn.query_row(
        "SELECT id, teacher_id, subject_id, title, description, price, kind,
                active, created_at
         FROM courses
         WHERE id = ?1",
        params![id],
        course_from_row,
    )
    .optional()
    .context("failed to load course")
}

/// Insert a new course. The store verifies the teacher and subject references
/// and the course kind, so a bad id or kind surfaces as a constraint
/// violation.
pub fn create_course(conn: &Connection, course: &CourseData) -> Result<MutationReceipt> {
    let changes = conn
        .execute(
            "INSERT INTO courses (teacher_id, subject_id, title, description, price, kind)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                course.teacher_id,
                course.subject_id,
                course.title,
                course.description,
                course.price,
                course.kind,
            ],
        )
        .context("failed to insert course")?;

    Ok(MutationReceipt {
        id: conn.last_insert_rowid(),
        changes,
    })
}

/// Replace the mutable columns of a course, re-pointing it at a different
/// teacher or subject if the ids changed. Returns the affected-row count,
/// 0 when no course has that id.
pub fn update_course(conn: &Connection, id: i64, course: &CourseData) -> Result<usize> {
    conn.execute(
        "UPDATE courses
         SET teacher_id = ?1, subject_id = ?2, title = ?3, description = ?4,
             price = ?5, kind = ?6
         WHERE id = ?7",
        params![
            course.teacher_id,
            course.subject_id,
            course.title,
            course.description,
            course.price,
            course.kind,
            id,
        ],
    )
    .context("failed to update course")
}

/// Soft-delete a course: enrollments and sessions keep a valid reference
/// while listings skip it. Returns the affected-row count.
pub fn delete_course(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("UPDATE courses SET active = 0 WHERE id = ?1", params![id])
        .context("failed to deactivate course")
}

fn course_from_row(row: &Row<'_>) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        teacher_id: row.get(1)?,
        subject_id: row.get(2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        price: row.get(5)?,
        kind: row.get(6)?,
        active: row.get(7)?,
        created_at: row.get(8)?,
    })
}
