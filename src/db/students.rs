use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::models::{MutationReceipt, Student, StudentData};

/// Retrieve every student, newest first. Students carry no active flag, so
/// the listing is the whole table.
pub fn fetch_students(conn: &Connection) -> Result<Vec<Student>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, phone, address, school, grade, learning_goal,
                    guardian_name, guardian_phone, created_at
             FROM students
             ORDER BY created_at DESC, id DESC",
        )
        .context("failed to prepare student query")?;

    let students = stmt
        .query_map([], student_from_row)
        .context("failed to load students")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect students")?;

    Ok(students)
}

/// Look up a single student by id. `None` means the id was never issued or
/// the row has been removed.
pub fn get_student(conn: &Connection, id: i64) -> Result<Option<Student>> {
    conn.query_row(
        "SELECT id, name, phone, address, school, grade, learning_goal,
                guardian_name, guardian_phone, created_at
         FROM students
         WHERE id = ?1",
        params![id],
        student_from_row,
    )
    .optional()
    .context("failed to load student")
}

/// Insert a new student and report the issued id together with the
/// affected-row count.
pub fn create_student(conn: &Connection, student: &StudentData) -> Result<MutationReceipt> {
    let changes = conn
        .execute(
            "INSERT INTO students (name, phone, address, school, grade, learning_goal,
                                   guardian_name, guardian_phone)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                student.name,
                student.phone,
                student.address,
                student.school,
                student.grade,
                student.learning_goal,
                student.guardian_name,
                student.guardian_phone,
            ],
        )
        .context("failed to insert student")?;

    Ok(MutationReceipt {
        id: conn.last_insert_rowid(),
        changes,
    })
}

/// Replace every mutable column of a student; identity and creation
/// timestamp stay as they are. Returns the affected-row count, 0 when no
/// student has that id.
pub fn update_student(conn: &Connection, id: i64, student: &StudentData) -> Result<usize> {
    conn.execute(
        "UPDATE students
         SET name = ?1, phone = ?2, address = ?3, school = ?4, grade = ?5,
             learning_goal = ?6, guardian_name = ?7, guardian_phone = ?8
         WHERE id = ?9",
        params![
            student.name,
            student.phone,
            student.address,
            student.school,
            student.grade,
            student.learning_goal,
            student.guardian_name,
            student.guardian_phone,
            id,
        ],
    )
    .context("failed to update student")
}

/// Hard-delete a student: the row is removed outright, unlike the
/// soft-deleting entities. Enrollment and attendance references keep the
/// delete from going through while they exist. Returns the affected-row
/// count, 0 when the id does not exist.
pub fn delete_student(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM students WHERE id = ?1", params![id])
        .context("failed to delete student")
}

fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        address: row.get(3)?,
        school: row.get(4)?,
        grade: row.get(5)?,
        learning_goal: row.get(6)?,
        guardian_name: row.get(7)?,
        guardian_phone: row.get(8)?,
        created_at: row.get(9)?,
    })
}
