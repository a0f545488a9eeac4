use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use tracing::debug;

use super::{students, subjects, teachers};
use crate::models::{NewTeacher, StudentData, SubjectData};

/// Populate the store with a small demonstration data set: five subjects,
/// two teachers and two students, inserted through the regular create
/// operations one row at a time. Any individual insertion failure is logged
/// and discarded so re-running is always safe. Subjects and teachers rely on
/// their unique columns to reject a second run; students have no unique
/// column, so a row that already exists by name and phone is skipped rather
/// than re-inserted.
pub fn seed_demo_data(conn: &Connection) -> Result<()> {
    for subject in demo_subjects() {
        if let Err(err) = subjects::create_subject(conn, &subject) {
            debug!("skipping demo subject {}: {err:#}", subject.name);
        }
    }

    for teacher in demo_teachers() {
        if let Err(err) = teachers::create_teacher(conn, &teacher) {
            debug!("skipping demo teacher {}: {err:#}", teacher.email);
        }
    }

    for student in demo_students() {
        if student_already_seeded(conn, &student)? {
            continue;
        }
        if let Err(err) = students::create_student(conn, &student) {
            debug!("skipping demo student {}: {err:#}", student.name);
        }
    }

    debug!("demonstration data seeded");
    Ok(())
}

fn student_already_seeded(conn: &Connection, student: &StudentData) -> Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM students WHERE name = ?1 AND phone IS ?2)",
        params![student.name, student.phone],
        |row| row.get(0),
    )
    .context("failed to check for an existing demo student")
}

fn demo_subjects() -> Vec<SubjectData> {
    [
        ("Mathematics", "Math from primary school through high school"),
        ("Physics", "Middle and high school physics"),
        ("Chemistry", "Middle and high school chemistry"),
        ("English", "Conversational and academic English"),
        ("Literature", "Language and literature for every grade"),
    ]
    .into_iter()
    .map(|(name, description)| SubjectData {
        name: name.to_string(),
        description: Some(description.to_string()),
    })
    .collect()
}

fn demo_teachers() -> Vec<NewTeacher> {
    vec![
        NewTeacher {
            email: "teacher1@example.com".to_string(),
            password: "123456".to_string(),
            name: "Alice Johnson".to_string(),
            phone: Some("555-0101".to_string()),
            address: Some("Springfield".to_string()),
            specialty: Some("Mathematics".to_string()),
            hourly_rate: Some(200.0),
            experience_years: 5,
        },
        NewTeacher {
            email: "teacher2@example.com".to_string(),
            password: "123456".to_string(),
            name: "Brian Tran".to_string(),
            phone: Some("555-0102".to_string()),
            address: Some("Riverton".to_string()),
            specialty: Some("Physics".to_string()),
            hourly_rate: Some(250.0),
            experience_years: 7,
        },
    ]
}

fn demo_students() -> Vec<StudentData> {
    vec![
        StudentData {
            name: "Minh Le".to_string(),
            phone: Some("555-0201".to_string()),
            address: Some("12 Lake Street".to_string()),
            school: Some("Lincoln High School".to_string()),
            grade: Some("12A1".to_string()),
            learning_goal: Some("University entrance prep".to_string()),
            guardian_name: Some("Nam Le".to_string()),
            guardian_phone: Some("555-0301".to_string()),
        },
        StudentData {
            name: "Ha Pham".to_string(),
            phone: Some("555-0202".to_string()),
            address: Some("4 Cedar Road".to_string()),
            school: Some("Westside Middle School".to_string()),
            grade: Some("9A2".to_string()),
            learning_goal: Some("Improve term grades".to_string()),
            guardian_name: Some("Duc Pham".to_string()),
            guardian_phone: Some("555-0302".to_string()),
        },
    ]
}
