use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create every table the application relies on. Each statement is
/// `CREATE TABLE IF NOT EXISTS`, so running this against an existing store
/// only verifies the tables are present; it never alters or drops anything.
/// There is no in-place migration story: a schema change means a fresh store.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS teachers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            name TEXT NOT NULL,
            phone TEXT,
            address TEXT,
            specialty TEXT,
            hourly_rate REAL,
            experience_years INTEGER NOT NULL DEFAULT 0,
            rating REAL NOT NULL DEFAULT 0 CHECK(rating >= 0 AND rating <= 5),
            active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("failed to create teachers table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS students (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            phone TEXT,
            address TEXT,
            school TEXT,
            grade TEXT,
            learning_goal TEXT,
            guardian_name TEXT,
            guardian_phone TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("failed to create students table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS subjects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            description TEXT,
            active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("failed to create subjects table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS courses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            teacher_id INTEGER NOT NULL,
            subject_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            description TEXT,
            price REAL,
            kind TEXT NOT NULL CHECK(kind IN ('individual', 'group', 'online')),
            active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(teacher_id) REFERENCES teachers(id),
            FOREIGN KEY(subject_id) REFERENCES subjects(id)
        )",
        [],
    )
    .context("failed to create courses table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS enrollments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id INTEGER NOT NULL,
            course_id INTEGER NOT NULL,
            registered_at TEXT DEFAULT CURRENT_TIMESTAMP,
            status TEXT NOT NULL DEFAULT 'pending'
                CHECK(status IN ('pending', 'confirmed', 'cancelled')),
            agreed_price REAL,
            note TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(student_id) REFERENCES students(id),
            FOREIGN KEY(course_id) REFERENCES courses(id)
        )",
        [],
    )
    .context("failed to create enrollments table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            course_id INTEGER NOT NULL,
            title TEXT,
            scheduled_at TEXT,
            duration_minutes INTEGER NOT NULL DEFAULT 90,
            status TEXT NOT NULL DEFAULT 'not_held'
                CHECK(status IN ('not_held', 'in_progress', 'held', 'cancelled')),
            homework TEXT,
            note TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(course_id) REFERENCES courses(id)
        )",
        [],
    )
    .context("failed to create sessions table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS attendance (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id INTEGER NOT NULL,
            student_id INTEGER NOT NULL,
            status TEXT NOT NULL DEFAULT 'present'
                CHECK(status IN ('present', 'absent', 'late')),
            checked_in_at TEXT,
            checked_out_at TEXT,
            note TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(session_id) REFERENCES sessions(id),
            FOREIGN KEY(student_id) REFERENCES students(id)
        )",
        [],
    )
    .context("failed to create attendance table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS payments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            enrollment_id INTEGER NOT NULL,
            amount REAL NOT NULL,
            paid_at TEXT DEFAULT CURRENT_TIMESTAMP,
            method TEXT NOT NULL DEFAULT 'cash'
                CHECK(method IN ('cash', 'transfer', 'card')),
            status TEXT NOT NULL DEFAULT 'success'
                CHECK(status IN ('success', 'failed', 'pending')),
            transaction_code TEXT,
            note TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(enrollment_id) REFERENCES enrollments(id)
        )",
        [],
    )
    .context("failed to create payments table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS evaluations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id INTEGER NOT NULL,
            teacher_id INTEGER NOT NULL,
            course_id INTEGER NOT NULL,
            score INTEGER CHECK(score >= 1 AND score <= 5),
            comment TEXT,
            evaluated_at TEXT DEFAULT CURRENT_TIMESTAMP,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(student_id) REFERENCES students(id),
            FOREIGN KEY(teacher_id) REFERENCES teachers(id),
            FOREIGN KEY(course_id) REFERENCES courses(id)
        )",
        [],
    )
    .context("failed to create evaluations table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS availability_slots (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            teacher_id INTEGER NOT NULL,
            day_of_week INTEGER CHECK(day_of_week >= 0 AND day_of_week <= 6),
            starts_at TEXT,
            ends_at TEXT,
            is_free INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(teacher_id) REFERENCES teachers(id)
        )",
        [],
    )
    .context("failed to create availability_slots table")?;

    Ok(())
}
