use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use rusqlite::Connection;

use super::schema;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".tutorbase";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "tutorbase.sqlite";

/// Open the store at its per-user default location, creating the data
/// directory and the database file on first launch.
pub fn open_default() -> Result<Connection> {
    open_store(default_db_path()?)
}

/// Open (or create) the store at an explicit path, enable referential
/// integrity checks, and make sure every table exists. The returned
/// connection is the only handle to the store; callers pass it down
/// explicitly rather than stashing it in a global.
pub fn open_store<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let conn = Connection::open(path).context("failed to open SQLite database")?;
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign keys")?;

    schema::create_tables(&conn)?;

    Ok(conn)
}

/// Resolve the absolute path to the SQLite database inside the user's home.
fn default_db_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_data_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.sqlite");

        let conn = open_store(&path).unwrap();
        drop(conn);

        assert!(path.exists());
    }

    #[test]
    fn reopening_preserves_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.sqlite");

        let conn = open_store(&path).unwrap();
        conn.execute("INSERT INTO subjects (name) VALUES ('Physics')", [])
            .unwrap();
        conn.close().unwrap();

        let conn = open_store(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM subjects", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn foreign_keys_are_enforced() {
        let dir = tempfile::tempdir().unwrap();
        let conn = open_store(dir.path().join("store.sqlite")).unwrap();

        let result = conn.execute(
            "INSERT INTO courses (teacher_id, subject_id, title, kind)
             VALUES (99, 99, 'Orphan', 'online')",
            [],
        );
        assert!(result.is_err());
    }
}
