//! Persistence module split across logical submodules. Everything operates on
//! an explicitly passed [`rusqlite::Connection`]; there is no shared handle.

mod connection;
mod courses;
mod error;
mod schema;
mod seed;
mod students;
mod subjects;
mod teachers;

pub use connection::{open_default, open_store};
pub use courses::{create_course, delete_course, fetch_courses, get_course, update_course};
pub use error::is_constraint_violation;
pub use schema::create_tables;
pub use seed::seed_demo_data;
pub use students::{create_student, delete_student, fetch_students, get_student, update_student};
pub use subjects::{create_subject, delete_subject, fetch_subjects, get_subject, update_subject};
pub use teachers::{create_teacher, delete_teacher, fetch_teachers, get_teacher, update_teacher};
