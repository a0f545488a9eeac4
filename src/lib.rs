//! Core library surface for the tutorbase data service.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as external tooling and the integration tests can
//! reuse the same pieces: `models` for the row and input types, `db` for the
//! schema and access layer, and `ipc` for the request loop the UI process
//! talks to.
pub mod db;
pub mod ipc;
pub mod models;

/// Convenience re-exports for the persistence layer. These are what
/// `main.rs` uses to bring up the store before handing it to the serve loop.
pub use db::{open_default, open_store, seed_demo_data};

/// The domain types that cross the process boundary as JSON.
pub use models::{
    Course, CourseData, CourseSummary, MutationReceipt, NewTeacher, Student, StudentData, Subject,
    SubjectData, Teacher, TeacherUpdate,
};

/// The boundary loop and its request type.
pub use ipc::{serve, Request};
