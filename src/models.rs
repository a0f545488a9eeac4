//! Domain models that mirror the SQLite schema and cross the process boundary
//! as JSON. These types stay light-weight data holders: every row is a
//! snapshot copied out of the store with no live binding back to it, and the
//! input records carry exactly the mutable columns a create or update
//! statement binds. Wire keys are camelCase to match what the UI process
//! expects.

use serde::{Deserialize, Serialize};

/// A tutor registered in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    /// Primary key from the store. Ids are issued once and never reused.
    pub id: i64,
    /// Login identity, unique across all teachers.
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub specialty: Option<String>,
    pub hourly_rate: Option<f64>,
    pub experience_years: i64,
    /// Aggregate rating between 0 and 5. Always 0 for freshly created rows;
    /// evaluation workflows will maintain it later.
    pub rating: f64,
    /// Soft-delete flag: inactive teachers keep their row but drop out of
    /// default listings.
    pub active: bool,
    pub created_at: String,
}

/// Columns accepted when registering a teacher. Email and password are set
/// here and never again; updates go through [`TeacherUpdate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeacher {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub specialty: Option<String>,
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub experience_years: i64,
}

/// The teacher columns an update statement replaces. Identity, credentials,
/// rating and the creation timestamp stay untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherUpdate {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub specialty: Option<String>,
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub experience_years: i64,
}

/// A pupil. Students are the one entity that hard-deletes: remove the row and
/// it is gone, no inactive flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub school: Option<String>,
    pub grade: Option<String>,
    pub learning_goal: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub created_at: String,
}

/// Mutable student columns, shared by create and update since both bind the
/// same set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentData {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub school: Option<String>,
    pub grade: Option<String>,
    pub learning_goal: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
}

/// A teachable subject, e.g. "Mathematics". Subject names are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Soft-delete flag, same semantics as [`Teacher::active`].
    pub active: bool,
    pub created_at: String,
}

/// Mutable subject columns for create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectData {
    pub name: String,
    pub description: Option<String>,
}

/// A course a teacher offers for a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    /// One of `individual`, `group` or `online`; the store rejects anything
    /// else. Serialized as `type`, the key the UI sends and expects.
    #[serde(rename = "type")]
    pub kind: String,
    pub active: bool,
    pub created_at: String,
}

/// Mutable course columns for create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseData {
    pub teacher_id: i64,
    pub subject_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A course row as the listing query returns it: the course columns plus the
/// display names joined in from the owning teacher and subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub active: bool,
    pub created_at: String,
    pub teacher_name: String,
    pub subject_name: String,
}

/// What a successful insert reports back: the identity the store issued and
/// the affected-row count, mirroring the receipt shape the UI already
/// consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationReceipt {
    pub id: i64,
    pub changes: usize,
}
