//! End-to-end exercises of the request loop: JSON lines in, envelope
//! responses out, against a real file-backed store.

use rusqlite::Connection;
use serde_json::{json, Value};
use tempfile::TempDir;

use tutorbase::{open_store, serve};

fn fresh_store() -> (TempDir, Connection) {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_store(dir.path().join("store.sqlite")).unwrap();
    (dir, conn)
}

/// Feed the given requests through the serve loop and decode one response
/// per line.
fn respond_all(conn: &Connection, requests: &[Value]) -> Vec<Value> {
    let input: String = requests.iter().map(|req| format!("{req}\n")).collect();
    let mut output = Vec::new();
    serve(conn, input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn course_listing_carries_joined_names() {
    let (_dir, conn) = fresh_store();
    let responses = respond_all(
        &conn,
        &[
            json!({ "id": "1", "method": "teachers.create",
                    "params": { "email": "t@x.com", "password": "p", "name": "A" } }),
            json!({ "id": "2", "method": "subjects.create",
                    "params": { "name": "Math" } }),
            json!({ "id": "3", "method": "courses.create",
                    "params": { "teacherId": 1, "subjectId": 1,
                                "title": "Algebra", "type": "individual" } }),
            json!({ "id": "4", "method": "courses.list" }),
        ],
    );

    assert_eq!(responses[0]["result"]["id"], json!(1));
    assert_eq!(responses[1]["result"]["id"], json!(1));
    assert_eq!(responses[2]["result"]["id"], json!(1));

    let listing = responses[3]["result"].as_array().unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0]["title"], json!("Algebra"));
    assert_eq!(listing[0]["type"], json!("individual"));
    assert_eq!(listing[0]["teacherName"], json!("A"));
    assert_eq!(listing[0]["subjectName"], json!("Math"));
}

#[test]
fn seeding_twice_leaves_the_same_rows() {
    let (_dir, conn) = fresh_store();
    let responses = respond_all(
        &conn,
        &[
            json!({ "id": "1", "method": "seed.run" }),
            json!({ "id": "2", "method": "seed.run" }),
            json!({ "id": "3", "method": "subjects.list" }),
            json!({ "id": "4", "method": "teachers.list" }),
            json!({ "id": "5", "method": "students.list" }),
        ],
    );

    assert_eq!(responses[0]["ok"], json!(true));
    assert_eq!(responses[1]["ok"], json!(true));
    assert_eq!(responses[2]["result"].as_array().unwrap().len(), 5);
    assert_eq!(responses[3]["result"].as_array().unwrap().len(), 2);
    assert_eq!(responses[4]["result"].as_array().unwrap().len(), 2);
}

#[test]
fn mutations_report_affected_row_counts() {
    let (_dir, conn) = fresh_store();
    let responses = respond_all(
        &conn,
        &[
            json!({ "id": "1", "method": "teachers.create",
                    "params": { "email": "t@x.com", "password": "p", "name": "A" } }),
            json!({ "id": "2", "method": "teachers.update",
                    "params": { "id": 1, "data": { "name": "A. Senior" } } }),
            json!({ "id": "3", "method": "teachers.update",
                    "params": { "id": 99, "data": { "name": "Nobody" } } }),
            json!({ "id": "4", "method": "teachers.delete", "params": { "id": 1 } }),
            json!({ "id": "5", "method": "teachers.list" }),
        ],
    );

    assert_eq!(responses[1]["result"]["changes"], json!(1));

    // Updating a missing id is a zero-row success, not an error.
    assert_eq!(responses[2]["ok"], json!(true));
    assert_eq!(responses[2]["result"]["changes"], json!(0));

    assert_eq!(responses[3]["result"]["changes"], json!(1));
    assert_eq!(responses[4]["result"], json!([]));
}

#[test]
fn failures_are_answered_in_place_and_the_loop_continues() {
    let (_dir, conn) = fresh_store();
    let teacher = json!({ "email": "t@x.com", "password": "p", "name": "A" });

    let input = format!(
        "{}\n{}\nthis is not json\n{}\n{}\n",
        json!({ "id": "1", "method": "teachers.create", "params": teacher.clone() }),
        json!({ "id": "2", "method": "teachers.create", "params": teacher }),
        json!({ "id": "3", "method": "payments.list" }),
        json!({ "id": "4", "method": "no.such.method" }),
    );
    let mut output = Vec::new();
    serve(&conn, input.as_bytes(), &mut output).unwrap();

    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 5);

    assert_eq!(responses[0]["ok"], json!(true));
    assert_eq!(responses[1]["error"]["code"], json!("constraint_violation"));
    assert_eq!(responses[2]["error"]["code"], json!("bad_request"));
    assert_eq!(responses[3]["error"]["code"], json!("not_implemented"));
    assert_eq!(responses[4]["error"]["code"], json!("unknown_method"));
}

#[test]
fn health_reports_version_and_store_path() {
    let (_dir, conn) = fresh_store();
    let responses = respond_all(&conn, &[json!({ "id": "1", "method": "health" })]);

    assert_eq!(responses[0]["ok"], json!(true));
    assert_eq!(
        responses[0]["result"]["version"],
        json!(env!("CARGO_PKG_VERSION"))
    );
    assert!(responses[0]["result"]["databasePath"]
        .as_str()
        .unwrap()
        .ends_with("store.sqlite"));
}
