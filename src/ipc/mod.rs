//! Process boundary toward the UI: newline-delimited JSON requests on a
//! reader, one envelope-wrapped response per request on a writer. The loop is
//! generic over the streams so tests can drive it in memory while the binary
//! wires it to stdin/stdout.

pub mod error;
mod handlers;
mod router;
mod types;

pub use error::RpcError;
pub use router::handle_request;
pub use types::Request;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::warn;

/// Serve requests until the reader is exhausted, which is how the UI process
/// signals shutdown. Requests are handled strictly one at a time; a line that
/// is not a valid request gets a `bad_request` response (with no correlation
/// id to echo) and the loop moves on.
pub fn serve<R: BufRead, W: Write>(conn: &Connection, reader: R, writer: &mut W) -> Result<()> {
    for line in reader.lines() {
        let line = line.context("failed to read request line")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(req) => router::handle_request(conn, &req),
            Err(parse_err) => {
                warn!("discarding unparseable request: {parse_err}");
                error::err("", "bad_request", format!("invalid request: {parse_err}"))
            }
        };

        let text = serde_json::to_string(&response).context("failed to encode response")?;
        writeln!(writer, "{text}").context("failed to write response")?;
        writer.flush().context("failed to flush response")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::db;

    fn memory_store() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("PRAGMA foreign_keys = ON", []).unwrap();
        db::create_tables(&conn).unwrap();
        conn
    }

    fn run(conn: &Connection, input: &str) -> Vec<Value> {
        let mut output = Vec::new();
        serve(conn, input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn answers_one_response_per_request() {
        let conn = memory_store();
        let responses = run(
            &conn,
            "{\"id\":\"a\",\"method\":\"health\"}\n{\"id\":\"b\",\"method\":\"subjects.list\"}\n",
        );

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], "a");
        assert_eq!(responses[1]["id"], "b");
        assert_eq!(responses[1]["result"], serde_json::json!([]));
    }

    #[test]
    fn skips_blank_lines_and_stops_at_eof() {
        let conn = memory_store();
        let responses = run(&conn, "\n\n");
        assert!(responses.is_empty());
    }

    #[test]
    fn garbage_lines_get_bad_request() {
        let conn = memory_store();
        let responses = run(&conn, "not json at all\n");

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["ok"], serde_json::json!(false));
        assert_eq!(responses[0]["error"]["code"], "bad_request");
    }
}
