//! classify - Minimal flux-action demo
//!
//! Reads one JSON document per line on stdin and reports how each value
//! classifies: conforming action, error outcome, or the reason it was
//! rejected. Values conforming to the status-string convention are
//! reported under that convention.
//!
//! Run with RUST_LOG=trace to surface the classifier's rejection events:
//!
//!     echo '{"type":"save","extra":1}' | RUST_LOG=trace cargo run -p classify

use std::io::{self, BufRead};

use flux_action::{is_error, status, validate};
use serde_json::Value;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(&line) {
            Ok(value) => println!("{}", classify(&value)),
            Err(err) => println!("not JSON: {err}"),
        }
    }
    Ok(())
}

fn classify(value: &Value) -> String {
    match validate(value) {
        Ok(()) if is_error(value) => "standard action (error outcome)".into(),
        Ok(()) => "standard action".into(),
        // Status-convention actions carry a `status` key the default
        // profile rejects; report them under their own convention.
        Err(_) if status::is_error(value) => "status-convention action (error)".into(),
        Err(_) if status::is_success(value) => "status-convention action (success)".into(),
        Err(_) if status::is_fsa(value) => "status-convention action (pending/other)".into(),
        Err(reason) => format!("rejected: {reason}"),
    }
}
