//! Crate to run integration tests for the solver binary.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::io::Read;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;

use serde_json::Value;
use wait_timeout::ChildExt;

#[derive(Debug)]
pub(crate) struct SolverOutput {
    pub(crate) success: bool,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl SolverOutput {
    pub(crate) fn report(&self) -> Value {
        serde_json::from_str(self.stdout.trim()).expect("the report is valid JSON")
    }
}

pub(crate) fn run_solver<'a>(args: impl IntoIterator<Item = &'a str>) -> SolverOutput {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let solver = PathBuf::from(env!("CARGO_BIN_EXE_matroid-solver"));

    let mut child = Command::new(solver)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => {
            let _ = child.kill();
            panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs())
        }
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let mut stdout = String::new();
    let _ = child
        .stdout
        .take()
        .expect("stdout is piped")
        .read_to_string(&mut stdout)
        .expect("stdout is UTF-8");
    let mut stderr = String::new();
    let _ = child
        .stderr
        .take()
        .expect("stderr is piped")
        .read_to_string(&mut stderr)
        .expect("stderr is UTF-8");

    SolverOutput {
        success: status.success(),
        stdout,
        stderr,
    }
}

/// The sizes of all solutions reported by `algorithm`.
pub(crate) fn solution_sizes(report: &Value, algorithm: &str) -> Vec<usize> {
    report["solutions"]
        .as_array()
        .expect("solutions is an array")
        .iter()
        .filter(|solution| solution["algorithm"] == algorithm)
        .map(|solution| {
            solution["solution"]
                .as_array()
                .expect("solution is an array")
                .len()
        })
        .collect()
}
