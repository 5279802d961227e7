//! Obtains introspection output from the interpreter
//!
//! Runs the interpreter binary with a `:type lookup` request on stdin and
//! captures what it prints. This is the only place the tool touches the
//! outside world; everything downstream is a pure computation over the
//! returned text.

use std::fmt;
use std::io::Write;
use std::process::{Command, Stdio};

/// Errors while obtaining introspection output
#[derive(Debug)]
pub enum SourceError {
    /// The interpreter could not be started
    Launch(String),
    /// The interpreter ran but did not produce a usable dump
    Failed(String),
    /// The interpreter produced non-UTF-8 output
    Decode(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Launch(msg) => write!(f, "Failed to launch interpreter: {}", msg),
            SourceError::Failed(msg) => write!(f, "Interpreter failed: {}", msg),
            SourceError::Decode(msg) => write!(f, "Interpreter output is not UTF-8: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

/// Stdin program sent to the interpreter for one module.
///
/// The core library is loaded implicitly; any other module must be imported
/// before it can be looked up.
fn lookup_request(module: &str) -> String {
    if module == "Swift" {
        format!(":type lookup {}", module)
    } else {
        format!("import {}\n:type lookup {}", module, module)
    }
}

/// Run `interpreter` and return the text of `:type lookup <module>`.
pub fn type_lookup(interpreter: &str, module: &str) -> Result<String, SourceError> {
    let mut child = Command::new(interpreter)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| SourceError::Launch(format!("{}: {}", interpreter, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(lookup_request(module).as_bytes())
            .map_err(|e| SourceError::Failed(format!("could not write to stdin: {}", e)))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| SourceError::Failed(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SourceError::Failed(format!(
            "{} exited with {}: {}",
            interpreter,
            output.status,
            stderr.trim()
        )));
    }

    String::from_utf8(output.stdout).map_err(|e| SourceError::Decode(e.to_string()))
}
