use std::io::Write;

use serde_json::Value;

use crate::{
    structures::{json_kind, Envelope},
    Cause, Failure,
};

const JSON_CTYPE: &str = "application/json";
pub const RESULTS_HEADER: &str = "=== Error check results ===";
pub const ERROR_HEADER: &str = "=== Error ===";

/// Write the status line and the body. JSON bodies are pretty-printed and,
/// when they carry a successful envelope, followed by the raw `data` value.
///
/// Everything written before a failure stays written, so a body that claims to
/// be JSON but isn't still leaves the status line behind. A JSON body that is
/// not an object is printed and then reported as a failure.
pub fn response<W: Write>(
    out: &mut W,
    status: u16,
    content_type: &str,
    body: &str,
) -> Result<(), Failure> {
    writeln!(out, "Status code: {status}")?;
    writeln!(out, "Response body:")?;
    if !content_type.starts_with(JSON_CTYPE) {
        writeln!(out, "{body}")?;
        return Ok(());
    }

    let parsed: Value = serde_json::from_str(body)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&parsed)?)?;

    let Some(envelope) = Envelope::view(&parsed) else {
        return Err(Cause::NotAnObject(json_kind(&parsed)).into());
    };
    trace!(
        success = envelope.success,
        timestamp = ?envelope.timestamp,
        "Parsed response envelope"
    );
    if envelope.success {
        if let Some(data) = envelope.data {
            writeln!(out, "\n{RESULTS_HEADER}")?;
            write_raw(out, data)?;
        }
    } else if let Some(error) = envelope.error {
        writeln!(out, "\n{ERROR_HEADER}")?;
        writeln!(out, "[{}] {}", error.code, error.message)?;
        if let Some(details) = error.details {
            debug!(?details, "Error details");
        }
    }
    Ok(())
}

// Strings go out without their quotes.
fn write_raw<W: Write>(out: &mut W, data: &Value) -> std::io::Result<()> {
    match data {
        Value::String(text) => writeln!(out, "{text}"),
        other => writeln!(out, "{other}"),
    }
}
