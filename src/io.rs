use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::form::FormRecord;

/// Writes the submitted record to stdout as pretty JSON. This is the
/// success action: the form itself neither persists nor transmits anything.
pub fn emit_payload(record: &FormRecord) -> Result<()> {
    let mut stdout = io::stdout();
    write_payload(&mut stdout, record)?;
    stdout.flush().context("failed to flush stdout")
}

fn write_payload<W: Write>(writer: &mut W, record: &FormRecord) -> Result<()> {
    let payload = serde_json::to_string_pretty(record).context("failed to serialize payload")?;
    writer
        .write_all(payload.as_bytes())
        .and_then(|_| writer.write_all(b"\n"))
        .context("failed to write payload")
}
