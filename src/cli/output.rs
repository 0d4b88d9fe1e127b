//! Terminal output
//!
//! Stdout carries exactly one JSON document per invocation; diagnostics go
//! to stderr. Colors respect NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::infrastructure::{InfraError, InfraResult};

/// Indentation of pretty-printed documents.
const INDENT: &[u8] = b"    ";

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Serialize `value` as JSON indented with four spaces.
pub fn render_pretty<T: Serialize>(value: &T, what: &str) -> InfraResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|e| InfraError::serialize(what, e))?;
    Ok(buf)
}

/// Serialize `value` as single-line JSON.
pub fn render_compact<T: Serialize>(value: &T, what: &str) -> InfraResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| InfraError::serialize(what, e))
}

/// Write a rendered document plus newline to stdout.
pub fn document(rendered: &[u8]) -> InfraResult<()> {
    write_document(&mut io::stdout().lock(), rendered)
}

/// Write a rendered document plus newline to `out` and flush.
pub fn write_document<W: Write>(out: &mut W, rendered: &[u8]) -> InfraResult<()> {
    let write = |out: &mut W| -> io::Result<()> {
        out.write_all(rendered)?;
        out.write_all(b"\n")?;
        out.flush()
    };
    write(out).map_err(|e| InfraError::io("write document to stdout", e))
}
