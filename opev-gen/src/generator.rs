//! Event table generation
//!
//! This module provides the driver of the conversion: it reads an event
//! file, expands include directives recursively, and writes the generated
//! C initializer fragment to an output sink. The sink is threaded through
//! the recursion explicitly, so nested includes interleave their output in
//! strict call order.

use crate::ctr::counter_mask;
use crate::parser::{filter_lines, parse_line, ParsedLine};
use crate::types::{EventRecord, GenError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Convert one event file, writing the generated fragment to `out`.
///
/// Include directives recurse into `<dir>/events` immediately, so an
/// included file's header comment and event blocks land in the output
/// before this file's own header (which is written only once the whole
/// file has been parsed). Event blocks follow in input line order:
///
/// ```text
/// // events from file arm/armv6/events
///     {0x00, CTR(0) | CTR(1), "IFU_IFETCH_MISS",
///      "number of instruction fetch misses"},
/// ```
///
/// Any malformed line aborts the whole conversion; output already written
/// to the sink stays written.
pub fn generate<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    log::info!("Converting event file: {}", path.display());

    let text = fs::read_to_string(path).map_err(|e| GenError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut records = Vec::new();
    for (lineno, line) in filter_lines(&text) {
        let parsed = parse_line(line).map_err(|e| GenError::MalformedLine {
            file: path.display().to_string(),
            line: lineno,
            source: e,
        })?;
        match parsed {
            ParsedLine::Include(target) => generate(&target, out)?,
            ParsedLine::Event(record) => records.push(record),
        }
    }

    log::debug!("{}: {} events", path.display(), records.len());

    writeln!(out, "// events from file {}", path.display())?;
    for record in &records {
        write_event(record, out)?;
    }

    Ok(())
}

/// Write the two-line initializer block for one event.
///
/// Name and description are emitted verbatim; the event file format does
/// not support quote or backslash escaping.
fn write_event<W: Write>(record: &EventRecord, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "    {{{}, {}, \"{}\",",
        record.event,
        counter_mask(&record.counters)?,
        record.name
    )?;
    writeln!(out, "     \"{}\"}},", record.description)?;
    Ok(())
}

/// Output path for an input event file: the full input path with `.h`
/// appended (not substituted, so `mips/24K/events` maps to
/// `mips/24K/events.h`).
pub fn header_path(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_os_string();
    path.push(".h");
    PathBuf::from(path)
}

/// Convert `input` into `<input>.h`, truncating any existing output file.
///
/// Returns the path of the written header fragment. The output handle is
/// scoped to this call and flushed before returning.
pub fn generate_to_header(input: &Path) -> Result<PathBuf> {
    let out_path = header_path(input);
    let file = File::create(&out_path)?;
    let mut out = BufWriter::new(file);
    generate(input, &mut out)?;
    out.flush()?;
    Ok(out_path)
}
