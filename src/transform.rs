//! Line-oriented coordinate fuzzing over delimited text.
//!
//! [`transform_lines`] is the core pass: it walks decoded input one line at
//! a time, fuzzes the configured columns, and emits exactly one output line
//! per non-empty input line — verbatim when the row cannot be fuzzed.
//! [`process_file`] wraps the pass with encoding resolution and file I/O.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::Rng;
use tracing::{info, warn};

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::encoding;
use crate::fuzz::fuzz_coordinate;

/// Immutable settings for one fuzzing run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Maximum displacement in degrees.
    pub radius: f64,
    /// Zero-based index of the latitude column.
    pub lat_col: usize,
    /// Zero-based index of the longitude column.
    pub lon_col: usize,
    /// Field separator; any non-empty string.
    pub delimiter: String,
    /// Discard the first input line before processing.
    pub header: bool,
    /// Encoding label for input and output; auto-detected when `None`.
    pub encoding: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            radius: 0.01,
            lat_col: 0,
            lon_col: 1,
            delimiter: ",".to_string(),
            header: false,
            encoding: None,
        }
    }
}

/// Counts of how each input line was handled during a pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransformSummary {
    /// Lines whose coordinate columns were successfully fuzzed.
    pub fuzzed: u64,
    /// Lines passed through verbatim because they had too few columns.
    pub short_rows: u64,
    /// Lines passed through verbatim because a coordinate failed validation.
    pub invalid_rows: u64,
    /// Empty lines dropped from the output.
    pub empty_lines: u64,
}

impl TransformSummary {
    /// Total lines written to the output.
    pub fn lines_written(&self) -> u64 {
        self.fuzzed + self.short_rows + self.invalid_rows
    }
}

/// Run the fuzzing pass over decoded text.
///
/// Emits one LF-terminated output line per non-empty input line after the
/// optional header skip; empty lines are dropped (they still advance the
/// line counter used in diagnostics). Rows that cannot be fuzzed are
/// written unchanged and reported to `sink` with their 1-based line number.
/// Fuzzed fields are rendered with `f64`'s default `Display`, the shortest
/// representation that round-trips.
pub fn transform_lines<W, R, S>(
    input: &str,
    out: &mut W,
    config: &RunConfig,
    rng: &mut R,
    sink: &mut S,
) -> Result<TransformSummary>
where
    W: fmt::Write,
    R: Rng + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let mut summary = TransformSummary::default();
    let mut lines = input.lines();
    if config.header {
        lines.next();
    }

    let needed = config.lat_col.max(config.lon_col);
    for (index, line) in lines.enumerate() {
        let line_number = index as u64 + 1;
        if line.is_empty() {
            summary.empty_lines += 1;
            continue;
        }

        let fields: Vec<&str> = line.split(config.delimiter.as_str()).collect();
        if fields.len() <= needed {
            sink.warning(
                line_number,
                &format!("not enough columns to fuzz: found {}", fields.len()),
            );
            writeln!(out, "{line}")?;
            summary.short_rows += 1;
            continue;
        }

        match fuzz_coordinate(
            fields[config.lat_col],
            fields[config.lon_col],
            config.radius,
            rng,
        ) {
            Ok((new_lat, new_lon)) => {
                let new_lat = new_lat.to_string();
                let new_lon = new_lon.to_string();
                let rendered: Vec<&str> = fields
                    .iter()
                    .enumerate()
                    .map(|(i, field)| {
                        // lon wins a shared column, matching assignment order
                        if i == config.lon_col {
                            new_lon.as_str()
                        } else if i == config.lat_col {
                            new_lat.as_str()
                        } else {
                            *field
                        }
                    })
                    .collect();
                writeln!(out, "{}", rendered.join(config.delimiter.as_str()))?;
                summary.fuzzed += 1;
            }
            Err(err) => {
                sink.error(line_number, &err.to_string());
                writeln!(out, "{line}")?;
                summary.invalid_rows += 1;
            }
        }
    }

    Ok(summary)
}

/// Fuzz `input_file` into `output_file` according to `config`.
///
/// File-level failures (missing input, unknown encoding label, I/O errors)
/// are fatal; row-level problems are logged and the offending lines pass
/// through unchanged. The output file is truncated on open, so rerunning
/// overwrites it wholesale.
pub fn process_file(
    input_file: &Path,
    output_file: &Path,
    config: &RunConfig,
) -> Result<TransformSummary> {
    if config.delimiter.is_empty() {
        bail!("delimiter must not be empty");
    }

    let raw = fs::read(input_file)
        .with_context(|| format!("failed to read input file {}", input_file.display()))?;

    let encoding = match config.encoding.as_deref() {
        Some(label) => encoding::resolve(label)?,
        None => {
            let detected = encoding::detect(&raw);
            info!("detected encoding: {}", detected.name());
            detected
        }
    };

    let (text, malformed) = encoding::decode(encoding, &raw);
    if malformed {
        warn!(
            "input contains byte sequences that are malformed in {}; they were replaced",
            encoding.name()
        );
    }

    let mut rendered = String::with_capacity(text.len());
    let summary = transform_lines(
        &text,
        &mut rendered,
        config,
        &mut rand::rng(),
        &mut TracingSink,
    )?;

    fs::write(output_file, encoding::encode(encoding, &rendered))
        .with_context(|| format!("failed to write output file {}", output_file.display()))?;

    info!(
        fuzzed = summary.fuzzed,
        short_rows = summary.short_rows,
        invalid_rows = summary.invalid_rows,
        empty_lines = summary.empty_lines,
        "fuzzing pass complete"
    );

    Ok(summary)
}
