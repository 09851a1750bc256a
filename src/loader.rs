//! Loading samples from a two-column text file.
//!
//! ## Purpose
//!
//! This module is the thin I/O collaborator in front of the core: it
//! turns a plain-text data file into the ordered sequence of samples
//! the fitter consumes.
//!
//! ## Key concepts
//!
//! * **Format**: One sample per line, `x,y` with an optional space
//!   after the comma, parsed as two floating-point values. No header
//!   row; end of file terminates reading. Trailing blank lines are
//!   tolerated.
//! * **Exact Count**: [`load_exact`] enforces the "exactly N samples,
//!   N known in advance" contract; [`load_samples`] reads whatever the
//!   file holds.
//!
//! ## Invariants
//!
//! * The returned sequence preserves file order; shuffling is the
//!   dataset's job.
//! * The core never proceeds with partial or garbage data: every parse
//!   failure is fatal.
//!
//! ## Non-goals
//!
//! * No CSV dialects, quoting, or header handling.
//! * No streaming; files are read line by line into memory.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// Internal dependencies
use crate::primitives::dataset::Sample;
use crate::primitives::errors::DescentError;

/// Read every `x,y` line of the file at `path`.
///
/// Fails with [`DescentError::DataLoad`] when the file cannot be opened
/// or read, and with [`DescentError::MalformedLine`] on the first line
/// that does not parse as two comma-separated floats.
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<Sample<f64>>, DescentError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| DescentError::DataLoad {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;

    let mut samples = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|err| DescentError::DataLoad {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        samples.push(parse_line(trimmed, index + 1)?);
    }

    Ok(samples)
}

/// Read the file at `path` and require exactly `expected` samples.
///
/// On top of the [`load_samples`] failures, fails with
/// [`DescentError::SampleCountMismatch`] when the file yields any other
/// count.
pub fn load_exact<P: AsRef<Path>>(
    path: P,
    expected: usize,
) -> Result<Vec<Sample<f64>>, DescentError> {
    let samples = load_samples(path)?;
    if samples.len() != expected {
        return Err(DescentError::SampleCountMismatch {
            got: samples.len(),
            expected,
        });
    }
    Ok(samples)
}

/// Parse one `x,y` line (optional space after the comma).
fn parse_line(content: &str, line: usize) -> Result<Sample<f64>, DescentError> {
    let malformed = || DescentError::MalformedLine {
        line,
        content: content.to_string(),
    };

    let (x_text, y_text) = content.split_once(',').ok_or_else(|| malformed())?;
    let x: f64 = x_text.trim().parse().map_err(|_| malformed())?;
    let y: f64 = y_text.trim().parse().map_err(|_| malformed())?;

    Ok(Sample { x, y })
}
