//! Strand file reader.
//!
//! One strand per line: the name, a comma, then the bases. Bases may
//! themselves be separated by commas, those are dropped when the strand is
//! loaded. A line holding only `name,` takes its bases from the next
//! non-blank line, which must not contain a comma: a line with a comma
//! always starts a new record.
//!
//! ```text
//! Insulin,A,T,G,C,C,C,T,G,T,G,G
//! Short,ATGTTTTAA
//! Split,
//! TACAAAATT
//! ```

use std::io::BufRead;

use thiserror::Error;

use super::StrandRecord;

/// Errors that can occur while reading a strand file.
#[derive(Error, Debug)]
pub enum StrandsError {
    #[error("Failed to read strand file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Empty strand file")]
    EmptyFile,

    #[error("Missing ',' after the strand name at line {0}")]
    MissingSeparator(usize),

    #[error("Empty strand name at line {0}")]
    EmptyName(usize),

    #[error("Strand '{name}' at line {line} has no sequence")]
    MissingSequence { name: String, line: usize },
}

/// Result type for strand file operations.
pub type StrandsResult<T> = Result<T, StrandsError>;

/// Reads strand records from a reader.
pub fn parse_strands<R: BufRead>(reader: R) -> StrandsResult<Vec<StrandRecord>> {
    let mut records = Vec::new();
    // Name waiting for its sequence line, with the line it was read from
    let mut pending: Option<(String, usize)> = None;

    for (idx, line_result) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = line_result?;
        let line = line.trim_end();

        if line.trim_start().is_empty() {
            continue;
        }

        if let Some((name, pending_line)) = pending.take() {
            if line.contains(',') {
                return Err(StrandsError::MissingSequence {
                    name,
                    line: pending_line,
                });
            }
            records.push(StrandRecord::new(name, line.trim_start()));
            continue;
        }

        let (name, raw) = line
            .split_once(',')
            .ok_or(StrandsError::MissingSeparator(line_number))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(StrandsError::EmptyName(line_number));
        }

        if raw.trim().is_empty() {
            pending = Some((name.to_string(), line_number));
        } else {
            records.push(StrandRecord::new(name, raw.trim_start()));
        }
    }

    if let Some((name, line)) = pending {
        return Err(StrandsError::MissingSequence { name, line });
    }

    if records.is_empty() {
        return Err(StrandsError::EmptyFile);
    }

    Ok(records)
}

/// Reads strand records from a string.
pub fn parse_strands_str(content: &str) -> StrandsResult<Vec<StrandRecord>> {
    parse_strands(content.as_bytes())
}
