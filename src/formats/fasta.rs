//! FASTA reader.
//!
//! Each record becomes one [`StrandRecord`], named after the first word of
//! its header. Sequences may span several lines.
//!
//! ```text
//! >strand_1 optional description
//! ATGCCGTAA
//! TTAGGC
//! >strand_2
//! TACGGA
//! ```

use std::io::BufRead;

use thiserror::Error;

use super::StrandRecord;

/// Errors that can occur while reading FASTA content.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Failed to read FASTA content: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Empty FASTA file")]
    EmptyFile,

    #[error("Empty sequence identifier at line {0}")]
    EmptyIdentifier(usize),

    #[error("Sequence without header at line {0}")]
    SequenceWithoutHeader(usize),
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// Reads FASTA records from a reader.
pub fn parse_fasta<R: BufRead>(reader: R) -> FastaResult<Vec<StrandRecord>> {
    let mut records = Vec::new();
    let mut current: Option<StrandRecord> = None;

    for (idx, line_result) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = line_result?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }

            let id = header.split_whitespace().next().unwrap_or("");
            if id.is_empty() {
                return Err(FastaError::EmptyIdentifier(line_number));
            }
            current = Some(StrandRecord::new(id, String::new()));
        } else {
            let record = current
                .as_mut()
                .ok_or(FastaError::SequenceWithoutHeader(line_number))?;
            record
                .sequence
                .extend(line.chars().filter(|c| !c.is_whitespace()));
        }
    }

    if let Some(record) = current {
        records.push(record);
    }

    if records.is_empty() {
        return Err(FastaError::EmptyFile);
    }

    Ok(records)
}

/// Reads FASTA records from a string.
pub fn parse_fasta_str(content: &str) -> FastaResult<Vec<StrandRecord>> {
    parse_fasta(content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_fasta() {
        let records = parse_fasta_str(">seq1\nATGC\n>seq2\nTTAA\n").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], StrandRecord::new("seq1", "ATGC"));
        assert_eq!(records[1], StrandRecord::new("seq2", "TTAA"));
    }

    #[test]
    fn test_parse_multiline_sequence() {
        let records = parse_fasta_str(">seq1\nATG\nCCG\nTAA\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sequence, "ATGCCGTAA");
    }

    #[test]
    fn test_parse_with_description_and_blank_lines() {
        let records = parse_fasta_str("\n>seq1 some gene\n\nATG\n\n>seq2\nGGC\n").unwrap();
        assert_eq!(records[0].name, "seq1");
        assert_eq!(records[0].sequence, "ATG");
        assert_eq!(records[1].sequence, "GGC");
    }

    #[test]
    fn test_header_without_sequence_is_kept_empty() {
        let records = parse_fasta_str(">seq1\n>seq2\nATG\n").unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].sequence.is_empty());
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(parse_fasta_str(""), Err(FastaError::EmptyFile)));
    }

    #[test]
    fn test_empty_identifier() {
        assert!(matches!(parse_fasta_str(">\nATG\n"), Err(FastaError::EmptyIdentifier(1))));
    }

    #[test]
    fn test_sequence_without_header() {
        let result = parse_fasta_str("ATGC\n>seq1\nTTAA\n");
        assert!(matches!(result, Err(FastaError::SequenceWithoutHeader(1))));
    }
}
