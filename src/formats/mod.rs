//! Input file readers.
//!
//! Supports automatic format detection for:
//! - Strand files (.txt, .csv, .dna, .strands): `name,BASES` per line
//! - FASTA (.fasta, .fa, .fna, .fas)
//!
//! Format detection priority:
//! 1. Explicit format specification (-f option)
//! 2. File extension
//! 3. Content-based detection
//!
//! A file is read completely before anything is handed to the sequencer,
//! so a failed read never leaves strands half loaded.

pub mod fasta;
pub mod strands;

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use thiserror::Error;

/// A strand as read from a file: its name and raw bases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrandRecord {
    pub name: String,
    pub sequence: String,
}

impl StrandRecord {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }
}

/// Detected file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Strands,
    Fasta,
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileFormat::Strands => write!(f, "strand file"),
            FileFormat::Fasta => write!(f, "FASTA"),
        }
    }
}

/// Errors that can occur during file parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to open file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Empty file")]
    EmptyFile,

    #[error("Could not determine file format.\n\
             Hint: Use -f/--format to specify the format explicitly:\n  \
             transtui -f strands <file>   # name,BASES per line\n  \
             transtui -f fasta <file>     # FASTA format")]
    UnknownFormat,

    #[error("Strand file error: {0}")]
    StrandsError(#[from] strands::StrandsError),

    #[error("FASTA error: {0}")]
    FastaError(#[from] fasta::FastaError),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Detects format from file extension.
pub fn detect_format_from_extension<P: AsRef<Path>>(path: P) -> Option<FileFormat> {
    let ext = path.as_ref().extension().and_then(OsStr::to_str)?;
    match ext.to_lowercase().as_str() {
        "txt" | "csv" | "dna" | "strands" => Some(FileFormat::Strands),
        "fa" | "fas" | "fasta" | "fna" | "ffn" => Some(FileFormat::Fasta),
        _ => None,
    }
}

/// Detects the file format from the first non-empty line.
pub fn detect_format_from_content(content: &str) -> Option<FileFormat> {
    let first = content.lines().map(str::trim).find(|line| !line.is_empty())?;

    if first.starts_with('>') {
        Some(FileFormat::Fasta)
    } else if first.contains(',') {
        Some(FileFormat::Strands)
    } else {
        None
    }
}

/// Parses content with a specific format.
pub fn parse_content(content: &str, format: FileFormat) -> ParseResult<Vec<StrandRecord>> {
    match format {
        FileFormat::Strands => Ok(strands::parse_strands_str(content)?),
        FileFormat::Fasta => Ok(fasta::parse_fasta_str(content)?),
    }
}

/// Parses a strand file with optional format specification.
///
/// Detection priority:
/// 1. Explicit format (if provided)
/// 2. File extension, falling back to content if the extension's parser fails
/// 3. Content-based detection
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    forced_format: Option<FileFormat>,
) -> ParseResult<Vec<StrandRecord>> {
    let file = File::open(&path)?;
    let file_size = file.metadata()?.len() as usize;

    if file_size == 0 {
        return Err(ParseError::EmptyFile);
    }

    let mut reader = BufReader::new(file);
    let mut content = String::with_capacity(file_size);
    reader.read_to_string(&mut content)?;

    let format = match forced_format {
        Some(format) => format,
        None => match detect_format_from_extension(&path) {
            Some(format) => match parse_content(&content, format) {
                Ok(records) => return Ok(log_loaded(records, format)),
                Err(e) => detect_format_from_content(&content).ok_or(e)?,
            },
            None => detect_format_from_content(&content).ok_or(ParseError::UnknownFormat)?,
        },
    };

    parse_content(&content, format).map(|records| log_loaded(records, format))
}

/// Parses a strand file, detecting the format.
pub fn parse_file<P: AsRef<Path>>(path: P) -> ParseResult<Vec<StrandRecord>> {
    parse_file_with_options(path, None)
}

fn log_loaded(records: Vec<StrandRecord>, format: FileFormat) -> Vec<StrandRecord> {
    info!("Read {} record(s) as {}", records.len(), format);
    records
}
