//! transtui - DNA transcription and translation in the terminal
//!
//! Loads named DNA strands, transcribes them into mRNA, reverses strands
//! and translates mRNA codons into amino acids.
//!
//! ## Usage
//!
//! ```bash
//! transtui <strand_file>
//! transtui -f fasta <strand_file>             # Force format
//! transtui data.txt -o - -t --translate       # CLI mode, print to stdout
//! transtui data.txt -o out.txt -r dna:2       # Reverse DNA 2 before writing
//! ```
//!
//! ## Supported Formats
//!
//! - Strand files (.txt, .csv, .dna, .strands): `name,BASES` per line
//! - FASTA (.fasta, .fa, .fna, .fas)
//!
//! ## Keys
//!
//! - `1`-`5` or `j/k` + `Enter`: menu
//! - `PgUp/PgDn`, `Ctrl-U/Ctrl-D`: scroll output
//! - `?`: help, `q`: quit

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use transtui::controller::run_app;
use transtui::formats::{parse_file_with_options, FileFormat};
use transtui::logging::{init_file_logger, init_stderr_logger};
use transtui::model::AppState;
use transtui::report::{write_report, ReportOptions};
use transtui::sequencer::{Operation, Sequencer, StrandKind};
use transtui::ui::glyphs;

/// A `-r/--reverse` request: strand type and 1-based strand number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ReverseRequest {
    kind: StrandKind,
    number: usize,
}

fn parse_reverse_request(s: &str) -> Result<ReverseRequest, String> {
    let (kind, number) = s
        .split_once(':')
        .ok_or_else(|| format!("expected <dna|mrna>:<n>, got '{}'", s))?;
    let kind = kind.parse::<StrandKind>()?;
    let number = number
        .parse::<usize>()
        .map_err(|_| format!("invalid strand number '{}'", number))?;
    Ok(ReverseRequest { kind, number })
}

/// Runs CLI mode: load, transcribe, reverse, then write the report.
fn run_cli_mode(
    file_path: &Path,
    forced_format: Option<FileFormat>,
    output: &str,
    args: &Args,
) -> Result<()> {
    let records = parse_file_with_options(file_path, forced_format)
        .with_context(|| format!("Failed to load {}", file_path.display()))?;
    let mut sequencer = Sequencer::from_records(records);

    for _ in 0..args.transcribe {
        sequencer.transcribe_all();
    }

    for request in &args.reverse {
        let index = sequencer.resolve(request.kind, Some(request.number), Operation::Reverse)?;
        sequencer.reverse(request.kind, index)?;
    }

    let link = glyphs::select(!args.ascii).link;
    let options = ReportOptions {
        codons: args.translate,
        protein: args.protein,
    };

    if output == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_report(&sequencer, link, options, &mut handle)?;
    } else {
        let mut file = BufWriter::new(
            File::create(output).with_context(|| format!("Failed to create {}", output))?,
        );
        write_report(&sequencer, link, options, &mut file)?;
        file.flush()?;
        eprintln!(
            "Wrote {} DNA and {} mRNA strand(s) to {}",
            sequencer.count(StrandKind::Dna),
            sequencer.count(StrandKind::Mrna),
            output
        );
    }

    Ok(())
}

/// Runs the interactive menu on a loaded file.
fn run_tui_mode(file_path: &Path, forced_format: Option<FileFormat>, ascii: bool) -> Result<()> {
    let records = parse_file_with_options(file_path, forced_format)
        .with_context(|| format!("Failed to load {}", file_path.display()))?;
    let sequencer = Sequencer::from_records(records);

    let source_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.display().to_string());

    let state = AppState::new(sequencer, source_name, glyphs::select(!ascii));
    run_app(state)
}

/// File format specification for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// One `name,BASES` strand per line
    Strands,
    /// FASTA format
    Fasta,
    /// Auto-detect from extension and content
    Auto,
}

impl From<FormatArg> for Option<FileFormat> {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Strands => Some(FileFormat::Strands),
            FormatArg::Fasta => Some(FileFormat::Fasta),
            FormatArg::Auto => None,
        }
    }
}

/// transtui - Transcribe DNA strands and translate them into amino acids
///
/// When run without -o/--output, opens an interactive menu.
/// With -o/--output, runs in CLI mode and writes output to file (or stdout with "-").
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Strand file to load (name,BASES lines or FASTA)
    file: PathBuf,

    /// Force a specific file format (overrides auto-detection)
    #[arg(short = 'f', long = "format", value_enum, default_value = "auto")]
    format: FormatArg,

    /// Output file (enables CLI mode). Use "-" for stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Transcribe all DNA strands before writing (repeat to transcribe again)
    #[arg(short = 't', long = "transcribe", action = clap::ArgAction::Count)]
    transcribe: u8,

    /// Reverse a strand before writing, e.g. dna:1 or mrna:2 (repeatable)
    #[arg(short = 'r', long = "reverse", value_parser = parse_reverse_request)]
    reverse: Vec<ReverseRequest>,

    /// Append the codons of every mRNA strand to the output
    #[arg(long = "translate")]
    translate: bool,

    /// Append a one-letter protein record for every mRNA strand
    #[arg(long = "protein")]
    protein: bool,

    /// Use ASCII glyphs instead of arrows and box drawing characters
    #[arg(long = "ascii")]
    ascii: bool,

    /// Write a log file to the temp directory
    #[arg(long = "log")]
    log: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let forced_format: Option<FileFormat> = args.format.into();

    if let Some(output) = args.output.as_deref() {
        init_stderr_logger()?;
        run_cli_mode(&args.file, forced_format, output, &args)?;
        return Ok(());
    }

    if args.reverse.len() + usize::from(args.transcribe) > 0 || args.translate || args.protein {
        anyhow::bail!("-t, -r, --translate and --protein require -o/--output");
    }

    let log_path = if args.log {
        Some(init_file_logger(&std::env::temp_dir())?)
    } else {
        None
    };

    let result = run_tui_mode(&args.file, forced_format, args.ascii);

    if let Some(path) = log_path {
        info!("Log closed");
        eprintln!("Log written to {}", path.display());
    }

    result
}
