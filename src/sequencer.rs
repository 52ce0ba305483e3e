//! The sequencer: DNA strands and the mRNA strands transcribed from them.
//!
//! Both groups are addressed 0-based here and shown 1-based to the user.
//! Each call to [`Sequencer::transcribe_all`] appends a whole new batch of
//! mRNA strands, so transcribing twice leaves duplicates in the mRNA group.

use std::fmt;
use std::str::FromStr;

use log::{debug, info, warn};
use thiserror::Error;

use crate::formats::StrandRecord;
use crate::genetic_code::{GeneticCode, Translation};
use crate::strand::{Strand, Symbols};

/// Characters skipped when loading raw sequence text.
const SKIPPED_ON_LOAD: [char; 2] = [',', '\n'];

/// Frame printed around strand names in the display projection.
const NAME_FRAME: &str = "*********";

/// Which of the two strand groups an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrandKind {
    Dna,
    Mrna,
}

impl StrandKind {
    /// Label used in messages and in the display projection.
    pub fn label(&self) -> &'static str {
        match self {
            StrandKind::Dna => "DNA",
            StrandKind::Mrna => "mRNA",
        }
    }

    fn empty_hint(&self) -> &'static str {
        match self {
            StrandKind::Dna => "load a file first",
            StrandKind::Mrna => "transcribe first",
        }
    }
}

impl fmt::Display for StrandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StrandKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dna" => Ok(StrandKind::Dna),
            "mrna" | "rna" => Ok(StrandKind::Mrna),
            other => Err(format!("unknown strand type '{}' (expected dna or mrna)", other)),
        }
    }
}

/// Operations that need a strand to work on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Reverse,
    Translate,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Reverse => f.write_str("reverse"),
            Operation::Translate => f.write_str("translate"),
        }
    }
}

/// Errors reported by sequencer operations. None of them changes state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequencerError {
    #[error("No {kind} to {operation}; {}", .kind.empty_hint())]
    EmptyGroup { kind: StrandKind, operation: Operation },

    #[error("{kind} {index} does not exist (choose between 1 and {count})")]
    IndexOutOfRange {
        kind: StrandKind,
        index: usize,
        count: usize,
    },

    #[error("Several {kind} strands loaded; choose between 1 and {count}")]
    SelectionRequired { kind: StrandKind, count: usize },
}

/// Result type for sequencer operations.
pub type SequencerResult<T> = Result<T, SequencerError>;

/// Maps a DNA base to the mRNA base it is transcribed into.
pub fn transcribe_base(base: char) -> Option<char> {
    match base {
        'A' => Some('U'),
        'T' => Some('A'),
        'C' => Some('G'),
        'G' => Some('C'),
        _ => None,
    }
}

/// Holds the DNA strands and their transcripts.
#[derive(Debug, Default)]
pub struct Sequencer {
    dna: Vec<Strand>,
    mrna: Vec<Strand>,
    code: GeneticCode,
}

impl Sequencer {
    /// Creates an empty sequencer using the standard genetic code.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequencer and loads `records` into the DNA group.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = StrandRecord>,
    {
        let mut sequencer = Self::new();
        sequencer.load_records(records);
        sequencer
    }

    /// Loads `(name, raw)` pairs as DNA strands, in order.
    ///
    /// Every character of `raw` becomes one symbol, except commas and
    /// newlines. Returns the number of strands added.
    pub fn load<I, N, S>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: AsRef<str>,
    {
        let before = self.dna.len();
        for (name, raw) in pairs {
            let mut strand = Strand::new(name);
            strand.extend(raw.as_ref().chars().filter(|c| !SKIPPED_ON_LOAD.contains(c)));
            debug!("Loaded strand {} ({} symbols)", strand.name(), strand.len());
            self.dna.push(strand);
        }
        let added = self.dna.len() - before;
        info!("{} strand(s) loaded", added);
        added
    }

    /// Loads parsed file records, see [`Sequencer::load`].
    pub fn load_records<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = StrandRecord>,
    {
        self.load(records.into_iter().map(|r| (r.name, r.sequence)))
    }

    /// Transcribes every DNA strand into a new mRNA strand.
    ///
    /// A→U, T→A, C→G, G→C. Symbols outside that map are copied as they are.
    /// Returns the number of DNA strands transcribed.
    pub fn transcribe_all(&mut self) -> usize {
        let batch: Vec<Strand> = self.dna.iter().map(transcribe_strand).collect();
        let count = batch.len();
        self.mrna.extend(batch);
        info!(
            "{} strand(s) of DNA transcribed ({} mRNA strand(s) total)",
            count,
            self.mrna.len()
        );
        count
    }

    /// Lazily translates mRNA strand `index` (0-based) into codons.
    pub fn translate(&self, index: usize) -> SequencerResult<Translation<'_, Symbols<'_>>> {
        let strand = self.checked(StrandKind::Mrna, index, Operation::Translate)?;
        debug!("Translating mRNA {} ({})", index + 1, strand.name());
        Ok(self.code.translate(strand.iter()))
    }

    /// Reverses strand `index` (0-based) of the given group in place.
    pub fn reverse(&mut self, kind: StrandKind, index: usize) -> SequencerResult<()> {
        self.checked(kind, index, Operation::Reverse)?;
        let strand = &mut self.group_mut(kind)[index];
        strand.reverse();
        info!("Reversed {} {} ({})", kind, index + 1, strand.name());
        Ok(())
    }

    /// Turns a user choice (1-based) into a 0-based index.
    ///
    /// Without a choice, a group with a single strand resolves to it and
    /// larger groups report `SelectionRequired`. A given choice must lie in
    /// `1..=count` whatever the group size.
    pub fn resolve(
        &self,
        kind: StrandKind,
        choice: Option<usize>,
        operation: Operation,
    ) -> SequencerResult<usize> {
        let count = self.count(kind);
        match (count, choice) {
            (0, _) => Err(SequencerError::EmptyGroup { kind, operation }),
            (_, Some(n)) if (1..=count).contains(&n) => Ok(n - 1),
            (_, Some(n)) => Err(SequencerError::IndexOutOfRange {
                kind,
                index: n,
                count,
            }),
            (1, None) => Ok(0),
            (_, None) => Err(SequencerError::SelectionRequired { kind, count }),
        }
    }

    /// True when the group has more than one strand to pick from.
    pub fn needs_choice(&self, kind: StrandKind) -> bool {
        self.count(kind) > 1
    }

    /// Number of strands in a group.
    pub fn count(&self, kind: StrandKind) -> usize {
        self.strands(kind).len()
    }

    /// Strands of a group, in insertion order.
    pub fn strands(&self, kind: StrandKind) -> &[Strand] {
        match kind {
            StrandKind::Dna => &self.dna,
            StrandKind::Mrna => &self.mrna,
        }
    }

    /// Gets a strand by 0-based index.
    pub fn get(&self, kind: StrandKind, index: usize) -> Option<&Strand> {
        self.strands(kind).get(index)
    }

    pub fn dna(&self) -> &[Strand] {
        &self.dna
    }

    pub fn mrna(&self) -> &[Strand] {
        &self.mrna
    }

    /// The codon table used by [`Sequencer::translate`].
    pub fn genetic_code(&self) -> &GeneticCode {
        &self.code
    }

    /// Display projection of both groups, one line per entry of the result.
    ///
    /// Each strand contributes its label (`DNA 1`), its name framed by
    /// asterisks and its rendering with `link` between symbols.
    pub fn display_lines(&self, link: &str) -> Vec<DisplayLine> {
        let mut lines = Vec::with_capacity((self.dna.len() + self.mrna.len()) * 3);
        for kind in [StrandKind::Dna, StrandKind::Mrna] {
            for (i, strand) in self.strands(kind).iter().enumerate() {
                lines.push(DisplayLine::Label(format!("{} {}", kind, i + 1)));
                lines.push(DisplayLine::Name(framed_name(strand.name())));
                lines.push(DisplayLine::Strand(strand.render(link)));
            }
        }
        lines
    }

    /// Renders the display projection as text.
    pub fn render(&self, link: &str) -> String {
        let mut out = String::new();
        for line in self.display_lines(link) {
            out.push_str(line.text());
            out.push('\n');
        }
        out
    }

    fn group_mut(&mut self, kind: StrandKind) -> &mut Vec<Strand> {
        match kind {
            StrandKind::Dna => &mut self.dna,
            StrandKind::Mrna => &mut self.mrna,
        }
    }

    fn checked(
        &self,
        kind: StrandKind,
        index: usize,
        operation: Operation,
    ) -> SequencerResult<&Strand> {
        let strands = self.strands(kind);
        if strands.is_empty() {
            return Err(SequencerError::EmptyGroup { kind, operation });
        }
        strands.get(index).ok_or(SequencerError::IndexOutOfRange {
            kind,
            index: index + 1,
            count: strands.len(),
        })
    }
}

impl fmt::Display for Sequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("→"))
    }
}

impl Drop for Sequencer {
    fn drop(&mut self) {
        debug!("Deleting {} DNA strand(s)", self.dna.len());
        debug!("Deleting {} mRNA strand(s)", self.mrna.len());
    }
}

/// One line of the display projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayLine {
    /// `DNA 1`, `mRNA 2`, ...
    Label(String),
    /// Strand name framed by asterisks
    Name(String),
    /// Rendered symbols
    Strand(String),
}

impl DisplayLine {
    pub fn text(&self) -> &str {
        match self {
            DisplayLine::Label(s) | DisplayLine::Name(s) | DisplayLine::Strand(s) => s,
        }
    }
}

/// Frames a strand name with asterisks, as shown above strands and translations.
pub fn framed_name(name: &str) -> String {
    format!("{NAME_FRAME}{name}{NAME_FRAME}")
}

fn transcribe_strand(dna: &Strand) -> Strand {
    let mut mrna = Strand::new(dna.name());
    for (pos, base) in dna.iter().enumerate() {
        let transcribed = transcribe_base(base).unwrap_or_else(|| {
            warn!(
                "Strand {}: symbol {:?} at position {} has no transcription, copied as is",
                dna.name(),
                base,
                pos + 1
            );
            base
        });
        mrna.insert_end(transcribed);
    }
    mrna
}
