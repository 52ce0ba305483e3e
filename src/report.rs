//! Plain-text output for CLI mode.

use std::io::{self, Write};

use crate::sequencer::{framed_name, Sequencer, SequencerResult, StrandKind};

/// What to append after the display projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// One `CODON -> Amino acid` line per triplet of every mRNA strand
    pub codons: bool,
    /// A FASTA record of one-letter codes per mRNA strand
    pub protein: bool,
}

/// Writes the display projection, then the sections selected by `options`.
pub fn write_report<W: Write>(
    sequencer: &Sequencer,
    link: &str,
    options: ReportOptions,
    out: &mut W,
) -> io::Result<()> {
    out.write_all(sequencer.render(link).as_bytes())?;

    let mrna_count = sequencer.count(StrandKind::Mrna);

    if options.codons {
        for index in 0..mrna_count {
            for line in translation_lines(sequencer, index).map_err(io::Error::other)? {
                writeln!(out, "{}", line)?;
            }
        }
    }

    if options.protein {
        for index in 0..mrna_count {
            let (header, protein) = protein_record(sequencer, index).map_err(io::Error::other)?;
            writeln!(out, ">{}", header)?;
            writeln!(out, "{}", protein)?;
        }
    }

    Ok(())
}

/// The framed strand name followed by one line per codon.
pub fn translation_lines(sequencer: &Sequencer, index: usize) -> SequencerResult<Vec<String>> {
    let codons = sequencer.translate(index)?;
    let name = sequencer
        .get(StrandKind::Mrna, index)
        .map(|strand| framed_name(strand.name()))
        .unwrap_or_default();

    Ok(std::iter::once(name)
        .chain(codons.map(|codon| codon.to_string()))
        .collect())
}

/// FASTA header and one-letter translation of mRNA strand `index`.
pub fn protein_record(sequencer: &Sequencer, index: usize) -> SequencerResult<(String, String)> {
    // Validates the index the same way codon output does
    sequencer.translate(index)?;
    let code = sequencer.genetic_code();
    let (name, symbols) = sequencer
        .get(StrandKind::Mrna, index)
        .map(|strand| (strand.name().to_string(), strand.to_symbol_string()))
        .unwrap_or_default();

    Ok((
        format!("{} protein ({} code)", name, code.name),
        code.translate_sequence(&symbols),
    ))
}
