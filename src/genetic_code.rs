//! Genetic code and translation logic.
//!
//! This module provides:
//! - The amino acid vocabulary with display names
//! - The standard codon table over mRNA bases (U, C, A, G)
//! - A lazy translation iterator reading non-overlapping triplets

use std::collections::HashMap;
use std::fmt;

use log::debug;

/// NCBI standard code, one amino acid per codon in UUU, UUC, UUA, ... order.
const STANDARD_NCBIEAA: &str = "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// mRNA bases in NCBI table order.
const RNA_BASES: [char; 4] = ['U', 'C', 'A', 'G'];

/// Number of symbols in a codon.
pub const CODON_LEN: usize = 3;

/// The product of translating one codon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    Isoleucine,
    Leucine,
    Valine,
    Phenylalanine,
    Methionine,
    Cysteine,
    Alanine,
    Glycine,
    Proline,
    Threonine,
    Serine,
    Tyrosine,
    Tryptophan,
    Glutamine,
    Asparagine,
    Histidine,
    GlutamicAcid,
    AsparticAcid,
    Lysine,
    Arginine,
    Stop,
    /// Any triplet outside the codon table
    Unknown,
}

impl AminoAcid {
    /// Maps a one-letter code to an amino acid (`*` is stop).
    pub fn from_code(code: char) -> Self {
        match code {
            'I' => AminoAcid::Isoleucine,
            'L' => AminoAcid::Leucine,
            'V' => AminoAcid::Valine,
            'F' => AminoAcid::Phenylalanine,
            'M' => AminoAcid::Methionine,
            'C' => AminoAcid::Cysteine,
            'A' => AminoAcid::Alanine,
            'G' => AminoAcid::Glycine,
            'P' => AminoAcid::Proline,
            'T' => AminoAcid::Threonine,
            'S' => AminoAcid::Serine,
            'Y' => AminoAcid::Tyrosine,
            'W' => AminoAcid::Tryptophan,
            'Q' => AminoAcid::Glutamine,
            'N' => AminoAcid::Asparagine,
            'H' => AminoAcid::Histidine,
            'E' => AminoAcid::GlutamicAcid,
            'D' => AminoAcid::AsparticAcid,
            'K' => AminoAcid::Lysine,
            'R' => AminoAcid::Arginine,
            '*' => AminoAcid::Stop,
            _ => AminoAcid::Unknown,
        }
    }

    /// One-letter code; `*` for stop and `X` for unknown.
    pub fn code(&self) -> char {
        match self {
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Leucine => 'L',
            AminoAcid::Valine => 'V',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Methionine => 'M',
            AminoAcid::Cysteine => 'C',
            AminoAcid::Alanine => 'A',
            AminoAcid::Glycine => 'G',
            AminoAcid::Proline => 'P',
            AminoAcid::Threonine => 'T',
            AminoAcid::Serine => 'S',
            AminoAcid::Tyrosine => 'Y',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::Asparagine => 'N',
            AminoAcid::Histidine => 'H',
            AminoAcid::GlutamicAcid => 'E',
            AminoAcid::AsparticAcid => 'D',
            AminoAcid::Lysine => 'K',
            AminoAcid::Arginine => 'R',
            AminoAcid::Stop => '*',
            AminoAcid::Unknown => 'X',
        }
    }

    /// Display name, e.g. `Glutamic acid` or `Methionine (START)`.
    pub fn name(&self) -> &'static str {
        match self {
            AminoAcid::Isoleucine => "Isoleucine",
            AminoAcid::Leucine => "Leucine",
            AminoAcid::Valine => "Valine",
            AminoAcid::Phenylalanine => "Phenylalanine",
            AminoAcid::Methionine => "Methionine (START)",
            AminoAcid::Cysteine => "Cysteine",
            AminoAcid::Alanine => "Alanine",
            AminoAcid::Glycine => "Glycine",
            AminoAcid::Proline => "Proline",
            AminoAcid::Threonine => "Threonine",
            AminoAcid::Serine => "Serine",
            AminoAcid::Tyrosine => "Tyrosine",
            AminoAcid::Tryptophan => "Tryptophan",
            AminoAcid::Glutamine => "Glutamine",
            AminoAcid::Asparagine => "Asparagine",
            AminoAcid::Histidine => "Histidine",
            AminoAcid::GlutamicAcid => "Glutamic acid",
            AminoAcid::AsparticAcid => "Aspartic acid",
            AminoAcid::Lysine => "Lysine",
            AminoAcid::Arginine => "Arginine",
            AminoAcid::Stop => "Stop",
            AminoAcid::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A codon table translating mRNA triplets to amino acids.
#[derive(Debug, Clone)]
pub struct GeneticCode {
    /// Name of the genetic code
    pub name: String,
    /// Codon to amino acid mapping (64 entries)
    codon_table: HashMap<String, AminoAcid>,
}

impl GeneticCode {
    /// Builds a code table from an NCBI amino acid string.
    ///
    /// # Arguments
    /// * `name` - Name of the genetic code
    /// * `ncbieaa` - 64-character string of one-letter codes (NCBI order)
    fn new(name: &str, ncbieaa: &str) -> Self {
        let mut codon_table = HashMap::with_capacity(64);
        let mut codes = ncbieaa.chars();

        // NCBI order: UUU, UUC, UUA, UUG, UCU, ... (Base1, Base2, Base3)
        for &b1 in &RNA_BASES {
            for &b2 in &RNA_BASES {
                for &b3 in &RNA_BASES {
                    let codon: String = [b1, b2, b3].iter().collect();
                    let aa = codes.next().map(AminoAcid::from_code).unwrap_or(AminoAcid::Unknown);
                    codon_table.insert(codon, aa);
                }
            }
        }

        Self {
            name: name.to_string(),
            codon_table,
        }
    }

    /// The standard genetic code.
    pub fn standard() -> Self {
        Self::new("Standard", STANDARD_NCBIEAA)
    }

    /// Translates a single codon.
    ///
    /// Lookup is exact and case-sensitive: only three uppercase U/C/A/G
    /// symbols are in the table. Everything else is `Unknown`.
    pub fn translate_codon(&self, codon: &str) -> AminoAcid {
        match self.codon_table.get(codon) {
            Some(&aa) => aa,
            None => {
                debug!("Unknown codon {:?}", codon);
                AminoAcid::Unknown
            }
        }
    }

    /// Lazily translates a run of mRNA symbols, three at a time.
    ///
    /// A trailing group of one or two symbols is dropped.
    pub fn translate<I>(&self, symbols: I) -> Translation<'_, I::IntoIter>
    where
        I: IntoIterator<Item = char>,
    {
        Translation {
            code: self,
            symbols: symbols.into_iter(),
        }
    }

    /// Translates a string of mRNA symbols into one-letter codes.
    pub fn translate_sequence(&self, sequence: &str) -> String {
        self.translate(sequence.chars())
            .map(|codon| codon.amino_acid.code())
            .collect()
    }
}

impl Default for GeneticCode {
    fn default() -> Self {
        Self::standard()
    }
}

/// One decoded triplet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codon {
    pub triplet: String,
    pub amino_acid: AminoAcid,
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.triplet, self.amino_acid)
    }
}

/// Iterator over the codons of a symbol run, see [`GeneticCode::translate`].
#[derive(Debug, Clone)]
pub struct Translation<'a, I> {
    code: &'a GeneticCode,
    symbols: I,
}

impl<I: Iterator<Item = char>> Iterator for Translation<'_, I> {
    type Item = Codon;

    fn next(&mut self) -> Option<Codon> {
        let mut triplet = String::with_capacity(CODON_LEN);
        for _ in 0..CODON_LEN {
            triplet.push(self.symbols.next()?);
        }
        let amino_acid = self.code.translate_codon(&triplet);
        Some(Codon { triplet, amino_acid })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.symbols.size_hint();
        (lower / CODON_LEN, upper.map(|n| n / CODON_LEN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(code: &GeneticCode, seq: &str) -> Vec<&'static str> {
        code.translate(seq.chars()).map(|c| c.amino_acid.name()).collect()
    }

    #[test]
    fn test_table_has_64_codons() {
        let code = GeneticCode::standard();
        assert_eq!(code.codon_table.len(), 64);
        assert_eq!(code.name, "Standard");
    }

    #[test]
    fn test_standard_code_translation() {
        let code = GeneticCode::standard();

        assert_eq!(code.translate_codon("AUG"), AminoAcid::Methionine);
        assert_eq!(code.translate_codon("UAA"), AminoAcid::Stop);
        assert_eq!(code.translate_codon("UAG"), AminoAcid::Stop);
        assert_eq!(code.translate_codon("UGA"), AminoAcid::Stop);
        assert_eq!(code.translate_codon("UUU"), AminoAcid::Phenylalanine);
        assert_eq!(code.translate_codon("GGG"), AminoAcid::Glycine);
        assert_eq!(code.translate_codon("AGA"), AminoAcid::Arginine);
        assert_eq!(code.translate_codon("AGU"), AminoAcid::Serine);
        assert_eq!(code.translate_codon("UUA"), AminoAcid::Leucine);
        assert_eq!(code.translate_codon("AUA"), AminoAcid::Isoleucine);
        assert_eq!(code.translate_codon("UGG"), AminoAcid::Tryptophan);
        assert_eq!(code.translate_codon("GAC"), AminoAcid::AsparticAcid);
        assert_eq!(code.translate_codon("GAG"), AminoAcid::GlutamicAcid);
    }

    #[test]
    fn test_unknown_codons() {
        let code = GeneticCode::standard();

        // DNA bases, lowercase, ambiguity codes and wrong lengths are not in the table
        assert_eq!(code.translate_codon("ATG"), AminoAcid::Unknown);
        assert_eq!(code.translate_codon("aug"), AminoAcid::Unknown);
        assert_eq!(code.translate_codon("NNN"), AminoAcid::Unknown);
        assert_eq!(code.translate_codon("AU"), AminoAcid::Unknown);
        assert_eq!(code.translate_codon("AUGC"), AminoAcid::Unknown);
        assert_eq!(AminoAcid::Unknown.name(), "Unknown");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(AminoAcid::Methionine.to_string(), "Methionine (START)");
        assert_eq!(AminoAcid::GlutamicAcid.to_string(), "Glutamic acid");
        assert_eq!(AminoAcid::AsparticAcid.to_string(), "Aspartic acid");
    }

    #[test]
    fn test_translate_start_phe_stop() {
        let code = GeneticCode::standard();
        assert_eq!(
            names(&code, "AUGUUUUAA"),
            vec!["Methionine (START)", "Phenylalanine", "Stop"]
        );
    }

    #[test]
    fn test_translate_drops_trailing_symbols() {
        let code = GeneticCode::standard();
        assert_eq!(names(&code, "AUGUU").len(), 1);
        assert_eq!(names(&code, "AUGUUUG").len(), 2);
        assert!(names(&code, "AU").is_empty());
        assert!(names(&code, "").is_empty());
    }

    #[test]
    fn test_translation_size_hint() {
        let code = GeneticCode::standard();
        let translation = code.translate("AUGUUUUAAG".chars().collect::<Vec<_>>());
        assert_eq!(translation.size_hint(), (3, Some(3)));
    }

    #[test]
    fn test_codon_display() {
        let code = GeneticCode::standard();
        let first = code.translate("AUG".chars()).next().unwrap();
        assert_eq!(first.to_string(), "AUG -> Methionine (START)");
    }

    #[test]
    fn test_translate_sequence() {
        let code = GeneticCode::standard();
        assert_eq!(code.translate_sequence("AUGUUUUAG"), "MF*");
        assert_eq!(code.translate_sequence("AUGNNNUAG"), "MX*");
    }
}
