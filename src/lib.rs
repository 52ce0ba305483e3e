//! # transtui - DNA transcription and translation
//!
//! Loads named DNA strands, transcribes them into mRNA and translates mRNA
//! codons into amino acids, either from an interactive terminal menu or in
//! a one-shot CLI mode.
//!
//! ## Architecture
//!
//! - `strand`: symbol chain with in-place reversal
//! - `genetic_code`: codon table and lazy codon translation
//! - `sequencer`: DNA and mRNA groups and the operations on them
//! - `formats`: strand file and FASTA readers
//! - `model`: menu state and output log
//! - `event`: keyboard event handling
//! - `ui`: TUI rendering with ratatui
//! - `controller`: terminal setup and the main loop
//! - `report`: plain-text output for CLI mode
//! - `logging`: env_logger setup

pub mod controller;
pub mod event;
pub mod formats;
pub mod genetic_code;
pub mod logging;
pub mod model;
pub mod report;
pub mod sequencer;
pub mod strand;
pub mod ui;
