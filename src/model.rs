//! Application state for the interactive sequencer.
//!
//! This module contains:
//! - The main menu entries
//! - The prompt modes (strand type, strand number)
//! - The output log shown in the right panel
//! - The state transitions triggered by user actions
//!
//! Everything here is terminal-free so it can be driven from tests.

use crate::genetic_code::Codon;
use crate::sequencer::{
    framed_name, DisplayLine, Operation, Sequencer, SequencerError, StrandKind,
};
use crate::ui::glyphs::Glyphs;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    DisplayStrands,
    ReverseStrand,
    Transcribe,
    Translate,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::DisplayStrands,
        MenuItem::ReverseStrand,
        MenuItem::Transcribe,
        MenuItem::Translate,
        MenuItem::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::DisplayStrands => "Display Strands",
            MenuItem::ReverseStrand => "Reverse Strand",
            MenuItem::Transcribe => "Transcribe DNA to mRNA",
            MenuItem::Translate => "Translate mRNA to Amino Acids",
            MenuItem::Exit => "Exit",
        }
    }

    /// 1-based number shown in front of the label.
    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|item| item == self).map_or(0, |i| i + 1)
    }

    pub fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Application mode for handling different input states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Main menu
    #[default]
    Menu,
    /// Asking which group to reverse
    ChooseKind,
    /// Asking for a 1-based strand number
    ChooseStrand {
        kind: StrandKind,
        operation: Operation,
        input: String,
    },
}

/// How an output line is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Info,
    Label,
    Name,
    Strand,
    Codon,
    Error,
    Separator,
}

/// One line of the output panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub kind: OutputKind,
    pub text: String,
}

impl OutputLine {
    pub fn new(kind: OutputKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(OutputKind::Info, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(OutputKind::Error, text)
    }

    pub fn separator() -> Self {
        Self::new(OutputKind::Separator, String::new())
    }
}

impl From<DisplayLine> for OutputLine {
    fn from(line: DisplayLine) -> Self {
        match line {
            DisplayLine::Label(s) => Self::new(OutputKind::Label, s),
            DisplayLine::Name(s) => Self::new(OutputKind::Name, s),
            DisplayLine::Strand(s) => Self::new(OutputKind::Strand, s),
        }
    }
}

impl From<Codon> for OutputLine {
    fn from(codon: Codon) -> Self {
        Self::new(OutputKind::Codon, codon.to_string())
    }
}

/// Wraps `text` to `width` columns; strands have no spaces and are cut anywhere.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() || width == 0 {
        return vec![text.to_string()];
    }
    let options =
        textwrap::Options::new(width).word_splitter(textwrap::WordSplitter::NoHyphenation);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Oldest output lines are dropped past this many.
pub const MAX_OUTPUT_LINES: usize = 5_000;

/// The wrapped output rows that fit in the output panel.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputWindow {
    /// Visible rows, oldest first
    pub rows: Vec<(OutputKind, String)>,
    /// Whether older rows exist above the window
    pub more_above: bool,
    /// Rows below the window that were scrolled back over
    pub below: usize,
}

/// The complete application state.
#[derive(Debug)]
pub struct AppState {
    /// The strands being worked on
    pub sequencer: Sequencer,
    /// Name of the file the strands came from
    pub source_name: String,
    pub glyphs: Glyphs,
    /// Current application mode
    pub mode: AppMode,
    /// Highlighted menu entry (0-based)
    pub menu_cursor: usize,
    /// Printed lines, oldest first, at most `MAX_OUTPUT_LINES`
    pub output: Vec<OutputLine>,
    /// Rows scrolled back from the newest output
    pub scroll_back: usize,
    /// Visible output rows
    pub page_size: usize,
    /// Visible output columns
    pub output_width: usize,
    /// Prompt or warning shown in the status bar
    pub status_message: Option<String>,
    pub show_help: bool,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state for a freshly loaded sequencer.
    pub fn new(sequencer: Sequencer, source_name: impl Into<String>, glyphs: Glyphs) -> Self {
        let loaded = sequencer.count(StrandKind::Dna);
        Self {
            sequencer,
            source_name: source_name.into(),
            glyphs,
            mode: AppMode::Menu,
            menu_cursor: 0,
            output: vec![OutputLine::info(format!("{} Strand(s) loaded", loaded))],
            scroll_back: 0,
            page_size: 0,
            output_width: 0,
            status_message: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Updates the output panel size based on terminal dimensions.
    pub fn update_viewport_size(&mut self, rows: usize, cols: usize) {
        self.page_size = rows;
        self.output_width = cols;
        self.scroll_back = self.scroll_back.min(self.max_scroll_back());
    }

    /// The highlighted menu entry.
    pub fn selected_item(&self) -> MenuItem {
        MenuItem::ALL[self.menu_cursor.min(MenuItem::ALL.len() - 1)]
    }

    pub fn menu_up(&mut self) {
        self.menu_cursor = self.menu_cursor.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        if self.menu_cursor + 1 < MenuItem::ALL.len() {
            self.menu_cursor += 1;
        }
    }

    /// Runs the highlighted menu entry.
    pub fn confirm_menu(&mut self) {
        self.select_menu_item(self.selected_item());
    }

    /// Highlights and runs a menu entry.
    pub fn select_menu_item(&mut self, item: MenuItem) {
        self.menu_cursor = item.number() - 1;
        self.status_message = None;

        match item {
            MenuItem::DisplayStrands => self.display_strands(),
            MenuItem::ReverseStrand => self.begin_reverse(),
            MenuItem::Transcribe => self.transcribe(),
            MenuItem::Translate => self.begin_operation(StrandKind::Mrna, Operation::Translate),
            MenuItem::Exit => self.should_quit = true,
        }
    }

    /// Appends the display projection of both groups.
    pub fn display_strands(&mut self) {
        self.start_block();
        let lines = self.sequencer.display_lines(self.glyphs.link);
        if lines.is_empty() {
            self.push(OutputLine::info("No strands loaded"));
        }
        self.append(lines.into_iter().map(OutputLine::from));
    }

    /// Transcribes every DNA strand into a new mRNA strand.
    pub fn transcribe(&mut self) {
        self.start_block();
        let count = self.sequencer.transcribe_all();
        self.push(OutputLine::info(format!(
            "{} strand(s) of DNA successfully transcribed into new mRNA strands",
            count
        )));
    }

    /// Asks which group to reverse.
    pub fn begin_reverse(&mut self) {
        self.mode = AppMode::ChooseKind;
        self.status_message = Some("Which type of strand to reverse? 1. DNA  2. mRNA".to_string());
    }

    /// Answers the strand type prompt.
    pub fn choose_kind(&mut self, kind: StrandKind) {
        self.mode = AppMode::Menu;
        self.status_message = None;
        self.begin_operation(kind, Operation::Reverse);
    }

    /// Starts an operation on a group, prompting for a strand when needed.
    pub fn begin_operation(&mut self, kind: StrandKind, operation: Operation) {
        if self.sequencer.needs_choice(kind) {
            self.mode = AppMode::ChooseStrand {
                kind,
                operation,
                input: String::new(),
            };
            self.status_message = Some(choice_prompt(kind, self.sequencer.count(kind)));
            return;
        }

        match self.sequencer.resolve(kind, None, operation) {
            Ok(index) => self.perform(kind, operation, index),
            Err(e) => {
                self.start_block();
                self.push(OutputLine::error(e.to_string()));
            }
        }
    }

    /// Handles a digit typed at the strand number prompt.
    pub fn strand_input(&mut self, c: char) {
        if let AppMode::ChooseStrand { ref mut input, .. } = self.mode {
            if c.is_ascii_digit() && input.len() < 9 {
                input.push(c);
            }
        }
    }

    /// Handles backspace at the strand number prompt.
    pub fn strand_backspace(&mut self) {
        if let AppMode::ChooseStrand { ref mut input, .. } = self.mode {
            input.pop();
        }
    }

    /// Submits the strand number; out-of-range numbers ask again.
    pub fn confirm_strand(&mut self) {
        let AppMode::ChooseStrand { kind, operation, ref input } = self.mode else {
            return;
        };
        let choice = input.parse::<usize>().ok();

        match choice.map(|n| self.sequencer.resolve(kind, Some(n), operation)) {
            Some(Ok(index)) => {
                self.mode = AppMode::Menu;
                self.status_message = None;
                self.perform(kind, operation, index);
            }
            Some(Err(SequencerError::EmptyGroup { .. })) => self.cancel(),
            _ => {
                let count = self.sequencer.count(kind);
                self.mode = AppMode::ChooseStrand {
                    kind,
                    operation,
                    input: String::new(),
                };
                let prompt = choice_prompt(kind, count);
                self.status_message = Some(format!("Invalid choice. {}", prompt));
            }
        }
    }

    /// Leaves any prompt and returns to the menu.
    pub fn cancel(&mut self) {
        self.mode = AppMode::Menu;
        self.status_message = None;
    }

    fn perform(&mut self, kind: StrandKind, operation: Operation, index: usize) {
        self.start_block();
        match operation {
            Operation::Reverse => match self.sequencer.reverse(kind, index) {
                Ok(()) => self.push(OutputLine::info(format!(
                    "Done reversing {} {}'s strand.",
                    kind,
                    index + 1
                ))),
                Err(e) => self.push(OutputLine::error(e.to_string())),
            },
            Operation::Translate => self.translate(index),
        }
    }

    fn translate(&mut self, index: usize) {
        let name = match self.sequencer.get(StrandKind::Mrna, index) {
            Some(strand) => framed_name(strand.name()),
            None => String::new(),
        };

        match self.sequencer.translate(index) {
            Ok(codons) => {
                let mut lines = vec![OutputLine::new(OutputKind::Name, name)];
                lines.extend(codons.map(OutputLine::from));
                lines.push(OutputLine::info(format!(
                    "Done translating mRNA {}'s strand.",
                    index + 1
                )));
                self.append(lines);
            }
            Err(e) => self.push(OutputLine::error(e.to_string())),
        }
    }

    pub fn show_help(&mut self) {
        self.show_help = true;
    }

    pub fn dismiss_help(&mut self) {
        self.show_help = false;
    }

    /// Number of output rows once wrapped to the panel width.
    pub fn wrapped_rows(&self) -> usize {
        self.output
            .iter()
            .map(|line| self.wrap_line(line, self.output_width).len())
            .sum()
    }

    /// Rows shown in a `height` x `width` panel after scrolling back.
    ///
    /// Only the lines reaching into the window are wrapped, newest first.
    pub fn output_window(&self, height: usize, width: usize) -> OutputWindow {
        let wanted = self.scroll_back + height;
        let mut rows: Vec<(OutputKind, String)> = Vec::with_capacity(wanted);
        let mut lines = self.output.iter().rev();

        for line in lines.by_ref() {
            let wrapped = self.wrap_line(line, width);
            rows.extend(wrapped.into_iter().rev().map(|row| (line.kind, row)));
            if rows.len() >= wanted {
                break;
            }
        }

        let more_above = rows.len() > wanted || lines.next().is_some();
        let below = self.scroll_back.min(rows.len());
        rows.reverse();

        let end = rows.len() - below;
        let start = end.saturating_sub(height);
        rows.truncate(end);
        rows.drain(..start);

        OutputWindow {
            rows,
            more_above,
            below,
        }
    }

    fn wrap_line(&self, line: &OutputLine, width: usize) -> Vec<String> {
        if line.kind == OutputKind::Separator {
            vec![self.glyphs.h_separator.repeat(width)]
        } else {
            wrap_text(&line.text, width)
        }
    }

    fn max_scroll_back(&self) -> usize {
        self.wrapped_rows().saturating_sub(self.page_size)
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_back = (self.scroll_back + rows).min(self.max_scroll_back());
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(rows);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page_size.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page_size.max(1));
    }

    pub fn half_page_up(&mut self) {
        self.scroll_up((self.page_size / 2).max(1));
    }

    pub fn half_page_down(&mut self) {
        self.scroll_down((self.page_size / 2).max(1));
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_back = 0;
    }

    /// Separates the output of consecutive menu actions.
    fn start_block(&mut self) {
        if !self.output.is_empty() {
            self.push(OutputLine::separator());
        }
    }

    fn push(&mut self, line: OutputLine) {
        self.append(std::iter::once(line));
    }

    /// Adds lines at the bottom, dropping the oldest past the cap.
    fn append(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        self.output.extend(lines);
        if self.output.len() > MAX_OUTPUT_LINES {
            let excess = self.output.len() - MAX_OUTPUT_LINES;
            self.output.drain(..excess);
        }
        self.scroll_to_bottom();
    }
}

fn choice_prompt(kind: StrandKind, count: usize) -> String {
    format!("Which {} strand would you like to work with? Choose between 1 - {}", kind, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(records: &[(&str, &str)]) -> AppState {
        let mut sequencer = Sequencer::new();
        sequencer.load(records.iter().copied());
        AppState::new(sequencer, "test.txt", Glyphs::default())
    }

    fn texts(state: &AppState) -> Vec<&str> {
        state.output.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn test_menu_numbers() {
        assert_eq!(MenuItem::DisplayStrands.number(), 1);
        assert_eq!(MenuItem::Exit.number(), 5);
        assert_eq!(MenuItem::from_number(3), Some(MenuItem::Transcribe));
        assert_eq!(MenuItem::from_number(0), None);
        assert_eq!(MenuItem::from_number(6), None);
    }

    #[test]
    fn test_initial_state() {
        let state = state_with(&[("seq1", "ATG"), ("seq2", "CCC")]);
        assert_eq!(texts(&state), vec!["2 Strand(s) loaded"]);
        assert_eq!(state.mode, AppMode::Menu);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_menu_navigation() {
        let mut state = state_with(&[("seq1", "ATG")]);
        state.menu_up();
        assert_eq!(state.selected_item(), MenuItem::DisplayStrands);
        for _ in 0..10 {
            state.menu_down();
        }
        assert_eq!(state.selected_item(), MenuItem::Exit);
        state.confirm_menu();
        assert!(state.should_quit);
    }

    #[test]
    fn test_display_strands() {
        let mut state = state_with(&[("seq1", "ATG")]);
        state.select_menu_item(MenuItem::DisplayStrands);
        let out = texts(&state);
        assert!(out.contains(&"DNA 1"));
        assert!(out.contains(&"*********seq1*********"));
        assert!(out.contains(&"A→T→G→END"));
        assert_eq!(state.output.last().map(|l| l.kind), Some(OutputKind::Strand));
    }

    #[test]
    fn test_transcribe_reports_count() {
        let mut state = state_with(&[("seq1", "ATG"), ("seq2", "CCC")]);
        state.select_menu_item(MenuItem::Transcribe);
        assert_eq!(
            state.output.last().unwrap().text,
            "2 strand(s) of DNA successfully transcribed into new mRNA strands"
        );
        assert_eq!(state.sequencer.count(StrandKind::Mrna), 2);
    }

    #[test]
    fn test_reverse_mrna_before_transcription() {
        let mut state = state_with(&[("seq1", "ATG")]);
        state.select_menu_item(MenuItem::ReverseStrand);
        assert_eq!(state.mode, AppMode::ChooseKind);

        state.choose_kind(StrandKind::Mrna);
        assert_eq!(state.mode, AppMode::Menu);
        let last = state.output.last().unwrap();
        assert_eq!(last.kind, OutputKind::Error);
        assert_eq!(last.text, "No mRNA to reverse; transcribe first");
        assert_eq!(state.sequencer.count(StrandKind::Mrna), 0);
        assert_eq!(state.sequencer.dna()[0].to_symbol_string(), "ATG");
    }

    #[test]
    fn test_reverse_single_strand_is_automatic() {
        let mut state = state_with(&[("seq1", "ATG")]);
        state.select_menu_item(MenuItem::ReverseStrand);
        state.choose_kind(StrandKind::Dna);

        assert_eq!(state.mode, AppMode::Menu);
        assert_eq!(state.output.last().unwrap().text, "Done reversing DNA 1's strand.");
        assert_eq!(state.sequencer.dna()[0].to_symbol_string(), "GTA");
    }

    #[test]
    fn test_reverse_with_choice_reasks_on_bad_input() {
        let mut state = state_with(&[("seq1", "ATG"), ("seq2", "CCA")]);
        state.select_menu_item(MenuItem::ReverseStrand);
        state.choose_kind(StrandKind::Dna);
        assert!(matches!(state.mode, AppMode::ChooseStrand { kind: StrandKind::Dna, .. }));

        state.strand_input('7');
        state.confirm_strand();
        assert!(matches!(state.mode, AppMode::ChooseStrand { ref input, .. } if input.is_empty()));
        assert!(state.status_message.as_deref().unwrap().starts_with("Invalid choice."));

        state.strand_input('x');
        state.strand_input('2');
        state.confirm_strand();
        assert_eq!(state.mode, AppMode::Menu);
        assert_eq!(state.sequencer.dna()[1].to_symbol_string(), "ACC");
        assert_eq!(state.sequencer.dna()[0].to_symbol_string(), "ATG");
    }

    #[test]
    fn test_translate_flow() {
        let mut state = state_with(&[("seq1", "TACAAAATT")]);
        state.select_menu_item(MenuItem::Translate);
        assert_eq!(state.output.last().unwrap().text, "No mRNA to translate; transcribe first");

        state.select_menu_item(MenuItem::Transcribe);
        state.select_menu_item(MenuItem::Translate);
        let out = texts(&state);
        let tail = &out[out.len() - 5..];
        assert_eq!(
            tail,
            &[
                "*********seq1*********",
                "AUG -> Methionine (START)",
                "UUU -> Phenylalanine",
                "UAA -> Stop",
                "Done translating mRNA 1's strand.",
            ]
        );
    }

    #[test]
    fn test_translate_prompts_after_two_transcriptions() {
        let mut state = state_with(&[("seq1", "TACAAAATT")]);
        state.transcribe();
        state.transcribe();
        state.select_menu_item(MenuItem::Translate);
        assert!(matches!(
            state.mode,
            AppMode::ChooseStrand {
                kind: StrandKind::Mrna,
                operation: Operation::Translate,
                ..
            }
        ));

        state.cancel();
        assert_eq!(state.mode, AppMode::Menu);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_strand_backspace() {
        let mut state = state_with(&[("seq1", "ATG"), ("seq2", "CCA")]);
        state.begin_operation(StrandKind::Dna, Operation::Reverse);
        state.strand_input('1');
        state.strand_input('2');
        state.strand_backspace();
        assert!(matches!(state.mode, AppMode::ChooseStrand { ref input, .. } if input == "1"));
    }

    #[test]
    fn test_scrolling_is_clamped() {
        let mut state = state_with(&[("seq1", "ATG")]);
        for _ in 0..20 {
            state.display_strands();
        }
        state.update_viewport_size(10, 40);
        let max = state.wrapped_rows() - 10;

        state.page_up();
        assert_eq!(state.scroll_back, 10);
        state.scroll_up(1000);
        assert_eq!(state.scroll_back, max);
        state.half_page_down();
        assert_eq!(state.scroll_back, max - 5);
        state.scroll_to_bottom();
        assert_eq!(state.scroll_back, 0);
        state.page_down();
        assert_eq!(state.scroll_back, 0);
    }

    #[test]
    fn test_output_window() {
        let mut state = state_with(&[("seq1", "ATG")]);
        state.display_strands();
        state.update_viewport_size(3, 40);

        let window = state.output_window(3, 40);
        let rows: Vec<&str> = window.rows.iter().map(|(_, row)| row.as_str()).collect();
        assert_eq!(rows, vec!["DNA 1", "*********seq1*********", "A→T→G→END"]);
        assert!(window.more_above);
        assert_eq!(window.below, 0);

        state.scroll_up(2);
        let window = state.output_window(3, 40);
        assert_eq!(window.rows[0], (OutputKind::Info, "1 Strand(s) loaded".to_string()));
        assert_eq!(window.rows[1], (OutputKind::Separator, "─".repeat(40)));
        assert_eq!(window.rows.len(), 3);
        assert!(!window.more_above);
        assert_eq!(window.below, 2);
    }

    #[test]
    fn test_output_history_is_capped() {
        let mut state = state_with(&[("seq1", "ATG")]);
        for _ in 0..1300 {
            state.display_strands();
        }
        assert_eq!(state.output.len(), MAX_OUTPUT_LINES);
        assert_ne!(state.output[0].text, "1 Strand(s) loaded");
        assert_eq!(state.output.last().unwrap().text, "A→T→G→END");
        assert_eq!(state.scroll_back, 0);
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("ATGCATGCAT", 4), vec!["ATGC", "ATGC", "AT"]);
        assert_eq!(wrap_text("Done reversing DNA 1", 14), vec!["Done reversing", "DNA 1"]);
        assert_eq!(wrap_text("short", 40), vec!["short"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }
}
