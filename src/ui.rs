//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - Menu panel on the left
//! - Scrollable output panel with colored nucleotides
//! - Status bar with the current prompt and strand counts
//! - Help overlay

pub mod glyphs;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::{AppMode, AppState, MenuItem, OutputKind};
use crate::sequencer::StrandKind;

/// Width reserved for the menu (including border and padding).
const MENU_PANEL_WIDTH: u16 = 36;
/// Minimum width for the output panel.
const MIN_OUTPUT_PANEL_WIDTH: u16 = 10;
/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;

const HELP_LINES: &[&str] = &[
    "1-5 / Enter    run a menu entry",
    "j k / Up Down  move in the menu",
    "PgUp PgDn      scroll output by a page",
    "Ctrl-U Ctrl-D  scroll output by half a page",
    "End            jump to the newest output",
    "Esc            cancel a prompt",
    "q / Ctrl-C     quit",
    "",
    "Press any key to close",
];

/// Color scheme for nucleotides.
pub trait ColorScheme {
    fn get_color(&self, c: char) -> Color;
}

/// DNA and mRNA nucleotide colors.
pub struct NucleotideColorScheme;

impl ColorScheme for NucleotideColorScheme {
    fn get_color(&self, c: char) -> Color {
        match c.to_ascii_uppercase() {
            'A' => Color::Red,
            'C' => Color::Green,
            'G' => Color::Yellow,
            'T' => Color::Blue,
            'U' => Color::Magenta,
            _ => Color::DarkGray,
        }
    }
}

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Main layout: content area + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let content_area = main_layout[0];
    let status_area = main_layout[1];

    // Split content area: menu (left) + output (right)
    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(MENU_PANEL_WIDTH),
            Constraint::Min(MIN_OUTPUT_PANEL_WIDTH),
        ])
        .split(content_area);

    let menu_area = content_layout[0];
    let output_area = content_layout[1];

    let visible_rows = (output_area.height.saturating_sub(2)) as usize; // -2 for borders
    let visible_cols = (output_area.width.saturating_sub(2)) as usize;

    render_menu_panel(frame, state, menu_area);
    render_output_panel(frame, state, output_area, visible_rows, visible_cols);
    render_status_bar(frame, state, status_area);

    if state.show_help {
        render_help(frame, area);
    }
}

/// Renders the menu with the highlighted entry.
fn render_menu_panel(frame: &mut Frame, state: &AppState, area: Rect) {
    let selected = state.selected_item();
    let prompting = state.mode != AppMode::Menu;
    let blank_cursor = " ".repeat(state.glyphs.cursor.chars().count());

    let mut lines: Vec<Line> = MenuItem::ALL
        .iter()
        .map(|item| {
            let is_current = *item == selected;
            let cursor = if is_current { state.glyphs.cursor } else { blank_cursor.as_str() };
            let text = format!("{} {}. {}", cursor, item.number(), item.label());

            let style = match (is_current, prompting) {
                (true, false) => Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
                (true, true) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                (false, _) => Style::default().fg(Color::White),
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    lines.push(Line::default());
    for kind in [StrandKind::Dna, StrandKind::Mrna] {
        lines.push(Line::from(Span::styled(
            format!("{} strands: {}", kind, state.sequencer.count(kind)),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "? help  q quit",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(state.source_name.as_str());

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Renders the newest output, minus whatever has been scrolled back.
fn render_output_panel(
    frame: &mut Frame,
    state: &AppState,
    area: Rect,
    visible_rows: usize,
    visible_cols: usize,
) {
    let color_scheme = NucleotideColorScheme;
    let window = state.output_window(visible_rows, visible_cols);

    let lines: Vec<Line> = window
        .rows
        .iter()
        .map(|(kind, text)| styled_row(*kind, text, &color_scheme))
        .collect();

    let mut title = String::from("Output");
    if window.more_above {
        title.push_str(&format!(" {}", state.glyphs.arrow_up));
    }
    if window.below > 0 {
        title.push_str(&format!(" {} {} more", state.glyphs.arrow_down, window.below));
    }

    let block = Block::default().borders(Borders::ALL).title(title);

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn styled_row<'a>(kind: OutputKind, text: &'a str, color_scheme: &dyn ColorScheme) -> Line<'a> {
    match kind {
        OutputKind::Strand => Line::from(
            text.chars()
                .map(|c| {
                    Span::styled(c.to_string(), Style::default().fg(color_scheme.get_color(c)))
                })
                .collect::<Vec<_>>(),
        ),
        OutputKind::Codon => {
            let split = text.char_indices().nth(3).map_or(text.len(), |(i, _)| i);
            let (triplet, rest) = text.split_at(split);
            let mut spans: Vec<Span> = triplet
                .chars()
                .map(|c| {
                    Span::styled(
                        c.to_string(),
                        Style::default()
                            .fg(color_scheme.get_color(c))
                            .add_modifier(Modifier::BOLD),
                    )
                })
                .collect();
            spans.push(Span::raw(rest));
            Line::from(spans)
        }
        OutputKind::Label => Line::from(Span::styled(
            text,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        OutputKind::Name => Line::from(Span::styled(text, Style::default().fg(Color::White))),
        OutputKind::Error => Line::from(Span::styled(text, Style::default().fg(Color::Red))),
        OutputKind::Separator => {
            Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
        }
        OutputKind::Info => Line::from(Span::styled(text, Style::default().fg(Color::Green))),
    }
}

/// Renders the status bar at the bottom.
fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let message = state.status_message.as_deref().unwrap_or("");

    let (mode_str, prompt) = match &state.mode {
        AppMode::Menu => ("MENU", message.to_string()),
        AppMode::ChooseKind => ("REVERSE", message.to_string()),
        AppMode::ChooseStrand { input, .. } => ("SELECT", format!("{} > {}", message, input)),
    };

    let counts_info = format!(
        "DNA {} | mRNA {} ",
        state.sequencer.count(StrandKind::Dna),
        state.sequencer.count(StrandKind::Mrna)
    );

    let left_content = format!(" {} | {} ", mode_str, prompt);

    let left_len = left_content.chars().count();
    let status_line = Line::from(vec![
        Span::styled(
            left_content,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::styled(
            " ".repeat((area.width as usize).saturating_sub(left_len + counts_info.len())),
            Style::default().bg(Color::Cyan),
        ),
        Span::styled(
            counts_info,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph = Paragraph::new(status_line);
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let width = HELP_LINES.iter().map(|l| l.len()).max().unwrap_or(0) as u16 + 4;
    let height = HELP_LINES.len() as u16 + 2;
    let popup = centered_rect(width, height, area);

    let lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::from(*l)).collect();
    let block = Block::default().borders(Borders::ALL).title("Help");

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Calculates the visible dimensions for the output panel.
pub fn calculate_visible_dimensions(terminal_width: u16, terminal_height: u16) -> (usize, usize) {
    // Account for borders and status bar
    let visible_cols = (terminal_width.saturating_sub(MENU_PANEL_WIDTH + 2)) as usize;
    let visible_rows = (terminal_height.saturating_sub(STATUS_BAR_HEIGHT + 2)) as usize;
    (visible_rows, visible_cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::Sequencer;
    use crate::ui::glyphs::Glyphs;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(state: &AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for row in buffer.content.chunks(width as usize) {
            for cell in row {
                text.push_str(cell.symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_nucleotide_colors() {
        let scheme = NucleotideColorScheme;
        assert_eq!(scheme.get_color('A'), Color::Red);
        assert_eq!(scheme.get_color('a'), Color::Red); // Case insensitive
        assert_eq!(scheme.get_color('C'), Color::Green);
        assert_eq!(scheme.get_color('G'), Color::Yellow);
        assert_eq!(scheme.get_color('T'), Color::Blue);
        assert_eq!(scheme.get_color('U'), Color::Magenta);
        assert_eq!(scheme.get_color('→'), Color::DarkGray);
        assert_eq!(scheme.get_color('N'), Color::DarkGray);
    }

    #[test]
    fn test_visible_dimensions() {
        let (rows, cols) = calculate_visible_dimensions(100, 50);
        // 100 - 36 (menu panel) - 2 (borders) = 62 cols
        // 50 - 1 (status) - 2 (borders) = 47 rows
        assert_eq!(cols, 62);
        assert_eq!(rows, 47);
    }

    #[test]
    fn test_centered_rect_is_clipped() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(50, 50, area), area);
    }

    #[test]
    fn test_render_menu_and_output() {
        let mut sequencer = Sequencer::new();
        sequencer.load([("seq1", "ATG")]);
        let mut state = AppState::new(sequencer, "data.txt", Glyphs::default());
        state.display_strands();

        let screen = screen_text(&state, 100, 20);
        assert!(screen.contains("data.txt"));
        assert!(screen.contains("1. Display Strands"));
        assert!(screen.contains("5. Exit"));
        assert!(screen.contains("1 Strand(s) loaded"));
        assert!(screen.contains("A→T→G→END"));
        assert!(screen.contains("DNA 1 | mRNA 0"));
    }

    #[test]
    fn test_render_prompt_and_help() {
        let mut sequencer = Sequencer::new();
        sequencer.load([("seq1", "ATG"), ("seq2", "CCC")]);
        let mut state = AppState::new(sequencer, "data.txt", glyphs::select(false));
        state.begin_reverse();

        let screen = screen_text(&state, 100, 20);
        assert!(screen.contains("REVERSE"));
        assert!(screen.contains("1. DNA  2. mRNA"));

        state.show_help();
        let screen = screen_text(&state, 100, 20);
        assert!(screen.contains("Press any key to close"));
    }
}
