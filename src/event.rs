//! Keyboard event handling.
//!
//! Menu mode:
//! - `1`..`5`: run a menu entry directly
//! - `j`/`k` or arrows: move in the menu, `Enter` runs the highlighted entry
//! - `PageUp`/`PageDown`, `Ctrl-U`/`Ctrl-D`: scroll the output
//! - `End`: jump back to the newest output
//! - `?`: show help
//! - `q` or `Ctrl-C`: quit
//!
//! Prompts:
//! - strand type: `1` for DNA, `2` for mRNA
//! - strand number: digits, `Backspace`, `Enter`
//! - `Esc` cancels either prompt

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::model::{AppMode, AppState, MenuItem};
use crate::sequencer::StrandKind;

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Quit the application
    Quit,
    MenuUp,
    MenuDown,
    /// Run the highlighted menu entry
    MenuConfirm,
    /// Run a menu entry by number
    MenuSelect(MenuItem),
    /// Answer the strand type prompt
    ChooseKind(StrandKind),
    /// Add a digit to the strand number
    StrandDigit(char),
    StrandBackspace,
    /// Submit the strand number
    StrandConfirm,
    /// Leave the current prompt
    Cancel,
    /// Resize event (terminal resized)
    Resize(u16, u16),
    ShowHelp,
    /// Dismiss the help overlay
    DismissHelp,
    /// Scroll output half a page back (Ctrl+U)
    HalfPageUp,
    /// Scroll output half a page forward (Ctrl+D)
    HalfPageDown,
    PageUp,
    PageDown,
    /// Jump to the newest output (End)
    ScrollToBottom,
}

/// Polls for keyboard events with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action based on current app mode.
pub fn handle_event(event: Event, mode: &AppMode, show_help: bool) -> Action {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, mode, show_help),
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

/// Handles a key event based on the current application mode.
fn handle_key_event(key: KeyEvent, mode: &AppMode, show_help: bool) -> Action {
    // If help is shown, any key dismisses it
    if show_help {
        return Action::DismissHelp;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('u') => Action::HalfPageUp,
            KeyCode::Char('d') => Action::HalfPageDown,
            _ => Action::None,
        };
    }

    if let Some(action) = scroll_action(key.code) {
        return action;
    }

    match mode {
        AppMode::Menu => handle_menu_mode(key),
        AppMode::ChooseKind => handle_choose_kind_mode(key),
        AppMode::ChooseStrand { .. } => handle_choose_strand_mode(key),
    }
}

/// Output scrolling works in every mode.
fn scroll_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::End => Some(Action::ScrollToBottom),
        _ => None,
    }
}

/// Handles key events on the main menu.
fn handle_menu_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|n| MenuItem::from_number(n as usize))
            .map_or(Action::None, Action::MenuSelect),

        KeyCode::Char('j') | KeyCode::Down => Action::MenuDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MenuUp,
        KeyCode::Enter => Action::MenuConfirm,

        KeyCode::Char('?') => Action::ShowHelp,
        KeyCode::Char('q') => Action::Quit,

        _ => Action::None,
    }
}

/// Handles key events at the strand type prompt.
fn handle_choose_kind_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('1') => Action::ChooseKind(StrandKind::Dna),
        KeyCode::Char('2') => Action::ChooseKind(StrandKind::Mrna),
        KeyCode::Esc => Action::Cancel,
        _ => Action::None,
    }
}

/// Handles key events at the strand number prompt.
fn handle_choose_strand_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => Action::StrandDigit(c),
        KeyCode::Backspace => Action::StrandBackspace,
        KeyCode::Enter => Action::StrandConfirm,
        KeyCode::Esc => Action::Cancel,
        _ => Action::None,
    }
}

/// Applies an action to the application state.
///
/// Returns `true` if the application should continue, `false` if it should quit.
pub fn apply_action(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::None => {}
        Action::Quit => {
            state.should_quit = true;
        }
        Action::MenuUp => {
            state.menu_up();
        }
        Action::MenuDown => {
            state.menu_down();
        }
        Action::MenuConfirm => {
            state.confirm_menu();
        }
        Action::MenuSelect(item) => {
            state.select_menu_item(item);
        }
        Action::ChooseKind(kind) => {
            state.choose_kind(kind);
        }
        Action::StrandDigit(c) => {
            state.strand_input(c);
        }
        Action::StrandBackspace => {
            state.strand_backspace();
        }
        Action::StrandConfirm => {
            state.confirm_strand();
        }
        Action::Cancel => {
            state.cancel();
        }
        Action::Resize(_, _) => {
            // Resize is handled in the main loop with actual terminal dimensions
        }
        Action::ShowHelp => {
            state.show_help();
        }
        Action::DismissHelp => {
            state.dismiss_help();
        }
        Action::HalfPageUp => {
            state.half_page_up();
        }
        Action::HalfPageDown => {
            state.half_page_down();
        }
        Action::PageUp => {
            state.page_up();
        }
        Action::PageDown => {
            state.page_down();
        }
        Action::ScrollToBottom => {
            state.scroll_to_bottom();
        }
    }

    !state.should_quit
}
