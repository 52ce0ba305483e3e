//! Application controller.
//!
//! Owns the terminal for the length of an interactive session: it switches
//! to raw mode and the alternate screen, feeds terminal events through
//! [`handle_event`] and [`apply_action`], redraws after every step and
//! restores the terminal when the session ends, including on error.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor,
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::event::{apply_action, handle_event, poll_event, Action};
use crate::model::AppState;
use crate::sequencer::StrandKind;
use crate::ui::{calculate_visible_dimensions, render};

/// Raw mode and alternate screen, undone on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}

/// An interactive session over any ratatui backend.
pub struct App<B: Backend> {
    terminal: Terminal<B>,
    state: AppState,
    /// Event poll timeout
    tick_rate: Duration,
    /// Set only when the session drives the real terminal
    _guard: Option<TerminalGuard>,
}

impl App<CrosstermBackend<Stdout>> {
    /// Takes over stdout for an interactive session.
    pub fn new(state: AppState) -> Result<Self> {
        let guard = TerminalGuard::enter()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        let mut app = Self::with_terminal(terminal, state)?;
        app._guard = Some(guard);
        Ok(app)
    }
}

impl<B: Backend> App<B> {
    /// Wraps an already prepared terminal, sizing the output panel to it.
    pub fn with_terminal(terminal: Terminal<B>, state: AppState) -> Result<Self> {
        let mut app = Self {
            terminal,
            state,
            tick_rate: Duration::from_millis(50),
            _guard: None,
        };
        app.update_viewport_size()?;
        Ok(app)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Renders the current state.
    pub fn draw(&mut self) -> Result<()> {
        let state = &self.state;
        self.terminal.draw(|frame| render(frame, state))?;
        Ok(())
    }

    /// Applies one terminal event. Returns `false` once the user quits.
    pub fn handle(&mut self, event: Event) -> Result<bool> {
        let action = handle_event(event, &self.state.mode, self.state.show_help);

        if let Action::Resize(width, height) = action {
            debug!("Terminal resized to {}x{}", width, height);
            self.update_viewport_size()?;
        }

        Ok(apply_action(&mut self.state, action))
    }

    /// Draws and handles events until the user quits.
    pub fn run(&mut self) -> Result<()> {
        info!(
            "{} Strand(s) loaded from {}",
            self.state.sequencer.count(StrandKind::Dna),
            self.state.source_name
        );

        loop {
            self.draw()?;

            if let Some(event) = poll_event(self.tick_rate) {
                if !self.handle(event)? {
                    break;
                }
            }
        }

        info!(
            "Session on {} ended with {} DNA and {} mRNA strand(s)",
            self.state.source_name,
            self.state.sequencer.count(StrandKind::Dna),
            self.state.sequencer.count(StrandKind::Mrna)
        );
        Ok(())
    }

    /// Updates the output panel size based on terminal dimensions.
    fn update_viewport_size(&mut self) -> Result<()> {
        let size = self.terminal.size()?;
        let (visible_rows, visible_cols) = calculate_visible_dimensions(size.width, size.height);
        self.state.update_viewport_size(visible_rows, visible_cols);
        Ok(())
    }
}

/// Runs the interactive menu until the user exits.
pub fn run_app(state: AppState) -> Result<()> {
    let mut app = App::new(state)?;
    app.run()
}
