//! Main TUI application state machine.
//!
//! Handles:
//! - Tab navigation
//! - Input event handling
//! - Scoring on form submission
//!
//! Session state (scan counter, generated sample history) lives here
//! explicitly and is passed to the render functions; there is no global
//! mutable state.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::application::{sample_history, AssessmentService};
use crate::Result;

use super::ui::{
    about::{render_about, AboutState},
    analysis::{render_analysis, AnalysisState, MeasurementFormState, ScanResult},
    history::{render_history, HistoryState},
    render_disclaimer, render_tab_bar,
};

/// Number of records in a generated sample history.
const SAMPLE_HISTORY_LEN: usize = 10;

/// Current tab in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Analysis,
    History,
    About,
}

impl Tab {
    /// Index into the tab bar.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Analysis => 0,
            Self::History => 1,
            Self::About => 2,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Analysis => Self::History,
            Self::History => Self::About,
            Self::About => Self::Analysis,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Analysis => Self::About,
            Self::History => Self::Analysis,
            Self::About => Self::History,
        }
    }
}

/// Main application state
pub struct App {
    /// Current tab
    tab: Tab,

    /// Whether the app should quit
    should_quit: bool,

    /// Assessment service
    service: AssessmentService,

    /// Analysis tab state (form + last result)
    analysis_state: AnalysisState,

    /// History tab state
    history_state: HistoryState,

    /// About tab state
    about_state: AboutState,

    /// Scans completed in this session (request-scoped, never persisted)
    scans_this_session: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tab: Tab::Analysis,
            should_quit: false,
            service: AssessmentService::new(),
            analysis_state: AnalysisState::default(),
            history_state: HistoryState::default(),
            about_state: AboutState::default(),
            scans_this_session: 0,
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main loop
        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            // Draw current tab
            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3),
                        Constraint::Min(0),
                        Constraint::Length(3),
                    ])
                    .split(area);

                render_tab_bar(f, chunks[0], self.tab.index());

                match self.tab {
                    Tab::Analysis => render_analysis(
                        f,
                        chunks[1],
                        &self.analysis_state,
                        self.scans_this_session,
                    ),
                    Tab::History => render_history(f, chunks[1], &self.history_state),
                    Tab::About => render_about(f, chunks[1], &self.about_state),
                }

                render_disclaimer(f, chunks[2]);
            })?;

            // Handle input (short poll to stay responsive)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Global tab switching
        match key {
            KeyCode::Left => {
                self.tab = self.tab.prev();
                return;
            }
            KeyCode::Right => {
                self.tab = self.tab.next();
                return;
            }
            _ => {}
        }

        match self.tab {
            Tab::Analysis => self.handle_analysis_key(key),
            Tab::History => self.handle_history_key(key),
            Tab::About => self.handle_about_key(key),
        }
    }

    fn handle_analysis_key(&mut self, key: KeyCode) {
        if self.analysis_state.result.is_some() {
            match key {
                KeyCode::Esc => {
                    // Back to the form with values intact.
                    self.analysis_state.result = None;
                }
                KeyCode::Char('n') | KeyCode::Char('N') => {
                    self.analysis_state.form = MeasurementFormState::default();
                    self.analysis_state.result = None;
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Up => {
                self.analysis_state.form.prev_field();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.analysis_state.form.next_field();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.analysis_state.form.load_sample_data();
            }
            KeyCode::Char(c) => {
                self.analysis_state.form.input_char(c);
            }
            KeyCode::Backspace => {
                self.analysis_state.form.delete_char();
            }
            KeyCode::Delete => {
                self.analysis_state.form.clear_field();
            }
            KeyCode::Enter => {
                self.submit_measurement();
            }
            _ => {}
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('g') | KeyCode::Char('G') => {
                self.history_state.entries = Some(sample_history(SAMPLE_HISTORY_LEN));
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_about_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => {
                self.about_state.scroll_up();
            }
            KeyCode::Down => {
                self.about_state.scroll_down();
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn submit_measurement(&mut self) {
        let measurement = match self.analysis_state.form.to_measurement() {
            Ok(m) => m,
            Err(e) => {
                self.analysis_state.form.error_message = Some(e);
                return;
            }
        };

        match self.service.assess(&measurement) {
            Ok(assessment) => {
                self.scans_this_session += 1;
                self.analysis_state.result = Some(ScanResult {
                    measurement,
                    assessment,
                });
            }
            Err(e) => {
                self.analysis_state.form.error_message = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RiskCategory;

    #[test]
    fn test_tab_cycling() {
        assert_eq!(Tab::Analysis.next(), Tab::History);
        assert_eq!(Tab::About.next(), Tab::Analysis);
        assert_eq!(Tab::Analysis.prev(), Tab::About);
        assert_eq!(Tab::History.index(), 1);
    }

    #[test]
    fn test_submit_with_sample_data() {
        let mut app = App::new();
        app.analysis_state.form.load_sample_data();
        app.submit_measurement();

        let result = app.analysis_state.result.expect("Should produce a result");
        assert_eq!(result.assessment.category, RiskCategory::Lower);
        assert_eq!(app.scans_this_session, 1);
    }

    #[test]
    fn test_submit_empty_form_sets_error() {
        let mut app = App::new();
        app.submit_measurement();

        assert!(app.analysis_state.result.is_none());
        assert!(app.analysis_state.form.error_message.is_some());
        assert_eq!(app.scans_this_session, 0);
    }

    #[test]
    fn test_generate_history_key() {
        let mut app = App::new();
        assert!(app.history_state.entries.is_none());

        app.tab = Tab::History;
        app.handle_key(KeyCode::Char('g'), KeyModifiers::NONE);

        let entries = app.history_state.entries.as_ref().expect("Should generate");
        assert_eq!(entries.len(), SAMPLE_HISTORY_LEN);
    }
}
