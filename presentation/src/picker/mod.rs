//! Fuzzy concept picker
//!
//! Full-screen ratatui selector implementing [`ConceptPicker`]. The list is
//! filtered as the player types, the highlighted concept is previewed as
//! `Word: {concept}` and the round status is shown as the header.

pub mod keys;
pub mod state;
pub mod widget;

pub use keys::KeyHandler;
pub use state::{PickerAction, PickerOutcome, PickerState, fuzzy_match};
pub use widget::PickerWidget;

use async_trait::async_trait;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::debug;
use wordcraft_application::{ConceptPicker, PickerError};
use wordcraft_domain::{Concept, Vocabulary};

/// Interactive single-select picker on the controlling terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct FuzzyPicker;

impl FuzzyPicker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConceptPicker for FuzzyPicker {
    async fn pick(&self, vocabulary: &Vocabulary, header: &str) -> Result<Concept, PickerError> {
        if vocabulary.is_empty() {
            return Err(PickerError::EmptyVocabulary);
        }

        let items: Vec<String> = vocabulary.iter().map(|c| c.to_string()).collect();
        let header = header.to_string();

        // crossterm's blocking reader must stay off the async workers
        let index = tokio::task::spawn_blocking(move || run_picker(items, header))
            .await
            .map_err(|e| PickerError::Terminal(format!("picker task failed: {}", e)))??;

        debug!("Picked index {}", index);
        vocabulary
            .get(index)
            .cloned()
            .ok_or_else(|| PickerError::Terminal(format!("selection {} out of range", index)))
    }
}

fn terminal_error(e: io::Error) -> PickerError {
    PickerError::Terminal(e.to_string())
}

/// Raw mode + alternate screen for the lifetime of one pick
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn run_picker(items: Vec<String>, header: String) -> Result<usize, PickerError> {
    let mut session = TerminalSession::enter().map_err(terminal_error)?;
    let mut state = PickerState::new(items, header);

    loop {
        session
            .terminal
            .draw(|frame| frame.render_widget(PickerWidget::new(&state), frame.area()))
            .map_err(terminal_error)?;

        if let Event::Key(key) = event::read().map_err(terminal_error)?
            && key.kind == KeyEventKind::Press
        {
            match state.apply(KeyHandler::handle(key)) {
                PickerOutcome::Selected(index) => return Ok(index),
                PickerOutcome::Cancelled => return Err(PickerError::Cancelled),
                PickerOutcome::Pending => {}
            }
        }
    }
}
