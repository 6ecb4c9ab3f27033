//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

pub mod file_manager;
pub mod status_bar;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::merge::WorkingSet;
use crate::services::GeoJsonService;

// Re-export TUI components
pub use file_manager::{FileManager, FileManagerMode, FileManagerState};
pub use status_bar::StatusBar;

/// Top-level application state for the interactive session.
pub struct AppState {
    /// Loaded application configuration.
    pub config: Config,
    /// The ordered working set of ingested files.
    pub working_set: WorkingSet,
    /// File list component state.
    pub file_manager: FileManagerState,
    /// Transient status message shown in the status bar.
    pub status_message: String,
    /// Error message shown in the status bar until the next action.
    pub error_message: Option<String>,
}

impl AppState {
    /// Creates the initial application state.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            working_set: WorkingSet::new(),
            file_manager: FileManagerState::new(),
            status_message: String::new(),
            error_message: None,
        }
    }

    /// Clears transient messages; called before handling a new action.
    fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message = None;
    }
}

/// Initialize the terminal for TUI rendering
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }
    }

    Ok(())
}

/// Render the full frame: title, file list, status bar.
fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    FileManager::render(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(APP_NAME, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" - merge GeoJSON feature collections"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

/// Handle a key press. Returns `Ok(true)` when the user quits.
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match state.file_manager.mode.clone() {
        FileManagerMode::AddingFiles { input } => {
            handle_adding_input(state, key, input);
            Ok(false)
        }
        FileManagerMode::Browsing => handle_browsing_input(state, key),
    }
}

fn handle_browsing_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        KeyCode::Down | KeyCode::Char('j') => {
            state.file_manager.select_next(state.working_set.len());
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.file_manager.select_previous(state.working_set.len());
        }
        KeyCode::Char('J') => move_selected(state, MoveDirection::Down),
        KeyCode::Char('K') => move_selected(state, MoveDirection::Up),
        KeyCode::Char('a') => {
            state.clear_messages();
            state.file_manager.start_adding();
        }
        KeyCode::Char('m') => {
            state.clear_messages();
            merge_and_save(state);
        }
        _ => {}
    }
    Ok(false)
}

/// Direction of a reorder move in the file list.
enum MoveDirection {
    Up,
    Down,
}

/// Moves the selected entry one slot, keeping the selection on it.
fn move_selected(state: &mut AppState, direction: MoveDirection) {
    let selected = state.file_manager.selected;
    let len = state.working_set.len();
    let target = match direction {
        MoveDirection::Up if selected > 0 => selected - 1,
        MoveDirection::Down if selected + 1 < len => selected + 1,
        _ => return,
    };
    state.working_set.reorder(selected, target);
    state.file_manager.selected = target;
}

/// Handles keystrokes while the add-files prompt is open.
fn handle_adding_input(state: &mut AppState, key: event::KeyEvent, mut input: String) {
    match key.code {
        KeyCode::Esc => state.file_manager.cancel(),
        KeyCode::Enter => {
            state.file_manager.cancel();
            state.clear_messages();
            ingest_paths(state, &input);
        }
        KeyCode::Backspace => {
            input.pop();
            state.file_manager.mode = FileManagerMode::AddingFiles { input };
        }
        KeyCode::Char(c) => {
            input.push(c);
            state.file_manager.mode = FileManagerMode::AddingFiles { input };
        }
        _ => {}
    }
}

/// Reads the given whitespace-separated paths and ingests them as one batch.
///
/// All files are read and parsed before the working set is touched; any
/// failure leaves the set exactly as it was.
fn ingest_paths(state: &mut AppState, input: &str) {
    let paths: Vec<PathBuf> = input.split_whitespace().map(PathBuf::from).collect();
    if paths.is_empty() {
        return;
    }

    let mut batch = Vec::with_capacity(paths.len());
    for path in &paths {
        match GeoJsonService::load(path) {
            Ok(file) => batch.push(file),
            Err(e) => {
                state.error_message = Some(e.to_string());
                return;
            }
        }
    }

    match state.working_set.ingest_batch(batch) {
        Ok(added) => {
            state.status_message = format!("Added {added} file(s)");
        }
        Err(e) => state.error_message = Some(e.to_string()),
    }
}

/// Runs the merge over the current working set and writes the artifact.
///
/// Merging an empty set does nothing at all - no artifact, no message.
fn merge_and_save(state: &mut AppState) {
    let table = state.config.key_mapping_table();
    match state.working_set.merge(&table) {
        Ok(None) => {}
        Ok(Some(merged)) => {
            let output_path = PathBuf::from(&state.config.output.file_name);
            match GeoJsonService::save(&merged, &output_path) {
                Ok(()) => {
                    state.status_message = format!(
                        "✓ Merged {} features to: {}",
                        merged.features.len(),
                        output_path.display()
                    );
                }
                Err(e) => state.error_message = Some(e.to_string()),
            }
        }
        Err(e) => state.error_message = Some(e.to_string()),
    }
}
