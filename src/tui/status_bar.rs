//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, FileManagerMode};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the current message and key hints
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let message_line = if let Some(error) = &state.error_message {
            Line::from(Span::styled(
                error.clone(),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ))
        } else if !state.status_message.is_empty() {
            Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(Color::Green),
            ))
        } else {
            Line::from(Span::raw(""))
        };

        let help_line = Line::from(Span::styled(
            Self::contextual_help(state),
            Style::default().fg(Color::DarkGray),
        ));

        let paragraph = Paragraph::new(vec![message_line, help_line])
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Key hints for the current mode
    fn contextual_help(state: &AppState) -> &'static str {
        match state.file_manager.mode {
            FileManagerMode::Browsing => {
                "j/k: select | J/K: move | a: add files | m: merge | q: quit"
            }
            FileManagerMode::AddingFiles { .. } => "Enter: add batch | Esc: cancel",
        }
    }
}
