//! File list component: browse, reorder, and add GeoJSON files.
//!
//! The list shows the working set in merge order. Entries are keyed by the
//! documents' synthetic ids, so duplicate file names cannot confuse a move.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::AppState;

/// Component mode - determines what operation is being performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileManagerMode {
    /// Browsing the file list (default mode)
    Browsing,
    /// Entering paths of files to add as one batch
    AddingFiles {
        /// User input: whitespace-separated file paths
        input: String,
    },
}

/// State for the file list component
#[derive(Debug, Clone)]
pub struct FileManagerState {
    /// Currently selected list index
    pub selected: usize,
    /// Current operation mode
    pub mode: FileManagerMode,
}

impl FileManagerState {
    /// Create a new file manager state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: 0,
            mode: FileManagerMode::Browsing,
        }
    }

    /// Move selection up, wrapping at the top
    pub fn select_previous(&mut self, file_count: usize) {
        if file_count > 0 {
            if self.selected > 0 {
                self.selected -= 1;
            } else {
                self.selected = file_count - 1;
            }
        }
    }

    /// Move selection down, wrapping at the bottom
    pub fn select_next(&mut self, file_count: usize) {
        if file_count > 0 {
            self.selected = (self.selected + 1) % file_count;
        }
    }

    /// Open the add-files prompt
    pub fn start_adding(&mut self) {
        self.mode = FileManagerMode::AddingFiles {
            input: String::new(),
        };
    }

    /// Return to browsing mode
    pub fn cancel(&mut self) {
        self.mode = FileManagerMode::Browsing;
    }
}

impl Default for FileManagerState {
    fn default() -> Self {
        Self::new()
    }
}

/// File list widget
pub struct FileManager;

impl FileManager {
    /// Render the file list and, when open, the add-files prompt
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = state
            .working_set
            .documents()
            .iter()
            .enumerate()
            .map(|(index, document)| {
                let marker = if index == state.file_manager.selected {
                    ">> "
                } else {
                    "   "
                };
                let category = document
                    .category
                    .map_or("-".to_string(), |category| category.to_string());

                let line = Line::from(vec![
                    Span::raw(marker),
                    Span::styled(
                        document.name.clone(),
                        if index == state.file_manager.selected {
                            Style::default().add_modifier(Modifier::BOLD)
                        } else {
                            Style::default()
                        },
                    ),
                    Span::styled(
                        format!("  [{category}]"),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(
                        format!("  {} features", document.content.features.len()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Files (merge order) "),
        );
        f.render_widget(list, area);

        if state.working_set.is_empty() {
            let hint = Paragraph::new("No files yet - press 'a' to add GeoJSON files")
                .style(Style::default().fg(Color::DarkGray));
            let inner = Rect {
                x: area.x + 4,
                y: area.y + 2,
                width: area.width.saturating_sub(8),
                height: 1,
            };
            f.render_widget(hint, inner);
        }

        if let FileManagerMode::AddingFiles { input } = &state.file_manager.mode {
            Self::render_add_prompt(f, area, input);
        }
    }

    /// Render the add-files input popup
    fn render_add_prompt(f: &mut Frame, area: Rect, input: &str) {
        let popup = popup_area(area, 70, 3);
        f.render_widget(Clear, popup);

        let prompt = Paragraph::new(Line::from(vec![
            Span::raw("> "),
            Span::raw(input),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Add files (paths separated by spaces, Enter to confirm, Esc to cancel) "),
        );
        f.render_widget(prompt, popup);
    }
}

/// Centered popup rect with a percentage width and fixed height.
fn popup_area(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps_both_ways() {
        let mut state = FileManagerState::new();
        state.select_previous(3);
        assert_eq!(state.selected, 2);
        state.select_next(3);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_selection_ignores_empty_list() {
        let mut state = FileManagerState::new();
        state.select_next(0);
        state.select_previous(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_add_prompt_opens_and_cancels() {
        let mut state = FileManagerState::new();
        state.start_adding();
        assert_eq!(
            state.mode,
            FileManagerMode::AddingFiles {
                input: String::new()
            }
        );
        state.cancel();
        assert_eq!(state.mode, FileManagerMode::Browsing);
    }
}
