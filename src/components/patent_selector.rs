//! Patent selector dialog component
//!
//! Lists the patents fetched from the file service; Enter selects one for
//! generation requests.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Patent selection dialog
pub struct PatentSelectorDialog {
    pub selected_index: usize,
    pub patents: Vec<String>,
    /// Patent selected before the dialog was opened (if any)
    pub current_patent: Option<String>,
    pub list_state: ListState,
}

impl Default for PatentSelectorDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl PatentSelectorDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            patents: Vec::new(),
            current_patent: None,
            list_state,
        }
    }

    /// Populate the dialog, preselecting the currently selected patent
    pub fn set_patents(&mut self, patents: &[String], current: Option<&str>) {
        self.patents = patents.to_vec();
        self.current_patent = current.map(|p| p.to_string());

        self.selected_index = current
            .and_then(|c| self.patents.iter().position(|p| p == c))
            .unwrap_or(0);

        if self.patents.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// Get the currently highlighted patent name
    pub fn get_selected_patent(&self) -> Option<&str> {
        self.patents.get(self.selected_index).map(|p| p.as_str())
    }

    fn select_next(&mut self) {
        if self.patents.is_empty() {
            return;
        }
        if self.selected_index < self.patents.len().saturating_sub(1) {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.patents.is_empty() {
            return;
        }
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for PatentSelectorDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('p') => Some(Action::CloseModal),
            KeyCode::Enter if !self.patents.is_empty() => Some(Action::ConfirmModal),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(Action::ModalDown)
            }
            KeyCode::Char('r') => Some(Action::RefreshPatents),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_width = 60u16.min(area.width.saturating_sub(4));
        let popup_height = 20u16.min(area.height.saturating_sub(4));

        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        // Main layout: list + help
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(popup_area);

        if self.patents.is_empty() {
            let message = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No patents available",
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Upload a patent first (press 'u' on the main screen)",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(ratatui::layout::Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Choose Your Patent ")
                    .title_style(
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
            );
            frame.render_widget(message, main_chunks[0]);
        } else {
            let items: Vec<ListItem> = self
                .patents
                .iter()
                .map(|patent| {
                    let is_current = self.current_patent.as_deref() == Some(patent.as_str());
                    let prefix = if is_current { "● " } else { "  " };

                    ListItem::new(Line::from(vec![
                        Span::styled(
                            prefix,
                            Style::default().fg(if is_current {
                                Color::Green
                            } else {
                                Color::DarkGray
                            }),
                        ),
                        Span::raw(patent.as_str()),
                    ]))
                })
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Choose Your Patent ")
                        .title_style(
                            Style::default()
                                .fg(Color::Magenta)
                                .add_modifier(Modifier::BOLD),
                        )
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .highlight_style(
                    Style::default()
                        .bg(Color::Blue)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");

            frame.render_stateful_widget(list, main_chunks[0], &mut self.list_state);
        }

        // Help bar
        let help_text = if self.patents.is_empty() {
            vec![
                Span::styled(" r ", Style::default().fg(Color::Cyan)),
                Span::raw("Refresh  "),
                Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
                Span::raw("Close"),
            ]
        } else {
            vec![
                Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
                Span::raw("Select  "),
                Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
                Span::raw("Navigate  "),
                Span::styled(" r ", Style::default().fg(Color::Cyan)),
                Span::raw("Refresh  "),
                Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
                Span::raw("Cancel"),
            ]
        };

        let help = Paragraph::new(Line::from(help_text))
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, main_chunks[1]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patents() -> Vec<String> {
        vec![
            "alpha.pdf".to_string(),
            "beta.pdf".to_string(),
            "gamma.pdf".to_string(),
        ]
    }

    #[test]
    fn test_set_patents_preselects_current() {
        let mut dialog = PatentSelectorDialog::new();
        dialog.set_patents(&patents(), Some("beta.pdf"));
        assert_eq!(dialog.selected_index, 1);
        assert_eq!(dialog.get_selected_patent(), Some("beta.pdf"));
    }

    #[test]
    fn test_set_patents_unknown_current_defaults_to_first() {
        let mut dialog = PatentSelectorDialog::new();
        dialog.set_patents(&patents(), Some("missing.pdf"));
        assert_eq!(dialog.selected_index, 0);
    }

    #[test]
    fn test_navigation_clamps_at_bounds() {
        let mut dialog = PatentSelectorDialog::new();
        dialog.set_patents(&patents(), None);

        dialog.select_prev();
        assert_eq!(dialog.selected_index, 0);

        dialog.select_next();
        dialog.select_next();
        dialog.select_next();
        assert_eq!(dialog.selected_index, 2);
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let mut dialog = PatentSelectorDialog::new();
        dialog.set_patents(&[], None);
        assert!(dialog.get_selected_patent().is_none());
    }
}
