//! Upload page component
//!
//! Form for submitting a new patent PDF to the file service. Only the
//! file path goes over the wire; the remaining fields describe the patent
//! for the person filling the form in.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::path::Path;

/// Form fields in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadField {
    Title,
    Abstract,
    Industries,
    AdditionalData,
    AuthorName,
    FilePath,
}

impl UploadField {
    fn all() -> [UploadField; 6] {
        [
            UploadField::Title,
            UploadField::Abstract,
            UploadField::Industries,
            UploadField::AdditionalData,
            UploadField::AuthorName,
            UploadField::FilePath,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            UploadField::Title => "Title",
            UploadField::Abstract => "Abstract",
            UploadField::Industries => "Industries",
            UploadField::AdditionalData => "Additional Data",
            UploadField::AuthorName => "Author Name",
            UploadField::FilePath => "PDF File Path",
        }
    }
}

/// Upload page component
pub struct UploadComponent {
    /// Currently focused field
    pub focus: UploadField,
    /// Field values, indexed in tab order
    pub values: [String; 6],
    /// Validation error to display
    pub error: Option<String>,
    /// Whether an upload request is in flight
    pub uploading: bool,
}

impl Default for UploadComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadComponent {
    pub fn new() -> Self {
        Self {
            focus: UploadField::Title,
            values: Default::default(),
            error: None,
            uploading: false,
        }
    }

    fn focus_index(&self) -> usize {
        UploadField::all()
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0)
    }

    /// Move focus to the next field, wrapping around
    pub fn focus_next(&mut self) {
        let fields = UploadField::all();
        self.focus = fields[(self.focus_index() + 1) % fields.len()];
    }

    /// Move focus to the previous field, wrapping around
    pub fn focus_prev(&mut self) {
        let fields = UploadField::all();
        let idx = self.focus_index();
        self.focus = fields[if idx == 0 { fields.len() - 1 } else { idx - 1 }];
    }

    /// The file path field value
    pub fn file_path(&self) -> &str {
        &self.values[5]
    }

    /// Reset the form after a successful upload
    pub fn clear(&mut self) {
        self.values = Default::default();
        self.focus = UploadField::Title;
        self.error = None;
        self.uploading = false;
    }

    /// Validate the file path field, returning the path to submit
    pub fn validate(&mut self) -> Option<String> {
        self.error = None;
        let raw = self.file_path().trim().to_string();

        if raw.is_empty() {
            self.error = Some("A PDF file path is required".to_string());
            return None;
        }
        let path = Path::new(&raw);
        if !path.exists() {
            self.error = Some(format!("File not found: {}", raw));
            return None;
        }
        if !path.is_file() {
            self.error = Some("Path is not a file".to_string());
            return None;
        }
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if !is_pdf {
            self.error = Some("Only PDF files can be uploaded".to_string());
            return None;
        }

        Some(raw)
    }
}

impl Component for UploadComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.uploading {
            // Only allow leaving the page while the request runs
            return Ok(match key.code {
                KeyCode::Esc => Some(Action::OpenGeneratePage),
                _ => None,
            });
        }

        let action = match key.code {
            KeyCode::Esc => Some(Action::OpenGeneratePage),
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                None
            }
            KeyCode::Enter => self.validate().map(Action::SubmitUpload),
            KeyCode::Backspace => {
                self.values[self.focus_index()].pop();
                self.error = None;
                None
            }
            KeyCode::Char(c) => {
                self.values[self.focus_index()].push(c);
                self.error = None;
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(14),   // Form
                Constraint::Length(2), // Error/status line
                Constraint::Length(3), // Help
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            " Upload Patent ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        self.draw_form(frame, chunks[1]);

        let status_line = if self.uploading {
            Line::from(Span::styled(
                " Uploading... Please wait.",
                Style::default().fg(Color::Yellow),
            ))
        } else if let Some(ref error) = self.error {
            Line::from(Span::styled(
                format!(" Error: {}", error),
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::from("")
        };
        frame.render_widget(Paragraph::new(status_line), chunks[2]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                " Tab ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Next Field  "),
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Upload  "),
            Span::styled(
                " Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Back"),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);

        Ok(())
    }
}

impl UploadComponent {
    fn draw_form(&self, frame: &mut Frame, area: Rect) {
        let fields = UploadField::all();
        let constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (i, field) in fields.iter().enumerate() {
            let focused = *field == self.focus;
            let border_style = if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let cursor = if focused && !self.uploading { "█" } else { "" };
            let content = format!("{}{}", self.values[i], cursor);

            let input = Paragraph::new(content)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!(" {} ", field.label()))
                        .border_style(border_style),
                )
                .wrap(Wrap { trim: false });
            frame.render_widget(input, rows[i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::fs;

    #[test]
    fn test_tab_cycles_fields() {
        let mut upload = UploadComponent::new();
        assert_eq!(upload.focus, UploadField::Title);
        for _ in 0..5 {
            upload.focus_next();
        }
        assert_eq!(upload.focus, UploadField::FilePath);
        upload.focus_next();
        assert_eq!(upload.focus, UploadField::Title);
        upload.focus_prev();
        assert_eq!(upload.focus, UploadField::FilePath);
    }

    #[test]
    fn test_validate_rejects_missing_and_non_pdf_paths() {
        let mut upload = UploadComponent::new();

        assert_eq!(upload.validate(), None);
        assert!(upload.error.as_deref().unwrap().contains("required"));

        upload.values[5] = "/nonexistent/patent.pdf".to_string();
        assert_eq!(upload.validate(), None);
        assert!(upload.error.as_deref().unwrap().contains("not found"));

        let txt_path = std::env::temp_dir().join("upload_validate_test.txt");
        fs::write(&txt_path, b"not a pdf").unwrap();
        upload.values[5] = txt_path.to_string_lossy().to_string();
        assert_eq!(upload.validate(), None);
        assert!(upload.error.as_deref().unwrap().contains("PDF"));
        fs::remove_file(&txt_path).unwrap();
    }

    #[test]
    fn test_validate_accepts_existing_pdf() {
        let pdf_path = std::env::temp_dir().join("upload_validate_test.pdf");
        fs::write(&pdf_path, b"%PDF-1.4").unwrap();

        let mut upload = UploadComponent::new();
        upload.values[5] = pdf_path.to_string_lossy().to_string();
        let validated = upload.validate();
        assert_eq!(validated, Some(pdf_path.to_string_lossy().to_string()));
        assert!(upload.error.is_none());

        fs::remove_file(&pdf_path).unwrap();
    }

    #[test]
    fn test_no_submit_action_for_invalid_path() {
        let mut upload = UploadComponent::new();
        upload.values[5] = "/nonexistent/patent.pdf".to_string();
        let action = upload
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, None);
        assert!(upload.error.is_some());
    }

    #[test]
    fn test_uploading_gate_blocks_edits() {
        let mut upload = UploadComponent::new();
        upload.uploading = true;
        let action = upload
            .handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, None);
        assert!(upload.values[0].is_empty());
    }
}
