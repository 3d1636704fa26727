//! Setup wizard component
//!
//! Interactive setup for first-time configuration of patent-tui.

use crate::action::Action;
use crate::component::Component;
use crate::config::Config;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Setup wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    Welcome,
    FileServiceUrl,
    ProcessServiceUrl,
    DownloadDir,
    Confirm,
}

impl SetupStep {
    fn next(&self) -> Option<SetupStep> {
        match self {
            SetupStep::Welcome => Some(SetupStep::FileServiceUrl),
            SetupStep::FileServiceUrl => Some(SetupStep::ProcessServiceUrl),
            SetupStep::ProcessServiceUrl => Some(SetupStep::DownloadDir),
            SetupStep::DownloadDir => Some(SetupStep::Confirm),
            SetupStep::Confirm => None,
        }
    }

    fn prev(&self) -> Option<SetupStep> {
        match self {
            SetupStep::Welcome => None,
            SetupStep::FileServiceUrl => Some(SetupStep::Welcome),
            SetupStep::ProcessServiceUrl => Some(SetupStep::FileServiceUrl),
            SetupStep::DownloadDir => Some(SetupStep::ProcessServiceUrl),
            SetupStep::Confirm => Some(SetupStep::DownloadDir),
        }
    }

    fn title(&self) -> &str {
        match self {
            SetupStep::Welcome => "Welcome",
            SetupStep::FileServiceUrl => "File Service",
            SetupStep::ProcessServiceUrl => "Process Service",
            SetupStep::DownloadDir => "Download Directory",
            SetupStep::Confirm => "Confirm",
        }
    }

    fn step_number(&self) -> usize {
        match self {
            SetupStep::Welcome => 1,
            SetupStep::FileServiceUrl => 2,
            SetupStep::ProcessServiceUrl => 3,
            SetupStep::DownloadDir => 4,
            SetupStep::Confirm => 5,
        }
    }
}

/// Setup wizard component
pub struct SetupComponent {
    /// Current step
    pub step: SetupStep,
    /// Config being built
    pub config: Config,
    /// Current input text
    pub input: String,
    /// Error message to display
    pub error: Option<String>,
    /// Whether setup is complete
    pub complete: bool,
}

impl Default for SetupComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupComponent {
    pub fn new() -> Self {
        Self {
            step: SetupStep::Welcome,
            config: Config::default(),
            input: String::new(),
            error: None,
            complete: false,
        }
    }

    /// Get the saved config if setup completed successfully
    pub fn get_config(&self) -> Option<&Config> {
        if self.complete {
            Some(&self.config)
        } else {
            None
        }
    }

    fn validate_url(input: &str) -> Result<String, String> {
        let trimmed = input.trim().trim_end_matches('/').to_string();
        if trimmed.is_empty() {
            return Err("URL is required".to_string());
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err("URL must start with http:// or https://".to_string());
        }
        Ok(trimmed)
    }

    fn validate_current_step(&mut self) -> bool {
        self.error = None;

        match self.step {
            SetupStep::Welcome => true,
            SetupStep::FileServiceUrl => match Self::validate_url(&self.input) {
                Ok(url) => {
                    self.config.file_service_url = url;
                    true
                }
                Err(e) => {
                    self.error = Some(e);
                    false
                }
            },
            SetupStep::ProcessServiceUrl => match Self::validate_url(&self.input) {
                Ok(url) => {
                    self.config.process_service_url = url;
                    true
                }
                Err(e) => {
                    self.error = Some(e);
                    false
                }
            },
            SetupStep::DownloadDir => {
                let trimmed = self.input.trim();
                if !trimmed.is_empty() {
                    let path = std::path::Path::new(trimmed);
                    if path.exists() && !path.is_dir() {
                        self.error = Some("Path exists but is not a directory".to_string());
                        return false;
                    }
                }
                self.config.download_dir = trimmed.to_string();
                true
            }
            SetupStep::Confirm => true,
        }
    }

    fn advance_step(&mut self) {
        if self.validate_current_step() {
            if let Some(next) = self.step.next() {
                self.step = next;
                // Pre-populate input for next step
                self.input = match self.step {
                    SetupStep::FileServiceUrl => self.config.file_service_url.clone(),
                    SetupStep::ProcessServiceUrl => self.config.process_service_url.clone(),
                    SetupStep::DownloadDir => self.config.download_dir.clone(),
                    _ => String::new(),
                };
            } else {
                self.save_config();
            }
        }
    }

    fn go_back(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
            self.error = None;
            // Restore input for previous step
            self.input = match self.step {
                SetupStep::FileServiceUrl => self.config.file_service_url.clone(),
                SetupStep::ProcessServiceUrl => self.config.process_service_url.clone(),
                SetupStep::DownloadDir => self.config.download_dir.clone(),
                _ => String::new(),
            };
        }
    }

    fn save_config(&mut self) {
        match self.config.save() {
            Ok(()) => {
                self.complete = true;
            }
            Err(e) => {
                self.error = Some(format!("Failed to save config: {}", e));
            }
        }
    }
}

impl Component for SetupComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.step {
            SetupStep::Welcome => match key.code {
                KeyCode::Enter => {
                    self.advance_step();
                    Ok(None)
                }
                KeyCode::Esc => Ok(Some(Action::ForceQuit)),
                _ => Ok(None),
            },
            SetupStep::FileServiceUrl | SetupStep::ProcessServiceUrl | SetupStep::DownloadDir => {
                match key.code {
                    KeyCode::Enter => {
                        self.advance_step();
                        Ok(None)
                    }
                    KeyCode::Esc => {
                        self.go_back();
                        Ok(None)
                    }
                    KeyCode::Backspace => {
                        self.input.pop();
                        self.error = None;
                        Ok(None)
                    }
                    KeyCode::Char(c) => {
                        self.input.push(c);
                        self.error = None;
                        Ok(None)
                    }
                    _ => Ok(None),
                }
            }
            SetupStep::Confirm => match key.code {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.save_config();
                    if self.complete {
                        Ok(Some(Action::SetupConfirm))
                    } else {
                        Ok(None)
                    }
                }
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Backspace => {
                    self.go_back();
                    Ok(None)
                }
                _ => Ok(None),
            },
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);
        let background = Block::default().style(Style::default().bg(Color::Reset));
        frame.render_widget(background, area);

        let margin = 4;
        let content_area = Rect::new(
            margin,
            margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(2), // Progress
                Constraint::Min(10),   // Content
                Constraint::Length(3), // Help
            ])
            .split(content_area);

        let title = Paragraph::new(Line::from(vec![Span::styled(
            " patent-tui Setup ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let progress = format!(
            "Step {} of 5: {}",
            self.step.step_number(),
            self.step.title()
        );
        let progress_widget = Paragraph::new(Line::from(vec![Span::styled(
            progress,
            Style::default().fg(Color::DarkGray),
        )]));
        frame.render_widget(progress_widget, chunks[1]);

        self.draw_step_content(frame, chunks[2]);

        let help_text = match self.step {
            SetupStep::Welcome => " Enter  Continue   Esc  Quit",
            SetupStep::FileServiceUrl | SetupStep::ProcessServiceUrl | SetupStep::DownloadDir => {
                " Enter  Continue   Esc  Back   Type to edit"
            }
            SetupStep::Confirm => " Enter/y  Save & Continue   Esc/n  Go Back",
        };
        let help = Paragraph::new(Line::from(vec![Span::styled(
            help_text,
            Style::default().fg(Color::DarkGray),
        )]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);

        Ok(())
    }
}

impl SetupComponent {
    fn draw_step_content(&self, frame: &mut Frame, area: Rect) {
        match self.step {
            SetupStep::Welcome => self.draw_welcome(frame, area),
            SetupStep::FileServiceUrl => self.draw_input_step(
                frame,
                area,
                " File Service URL ",
                "Enter the base URL of the file service:",
                "(The service hosting /uploads and /upload, e.g. http://localhost:5001)",
            ),
            SetupStep::ProcessServiceUrl => self.draw_input_step(
                frame,
                area,
                " Process Service URL ",
                "Enter the base URL of the process service:",
                "(The service hosting /process, e.g. http://localhost:5000)",
            ),
            SetupStep::DownloadDir => self.draw_input_step(
                frame,
                area,
                " Download Directory ",
                "Enter the directory for downloaded results:",
                "(Leave empty to save into the current directory)",
            ),
            SetupStep::Confirm => self.draw_confirm(frame, area),
        }
    }

    fn draw_welcome(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Welcome to patent-tui!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("This wizard will help you connect to your patent services."),
            Line::from(""),
            Line::from("You will need to provide:"),
            Line::from(vec![Span::styled(
                "  1. The file service URL (uploads and patent listing)",
                Style::default().fg(Color::Cyan),
            )]),
            Line::from(vec![Span::styled(
                "  2. The process service URL (document generation)",
                Style::default().fg(Color::Cyan),
            )]),
            Line::from(vec![Span::styled(
                "  3. A directory for downloaded results",
                Style::default().fg(Color::Cyan),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press Enter to begin...",
                Style::default().fg(Color::Yellow),
            )]),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Welcome ")
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_input_step(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        prompt: &str,
        hint: &str,
    ) {
        let mut lines = vec![
            Line::from(""),
            Line::from(prompt.to_string()),
            Line::from(Span::styled(
                hint.to_string(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{}_", &self.input),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        if let Some(ref error) = self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![Span::styled(
                format!("Error: {}", error),
                Style::default().fg(Color::Red),
            )]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_confirm(&self, frame: &mut Frame, area: Rect) {
        let config_dir = Config::config_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "~/.patent-tui".to_string());

        let download_dir = if self.config.download_dir.is_empty() {
            "(current directory)".to_string()
        } else {
            self.config.download_dir.clone()
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Review your configuration:",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("File Service:    ", Style::default().fg(Color::Cyan)),
                Span::raw(&self.config.file_service_url),
            ]),
            Line::from(vec![
                Span::styled("Process Service: ", Style::default().fg(Color::Cyan)),
                Span::raw(&self.config.process_service_url),
            ]),
            Line::from(vec![
                Span::styled("Downloads:       ", Style::default().fg(Color::Cyan)),
                Span::raw(download_dir),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "Config will be saved to: ",
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!("{}/config.json", config_dir)),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press Enter or 'y' to save and continue...",
                Style::default().fg(Color::Yellow),
            )]),
        ];

        if let Some(ref error) = self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![Span::styled(
                format!("Error: {}", error),
                Style::default().fg(Color::Red),
            )]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm Configuration ")
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_requires_scheme() {
        assert!(SetupComponent::validate_url("localhost:5001").is_err());
        assert!(SetupComponent::validate_url("").is_err());
        assert_eq!(
            SetupComponent::validate_url("http://localhost:5001/"),
            Ok("http://localhost:5001".to_string())
        );
        assert!(SetupComponent::validate_url("https://patents.example.com").is_ok());
    }

    #[test]
    fn test_step_order() {
        let mut step = SetupStep::Welcome;
        let mut titles = vec![step.title().to_string()];
        while let Some(next) = step.next() {
            step = next;
            titles.push(step.title().to_string());
        }
        assert_eq!(
            titles,
            vec![
                "Welcome",
                "File Service",
                "Process Service",
                "Download Directory",
                "Confirm"
            ]
        );
        assert_eq!(step.prev(), Some(SetupStep::DownloadDir));
    }

    #[test]
    fn test_invalid_url_blocks_advance() {
        let mut setup = SetupComponent::new();
        setup.step = SetupStep::FileServiceUrl;
        setup.input = "not a url".to_string();
        setup.advance_step();
        assert_eq!(setup.step, SetupStep::FileServiceUrl);
        assert!(setup.error.is_some());
    }
}
