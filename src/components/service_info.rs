//! Service information dialog component
//!
//! Displays the configured service endpoints and generation defaults.

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

/// Service information dialog component
pub struct ServiceInfoDialog {
    /// Cached content lines
    content: Vec<Line<'static>>,
}

impl Default for ServiceInfoDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceInfoDialog {
    pub fn new() -> Self {
        Self {
            content: Vec::new(),
        }
    }

    /// Update content from the active config and patent count
    pub fn set_service_info(&mut self, config: &Config, patent_count: usize) {
        self.content = render_service_info(config, patent_count);
    }
}

impl Component for ServiceInfoDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('s') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);
        let background = Block::default().style(Style::default().bg(Color::Reset));
        frame.render_widget(background, area);

        let margin = 2;
        let overlay_area = Rect::new(
            margin,
            margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(overlay_area);

        let paragraph = Paragraph::new(self.content.clone()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Service Info ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );

        frame.render_widget(paragraph, main_chunks[0]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                " s/Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Close"),
        ]))
        .alignment(ratatui::layout::Alignment::Left)
        .block(Block::default().borders(Borders::ALL));

        frame.render_widget(help, main_chunks[1]);

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper functions
// ─────────────────────────────────────────────────────────────────────────────

/// Render service information content
fn render_service_info(config: &Config, patent_count: usize) -> Vec<Line<'static>> {
    let download_dir = if config.download_dir.is_empty() {
        "(current directory)".to_string()
    } else {
        config.download_dir.clone()
    };

    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Patent Service Configuration",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "═══════════════════════════════════════════════════════════",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    // Endpoints
    lines.push(Line::from(Span::styled(
        "Endpoints",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::raw("  Patent List: "),
        Span::styled(
            format!("GET  {}/uploads", config.file_service_url),
            Style::default().fg(Color::White),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  Upload:      "),
        Span::styled(
            format!("POST {}/upload", config.file_service_url),
            Style::default().fg(Color::White),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  Generation:  "),
        Span::styled(
            format!("POST {}/process", config.process_service_url),
            Style::default().fg(Color::White),
        ),
    ]));
    lines.push(Line::from(""));

    // Generation defaults
    lines.push(Line::from(Span::styled(
        "Generation Defaults",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::raw("  Embedding Model:  "),
        Span::styled(
            config.embedding_model.clone(),
            Style::default().fg(Color::White),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  Vector Store:     "),
        Span::styled(
            config.persist_directory.clone(),
            Style::default().fg(Color::White),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  Generation Model: "),
        Span::styled(config.model_name.clone(), Style::default().fg(Color::White)),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  Request Timeout:  "),
        Span::styled(
            format!("{}s", config.request_timeout_secs),
            Style::default().fg(Color::White),
        ),
    ]));
    lines.push(Line::from(""));

    // Local state
    lines.push(Line::from(Span::styled(
        "Local",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::raw("  Patents Available: "),
        Span::styled(patent_count.to_string(), Style::default().fg(Color::Cyan)),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  Download Directory: "),
        Span::styled(download_dir, Style::default().fg(Color::White)),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "═══════════════════════════════════════════════════════════",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_info_shows_endpoints_and_defaults() {
        let config = Config::default();
        let lines = render_service_info(&config, 3);
        let text: String = lines
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.clone()))
            .collect();
        assert!(text.contains("GET  http://localhost:5001/uploads"));
        assert!(text.contains("POST http://localhost:5000/process"));
        assert!(text.contains("all-MiniLM-L6-v2"));
        assert!(text.contains("(current directory)"));
    }
}
