//! Output dialog component
//!
//! Displays the text of a running or completed generation request.

use crate::action::Action;
use crate::component::Component;
use crate::model::{GenerationOutput, GenerationStatus};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

/// Generation output dialog
#[derive(Default)]
pub struct OutputDialog {
    pub scroll_offset: usize,
}

impl Component for OutputDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::Char('d') => Some(Action::DownloadResult),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            Action::ScrollDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
            }
            Action::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(20);
            }
            Action::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(20);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // This needs generation data, so we use draw_with_output
        Ok(())
    }
}

impl OutputDialog {
    pub fn draw_with_output(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        generation: &GenerationOutput,
    ) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 2;
        let overlay_area = Rect::new(
            margin,
            margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(overlay_area);

        let content_area = chunks[0];

        let (status_text, status_color) = match generation.status {
            GenerationStatus::Running => ("Generating", Color::Yellow),
            GenerationStatus::Success => ("Done", Color::Green),
            GenerationStatus::Failed => ("Failed", Color::Red),
        };

        let mut content_lines: Vec<Line> = vec![
            Line::from(vec![
                Span::styled(
                    "Patent: ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(generation.patent.clone()),
            ]),
            Line::from(""),
        ];
        content_lines.extend(generation.text.lines().map(|l| Line::from(l.to_string())));

        let total = content_lines.len();
        let visible_height = content_area.height.saturating_sub(2) as usize;
        let scroll = self.scroll_offset.min(total.saturating_sub(visible_height));

        let paragraph = Paragraph::new(content_lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(status_color))
                    .title(format!(
                        " {} [{}] ",
                        generation.feature.label(),
                        status_text
                    ))
                    .title_style(
                        Style::default()
                            .fg(status_color)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .wrap(Wrap { trim: false })
            .scroll((scroll as u16, 0));

        frame.render_widget(paragraph, content_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(scroll);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                content_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        // Help bar
        let mut help_spans = vec![
            Span::styled(
                " Esc/q ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Close  "),
            Span::styled(
                " j/k ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Scroll"),
        ];
        if generation.status == GenerationStatus::Success {
            help_spans.push(Span::styled(
                "  d ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
            help_spans.push(Span::raw("Download"));
        }

        let help = Paragraph::new(Line::from(help_spans))
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        frame.render_widget(help, chunks[1]);

        Ok(())
    }
}
