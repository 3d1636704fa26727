//! Generate component - Main application screen
//!
//! Displays the feature sidebar, selected patent, additional-info input,
//! and the output panel. Owns feature navigation state.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_generate_layout;
use crate::model::{Feature, GenerationOutput, GenerationStatus};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Generate Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Generate component for the main application view
/// Owns feature navigation and the additional-info input
pub struct GenerateComponent {
    /// Feature list selection state
    pub list_state: ListState,

    /// Whether the additional-info input is focused
    pub info_mode: bool,

    /// Scroll offset for the inline output panel
    pub output_scroll: usize,
}

impl Default for GenerateComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerateComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            list_state,
            info_mode: false,
            output_scroll: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Feature Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// The currently highlighted feature
    pub fn selected_feature(&self) -> Feature {
        let idx = self.list_state.selected().unwrap_or(0);
        Feature::all()[idx.min(Feature::all().len() - 1)]
    }

    /// Select the next feature, wrapping to the first
    pub fn next(&mut self) {
        let count = Feature::all().len();
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % count));
    }

    /// Select the previous feature, wrapping to the last
    pub fn previous(&mut self) {
        let count = Feature::all().len();
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { count - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    /// Jump to the first feature
    pub fn select_first(&mut self) {
        self.list_state.select(Some(0));
    }

    /// Jump to the last feature
    pub fn select_last(&mut self) {
        self.list_state.select(Some(Feature::all().len() - 1));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Additional Info
    // ─────────────────────────────────────────────────────────────────────────

    /// Focus the additional-info input
    pub fn enter_info_mode(&mut self) {
        self.info_mode = true;
    }

    /// Unfocus the additional-info input
    pub fn exit_info_mode(&mut self) {
        self.info_mode = false;
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for GenerateComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Info mode captures all text input
        if self.info_mode {
            let action = match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(Action::ExitInfoMode),
                KeyCode::Backspace => Some(Action::InfoBackspace),
                KeyCode::Char(c) => Some(Action::InfoInput(c)),
                _ => None,
            };
            return Ok(action);
        }

        let action = match key.code {
            // Feature navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextFeature),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevFeature),
            KeyCode::Char('G') => Some(Action::LastFeature),
            KeyCode::Home => Some(Action::FirstFeature),

            // Output panel scrolling
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),

            // Requests
            KeyCode::Char('g') | KeyCode::Enter => Some(Action::Generate),
            KeyCode::Char('r') => Some(Action::RefreshPatents),
            KeyCode::Char('d') => Some(Action::DownloadResult),

            // Pages and modals
            KeyCode::Char('p') => Some(Action::OpenPatentSelector),
            KeyCode::Char('u') => Some(Action::OpenUploadPage),
            KeyCode::Char('o') => Some(Action::OpenOutput),
            KeyCode::Char('h') => Some(Action::OpenHistory),
            KeyCode::Char('s') => Some(Action::OpenServiceInfo),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            // Input focus
            KeyCode::Char('i') => Some(Action::EnterInfoMode),

            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextFeature => self.next(),
            Action::PrevFeature => self.previous(),
            Action::FirstFeature => self.select_first(),
            Action::LastFeature => self.select_last(),
            Action::EnterInfoMode => self.enter_info_mode(),
            Action::ExitInfoMode => self.exit_info_mode(),
            Action::PageUp => self.output_scroll = self.output_scroll.saturating_sub(10),
            Action::PageDown => self.output_scroll = self.output_scroll.saturating_add(10),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_generate_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the generation screen
pub struct GenerateRenderContext<'a> {
    pub patents: &'a [String],
    pub selected_patent: Option<&'a str>,
    pub additional_info: &'a str,
    pub generation: Option<&'a GenerationOutput>,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

/// Draw the generation screen
pub fn draw_generate_screen(
    frame: &mut Frame,
    area: Rect,
    generate: &mut GenerateComponent,
    ctx: &GenerateRenderContext,
) -> Result<()> {
    let has_status = ctx.error.is_some() || ctx.status_message.is_some();
    let layout = calculate_generate_layout(area, has_status);

    render_feature_list(frame, layout.features, generate);
    render_plan_box(frame, layout.plan);
    render_patent_bar(frame, layout.patent, ctx);
    render_feature_card(frame, layout.feature_card, generate);
    render_info_input(frame, layout.info, generate, ctx);
    render_output_panel(frame, layout.output, generate, ctx);

    if let Some(status_area) = layout.status {
        render_status_bar(frame, status_area, ctx);
    }
    render_help_bar(frame, layout.help, generate);

    Ok(())
}

fn render_feature_list(frame: &mut Frame, area: Rect, generate: &mut GenerateComponent) {
    let items: Vec<ListItem> = Feature::all()
        .iter()
        .map(|feature| {
            ListItem::new(Line::from(Span::styled(
                feature.label(),
                Style::default().fg(Color::White),
            )))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Features ")
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut generate.list_state);
}

fn render_plan_box(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Credits - ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "100",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Your Plan - ", Style::default().fg(Color::DarkGray)),
            Span::styled("Personal", Style::default().fg(Color::Cyan)),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_patent_bar(frame: &mut Frame, area: Rect, ctx: &GenerateRenderContext) {
    let line = match ctx.selected_patent {
        Some(patent) => Line::from(vec![
            Span::styled("Patent: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                patent.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(vec![
            Span::styled("Patent: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("none selected ({} available, press 'p')", ctx.patents.len()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_feature_card(frame: &mut Frame, area: Rect, generate: &GenerateComponent) {
    let feature = generate.selected_feature();

    let lines = vec![
        Line::from(Span::styled(
            feature.label(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::raw(feature.description())),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_info_input(
    frame: &mut Frame,
    area: Rect,
    generate: &GenerateComponent,
    ctx: &GenerateRenderContext,
) {
    let border_style = if generate.info_mode {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = if ctx.additional_info.is_empty() && !generate.info_mode {
        Line::from(Span::styled(
            "Press 'i' to add extra context for the generation",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let cursor = if generate.info_mode { "█" } else { "" };
        Line::from(Span::raw(format!("{}{}", ctx.additional_info, cursor)))
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Additional Information ")
                .border_style(border_style),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_output_panel(
    frame: &mut Frame,
    area: Rect,
    generate: &GenerateComponent,
    ctx: &GenerateRenderContext,
) {
    let (title, border_color, text) = match ctx.generation {
        Some(output) => {
            let color = match output.status {
                GenerationStatus::Running => Color::Yellow,
                GenerationStatus::Success => Color::Green,
                GenerationStatus::Failed => Color::Red,
            };
            (
                format!(" {} ", output.feature.label()),
                color,
                output.text.clone(),
            )
        }
        None => (
            " Output ".to_string(),
            Color::DarkGray,
            "No output yet. Select a patent with 'p' and press 'g' to generate.".to_string(),
        ),
    };

    let total_lines = text.lines().count();
    let visible_height = area.height.saturating_sub(2) as usize;
    let scroll = generate
        .output_scroll
        .min(total_lines.saturating_sub(visible_height));

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &GenerateRenderContext) {
    let line = if let Some(error) = ctx.error {
        Line::from(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(status) = ctx.status_message {
        Line::from(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, generate: &GenerateComponent) {
    let help_spans = if generate.info_mode {
        vec![
            Span::styled(
                " Esc/Enter ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Done  "),
            Span::styled(
                "Typing appends to the additional information",
                Style::default().fg(Color::Cyan),
            ),
        ]
    } else {
        vec![
            Span::styled(
                " q ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Quit "),
            Span::styled(
                " g ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Generate "),
            Span::styled(
                " p ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Patent "),
            Span::styled(
                " u ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Upload "),
            Span::styled(
                " i ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Info "),
            Span::styled(
                " o ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Output "),
            Span::styled(
                " d ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Download "),
            Span::styled(
                " h ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("History "),
            Span::styled(
                " ? ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Help"),
        ]
    };

    let paragraph =
        Paragraph::new(Line::from(help_spans)).alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_navigation_wraps() {
        let mut component = GenerateComponent::new();
        assert_eq!(component.selected_feature(), Feature::ElevatorPitch);

        component.previous();
        assert_eq!(component.selected_feature(), Feature::MarketPlace);

        component.next();
        assert_eq!(component.selected_feature(), Feature::ElevatorPitch);
    }

    #[test]
    fn test_selection_updates_feature_card_content() {
        let mut component = GenerateComponent::new();
        component.next();
        let feature = component.selected_feature();
        assert_eq!(feature, Feature::PitchDeck);
        assert_eq!(feature.label(), "Pitch Deck");
        assert!(feature.description().contains("10-12 slides"));
    }

    #[test]
    fn test_first_and_last_jump() {
        let mut component = GenerateComponent::new();
        component.select_last();
        assert_eq!(component.selected_feature(), Feature::MarketPlace);
        component.select_first();
        assert_eq!(component.selected_feature(), Feature::ElevatorPitch);
    }

    #[test]
    fn test_info_mode_captures_text_keys() {
        use crossterm::event::{KeyEvent, KeyModifiers};

        let mut component = GenerateComponent::new();
        component.enter_info_mode();

        let action = component
            .handle_key_event(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::InfoInput('g')));

        let action = component
            .handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::ExitInfoMode));
    }
}
