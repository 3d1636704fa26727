//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Generation page layout areas
pub struct GenerateLayout {
    /// Sidebar: feature list
    pub features: Rect,
    /// Sidebar: plan/credits box
    pub plan: Rect,
    /// Selected patent bar
    pub patent: Rect,
    /// Feature title/description card
    pub feature_card: Rect,
    /// Additional information input box
    pub info: Rect,
    /// Output panel
    pub output: Rect,
    /// Status/notification line (only when a message is shown)
    pub status: Option<Rect>,
    /// Help bar
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the generation page layout
pub fn calculate_generate_layout(area: Rect, has_status: bool) -> GenerateLayout {
    // Main vertical layout: content + (optional status) + help bar
    let main_chunks = if has_status {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area)
    };

    // Horizontal split: sidebar and main pane
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(40)])
        .split(main_chunks[0]);

    // Sidebar: feature list + plan box
    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(horizontal_chunks[0]);

    // Main pane: patent bar, feature card, additional info, output
    let main_pane_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Length(5),
            Constraint::Min(5),
        ])
        .split(horizontal_chunks[1]);

    let (status_area, help_area) = if has_status {
        (Some(main_chunks[1]), main_chunks[2])
    } else {
        (None, main_chunks[1])
    };

    GenerateLayout {
        features: sidebar_chunks[0],
        plan: sidebar_chunks[1],
        patent: main_pane_chunks[0],
        feature_card: main_pane_chunks[1],
        info: main_pane_chunks[2],
        output: main_pane_chunks[3],
        status: status_area,
        help: help_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 60, 10);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 10);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 15);
    }

    #[test]
    fn test_centered_popup_clamps_to_small_area() {
        let area = Rect::new(0, 0, 30, 8);
        let popup = centered_popup(area, 60, 10);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }

    #[test]
    fn test_generate_layout_partitions_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_generate_layout(area, true);

        assert_eq!(layout.features.width, 28);
        assert_eq!(layout.patent.height, 3);
        assert!(layout.status.is_some());
        assert_eq!(layout.help.height, 3);

        let without_status = calculate_generate_layout(area, false);
        assert!(without_status.status.is_none());
        // Status line space flows back into the content area
        assert!(without_status.output.height >= layout.output.height);
    }
}
