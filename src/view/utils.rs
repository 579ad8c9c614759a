//! Utility functions for rendering UI components

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: usize,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

pub fn section_block(title: String, is_focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(if is_focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        })
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

pub fn format_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| "N/A".to_string(), |r| r.to_string())
}

/// Letter label for the n-th answer ("a)", "b)", ...)
pub fn answer_label(index: usize) -> String {
    let letter = (b'a' + (index % 26) as u8) as char;
    format!("{})", letter)
}
