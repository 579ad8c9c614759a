//! Overlay rendering (help popup)

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Key bindings grouped by the section they apply to
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("Tab / Shift+Tab", "Cycle sections"),
            ("← / → or 1-5", "Pick category"),
            ("↑ / ↓", "Move selection"),
            ("Enter", "Pick subgenre"),
            ("Esc", "Back to categories"),
        ],
    ),
    (
        "Content",
        &[
            ("r", "Fetch again"),
            ("n", "Next joke"),
            ("← / →", "Choose trivia answer"),
            ("Enter", "Answer trivia question"),
        ],
    ),
    ("General", &[("h", "Toggle this help"), ("q / Ctrl+C", "Quit")]),
];

const KEY_COLUMN: usize = 16;

fn help_lines() -> Vec<Line<'static>> {
    let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (i, (section, bindings)) in HELP_SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*section, heading)));
        lines.extend(bindings.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {:<KEY_COLUMN$}", key), key_style),
                Span::raw(*action),
            ])
        }));
    }
    lines
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

pub fn render_help_popup(frame: &mut Frame) {
    let lines = help_lines();
    let area = frame.area();
    let popup_area = centered(
        area,
        48.min(area.width),
        (lines.len() as u16 + 2).min(area.height),
    );

    frame.render_widget(Clear, popup_area);

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Keys (h or Esc to close) ")
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(help, popup_area);
}
