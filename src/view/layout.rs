//! Layout rendering (header, category bar, subgenre sidebar, footer)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph, Tabs},
    Frame,
};

use crate::model::{ActiveSection, Category, Selection, UiState};
use super::utils::render_scrollable_list;

pub fn render_header(frame: &mut Frame, area: Rect, selection: &Selection, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Question
            Constraint::Length(3), // Category bar
        ])
        .split(area);

    let title = Paragraph::new("What form of entertainment would you like?")
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .centered();
    frame.render_widget(title, chunks[0]);

    let is_focused = ui_state.active_section == ActiveSection::Categories;
    let titles: Vec<Line> = Category::ALL
        .iter()
        .enumerate()
        .map(|(i, category)| Line::from(format!("{} {}", i + 1, category.label())))
        .collect();

    let picked = selection.category().map(Category::index);
    let tabs = Tabs::new(titles)
        .select(picked.unwrap_or(ui_state.category_cursor))
        .style(Style::default().fg(Color::White))
        .highlight_style(if picked.is_some() {
            Style::default().fg(Color::Black).bg(Color::Blue).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Categories ")
                .border_style(if is_focused {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                }),
        );
    frame.render_widget(tabs, chunks[1]);
}

/// Subgenre list for the picked category
pub fn render_subgenres(frame: &mut Frame, area: Rect, category: Category, selection: &Selection, ui_state: &UiState) {
    let is_focused = ui_state.active_section == ActiveSection::Subgenres;
    let picked = selection.subgenre();

    let items: Vec<ListItem> = category
        .subgenres()
        .iter()
        .enumerate()
        .map(|(i, subgenre)| {
            let is_picked = picked == Some(*subgenre);
            let is_cursor = i == ui_state.subgenre_cursor;
            let style = if is_cursor && is_focused {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if is_picked {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if is_picked { "● " } else { "  " };
            ListItem::new(format!("{}{}", marker, subgenre)).style(style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Pick a subgenre ")
        .padding(Padding::horizontal(1))
        .border_style(if is_focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        });

    render_scrollable_list(frame, area, items, ui_state.subgenre_cursor, block);
}

pub fn render_footer(frame: &mut Frame, area: Rect) {
    let hint = Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Green)),
        Span::raw(" switch section  "),
        Span::styled("Enter", Style::default().fg(Color::Green)),
        Span::raw(" select  "),
        Span::styled("r", Style::default().fg(Color::Green)),
        Span::raw(" refresh  "),
        Span::styled("h", Style::default().fg(Color::Green)),
        Span::raw(" help  "),
        Span::styled("q", Style::default().fg(Color::Green)),
        Span::raw(" quit"),
    ]);
    frame.render_widget(Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)), area);
}
