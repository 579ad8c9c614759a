//! Main content area rendering (one renderer per adapter)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{
    ActiveSection, Book, Category, ContentState, ContentView, Joke, Recommendations, Show, Song,
    TriviaQuestion, UiState, Verdict,
};
use super::utils::{answer_label, format_rating, render_scrollable_list, section_block, truncate_string};

pub fn render_main_content(frame: &mut Frame, area: Rect, ui_state: &UiState, content_state: &ContentState) {
    let is_focused = ui_state.active_section == ActiveSection::Content;

    match &content_state.view {
        ContentView::Empty => {
            let hint = Paragraph::new(
                "Pick a category and a subgenre to get recommendations\n\n\
                 Use Tab to move between sections\n\
                 Use ←/→ or 1-5 to pick a category\n\
                 Use ↑/↓ and Enter to pick a subgenre",
            )
            .style(Style::default().fg(Color::DarkGray))
            .block(section_block(" Recommendations ".to_string(), is_focused).padding(Padding::horizontal(1)));
            frame.render_widget(hint, area);
        }
        ContentView::Loading { category, subgenre } => {
            let text = if *category == Category::Trivia {
                "Loading questions..."
            } else {
                "Loading..."
            };
            let loading = Paragraph::new(text)
                .style(Style::default().fg(Color::Yellow))
                .block(section_block(pane_title(*category, subgenre), is_focused));
            frame.render_widget(loading, area);
        }
        ContentView::NoResults { category, subgenre, failed } => {
            let mut lines = vec![Line::from(Span::styled(
                no_results_message(*category, subgenre),
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            ))];
            if *failed {
                lines.push(Line::from(Span::styled(
                    "(request failed, see logs)",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            let empty = Paragraph::new(lines)
                .centered()
                .block(section_block(pane_title(*category, subgenre), is_focused));
            frame.render_widget(empty, area);
        }
        ContentView::Results {
            category,
            subgenre,
            recommendations,
            selected_index,
            answer_index,
        } => {
            let title = pane_title(*category, subgenre);
            let width = area.width.saturating_sub(4) as usize;
            match recommendations {
                Recommendations::Joke(Some(joke)) => render_joke(frame, area, title, joke, is_focused),
                Recommendations::Joke(None) => {
                    let empty = Paragraph::new(no_results_message(*category, subgenre))
                        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC))
                        .centered()
                        .block(section_block(title, is_focused));
                    frame.render_widget(empty, area);
                }
                Recommendations::Shows(shows) => {
                    let items = shows
                        .iter()
                        .enumerate()
                        .map(|(i, show)| show_item(show, i == *selected_index, width))
                        .collect();
                    render_scrollable_list(frame, area, items, *selected_index, section_block(title, is_focused));
                }
                Recommendations::Songs(songs) => {
                    let items = songs
                        .iter()
                        .enumerate()
                        .map(|(i, song)| song_item(song, i == *selected_index, width))
                        .collect();
                    render_scrollable_list(frame, area, items, *selected_index, section_block(title, is_focused));
                }
                Recommendations::Books(books) => {
                    let items = books
                        .iter()
                        .enumerate()
                        .map(|(i, book)| book_item(book, i == *selected_index, width))
                        .collect();
                    render_scrollable_list(frame, area, items, *selected_index, section_block(title, is_focused));
                }
                Recommendations::Trivia(questions) => {
                    let items = questions
                        .iter()
                        .enumerate()
                        .map(|(i, q)| {
                            let cursor = (i == *selected_index).then_some(*answer_index);
                            question_item(q, cursor, width)
                        })
                        .collect();
                    render_scrollable_list(frame, area, items, *selected_index, section_block(title, is_focused));
                }
            }
        }
    }
}

pub fn pane_title(category: Category, subgenre: &str) -> String {
    format!(" Recommendations for {} - {} ", category.label(), subgenre)
}

pub fn no_results_message(category: Category, subgenre: &str) -> String {
    format!("No {} found for \"{}\".", category.result_noun(), subgenre)
}

fn title_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }
}

fn dim(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn show_item(show: &Show, selected: bool, width: usize) -> ListItem<'static> {
    let mut lines = vec![
        Line::from(Span::styled(truncate_string(&show.name, width), title_style(selected))),
        Line::from(format!(
            "Rating: {} | Status: {}",
            format_rating(show.rating),
            show.status
        )),
        dim(truncate_string(&show.genres.join(", "), width)),
    ];
    if let Some(image) = &show.image {
        lines.push(dim(truncate_string(image, width)));
    }
    lines.push(Line::default());
    ListItem::new(lines)
}

fn song_item(song: &Song, selected: bool, width: usize) -> ListItem<'static> {
    let mut lines = vec![
        Line::from(Span::styled(truncate_string(&song.title, width), title_style(selected))),
        Line::from(truncate_string(&song.album, width)),
        Line::from(Span::styled(
            truncate_string(&song.artist, width),
            Style::default().fg(Color::Cyan),
        )),
    ];
    if !song.release_date.is_empty() {
        lines.push(Line::from(song.release_date.clone()));
    }
    if selected {
        let links = [
            ("Song", &song.link),
            ("Artist", &song.artist_link),
            ("Preview", &song.preview),
            ("Artwork", &song.artwork),
        ];
        for (label, url) in links {
            if let Some(url) = url {
                lines.push(dim(truncate_string(&format!("{}: {}", label, url), width)));
            }
        }
    }
    lines.push(Line::default());
    ListItem::new(lines)
}

fn book_item(book: &Book, selected: bool, width: usize) -> ListItem<'static> {
    let author = book.author.as_deref().unwrap_or("Unknown author");
    let year = book.year.map_or_else(|| "n/a".to_string(), |y| y.to_string());

    let mut lines = vec![
        Line::from(Span::styled(truncate_string(&book.title, width), title_style(selected))),
        Line::from(truncate_string(&format!("By {}, published {}", author, year), width)),
    ];
    if let Some(cover) = &book.cover_url {
        lines.push(dim(truncate_string(cover, width)));
    }
    lines.push(Line::default());
    ListItem::new(lines)
}

/// `answer_cursor` is set only for the selected question
fn question_item(q: &TriviaQuestion, answer_cursor: Option<usize>, width: usize) -> ListItem<'static> {
    let mut lines = vec![Line::from(Span::styled(
        truncate_string(&q.question, width),
        title_style(answer_cursor.is_some()),
    ))];

    for (i, answer) in q.answers.iter().enumerate() {
        let text = truncate_string(&format!("  {} {}", answer_label(i), answer), width);
        let style = match (q.chosen, answer_cursor) {
            (Some(_), _) if *answer == q.correct_answer => Style::default().fg(Color::Green),
            (Some(chosen), _) if chosen == i => Style::default().fg(Color::Red),
            (_, Some(cursor)) if cursor == i => {
                Style::default().fg(Color::Black).bg(Color::Green)
            }
            _ => Style::default().fg(Color::White),
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    match q.verdict() {
        Some(Verdict::Correct) => lines.push(Line::from(Span::styled(
            "Correct!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))),
        Some(Verdict::Incorrect { correct_answer }) => lines.push(Line::from(Span::styled(
            truncate_string(&format!("Incorrect. The correct answer is {}.", correct_answer), width),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))),
        None => {}
    }

    lines.push(dim(format!("Category: {} | Difficulty: {}", q.category, q.difficulty)));
    lines.push(Line::default());
    ListItem::new(lines)
}

fn render_joke(frame: &mut Frame, area: Rect, title: String, joke: &Joke, is_focused: bool) {
    let lines = vec![
        Line::from(Span::styled(
            joke.setup.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            joke.punchline.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("[n]", Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
            Span::raw(" Next Joke"),
        ])
        .right_aligned(),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(section_block(title, is_focused).padding(Padding::uniform(1)));
    frame.render_widget(paragraph, area);
}
