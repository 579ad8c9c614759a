//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `layout`: Header, category bar, subgenre sidebar and footer
//! - `content`: Main content area, one renderer per adapter
//! - `overlays`: Help popup

mod utils;
mod layout;
mod content;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{ContentState, Selection, UiState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, selection: &Selection, ui_state: &UiState, content_state: &ContentState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Question + category bar
                Constraint::Min(0),    // Subgenres + content
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        layout::render_header(frame, chunks[0], selection, ui_state);

        // Subgenre choices exist only once a category is picked
        match selection.category() {
            Some(category) => {
                let main_chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Percentage(30), // Subgenres
                        Constraint::Percentage(70), // Content
                    ])
                    .split(chunks[1]);
                layout::render_subgenres(frame, main_chunks[0], category, selection, ui_state);
                content::render_main_content(frame, main_chunks[1], ui_state, content_state);
            }
            None => content::render_main_content(frame, chunks[1], ui_state, content_state),
        }

        layout::render_footer(frame, chunks[2]);

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use crate::model::{
        AppModel, Book, Category, ContentView, Joke, Recommendations, TriviaQuestion,
    };
    use super::*;

    async fn render(model: &AppModel) -> String {
        let selection = model.get_selection().await;
        let ui_state = model.get_ui_state().await;
        let content_state = model.get_content_state().await;

        let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
        terminal
            .draw(|f| AppView::render(f, &selection, &ui_state, &content_state))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[tokio::test]
    async fn test_nothing_selected() {
        let model = AppModel::new();
        let screen = render(&model).await;
        assert!(screen.contains("What form of entertainment would you like?"));
        assert!(screen.contains("Trivia"));
        assert!(!screen.contains("Pick a subgenre"));
        assert!(!screen.contains("Recommendations for"));
    }

    #[tokio::test]
    async fn test_category_without_subgenre_shows_choices_only() {
        let model = AppModel::new();
        model.select_category(Category::Music).await;
        let screen = render(&model).await;
        assert!(screen.contains("Pick a subgenre"));
        assert!(screen.contains("Hip-Hop/Rap"));
        assert!(!screen.contains("Recommendations for"));
    }

    #[tokio::test]
    async fn test_loading_states() {
        let model = AppModel::new();
        model.select_category(Category::Trivia).await;
        model.select_subgenre("History").await.unwrap();
        let screen = render(&model).await;
        assert!(screen.contains("Recommendations for Trivia - History"));
        assert!(screen.contains("Loading questions..."));

        model.select_category(Category::Books).await;
        model.select_subgenre("Poetry").await.unwrap();
        assert!(render(&model).await.contains("Loading..."));
    }

    #[tokio::test]
    async fn test_jazz_no_results_message() {
        let model = AppModel::new();
        model.select_category(Category::Music).await;
        let ticket = model.select_subgenre("Jazz").await.unwrap();
        model.apply_fetch_result(&ticket, Ok(Recommendations::Songs(vec![]))).await;

        let screen = render(&model).await;
        assert!(screen.contains("No songs found for \"Jazz\"."));
        assert!(!screen.contains("request failed"));
        assert!(!screen.contains("Loading"));
    }

    #[tokio::test]
    async fn test_joke_renders_setup_and_punchline() {
        let model = AppModel::new();
        model.select_category(Category::Jokes).await;
        let ticket = model.select_subgenre("Programming").await.unwrap();
        let joke = Joke {
            setup: "Why do programmers prefer dark mode?".to_string(),
            punchline: "Because light attracts bugs.".to_string(),
        };
        model.apply_fetch_result(&ticket, Ok(Recommendations::Joke(Some(joke)))).await;

        let screen = render(&model).await;
        assert!(screen.contains("Why do programmers prefer dark mode?"));
        assert!(screen.contains("Because light attracts bugs."));
        assert!(screen.contains("Next Joke"));
    }

    #[tokio::test]
    async fn test_book_without_author() {
        let model = AppModel::new();
        model.select_category(Category::Books).await;
        let ticket = model.select_subgenre("Poetry").await.unwrap();
        let book = Book {
            title: "Collected Poems".to_string(),
            author: None,
            year: Some(1923),
            cover_url: Some("https://covers.openlibrary.org/b/id/42-M.jpg".to_string()),
        };
        model.apply_fetch_result(&ticket, Ok(Recommendations::Books(vec![book]))).await;

        let screen = render(&model).await;
        assert!(screen.contains("By Unknown author, published 1923"));
        assert!(screen.contains("b/id/42-M.jpg"));
    }

    #[tokio::test]
    async fn test_trivia_verdict_rendered() {
        let model = AppModel::new();
        model.select_category(Category::Trivia).await;
        let ticket = model.select_subgenre("Sports").await.unwrap();
        let question = TriviaQuestion {
            question: "Which sport uses a shuttlecock?".to_string(),
            correct_answer: "Badminton".to_string(),
            answers: vec!["Tennis".to_string(), "Badminton".to_string(), "Squash".to_string()],
            category: "Sports".to_string(),
            difficulty: "easy".to_string(),
            chosen: None,
        };
        model.apply_fetch_result(&ticket, Ok(Recommendations::Trivia(vec![question]))).await;
        model.answer_selected_question().await;

        let screen = render(&model).await;
        assert!(screen.contains("a) Tennis"));
        assert!(screen.contains("Incorrect. The correct answer is Badminton."));
        assert!(screen.contains("Category: Sports | Difficulty: easy"));

        assert!(matches!(model.get_content_state().await.view, ContentView::Results { .. }));
    }
}
