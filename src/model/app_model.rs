//! Main application model with state management

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::{FetchError, SelectionError};
use super::content::{ContentState, ContentView, FetchTicket, Recommendations, Verdict};
use super::selection::Selection;
use super::types::{ActiveSection, Category, UiState};

/// Main application model containing all state
pub struct AppModel {
    selection: Arc<Mutex<Selection>>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub content_state: Arc<Mutex<ContentState>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            selection: Arc::new(Mutex::new(Selection::default())),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            content_state: Arc::new(Mutex::new(ContentState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    pub async fn get_selection(&self) -> Selection {
        self.selection.lock().await.clone()
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn get_content_state(&self) -> ContentState {
        self.content_state.lock().await.clone()
    }

    // ── Selection ────────────────────────────────────────────────────────────

    /// Pick a category. Clears the subgenre and abandons any outstanding fetch.
    pub async fn select_category(&self, category: Category) {
        self.selection.lock().await.select_category(category);

        let mut content = self.content_state.lock().await;
        if let Some(ticket) = content.ticket.take() {
            tracing::debug!(
                generation = ticket.generation,
                subgenre = %ticket.subgenre,
                "Abandoning outstanding fetch"
            );
        }
        content.generation += 1;
        content.view = ContentView::Empty;
        drop(content);

        let mut ui = self.ui_state.lock().await;
        ui.category_cursor = category.index();
        ui.subgenre_cursor = 0;
        ui.active_section = ActiveSection::Subgenres;
    }

    /// Pick a subgenre of the current category and start a fresh fetch for it.
    ///
    /// Re-selecting the current subgenre also starts a fresh fetch.
    pub async fn select_subgenre(&self, subgenre: &str) -> Result<FetchTicket, SelectionError> {
        let category = {
            let mut selection = self.selection.lock().await;
            selection.select_subgenre(subgenre)?;
            selection.category().ok_or(SelectionError::NoCategory)?
        };

        let mut ui = self.ui_state.lock().await;
        if let Some(i) = category.subgenres().iter().position(|s| *s == subgenre) {
            ui.subgenre_cursor = i;
        }
        drop(ui);

        Ok(self.issue_ticket(category, subgenre).await)
    }

    /// Start a fresh fetch for the current selection (refetch / next joke)
    pub async fn begin_fetch(&self) -> Option<FetchTicket> {
        let selection = self.selection.lock().await.clone();
        let (category, subgenre) = selection.complete()?;
        Some(self.issue_ticket(category, subgenre).await)
    }

    async fn issue_ticket(&self, category: Category, subgenre: &str) -> FetchTicket {
        let mut content = self.content_state.lock().await;
        content.generation += 1;
        let ticket = FetchTicket {
            generation: content.generation,
            category,
            subgenre: subgenre.to_string(),
        };
        content.ticket = Some(ticket.clone());
        content.view = ContentView::Loading {
            category,
            subgenre: subgenre.to_string(),
        };
        ticket
    }

    pub async fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.content_state.lock().await.ticket.as_ref() == Some(ticket)
    }

    /// Apply a completed fetch. Returns `false` when the ticket is stale and
    /// the result was dropped.
    pub async fn apply_fetch_result(
        &self,
        ticket: &FetchTicket,
        result: Result<Recommendations, FetchError>,
    ) -> bool {
        let mut content = self.content_state.lock().await;
        if content.ticket.as_ref() != Some(ticket) {
            tracing::debug!(
                generation = ticket.generation,
                category = %ticket.category,
                subgenre = %ticket.subgenre,
                "Discarding stale fetch result"
            );
            return false;
        }
        content.ticket = None;

        let category = ticket.category;
        let subgenre = ticket.subgenre.clone();
        content.view = match result {
            Ok(recommendations) if !recommendations.is_empty() => ContentView::Results {
                category,
                subgenre,
                recommendations,
                selected_index: 0,
                answer_index: 0,
            },
            Ok(_) => ContentView::NoResults { category, subgenre, failed: false },
            Err(_) => ContentView::NoResults { category, subgenre, failed: true },
        };
        true
    }

    // ── Navigation ───────────────────────────────────────────────────────────

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        self.ui_state.lock().await.active_section = section;
    }

    /// Category under the category-bar cursor after moving it one step
    pub async fn move_category_cursor(&self, forward: bool) -> Category {
        let mut state = self.ui_state.lock().await;
        let current = Category::ALL[state.category_cursor % Category::ALL.len()];
        let next = if forward { current.next() } else { current.prev() };
        state.category_cursor = next.index();
        next
    }

    pub async fn move_subgenre_cursor(&self, down: bool) {
        let Some(category) = self.selection.lock().await.category() else {
            return;
        };
        let mut state = self.ui_state.lock().await;
        let last = category.subgenres().len().saturating_sub(1);
        if down {
            state.subgenre_cursor = (state.subgenre_cursor + 1).min(last);
        } else {
            state.subgenre_cursor = state.subgenre_cursor.saturating_sub(1);
        }
    }

    /// Subgenre label under the subgenre-list cursor
    pub async fn subgenre_under_cursor(&self) -> Option<&'static str> {
        let category = self.selection.lock().await.category()?;
        let cursor = self.ui_state.lock().await.subgenre_cursor;
        category.subgenres().get(cursor).copied()
    }

    pub async fn content_move_up(&self) {
        let mut state = self.content_state.lock().await;
        if let ContentView::Results { selected_index, answer_index, .. } = &mut state.view {
            if *selected_index > 0 {
                *selected_index -= 1;
                *answer_index = 0;
            }
        }
    }

    pub async fn content_move_down(&self) {
        let mut state = self.content_state.lock().await;
        if let ContentView::Results { recommendations, selected_index, answer_index, .. } =
            &mut state.view
        {
            if *selected_index < recommendations.len().saturating_sub(1) {
                *selected_index += 1;
                *answer_index = 0;
            }
        }
    }

    /// Move the highlighted answer within the selected trivia question
    pub async fn move_answer_cursor(&self, forward: bool) {
        let mut state = self.content_state.lock().await;
        if let ContentView::Results {
            recommendations: Recommendations::Trivia(questions),
            selected_index,
            answer_index,
            ..
        } = &mut state.view
        {
            let count = questions.get(*selected_index).map_or(0, |q| q.answers.len());
            if forward {
                *answer_index = (*answer_index + 1).min(count.saturating_sub(1));
            } else {
                *answer_index = answer_index.saturating_sub(1);
            }
        }
    }

    /// Answer the selected trivia question with the highlighted answer
    pub async fn answer_selected_question(&self) -> Option<Verdict> {
        let mut state = self.content_state.lock().await;
        if let ContentView::Results {
            recommendations: Recommendations::Trivia(questions),
            selected_index,
            answer_index,
            ..
        } = &mut state.view
        {
            let question = questions.get_mut(*selected_index)?;
            return question.answer(*answer_index);
        }
        None
    }

    pub async fn toggle_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = !state.show_help_popup;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}
