//! Selection changes and the fetch tasks they start

use tokio::task::JoinHandle;

use crate::model::{Category, FetchTicket, Verdict};
use crate::{log_fetch_request, log_fetch_result};
use super::AppController;

impl AppController {
    pub async fn select_category(&self, category: Category) {
        tracing::debug!(category = %category, "Category selected");
        self.model.lock().await.select_category(category).await;
    }

    /// Pick a subgenre and start its fetch. Labels outside the current
    /// category's list are ignored.
    pub async fn select_subgenre(&self, subgenre: &str) -> Option<JoinHandle<bool>> {
        let picked = self.model.lock().await.select_subgenre(subgenre).await;
        match picked {
            Ok(ticket) => Some(self.spawn_fetch(ticket)),
            Err(e) => {
                tracing::warn!(subgenre, error = %e, "Ignoring subgenre pick");
                None
            }
        }
    }

    /// Fetch the current selection again
    pub async fn refetch(&self) -> Option<JoinHandle<bool>> {
        let ticket = self.model.lock().await.begin_fetch().await?;
        Some(self.spawn_fetch(ticket))
    }

    /// "Next Joke": a full new fetch with the same joke type
    pub async fn next_joke(&self) -> Option<JoinHandle<bool>> {
        let selection = self.model.lock().await.get_selection().await;
        if selection.category() != Some(Category::Jokes) {
            return None;
        }
        self.refetch().await
    }

    pub async fn answer_trivia(&self) -> Option<Verdict> {
        let verdict = self.model.lock().await.answer_selected_question().await;
        if let Some(ref v) = verdict {
            tracing::debug!(correct = matches!(v, Verdict::Correct), "Trivia question answered");
        }
        verdict
    }

    /// Apply a selection given on the command line
    pub async fn apply_initial_selection(
        &self,
        category: Category,
        subgenre: Option<&str>,
    ) -> Option<JoinHandle<bool>> {
        self.select_category(category).await;
        self.select_subgenre(subgenre?).await
    }

    pub(crate) fn spawn_fetch(&self, ticket: FetchTicket) -> JoinHandle<bool> {
        let controller = self.clone();
        tokio::spawn(async move { controller.run_fetch(ticket).await })
    }

    /// Run one fetch to completion. Returns whether its result was displayed.
    async fn run_fetch(&self, ticket: FetchTicket) -> bool {
        // Superseded before the task got scheduled
        let current = self.model.lock().await.is_current(&ticket).await;
        if !current {
            return false;
        }

        let url = self.providers.request_url(ticket.category, &ticket.subgenre);
        log_fetch_request!(ticket, url);

        let result = self.providers.fetch(ticket.category, &ticket.subgenre).await;
        log_fetch_result!(ticket, result);

        let model = self.model.lock().await;
        model.apply_fetch_result(&ticket, result).await
    }
}
