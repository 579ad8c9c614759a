//! Content view state and the domain records each adapter produces

use super::types::Category;

/// A TV show from the full catalog listing
#[derive(Clone, Debug, PartialEq)]
pub struct Show {
    pub name: String,
    pub status: String,
    pub rating: Option<f64>,
    pub image: Option<String>,
    pub genres: Vec<String>,
}

/// A song from a genre top-songs feed
#[derive(Clone, Debug, PartialEq)]
pub struct Song {
    pub title: String,
    pub album: String,
    pub artist: String,
    pub release_date: String,
    pub link: Option<String>,
    pub artist_link: Option<String>,
    pub preview: Option<String>,
    pub artwork: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    pub title: String,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub cover_url: Option<String>,
}

/// Outcome of answering a trivia question
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { correct_answer: String },
}

/// A multiple-choice question with its answers already shuffled for display
#[derive(Clone, Debug, PartialEq)]
pub struct TriviaQuestion {
    pub question: String,
    pub correct_answer: String,
    pub answers: Vec<String>,
    pub category: String,
    pub difficulty: String,
    pub chosen: Option<usize>,
}

impl TriviaQuestion {
    /// Compare an answer against the correct one by exact string equality
    pub fn judge(&self, answer: &str) -> Verdict {
        if answer == self.correct_answer {
            Verdict::Correct
        } else {
            Verdict::Incorrect {
                correct_answer: self.correct_answer.clone(),
            }
        }
    }

    /// Record the answer at `index` and return its verdict.
    ///
    /// Only the first answer counts; later ones are ignored and return `None`.
    pub fn answer(&mut self, index: usize) -> Option<Verdict> {
        if self.chosen.is_some() {
            return None;
        }
        let verdict = self.judge(self.answers.get(index)?);
        self.chosen = Some(index);
        Some(verdict)
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.chosen
            .and_then(|i| self.answers.get(i))
            .map(|answer| self.judge(answer))
    }
}

/// Transformed result of one adapter fetch
#[derive(Clone, Debug, PartialEq)]
pub enum Recommendations {
    Shows(Vec<Show>),
    Songs(Vec<Song>),
    Joke(Option<Joke>),
    Books(Vec<Book>),
    Trivia(Vec<TriviaQuestion>),
}

impl Recommendations {
    pub fn len(&self) -> usize {
        match self {
            Recommendations::Shows(shows) => shows.len(),
            Recommendations::Songs(songs) => songs.len(),
            Recommendations::Joke(joke) => usize::from(joke.is_some()),
            Recommendations::Books(books) => books.len(),
            Recommendations::Trivia(questions) => questions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Identity of one outstanding fetch, used to drop stale completions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub category: Category,
    pub subgenre: String,
}

/// Represents the current view in the main content area
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ContentView {
    /// Category or subgenre not picked yet
    #[default]
    Empty,
    Loading {
        category: Category,
        subgenre: String,
    },
    Results {
        category: Category,
        subgenre: String,
        recommendations: Recommendations,
        selected_index: usize,
        /// Highlighted answer within the selected trivia question
        answer_index: usize,
    },
    /// Zero records, or a failed fetch (`failed`)
    NoResults {
        category: Category,
        subgenre: String,
        failed: bool,
    },
}

/// State for the main content area
#[derive(Clone, Debug, Default)]
pub struct ContentState {
    pub view: ContentView,
    /// Fetch whose completion may update `view`
    pub ticket: Option<FetchTicket>,
    pub generation: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> TriviaQuestion {
        TriviaQuestion {
            question: "Which country won the 2018 FIFA World Cup?".to_string(),
            correct_answer: "France".to_string(),
            answers: vec![
                "Croatia".to_string(),
                "France".to_string(),
                "Brazil".to_string(),
                "Germany".to_string(),
            ],
            category: "Sports".to_string(),
            difficulty: "easy".to_string(),
            chosen: None,
        }
    }

    #[test]
    fn test_answer_correct() {
        let mut q = question();
        assert_eq!(q.answer(1), Some(Verdict::Correct));
        assert_eq!(q.chosen, Some(1));
        assert_eq!(q.verdict(), Some(Verdict::Correct));
    }

    #[test]
    fn test_answer_incorrect_names_correct_answer() {
        let mut q = question();
        assert_eq!(
            q.answer(0),
            Some(Verdict::Incorrect { correct_answer: "France".to_string() })
        );
    }

    #[test]
    fn test_first_answer_is_final() {
        let mut q = question();
        assert_eq!(q.answer(1), Some(Verdict::Correct));
        assert_eq!(q.answer(0), None);
        assert_eq!(q.chosen, Some(1));
        assert_eq!(q.verdict(), Some(Verdict::Correct));
    }

    #[test]
    fn test_answer_out_of_range() {
        let mut q = question();
        assert_eq!(q.answer(9), None);
        assert_eq!(q.chosen, None);
        assert_eq!(q.verdict(), None);
    }

    #[test]
    fn test_judge_is_exact_match() {
        let q = question();
        assert!(matches!(q.judge("france"), Verdict::Incorrect { .. }));
    }

    #[test]
    fn test_recommendations_len() {
        assert!(Recommendations::Joke(None).is_empty());
        assert_eq!(
            Recommendations::Joke(Some(Joke {
                setup: "Knock knock.".to_string(),
                punchline: "Who's there?".to_string(),
            }))
            .len(),
            1
        );
        assert!(Recommendations::Songs(vec![]).is_empty());
    }
}
