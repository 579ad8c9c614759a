//! Core type definitions for the application

use std::fmt;

/// Top-level entertainment category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Jokes,
    Show,
    Books,
    Music,
    Trivia,
}

impl Category {
    /// All categories in the order they appear in the category bar
    pub const ALL: [Category; 5] = [
        Category::Jokes,
        Category::Show,
        Category::Books,
        Category::Music,
        Category::Trivia,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Jokes => "Jokes",
            Category::Show => "Show",
            Category::Books => "Books",
            Category::Music => "Music",
            Category::Trivia => "Trivia",
        }
    }

    /// Fixed, ordered subgenre list for this category
    pub fn subgenres(self) -> &'static [&'static str] {
        match self {
            Category::Jokes => &["Dad Joke", "Knock Knock", "General", "Programming"],
            Category::Show => &["Drama", "Romance", "Action", "Comedy", "Crime", "Science-Fiction"],
            Category::Books => &["Science Fiction", "Young Adult", "Poetry", "Action"],
            Category::Music => &["Pop", "Hip-Hop/Rap", "Rock", "R&B/Soul", "Alternative", "Jazz"],
            Category::Trivia => &[
                "General Knowledge",
                "Science: Computers",
                "History",
                "Sports",
                "Entertainment: Music",
            ],
        }
    }

    pub fn has_subgenre(self, label: &str) -> bool {
        self.subgenres().contains(&label)
    }

    /// Parse a category from its label, case-insensitively
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Noun used in the empty-result message ("No songs found for ...")
    pub fn result_noun(self) -> &'static str {
        match self {
            Category::Jokes => "joke",
            Category::Show => "shows",
            Category::Books => "books",
            Category::Music => "songs",
            Category::Trivia => "trivia questions",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    Categories,
    Subgenres,
    Content,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Categories => ActiveSection::Subgenres,
            ActiveSection::Subgenres => ActiveSection::Content,
            ActiveSection::Content => ActiveSection::Categories,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Categories => ActiveSection::Content,
            ActiveSection::Subgenres => ActiveSection::Categories,
            ActiveSection::Content => ActiveSection::Subgenres,
        }
    }
}

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_section: ActiveSection,
    /// Highlighted category in the category bar (before it is picked)
    pub category_cursor: usize,
    /// Highlighted row in the subgenre list
    pub subgenre_cursor: usize,
    pub show_help_popup: bool,
}
