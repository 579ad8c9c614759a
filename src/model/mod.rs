//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Category catalog and UI state
//! - `selection`: Two-level (category, subgenre) selection
//! - `content`: Domain records and content view state
//! - `app_model`: Main application model with state management methods

mod types;
mod selection;
mod content;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActiveSection, Category, UiState};

pub use selection::Selection;

pub use content::{
    Book, ContentState, ContentView, FetchTicket, Joke, Recommendations, Show, Song,
    TriviaQuestion, Verdict,
};

pub use app_model::AppModel;
