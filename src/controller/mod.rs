//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! coordinates between the model and view, and runs provider fetches.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `fetch`: Selection changes and the fetch tasks they start

mod input;
mod fetch;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::AppModel;
use crate::providers::Providers;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) providers: Providers,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>, providers: Providers) -> Self {
        Self { model, providers }
    }
}
