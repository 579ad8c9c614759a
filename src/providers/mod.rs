//! Content providers
//!
//! One adapter per category. Each adapter maps a subgenre label to its
//! provider's parameter, builds the request URL, and turns the JSON response
//! into display records. HTTP access goes through [`JsonSource`] so the
//! adapters can be exercised without a network.

mod books;
mod html;
mod jokes;
mod music;
mod shows;
mod trivia;

use std::sync::Arc;

use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::Config;
use crate::error::FetchError;
use crate::model::{Category, Recommendations};

/// Read-only JSON GET access to the providers
#[async_trait::async_trait]
pub trait JsonSource: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError>;
}

/// [`JsonSource`] backed by reqwest
#[derive(Clone)]
pub struct HttpSource {
    http_client: HttpClient,
}

impl HttpSource {
    pub fn new() -> Result<Self, FetchError> {
        let http_client = HttpClient::builder()
            .user_agent(concat!("entertain-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http_client })
    }
}

#[async_trait::async_trait]
impl JsonSource for HttpSource {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Dispatches a (category, subgenre) pick to the matching adapter
#[derive(Clone)]
pub struct Providers {
    source: Arc<dyn JsonSource>,
    config: Arc<Config>,
}

impl Providers {
    pub fn new(source: Arc<dyn JsonSource>, config: Arc<Config>) -> Self {
        Self { source, config }
    }

    pub fn request_url(&self, category: Category, subgenre: &str) -> String {
        let config = self.config.as_ref();
        match category {
            Category::Show => shows::request_url(config),
            Category::Music => music::request_url(config, subgenre),
            Category::Jokes => jokes::request_url(config, subgenre),
            Category::Books => books::request_url(config, subgenre),
            Category::Trivia => trivia::request_url(config, subgenre),
        }
    }

    /// Issue the category's single request and transform the response
    pub async fn fetch(&self, category: Category, subgenre: &str) -> Result<Recommendations, FetchError> {
        let url = self.request_url(category, subgenre);
        let body = self.source.get_json(&url).await?;
        let config = self.config.as_ref();

        let recommendations = match category {
            Category::Show => Recommendations::Shows(shows::transform(decode(body)?, subgenre)),
            Category::Music => Recommendations::Songs(music::transform(decode(body)?)),
            Category::Jokes => Recommendations::Joke(jokes::transform(decode(body)?)),
            Category::Books => Recommendations::Books(books::transform(decode(body)?, config)),
            Category::Trivia => Recommendations::Trivia(trivia::transform(
                decode(body)?,
                &mut rand::thread_rng(),
            )),
        };
        Ok(recommendations)
    }
}

fn decode<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, FetchError> {
    Ok(serde_json::from_value(body)?)
}

/// Finite label → parameter table with an explicit fallback for unknown labels
pub(crate) fn lookup<T: Copy>(table: &[(&str, T)], label: &str, default: T) -> T {
    match table.iter().find(|(key, _)| *key == label) {
        Some((_, value)) => *value,
        None => {
            tracing::debug!(label, "Unrecognized subgenre, using default mapping");
            default
        }
    }
}

/// A field some providers send as a bare object when there is exactly one item
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}
