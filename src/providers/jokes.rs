//! Official Joke API, one random joke by type

use serde::Deserialize;

use crate::config::Config;
use crate::model::Joke;
use super::{lookup, OneOrMany};

const JOKE_TYPES: &[(&str, &str)] = &[
    ("Programming", "programming"),
    ("Dad Joke", "dad"),
    ("Knock Knock", "knock-knock"),
];
const DEFAULT_JOKE_TYPE: &str = "general";

#[derive(Debug, Deserialize)]
pub(crate) struct ApiJoke {
    setup: String,
    punchline: String,
}

pub(crate) fn joke_type(subgenre: &str) -> &'static str {
    lookup(JOKE_TYPES, subgenre, DEFAULT_JOKE_TYPE)
}

pub(crate) fn request_url(config: &Config, subgenre: &str) -> String {
    format!("{}/jokes/{}/random", config.endpoints.jokes, joke_type(subgenre))
}

/// The typed endpoint answers with a one-element array, the untyped one with an object
pub(crate) fn transform(response: OneOrMany<ApiJoke>) -> Option<Joke> {
    response.into_vec().into_iter().next().map(|joke| Joke {
        setup: joke.setup,
        punchline: joke.punchline,
    })
}
