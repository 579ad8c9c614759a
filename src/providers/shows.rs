//! TVmaze show catalog, filtered locally by genre

use serde::Deserialize;

use crate::config::Config;
use crate::model::Show;

#[derive(Debug, Deserialize)]
pub(crate) struct ApiShow {
    name: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    rating: Option<ApiRating>,
    #[serde(default)]
    image: Option<ApiImage>,
    #[serde(default)]
    genres: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiRating {
    average: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ApiImage {
    medium: Option<String>,
}

/// The listing is the same for every subgenre
pub(crate) fn request_url(config: &Config) -> String {
    format!("{}/shows", config.endpoints.tvmaze)
}

/// Keep shows whose genres contain the label exactly (case-sensitive)
pub(crate) fn transform(shows: Vec<ApiShow>, subgenre: &str) -> Vec<Show> {
    shows
        .into_iter()
        .filter(|show| show.genres.iter().any(|g| g == subgenre))
        .map(|show| Show {
            name: show.name,
            status: show.status.unwrap_or_default(),
            rating: show.rating.and_then(|r| r.average),
            image: show.image.and_then(|i| i.medium),
            genres: show.genres,
        })
        .collect()
}
