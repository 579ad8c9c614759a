//! iTunes top-songs RSS feed by genre

use chrono::DateTime;
use serde::Deserialize;

use crate::config::Config;
use crate::model::Song;
use super::{lookup, OneOrMany};

const GENRE_IDS: &[(&str, u32)] = &[
    ("Pop", 14),
    ("Hip-Hop/Rap", 18),
    ("Rock", 21),
    ("R&B/Soul", 15),
    ("Alternative", 20),
    ("Jazz", 11),
];
const DEFAULT_GENRE_ID: u32 = 14;

#[derive(Debug, Deserialize)]
pub(crate) struct FeedResponse {
    feed: Feed,
}

#[derive(Debug, Deserialize)]
struct Feed {
    /// Absent when the genre has no entries
    #[serde(default)]
    entry: Option<OneOrMany<Entry>>,
}

#[derive(Debug, Deserialize)]
struct Label {
    label: String,
}

#[derive(Debug, Deserialize)]
struct Entry {
    id: EntryId,
    #[serde(rename = "im:name")]
    name: Label,
    #[serde(rename = "im:collection")]
    collection: Collection,
    #[serde(rename = "im:artist")]
    artist: Artist,
    #[serde(rename = "im:image", default)]
    images: Vec<Label>,
    #[serde(rename = "im:releaseDate", default)]
    release_date: Option<ReleaseDate>,
    #[serde(default)]
    link: Option<OneOrMany<Link>>,
}

#[derive(Debug, Deserialize)]
struct EntryId {
    label: String,
}

#[derive(Debug, Deserialize)]
struct Collection {
    #[serde(rename = "im:name")]
    name: Label,
}

#[derive(Debug, Deserialize)]
struct Artist {
    label: String,
    #[serde(default)]
    attributes: Option<Href>,
}

#[derive(Debug, Deserialize)]
struct Href {
    href: String,
}

#[derive(Debug, Deserialize)]
struct ReleaseDate {
    label: String,
    #[serde(default)]
    attributes: Option<Label>,
}

#[derive(Debug, Deserialize)]
struct Link {
    attributes: LinkAttributes,
}

#[derive(Debug, Deserialize)]
struct LinkAttributes {
    href: String,
    #[serde(default)]
    rel: Option<String>,
}

pub(crate) fn genre_id(subgenre: &str) -> u32 {
    lookup(GENRE_IDS, subgenre, DEFAULT_GENRE_ID)
}

pub(crate) fn request_url(config: &Config, subgenre: &str) -> String {
    format!(
        "{}/us/rss/topsongs/genre={}/json",
        config.endpoints.itunes,
        genre_id(subgenre)
    )
}

pub(crate) fn transform(response: FeedResponse) -> Vec<Song> {
    response
        .feed
        .entry
        .map(OneOrMany::into_vec)
        .unwrap_or_default()
        .into_iter()
        .map(|entry| {
            let links = entry.link.map(OneOrMany::into_vec).unwrap_or_default();
            let preview = links
                .iter()
                .find(|l| l.attributes.rel.as_deref() == Some("enclosure"))
                .map(|l| l.attributes.href.clone());

            Song {
                title: entry.name.label,
                album: entry.collection.name.label,
                artist: entry.artist.label,
                release_date: entry.release_date.map(format_release_date).unwrap_or_default(),
                link: Some(entry.id.label),
                artist_link: entry.artist.attributes.map(|a| a.href),
                preview,
                artwork: entry.images.into_iter().next().map(|i| i.label),
            }
        })
        .collect()
}

/// Prefer the feed's display date, else format the RFC 3339 timestamp
fn format_release_date(date: ReleaseDate) -> String {
    if let Some(display) = date.attributes {
        return display.label;
    }
    DateTime::parse_from_rfc3339(&date.label)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or(date.label)
}
