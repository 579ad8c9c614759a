//! Open Library subject listings

use serde::Deserialize;

use crate::config::Config;
use crate::model::Book;
use super::lookup;

const SUBJECTS: &[(&str, &str)] = &[
    ("Science Fiction", "science_fiction"),
    ("Young Adult", "young_adult"),
    ("Poetry", "poetry"),
    ("Action", "action"),
];
const DEFAULT_SUBJECT: &str = "action";

#[derive(Debug, Deserialize)]
pub(crate) struct SubjectResponse {
    #[serde(default)]
    works: Vec<Work>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Work {
    title: String,
    #[serde(default)]
    authors: Vec<Author>,
    #[serde(default)]
    cover_edition_key: Option<String>,
    #[serde(default)]
    cover_id: Option<u64>,
    #[serde(default)]
    first_publish_year: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct Author {
    name: String,
}

pub(crate) fn subject(subgenre: &str) -> &'static str {
    lookup(SUBJECTS, subgenre, DEFAULT_SUBJECT)
}

pub(crate) fn request_url(config: &Config, subgenre: &str) -> String {
    format!(
        "{}/subjects/{}.json?limit={}",
        config.endpoints.openlibrary,
        subject(subgenre),
        config.limits.books
    )
}

/// Medium cover by edition key, falling back to the numeric cover id
pub(crate) fn cover_url(covers_base: &str, work: &Work) -> Option<String> {
    match (&work.cover_edition_key, work.cover_id) {
        (Some(olid), _) if !olid.is_empty() => Some(format!("{covers_base}/b/olid/{olid}-M.jpg")),
        (_, Some(id)) => Some(format!("{covers_base}/b/id/{id}-M.jpg")),
        _ => None,
    }
}

pub(crate) fn transform(response: SubjectResponse, config: &Config) -> Vec<Book> {
    let covers_base = config.endpoints.openlibrary_covers.as_str();
    response
        .works
        .into_iter()
        .map(|work| Book {
            cover_url: cover_url(covers_base, &work),
            author: work.authors.into_iter().next().map(|a| a.name),
            title: work.title,
            year: work.first_publish_year,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COVERS: &str = "https://covers.openlibrary.org";

    fn work(value: serde_json::Value) -> Work {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_subject_mapping() {
        assert_eq!(subject("Science Fiction"), "science_fiction");
        assert_eq!(subject("Young Adult"), "young_adult");
        assert_eq!(subject("Poetry"), "poetry");
        assert_eq!(subject("Action"), "action");
        assert_eq!(subject("Westerns"), "action");
    }

    #[test]
    fn test_request_url() {
        assert_eq!(
            request_url(&Config::default(), "Young Adult"),
            "https://openlibrary.org/subjects/young_adult.json?limit=12"
        );
    }

    #[test]
    fn test_cover_prefers_edition_key() {
        let w = work(json!({"title": "Dune", "cover_edition_key": "OL26242482M", "cover_id": 11481354}));
        assert_eq!(
            cover_url(COVERS, &w).as_deref(),
            Some("https://covers.openlibrary.org/b/olid/OL26242482M-M.jpg")
        );
    }

    #[test]
    fn test_cover_falls_back_to_cover_id() {
        let w = work(json!({"title": "The Road", "cover_id": 8231856}));
        assert_eq!(
            cover_url(COVERS, &w).as_deref(),
            Some("https://covers.openlibrary.org/b/id/8231856-M.jpg")
        );

        let w = work(json!({"title": "The Road", "cover_edition_key": null, "cover_id": 8231856}));
        assert_eq!(
            cover_url(COVERS, &w).as_deref(),
            Some("https://covers.openlibrary.org/b/id/8231856-M.jpg")
        );
    }

    #[test]
    fn test_no_cover_identifiers() {
        let w = work(json!({"title": "Untitled"}));
        assert_eq!(cover_url(COVERS, &w), None);
    }

    #[test]
    fn test_transform_works() {
        let response: SubjectResponse = serde_json::from_value(json!({
            "name": "poetry",
            "work_count": 2,
            "works": [
                {
                    "key": "/works/OL1W",
                    "title": "Leaves of Grass",
                    "authors": [{"key": "/authors/OL1A", "name": "Walt Whitman"}],
                    "cover_id": 12345,
                    "first_publish_year": 1855
                },
                {"key": "/works/OL2W", "title": "Anonymous Verse", "authors": []}
            ]
        }))
        .unwrap();

        let books = transform(response, &Config::default());
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "Leaves of Grass");
        assert_eq!(books[0].author.as_deref(), Some("Walt Whitman"));
        assert_eq!(books[0].year, Some(1855));
        assert_eq!(books[0].cover_url.as_deref(), Some("https://covers.openlibrary.org/b/id/12345-M.jpg"));
        assert_eq!(books[1].author, None);
        assert_eq!(books[1].year, None);
    }
}
