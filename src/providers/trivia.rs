//! Open Trivia DB multiple-choice batches

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::config::Config;
use crate::model::TriviaQuestion;
use super::html::decode_entities;
use super::lookup;

const CATEGORY_IDS: &[(&str, u32)] = &[
    ("General Knowledge", 9),
    ("Science: Computers", 18),
    ("History", 23),
    ("Sports", 21),
    ("Entertainment: Music", 12),
];
const DEFAULT_CATEGORY_ID: u32 = 9;

#[derive(Debug, Deserialize)]
pub(crate) struct TriviaResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<ApiQuestion>,
}

#[derive(Debug, Deserialize)]
struct ApiQuestion {
    question: String,
    correct_answer: String,
    #[serde(default)]
    incorrect_answers: Vec<String>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    difficulty: String,
}

pub(crate) fn category_id(subgenre: &str) -> u32 {
    lookup(CATEGORY_IDS, subgenre, DEFAULT_CATEGORY_ID)
}

pub(crate) fn request_url(config: &Config, subgenre: &str) -> String {
    format!(
        "{}/api.php?amount={}&category={}&type=multiple",
        config.endpoints.opentdb,
        config.limits.trivia,
        category_id(subgenre)
    )
}

/// Decode the text fields and shuffle each question's answers.
///
/// A non-zero response code (no results, invalid parameter, rate limited, ...)
/// is reported as an empty batch.
pub(crate) fn transform<R: Rng + ?Sized>(response: TriviaResponse, rng: &mut R) -> Vec<TriviaQuestion> {
    if response.response_code != 0 {
        tracing::debug!(response_code = response.response_code, "Trivia provider reported no results");
        return Vec::new();
    }

    response
        .results
        .into_iter()
        .map(|q| {
            let correct_answer = decode_entities(&q.correct_answer);
            let mut answers: Vec<String> = std::iter::once(correct_answer.clone())
                .chain(q.incorrect_answers.iter().map(|a| decode_entities(a)))
                .collect();
            answers.shuffle(rng);

            TriviaQuestion {
                question: decode_entities(&q.question),
                correct_answer,
                answers,
                category: decode_entities(&q.category),
                difficulty: q.difficulty,
                chosen: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Verdict;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn batch() -> TriviaResponse {
        serde_json::from_value(json!({
            "response_code": 0,
            "results": [
                {
                    "type": "multiple",
                    "difficulty": "medium",
                    "category": "Sports",
                    "question": "Which team won the &quot;Miracle on Ice&quot; in 1980?",
                    "correct_answer": "United States",
                    "incorrect_answers": ["Soviet Union", "Finland", "Sweden"]
                },
                {
                    "type": "multiple",
                    "difficulty": "easy",
                    "category": "Entertainment: Music",
                    "question": "Who sang &#039;Thriller&#039;?",
                    "correct_answer": "Michael Jackson",
                    "incorrect_answers": ["Prince", "Madonna", "Beyonc&eacute;"]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_category_mapping() {
        assert_eq!(category_id("General Knowledge"), 9);
        assert_eq!(category_id("Science: Computers"), 18);
        assert_eq!(category_id("History"), 23);
        assert_eq!(category_id("Sports"), 21);
        assert_eq!(category_id("Entertainment: Music"), 12);
        assert_eq!(category_id("Art"), 9);
    }

    #[test]
    fn test_sports_request_url() {
        assert_eq!(
            request_url(&Config::default(), "Sports"),
            "https://opentdb.com/api.php?amount=10&category=21&type=multiple"
        );
    }

    #[test]
    fn test_answers_are_permutation() {
        let questions = transform(batch(), &mut StdRng::seed_from_u64(7));
        assert_eq!(questions.len(), 2);

        let q = &questions[0];
        assert_eq!(q.answers.len(), 1 + 3);
        let mut sorted = q.answers.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["Finland", "Soviet Union", "Sweden", "United States"]);
    }

    #[test]
    fn test_entities_decoded() {
        let questions = transform(batch(), &mut StdRng::seed_from_u64(1));
        assert_eq!(questions[0].question, "Which team won the \"Miracle on Ice\" in 1980?");
        assert_eq!(questions[1].question, "Who sang 'Thriller'?");
        assert!(questions[1].answers.contains(&"Beyoncé".to_string()));
    }

    #[test]
    fn test_verdicts_against_shuffled_answers() {
        let questions = transform(batch(), &mut StdRng::seed_from_u64(3));
        let q = &questions[0];
        for answer in &q.answers {
            let verdict = q.judge(answer);
            if answer == "United States" {
                assert_eq!(verdict, Verdict::Correct);
            } else {
                assert_eq!(
                    verdict,
                    Verdict::Incorrect { correct_answer: "United States".to_string() }
                );
            }
        }
    }

    #[test]
    fn test_order_is_recomputed_per_fetch() {
        let mut rng = StdRng::seed_from_u64(42);
        let orders: Vec<Vec<String>> = (0..20)
            .map(|_| transform(batch(), &mut rng).remove(0).answers)
            .collect();
        assert!(orders.iter().any(|o| *o != orders[0]));
    }

    #[test]
    fn test_nonzero_response_code_is_empty() {
        let response: TriviaResponse =
            serde_json::from_value(json!({"response_code": 1, "results": []})).unwrap();
        assert!(transform(response, &mut StdRng::seed_from_u64(0)).is_empty());
    }
}
