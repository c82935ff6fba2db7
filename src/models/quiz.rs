// src/models/quiz.rs

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;

use super::question::Question;

/// Category names clients send to mean "questions from any category".
const ANY_CATEGORY_SENTINELS: [&str; 2] = ["click", "all"];

/// Body of `POST /quizzes`.
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    /// Ids already shown to the player.
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub id: Option<i64>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// How the candidate pool for the next quiz question is constrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizScope {
    Any,
    CategoryId(i64),
    CategoryName(String),
}

impl QuizRequest {
    /// A positive id wins over the name; `id: 0`, a sentinel name or no category at all mean `Any`.
    pub fn scope(&self) -> QuizScope {
        let Some(category) = &self.quiz_category else {
            return QuizScope::Any;
        };

        if let Some(id) = category.id.filter(|id| *id > 0) {
            return QuizScope::CategoryId(id);
        }

        match category.kind.as_deref().map(str::trim) {
            Some(name)
                if !name.is_empty()
                    && !ANY_CATEGORY_SENTINELS
                        .iter()
                        .any(|s| s.eq_ignore_ascii_case(name)) =>
            {
                QuizScope::CategoryName(name.to_string())
            }
            _ => QuizScope::Any,
        }
    }
}

/// Picks one question uniformly at random among those not in `previous`.
/// Returns `None` once every candidate has been seen.
pub fn select_next<'a, R: Rng + ?Sized>(
    candidates: &'a [Question],
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Option<&'a Question> {
    let unseen: Vec<&Question> = candidates
        .iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    unseen.choose(rng).copied()
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub status: bool,
    pub question: Question,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn question(id: i64) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            answer: "A".to_string(),
            category: 1,
            difficulty: 1,
        }
    }

    #[test]
    fn never_returns_a_previous_question() {
        let candidates: Vec<Question> = (1..=5).map(question).collect();
        let previous: HashSet<i64> = [1, 2, 4].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let picked = select_next(&candidates, &previous, &mut rng).unwrap();
            assert!(picked.id == 3 || picked.id == 5);
        }
    }

    #[test]
    fn reaches_every_unseen_question() {
        let candidates: Vec<Question> = (1..=3).map(question).collect();
        let previous = HashSet::new();
        let mut rng = StdRng::seed_from_u64(42);

        let seen: HashSet<i64> = (0..200)
            .map(|_| select_next(&candidates, &previous, &mut rng).unwrap().id)
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn exhausted_or_empty_pool_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let candidates: Vec<Question> = (1..=2).map(question).collect();
        let previous: HashSet<i64> = [1, 2].into_iter().collect();

        assert!(select_next(&candidates, &previous, &mut rng).is_none());
        assert!(select_next(&[], &HashSet::new(), &mut rng).is_none());
    }

    #[test]
    fn scope_resolution() {
        let parse = |v: serde_json::Value| serde_json::from_value::<QuizRequest>(v).unwrap().scope();

        assert_eq!(parse(serde_json::json!({})), QuizScope::Any);
        assert_eq!(parse(serde_json::json!({ "quiz_category": null })), QuizScope::Any);
        assert_eq!(
            parse(serde_json::json!({ "quiz_category": { "id": 0, "type": "click" } })),
            QuizScope::Any
        );
        assert_eq!(
            parse(serde_json::json!({ "quiz_category": { "type": "All" } })),
            QuizScope::Any
        );
        assert_eq!(
            parse(serde_json::json!({ "quiz_category": { "id": "3", "type": "History" } })),
            QuizScope::CategoryId(3)
        );
        assert_eq!(
            parse(serde_json::json!({ "quiz_category": { "type": " Science " } })),
            QuizScope::CategoryName("Science".to_string())
        );
    }
}
