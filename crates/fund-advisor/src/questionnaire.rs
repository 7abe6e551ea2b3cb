//! Risk Questionnaire
//!
//! The six questions an investor answers, and the answer map fed to the
//! profile builder.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One of the six risk questions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    Age,
    Horizon,
    IncomeStability,
    LossTolerance,
    Goal,
    Experience,
}

/// A selectable answer and the score it contributes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub score: i32,
}

const fn opt(label: &'static str, score: i32) -> AnswerOption {
    AnswerOption { label, score }
}

const AGE_OPTIONS: &[AnswerOption] = &[
    opt("Under 25", 5),
    opt("25-35", 4),
    opt("36-45", 3),
    opt("46-55", 2),
    opt("Above 55", 1),
];

const HORIZON_OPTIONS: &[AnswerOption] = &[
    opt("Less than 1 year", 1),
    opt("1-3 years", 2),
    opt("3-5 years", 3),
    opt("5-10 years", 4),
    opt("More than 10 years", 5),
];

const INCOME_OPTIONS: &[AnswerOption] = &[
    opt("Irregular / Freelance", 2),
    opt("Stable salaried", 4),
    opt("Business owner with steady revenue", 3),
    opt("Retired with pension", 1),
];

const LOSS_OPTIONS: &[AnswerOption] = &[
    opt("Sell everything immediately", 1),
    opt("Sell some to limit losses", 2),
    opt("Hold and wait for recovery", 4),
    opt("Invest more at lower prices", 5),
];

const GOAL_OPTIONS: &[AnswerOption] = &[
    opt("Preserve my capital", 1),
    opt("Generate regular income", 2),
    opt("Grow wealth steadily", 3),
    opt("Maximize long-term returns", 5),
];

const EXPERIENCE_OPTIONS: &[AnswerOption] = &[
    opt("Never invested before", 1),
    opt("Only FDs and savings accounts", 2),
    opt("Some mutual funds or stocks", 3),
    opt("Active investor for 5+ years", 5),
];

impl Question {
    /// Display order
    pub const ALL: [Self; 6] = [
        Self::Age,
        Self::Horizon,
        Self::IncomeStability,
        Self::LossTolerance,
        Self::Goal,
        Self::Experience,
    ];

    /// Wire id used in answer maps
    pub const fn id(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Horizon => "horizon",
            Self::IncomeStability => "income_stability",
            Self::LossTolerance => "loss_tolerance",
            Self::Goal => "goal",
            Self::Experience => "experience",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.id() == id)
    }

    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Age => "What is your age group?",
            Self::Horizon => "How long do you plan to stay invested?",
            Self::IncomeStability => "How would you describe your income?",
            Self::LossTolerance => "If your portfolio fell 20% in a month, what would you do?",
            Self::Goal => "What is your primary investment goal?",
            Self::Experience => "How much investing experience do you have?",
        }
    }

    pub const fn options(self) -> &'static [AnswerOption] {
        match self {
            Self::Age => AGE_OPTIONS,
            Self::Horizon => HORIZON_OPTIONS,
            Self::IncomeStability => INCOME_OPTIONS,
            Self::LossTolerance => LOSS_OPTIONS,
            Self::Goal => GOAL_OPTIONS,
            Self::Experience => EXPERIENCE_OPTIONS,
        }
    }

    /// Inclusive score domain
    pub const fn range(self) -> (i32, i32) {
        match self {
            Self::IncomeStability => (1, 4),
            _ => (1, 5),
        }
    }

    pub const fn clamp(self, score: i32) -> i32 {
        let (lo, hi) = self.range();
        if score < lo {
            lo
        } else if score > hi {
            hi
        } else {
            score
        }
    }
}

/// Serializable view of a question for clients
#[derive(Clone, Debug, Serialize)]
pub struct QuestionView {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
}

/// The full questionnaire in display order
pub fn questionnaire() -> Vec<QuestionView> {
    Question::ALL
        .into_iter()
        .map(|q| QuestionView {
            id: q.id(),
            prompt: q.prompt(),
            options: q.options(),
        })
        .collect()
}

/// Raw answers keyed by question id
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, i32>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, question: Question, score: i32) -> Self {
        self.0.insert(question.id().to_string(), score);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, score: i32) {
        self.0.insert(id.into(), score);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw score as submitted
    pub fn raw(&self, question: Question) -> Option<i32> {
        self.0.get(question.id()).copied()
    }

    /// Score clamped into the question's domain
    pub fn get(&self, question: Question) -> Option<i32> {
        self.raw(question).map(|s| question.clamp(s))
    }

    /// Sum of recognised answers after clamping
    pub fn total_score(&self) -> i32 {
        self.0
            .iter()
            .filter_map(|(id, score)| match Question::from_id(id) {
                Some(q) => Some(q.clamp(*score)),
                None => {
                    tracing::debug!(question = %id, "Ignoring unknown question id");
                    None
                }
            })
            .sum()
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for Answers {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_scores_within_range() {
        for q in Question::ALL {
            let (lo, hi) = q.range();
            for o in q.options() {
                assert!((lo..=hi).contains(&o.score), "{} {}", q.id(), o.label);
            }
        }
    }

    #[test]
    fn test_total_score_clamps_and_ignores_unknown() {
        let answers: Answers = [("age", 9), ("income_stability", 5), ("favourite_colour", 3)]
            .into_iter()
            .collect();
        assert_eq!(answers.total_score(), 5 + 4);
        assert_eq!(answers.get(Question::Age), Some(5));
        assert_eq!(answers.raw(Question::IncomeStability), Some(5));
        assert_eq!(answers.get(Question::Goal), None);
    }

    #[test]
    fn test_answers_deserialize_from_plain_map() {
        let answers: Answers = serde_json::from_str(r#"{"age": 4, "goal": 3}"#).unwrap();
        assert_eq!(answers, Answers::new().with(Question::Age, 4).with(Question::Goal, 3));
        assert!(!answers.is_empty());
    }

    #[test]
    fn test_questionnaire_order() {
        let ids: Vec<_> = questionnaire().iter().map(|q| q.id).collect();
        assert_eq!(
            ids,
            ["age", "horizon", "income_stability", "loss_tolerance", "goal", "experience"]
        );
    }
}
