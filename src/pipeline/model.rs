//! Game data model serialized to the output JSON

use serde::{Deserialize, Serialize};

/// Top-level container written to the output file.
/// Questions keep the order of the rows they came from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameData {
    #[serde(rename = "Questions")]
    pub questions: Vec<Question>,
}

/// A single question with its answers in column order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "Question")]
    pub text: String,
    #[serde(rename = "Answers")]
    pub answers: Vec<Answer>,
}

/// One answer and its value. The value stays textual so leading zeros and
/// non-numeric tokens survive untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "Answer")]
    pub text: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl GameData {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Total number of answers across all questions
    pub fn answer_count(&self) -> usize {
        self.questions.iter().map(|q| q.answers.len()).sum()
    }
}

impl Answer {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}
