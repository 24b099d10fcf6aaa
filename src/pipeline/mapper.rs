//! Row to question mapping
//!
//! Column 0 is the question text. The remaining columns alternate between
//! answer text (even index) and answer value (odd index), where the index is
//! the field's position within the remainder. Empty fields are skipped but
//! still occupy their index, so holes never shift the pairing.

use super::model::{Answer, GameData, Question};

/// Map one parsed row into a question.
///
/// A value field completes an answer using the most recently seen text.
/// The pending text is not reset after an answer is emitted, so a later
/// value with no new text repeats the previous text. A text with no value
/// after it never produces an answer.
pub fn map_record<S: AsRef<str>>(record: &[S]) -> Question {
    let Some((first, rest)) = record.split_first() else {
        return Question::default();
    };

    let mut answers = Vec::new();
    let mut pending = String::new();

    for (i, field) in rest.iter().enumerate() {
        let field = field.as_ref();
        if field.is_empty() {
            continue;
        }

        if i % 2 == 0 {
            pending = field.to_string();
        } else {
            answers.push(Answer::new(pending.clone(), field));
        }
    }

    Question {
        text: first.as_ref().to_string(),
        answers,
    }
}

/// Map every row of a table, preserving row order
pub fn map_records(records: &[Vec<String>]) -> GameData {
    GameData::new(records.iter().map(|r| map_record(r.as_slice())).collect())
}
