//! Questionnaire intake: collects one 0..=3 answer per question and refuses
//! to hand off an incomplete set

use std::collections::{BTreeMap, HashMap};

use crate::model::AnswerSet;
use crate::model::questions::{MAX_ANSWER, MIN_ANSWER, QUESTIONS};

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Please answer all questions to continue.")]
    Incomplete { missing: Vec<&'static str> },
}

/// Answers picked so far, keyed by question id. Only in-range values are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    picked: BTreeMap<&'static str, u8>,
}

impl Selection {
    /// Read a submitted form. Unknown fields and values that are not an
    /// integer on the answer scale are dropped.
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let picked = QUESTIONS
            .iter()
            .filter_map(|question| {
                let raw = form.get(question.id)?;
                let value = raw.trim().parse::<u8>().ok()?;
                (MIN_ANSWER..=MAX_ANSWER)
                    .contains(&value)
                    .then_some((question.id, value))
            })
            .collect();

        Self { picked }
    }

    pub fn get(&self, id: &str) -> Option<u8> {
        self.picked.get(id).copied()
    }

    /// Question ids still without an answer, in question order
    pub fn missing(&self) -> Vec<&'static str> {
        QUESTIONS
            .iter()
            .map(|q| q.id)
            .filter(|id| !self.picked.contains_key(id))
            .collect()
    }

    /// Hand off the complete set, or report what is missing
    pub fn complete(&self) -> Result<AnswerSet, IntakeError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(IntakeError::Incomplete { missing });
        }

        Ok(self
            .picked
            .iter()
            .map(|(id, value)| (*id, f64::from(*value)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form(value: &str) -> HashMap<String, String> {
        QUESTIONS
            .iter()
            .map(|q| (q.id.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_complete_form() {
        let selection = Selection::from_form(&full_form("2"));
        let answers = selection.complete().unwrap();
        assert_eq!(answers.len(), 10);
        assert_eq!(answers.get("q10"), 2.0);
    }

    #[test]
    fn test_missing_question_reported() {
        let mut form = full_form("1");
        form.remove("q4");
        form.remove("q9");

        let selection = Selection::from_form(&form);
        assert_eq!(selection.missing(), vec!["q4", "q9"]);

        let err = selection.complete().unwrap_err();
        assert_eq!(err.to_string(), "Please answer all questions to continue.");
        let IntakeError::Incomplete { missing } = err;
        assert_eq!(missing, vec!["q4", "q9"]);
    }

    #[test]
    fn test_out_of_range_and_garbage_count_as_missing() {
        let mut form = full_form("0");
        form.insert("q1".to_string(), "4".to_string());
        form.insert("q2".to_string(), "-1".to_string());
        form.insert("q3".to_string(), "two".to_string());
        form.insert("q99".to_string(), "1".to_string());

        let selection = Selection::from_form(&form);
        assert_eq!(selection.missing(), vec!["q1", "q2", "q3"]);
        assert_eq!(selection.get("q4"), Some(0));
        assert_eq!(selection.get("q99"), None);
    }

    #[test]
    fn test_empty_form() {
        let selection = Selection::from_form(&HashMap::new());
        assert_eq!(selection.missing().len(), QUESTIONS.len());
        assert!(selection.complete().is_err());
    }
}
