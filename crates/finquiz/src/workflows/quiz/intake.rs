use std::collections::BTreeMap;

use super::domain::{AnswerOption, AnswerSet, QuestionId};

/// Validation errors raised while turning raw form values into an answer set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("unknown question identifier '{0}'")]
    UnknownQuestion(String),
    #[error("invalid answer value '{value}' for question {question} (expected a, b, c or d)")]
    InvalidAnswerValue { question: QuestionId, value: String },
}

/// Guard converting untyped answer maps into an [`AnswerSet`].
///
/// Blank values count as unanswered so partially filled forms pass through; the scoring
/// engine supplies the default ordinal for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerGuard;

impl AnswerGuard {
    pub fn answers_from_raw<'a, I>(&self, raw: I) -> Result<AnswerSet, IntakeViolation>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut answers = AnswerSet::new();
        for (key, value) in raw {
            let question = QuestionId::parse(key)
                .ok_or_else(|| IntakeViolation::UnknownQuestion(key.trim().to_string()))?;
            if let Some(option) = self.option_for(question, value)? {
                answers.insert(question, option);
            }
        }
        Ok(answers)
    }

    pub fn answers_from_map(
        &self,
        raw: &BTreeMap<String, String>,
    ) -> Result<AnswerSet, IntakeViolation> {
        self.answers_from_raw(raw.iter().map(|(key, value)| (key.as_str(), value.as_str())))
    }

    /// Parse `q1=a` style pairs as accepted by the command line.
    pub fn answers_from_pairs<S: AsRef<str>>(
        &self,
        pairs: &[S],
    ) -> Result<AnswerSet, IntakeViolation> {
        let mut split = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let pair = pair.as_ref();
            match pair.split_once('=') {
                Some((key, value)) => split.push((key, value)),
                None => return Err(IntakeViolation::UnknownQuestion(pair.trim().to_string())),
            }
        }
        self.answers_from_raw(split)
    }

    fn option_for(
        &self,
        question: QuestionId,
        value: &str,
    ) -> Result<Option<AnswerOption>, IntakeViolation> {
        if value.trim().is_empty() {
            return Ok(None);
        }

        AnswerOption::parse(value)
            .map(Some)
            .ok_or_else(|| IntakeViolation::InvalidAnswerValue {
                question,
                value: value.to_string(),
            })
    }
}
