//! CSV batch scoring: one recommendation per respondent row.

mod parser;

use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::workflows::quiz::{
    compose, compute_scores, AnswerGuard, AnswerSet, CategoryScores, IntakeViolation,
    PersonalInfo, Recommendation,
};

#[derive(Debug)]
pub enum BatchImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Intake { row: usize, source: IntakeViolation },
}

impl std::fmt::Display for BatchImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchImportError::Io(err) => write!(f, "failed to read respondent file: {}", err),
            BatchImportError::Csv(err) => write!(f, "invalid respondent CSV data: {}", err),
            BatchImportError::Intake { row, source } => {
                write!(f, "row {} has invalid answers: {}", row, source)
            }
        }
    }
}

impl std::error::Error for BatchImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchImportError::Io(err) => Some(err),
            BatchImportError::Csv(err) => Some(err),
            BatchImportError::Intake { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for BatchImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Scored respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub row: usize,
    pub personal_info: PersonalInfo,
    pub answers: AnswerSet,
    pub scores: CategoryScores,
    pub recommendation: Recommendation,
}

pub struct BatchImporter;

impl BatchImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<BatchOutcome>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Score every row. The first row with an invalid answer aborts the batch.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<BatchOutcome>, BatchImportError> {
        let mut outcomes = Vec::new();

        for record in parser::parse_records(reader)? {
            let answers = AnswerGuard
                .answers_from_raw(
                    record
                        .raw_answers
                        .iter()
                        .map(|(question, value)| (question.key(), value.as_str())),
                )
                .map_err(|source| BatchImportError::Intake {
                    row: record.row,
                    source,
                })?;

            let scores = compute_scores(&answers);
            let recommendation = compose(&scores, &answers, &record.personal_info);
            debug!(row = record.row, title = %recommendation.title, "scored respondent");

            outcomes.push(BatchOutcome {
                row: record.row,
                personal_info: record.personal_info,
                answers,
                scores,
                recommendation,
            });
        }

        info!(rows = outcomes.len(), "batch scored");
        Ok(outcomes)
    }
}
