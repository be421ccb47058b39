mod catalog;
mod personalize;

use super::domain::{AnswerOption, AnswerSet, CategoryScores, PersonalInfo, ProductCategory};
use super::scoring::{compute_scores, KNOWLEDGE_QUESTIONS};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const CONSULTATION_TITLE: &str = "Personalized Consultation";

/// Recommendation handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Winning category; `None` means the consultation fallback.
    pub category: Option<ProductCategory>,
    pub title: String,
    pub description: String,
    /// Display order matters.
    pub reasons: Vec<String>,
    /// Only ever `Education`.
    pub secondary: Option<ProductCategory>,
}

impl Recommendation {
    pub fn is_consultation(&self) -> bool {
        self.category.is_none()
    }
}

/// Highest strictly positive score; earlier categories win ties.
pub fn select_category(scores: &CategoryScores) -> Option<ProductCategory> {
    let mut leader = None;
    let mut highest = 0;
    for (category, score) in scores.iter() {
        if score > highest {
            highest = score;
            leader = Some(category);
        }
    }
    leader
}

/// True when any knowledge question was answered with the lowest option.
pub fn needs_education(answers: &AnswerSet) -> bool {
    KNOWLEDGE_QUESTIONS
        .iter()
        .any(|question| answers.get(*question) == Some(AnswerOption::A))
}

pub fn compose(
    scores: &CategoryScores,
    answers: &AnswerSet,
    info: &PersonalInfo,
) -> Recommendation {
    let selected = select_category(scores);
    let copy = catalog::copy_for(selected);

    let secondary = match selected {
        Some(category) if category != ProductCategory::Education && needs_education(answers) => {
            Some(ProductCategory::Education)
        }
        _ => None,
    };

    let mut reasons: Vec<String> = copy.reasons.iter().map(|reason| reason.to_string()).collect();
    personalize::personalize_reasons(&mut reasons, selected, info);

    debug!(
        selected = selected.map(ProductCategory::key).unwrap_or("consultation"),
        secondary = secondary.is_some(),
        reasons = reasons.len(),
        "composed recommendation"
    );

    Recommendation {
        category: selected,
        title: copy.title.to_string(),
        description: copy.description(info.display_name()),
        reasons,
        secondary,
    }
}

/// Score `answers` and compose the recommendation in one call.
pub fn recommend(answers: &AnswerSet, info: &PersonalInfo) -> Recommendation {
    let scores = compute_scores(answers);
    compose(&scores, answers, info)
}
