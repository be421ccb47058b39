mod rules;

pub(crate) use rules::KNOWLEDGE_QUESTIONS;

use super::domain::{AnswerSet, CategoryScores, ProductCategory};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Intermediate group sums that every category rule is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    /// q1 + q2 + q8, range 3..=12.
    pub knowledge: u8,
    /// q3 + q4 + q9 + q12, range 4..=16.
    pub risk: u8,
    /// q5 + q10, range 2..=8.
    pub time: u8,
    /// q6 + q7 + q11, range 3..=12.
    pub goal: u8,
    /// q13 + q14 + q15, range 3..=12.
    pub psych: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Knowledge,
    Risk,
    TimeHorizon,
    GoalOrientation,
    Psychology,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Knowledge => "knowledge",
            Self::Risk => "risk tolerance",
            Self::TimeHorizon => "time horizon",
            Self::GoalOrientation => "goal orientation",
            Self::Psychology => "trading psychology",
        }
    }
}

/// Discrete contribution to a category score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub category: ProductCategory,
    pub factor: ScoreFactor,
    pub points: u32,
    pub notes: String,
}

/// Scoring output with the trail that produced each total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub sub_scores: SubScores,
    pub components: Vec<ScoreComponent>,
    pub scores: CategoryScores,
}

impl ScoreBreakdown {
    pub fn components_for(
        &self,
        category: ProductCategory,
    ) -> impl Iterator<Item = &ScoreComponent> + '_ {
        self.components
            .iter()
            .filter(move |component| component.category == category)
    }
}

/// Score every product category for `answers`. Missing answers count as option `d`.
pub fn compute_scores(answers: &AnswerSet) -> CategoryScores {
    score_breakdown(answers).scores
}

pub fn score_breakdown(answers: &AnswerSet) -> ScoreBreakdown {
    let sub_scores = rules::sub_scores(answers);
    let components = rules::score_components(&sub_scores);

    let mut scores = CategoryScores::default();
    for component in &components {
        scores.add(component.category, component.points);
    }

    debug!(
        answered = answers.len(),
        knowledge = sub_scores.knowledge,
        risk = sub_scores.risk,
        time = sub_scores.time,
        goal = sub_scores.goal,
        psych = sub_scores.psych,
        "scored answer set"
    );

    ScoreBreakdown {
        sub_scores,
        components,
        scores,
    }
}
