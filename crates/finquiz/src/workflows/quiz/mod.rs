//! Financial product questionnaire: answer intake, scoring, and recommendation.
//!
//! `scoring` and `composer` are pure functions over the answer snapshot. Everything
//! else (catalog, session state machine, result view, HTTP router) feeds them inputs
//! or renders their output.

pub mod composer;
pub mod domain;
pub mod intake;
pub mod questionnaire;
pub mod report;
pub mod router;
pub mod scoring;
pub mod session;

#[cfg(test)]
mod tests;

pub use composer::{
    compose, needs_education, recommend, select_category, Recommendation, CONSULTATION_TITLE,
};
pub use domain::{
    AgeBand, AnswerOption, AnswerSet, CategoryScores, ExperienceLevel, FinancialGoal, Gender,
    PersonalInfo, ProductCategory, ProfileChoice, QuestionId, MISSING_ANSWER_ORDINAL,
};
pub use intake::{AnswerGuard, IntakeViolation};
pub use questionnaire::{Question, QuestionOption};
pub use report::ResultView;
pub use router::quiz_router;
pub use scoring::{
    compute_scores, score_breakdown, ScoreBreakdown, ScoreComponent, ScoreFactor, SubScores,
};
pub use session::{LoadingMessage, QuizSession, QuizStage, SessionError};
