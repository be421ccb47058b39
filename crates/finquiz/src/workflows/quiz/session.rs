use serde::Serialize;
use tracing::{debug, info};

use super::composer::{recommend, Recommendation};
use super::domain::{AnswerOption, AnswerSet, PersonalInfo, QuestionId};
use super::questionnaire::{self, Question};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStage {
    Intro,
    Questioning,
    Loading,
    Result,
}

impl QuizStage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Questioning => "questioning",
            Self::Loading => "loading",
            Self::Result => "result",
        }
    }
}

/// Errors raised by session transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("cannot {action} while the quiz is in the {} stage", .stage.label())]
    InvalidTransition {
        stage: QuizStage,
        action: &'static str,
    },
    #[error("profile is missing: {}", .missing.join(", "))]
    IncompleteProfile { missing: Vec<&'static str> },
    #[error("question {0} has not been answered yet")]
    Unanswered(QuestionId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadingMessage {
    pub message: &'static str,
    pub marker: &'static str,
}

const LOADING_MESSAGES: [LoadingMessage; 5] = [
    LoadingMessage {
        message: "Analyzing your risk tolerance...",
        marker: "🔍",
    },
    LoadingMessage {
        message: "Evaluating market opportunities...",
        marker: "📊",
    },
    LoadingMessage {
        message: "Calculating optimal strategies...",
        marker: "🧮",
    },
    LoadingMessage {
        message: "Finding your perfect financial match...",
        marker: "💫",
    },
    LoadingMessage {
        message: "Customizing recommendations just for you...",
        marker: "✨",
    },
];

/// Explicit state record for the interactive questionnaire.
///
/// The record only tracks progress; the recommendation is recomputed from the answer
/// snapshot on demand so the scoring engine stays stateless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSession {
    stage: QuizStage,
    question_index: usize,
    answers: AnswerSet,
    personal_info: PersonalInfo,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            stage: QuizStage::Intro,
            question_index: 0,
            answers: AnswerSet::new(),
            personal_info: PersonalInfo::default(),
        }
    }

    pub fn stage(&self) -> QuizStage {
        self.stage
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn update_personal_info(&mut self, info: PersonalInfo) -> Result<(), SessionError> {
        self.expect_stage(QuizStage::Intro, "edit the profile")?;
        self.personal_info = info;
        Ok(())
    }

    /// Leave the intro form. Every profile field must be filled in.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.expect_stage(QuizStage::Intro, "start the quiz")?;
        let missing = self.personal_info.missing_fields();
        if !missing.is_empty() {
            return Err(SessionError::IncompleteProfile { missing });
        }

        self.stage = QuizStage::Questioning;
        self.question_index = 0;
        info!(
            experience = ?self.personal_info.experience,
            goal = ?self.personal_info.goal,
            "quiz started"
        );
        Ok(())
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        match self.stage {
            QuizStage::Questioning => questionnaire::question_at(self.question_index),
            _ => None,
        }
    }

    pub fn current_answer(&self) -> Option<AnswerOption> {
        self.current_question()
            .and_then(|question| self.answers.get(question.id))
    }

    /// Record (or replace) the answer for the current question.
    pub fn select_answer(&mut self, option: AnswerOption) -> Result<QuestionId, SessionError> {
        let question = self
            .current_question()
            .ok_or(SessionError::InvalidTransition {
                stage: self.stage,
                action: "answer a question",
            })?;
        self.answers.insert(question.id, option);
        debug!(question = %question.id, option = %option, "answer recorded");
        Ok(question.id)
    }

    /// Advance to the next question, or into the loading stage after the last one.
    pub fn next(&mut self) -> Result<QuizStage, SessionError> {
        let question = self
            .current_question()
            .ok_or(SessionError::InvalidTransition {
                stage: self.stage,
                action: "advance",
            })?;
        if self.answers.get(question.id).is_none() {
            return Err(SessionError::Unanswered(question.id));
        }

        if self.question_index + 1 < questionnaire::question_count() {
            self.question_index += 1;
        } else {
            self.stage = QuizStage::Loading;
            info!(answered = self.answers.len(), "questionnaire complete");
        }
        Ok(self.stage)
    }

    /// Step back one question. Stays put on the first question.
    pub fn previous(&mut self) -> Result<usize, SessionError> {
        self.expect_stage(QuizStage::Questioning, "go back")?;
        self.question_index = self.question_index.saturating_sub(1);
        Ok(self.question_index)
    }

    /// Completion percentage shown on the progress bar (current index over total).
    pub fn progress_pct(&self) -> f32 {
        match self.stage {
            QuizStage::Intro => 0.0,
            QuizStage::Questioning => {
                self.question_index as f32 / questionnaire::question_count() as f32 * 100.0
            }
            QuizStage::Loading | QuizStage::Result => 100.0,
        }
    }

    /// Deterministic pick so repeated renders of the same session agree.
    pub fn loading_message(&self) -> LoadingMessage {
        let seed: usize = self
            .answers
            .iter()
            .map(|(_, option)| usize::from(option.ordinal()))
            .sum::<usize>()
            + self.personal_info.name.chars().count();
        LOADING_MESSAGES[seed % LOADING_MESSAGES.len()]
    }

    /// Finish the loading stage and produce the recommendation.
    pub fn reveal(&mut self) -> Result<Recommendation, SessionError> {
        self.expect_stage(QuizStage::Loading, "reveal the result")?;
        self.stage = QuizStage::Result;
        let recommendation = recommend(&self.answers, &self.personal_info);
        info!(title = %recommendation.title, "result revealed");
        Ok(recommendation)
    }

    pub fn recommendation(&self) -> Option<Recommendation> {
        (self.stage == QuizStage::Result).then(|| recommend(&self.answers, &self.personal_info))
    }

    /// Start over from the intro form, keeping the profile but discarding answers.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.expect_stage(QuizStage::Result, "restart")?;
        self.stage = QuizStage::Intro;
        self.question_index = 0;
        self.answers = AnswerSet::new();
        Ok(())
    }

    fn expect_stage(&self, stage: QuizStage, action: &'static str) -> Result<(), SessionError> {
        if self.stage == stage {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                stage: self.stage,
                action,
            })
        }
    }
}
