use axum::response::Response;
use serde_json::Value;

use crate::workflows::quiz::domain::{
    AgeBand, AnswerOption, AnswerSet, ExperienceLevel, FinancialGoal, Gender, PersonalInfo,
    QuestionId,
};

pub(super) fn all(option: AnswerOption) -> AnswerSet {
    AnswerSet::uniform(option)
}

/// Sub-scores knowledge 8, risk 8, time 6, goal 6, psych 6.
///
/// stocksBroker: 10 + 10 + 5 + 5 = 30; cfd: 8 + 12 + 5 + 5 + 5 = 35; forex 17;
/// binaryOptions 11; education 6.
pub(super) fn balanced_answers() -> AnswerSet {
    AnswerSet::new()
        .with(QuestionId::Q1, AnswerOption::C)
        .with(QuestionId::Q2, AnswerOption::C)
        .with(QuestionId::Q8, AnswerOption::B)
        .with(QuestionId::Q3, AnswerOption::B)
        .with(QuestionId::Q4, AnswerOption::B)
        .with(QuestionId::Q9, AnswerOption::B)
        .with(QuestionId::Q12, AnswerOption::B)
        .with(QuestionId::Q5, AnswerOption::C)
        .with(QuestionId::Q10, AnswerOption::C)
        .with(QuestionId::Q6, AnswerOption::B)
        .with(QuestionId::Q7, AnswerOption::B)
        .with(QuestionId::Q11, AnswerOption::B)
        .with(QuestionId::Q13, AnswerOption::B)
        .with(QuestionId::Q14, AnswerOption::B)
        .with(QuestionId::Q15, AnswerOption::B)
}

/// knowledge 8, risk 8, time 7, goal 6, psych 5.
///
/// stocksBroker: 10 + 10 + 5 + 5 = 30; cfd: 4 + 12 + 5 + 5 + 2 = 28;
/// forex: 4 + 4 + 5 + 2 + 2 = 17; binaryOptions: 3 + 4 + 2 + 2 = 11; education: 6.
pub(super) fn long_horizon_answers() -> AnswerSet {
    balanced_answers()
        .with(QuestionId::Q10, AnswerOption::D)
        .with(QuestionId::Q15, AnswerOption::A)
}

/// knowledge 6, risk 7, time 6, goal 6, psych 6.
///
/// stocksBroker: 10 + 10 + 2 + 5 = 27; cfd: 8 + 4 + 5 + 5 + 5 = 27; education 12;
/// forex 14; binaryOptions 11.
pub(super) fn stocks_cfd_tie_answers() -> AnswerSet {
    AnswerSet::new()
        .with(QuestionId::Q1, AnswerOption::B)
        .with(QuestionId::Q2, AnswerOption::B)
        .with(QuestionId::Q8, AnswerOption::B)
        .with(QuestionId::Q3, AnswerOption::A)
        .with(QuestionId::Q4, AnswerOption::B)
        .with(QuestionId::Q9, AnswerOption::B)
        .with(QuestionId::Q12, AnswerOption::B)
        .with(QuestionId::Q5, AnswerOption::C)
        .with(QuestionId::Q10, AnswerOption::C)
        .with(QuestionId::Q6, AnswerOption::B)
        .with(QuestionId::Q7, AnswerOption::B)
        .with(QuestionId::Q11, AnswerOption::B)
        .with(QuestionId::Q13, AnswerOption::B)
        .with(QuestionId::Q14, AnswerOption::B)
        .with(QuestionId::Q15, AnswerOption::B)
}

/// Tie answers with q1 = a: knowledge drops to 5, so cfd falls to 24 and
/// stocksBroker (27) wins outright while the education flag is raised.
pub(super) fn stocks_with_knowledge_gap() -> AnswerSet {
    stocks_cfd_tie_answers().with(QuestionId::Q1, AnswerOption::A)
}

pub(super) fn full_profile() -> PersonalInfo {
    PersonalInfo {
        name: "Avery".to_string(),
        age: Some(AgeBand::From25To34),
        gender: Some(Gender::Nonbinary),
        experience: Some(ExperienceLevel::Experienced),
        goal: Some(FinancialGoal::GrowWealth),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
