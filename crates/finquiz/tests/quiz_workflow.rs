//! End-to-end questionnaire scenarios driven through the public API: raw form values go
//! through the intake guard, the session state machine and the HTTP router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use finquiz::workflows::quiz::{
    compute_scores, quiz_router, recommend, AgeBand, AnswerGuard, AnswerOption, ExperienceLevel,
    FinancialGoal, Gender, PersonalInfo, ProductCategory, QuizSession, QuizStage, ResultView,
};

fn respondent() -> PersonalInfo {
    PersonalInfo {
        name: "Dana".to_string(),
        age: Some(AgeBand::From55To64),
        gender: Some(Gender::Female),
        experience: Some(ExperienceLevel::Professional),
        goal: Some(FinancialGoal::PassiveIncome),
    }
}

#[test]
fn form_values_flow_into_a_personalized_recommendation() {
    let answers = AnswerGuard
        .answers_from_raw([
            ("q1", "d"),
            ("q2", "d"),
            ("q8", "d"),
            ("q3", "d"),
            ("q4", "d"),
            ("q9", "d"),
            ("q12", "d"),
            ("q5", "d"),
            ("q10", "d"),
        ])
        .expect("valid answers");

    let info = respondent();
    let recommendation = recommend(&answers, &info);
    assert_eq!(recommendation.category, Some(ProductCategory::Forex));
    assert!(recommendation
        .description
        .starts_with("Dana, your risk profile"));
    assert_eq!(
        recommendation.reasons.last().map(String::as_str),
        Some("Leverages your professional financial background 🏆")
    );

    let view = ResultView::build(&recommendation, &info);
    assert!(view
        .profile_fit
        .as_deref()
        .is_some_and(|fit| fit.contains("(55-64), women with")));
}

#[test]
fn session_and_direct_scoring_agree() {
    let mut session = QuizSession::new();
    session.update_personal_info(respondent()).expect("intro");
    session.start().expect("complete profile");

    let picks = [
        AnswerOption::B,
        AnswerOption::C,
        AnswerOption::A,
        AnswerOption::D,
        AnswerOption::B,
    ];
    let mut step = 0;
    while session.stage() == QuizStage::Questioning {
        session
            .select_answer(picks[step % picks.len()])
            .expect("answer");
        session.next().expect("advance");
        step += 1;
    }
    assert_eq!(step, 15);
    assert!(session.answers().is_complete());

    let revealed = session.reveal().expect("loading stage");
    let direct = recommend(session.answers(), session.personal_info());
    assert_eq!(revealed, direct);
    assert_eq!(
        compute_scores(session.answers()),
        compute_scores(&session.answers().clone())
    );
}

#[tokio::test]
async fn router_matches_library_output() {
    let answers = json!({
        "q1": "b", "q2": "b", "q8": "b",
        "q3": "a", "q4": "b", "q9": "b", "q12": "b",
        "q5": "c", "q10": "c",
        "q6": "b", "q7": "b", "q11": "b",
        "q13": "b", "q14": "b", "q15": "b",
    });
    let request = Request::post("/api/v1/quiz/recommendation")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(&json!({ "answers": answers })).unwrap(),
        ))
        .unwrap();

    let response = quiz_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let payload: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(payload["scores"]["stocksBroker"], 27);
    assert_eq!(payload["scores"]["cfd"], 27);
    assert_eq!(payload["recommendation"]["category"], "stocksBroker");
    assert_eq!(payload["recommendation"]["secondary"], Value::Null);
}
