use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::composer::{compose, Recommendation};
use super::domain::{CategoryScores, PersonalInfo};
use super::intake::AnswerGuard;
use super::questionnaire::{self, Question};
use super::report::ResultView;
use super::scoring::{score_breakdown, ScoreBreakdown};

/// Router builder exposing the questionnaire catalog and the recommendation endpoint.
pub fn quiz_router() -> Router {
    Router::new()
        .route("/api/v1/quiz/questions", get(questions_handler))
        .route("/api/v1/quiz/recommendation", post(recommendation_handler))
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub include_breakdown: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub generated_at: DateTime<Utc>,
    pub answered: usize,
    pub scores: CategoryScores,
    pub recommendation: Recommendation,
    pub view: ResultView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

pub(crate) async fn questions_handler() -> Json<&'static [Question]> {
    Json(questionnaire::questions())
}

pub(crate) async fn recommendation_handler(Json(request): Json<RecommendationRequest>) -> Response {
    let RecommendationRequest {
        answers,
        personal_info,
        include_breakdown,
    } = request;

    let answers = match AnswerGuard.answers_from_map(&answers) {
        Ok(answers) => answers,
        Err(violation) => {
            warn!(%violation, "rejected answer payload");
            let payload = json!({ "error": violation.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    };

    let breakdown = score_breakdown(&answers);
    let recommendation = compose(&breakdown.scores, &answers, &personal_info);
    let view = ResultView::build(&recommendation, &personal_info);
    info!(
        answered = answers.len(),
        title = %recommendation.title,
        "recommendation served"
    );

    let body = RecommendationResponse {
        generated_at: Utc::now(),
        answered: answers.len(),
        scores: breakdown.scores,
        recommendation,
        view,
        breakdown: include_breakdown.then_some(breakdown),
    };
    (StatusCode::OK, Json(body)).into_response()
}
