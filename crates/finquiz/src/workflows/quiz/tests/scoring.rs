use super::common::*;
use crate::workflows::quiz::composer::recommend;
use crate::workflows::quiz::domain::{
    AnswerOption, AnswerSet, CategoryScores, ExperienceLevel, FinancialGoal, Gender,
    PersonalInfo, ProductCategory, QuestionId,
};
use crate::workflows::quiz::scoring::{compute_scores, score_breakdown, SubScores};

#[test]
fn all_lowest_answers_favor_education() {
    let breakdown = score_breakdown(&all(AnswerOption::A));

    assert_eq!(
        breakdown.sub_scores,
        SubScores {
            knowledge: 3,
            risk: 4,
            time: 2,
            goal: 3,
            psych: 3,
        }
    );
    assert_eq!(
        breakdown.scores,
        CategoryScores {
            education: 21,
            stocks_broker: 20,
            cfd: 18,
            forex: 20,
            binary_options: 20,
        }
    );
}

#[test]
fn all_highest_answers_zero_out_education() {
    let breakdown = score_breakdown(&all(AnswerOption::D));

    assert_eq!(
        breakdown.sub_scores,
        SubScores {
            knowledge: 12,
            risk: 16,
            time: 8,
            goal: 12,
            psych: 12,
        }
    );
    assert_eq!(breakdown.scores.education, 0);
    assert_eq!(breakdown.scores.stocks_broker, 20);
    assert_eq!(breakdown.scores.cfd, 27);
    assert_eq!(breakdown.scores.forex, 29);
    // Long horizon misses the short-term band: 3 + 12 + 6 + 6.
    assert_eq!(breakdown.scores.binary_options, 27);
}

#[test]
fn empty_answer_set_scores_like_all_highest() {
    assert_eq!(
        compute_scores(&AnswerSet::new()),
        compute_scores(&all(AnswerOption::D))
    );
}

#[test]
fn missing_answers_only_default_their_own_group() {
    let without_time: AnswerSet = all(AnswerOption::A)
        .iter()
        .filter(|(question, _)| !matches!(question, QuestionId::Q5 | QuestionId::Q10))
        .collect();

    let breakdown = score_breakdown(&without_time);
    assert_eq!(breakdown.sub_scores.time, 8);
    assert_eq!(breakdown.sub_scores.knowledge, 3);
}

#[test]
fn scores_are_deterministic() {
    let answers = balanced_answers();
    let first = compute_scores(&answers);
    let second = compute_scores(&answers);
    assert_eq!(first, second);
    assert_eq!(first.cfd, 35);
    assert_eq!(first.stocks_broker, 30);
}

#[test]
fn breakdown_components_sum_to_totals() {
    let breakdown = score_breakdown(&long_horizon_answers());
    for category in ProductCategory::ordered() {
        let summed: u32 = breakdown
            .components_for(category)
            .map(|component| component.points)
            .sum();
        assert_eq!(summed, breakdown.scores.get(category), "{category}");
    }
    assert_eq!(breakdown.scores.stocks_broker, 30);
    assert_eq!(breakdown.scores.cfd, 28);
}

#[test]
fn tie_fixture_produces_equal_stock_and_cfd_scores() {
    let scores = compute_scores(&stocks_cfd_tie_answers());
    assert_eq!(scores.stocks_broker, 27);
    assert_eq!(scores.cfd, 27);
    assert_eq!(scores.education, 12);
    assert_eq!(scores.forex, 14);
    assert_eq!(scores.binary_options, 11);
}

#[test]
fn personal_info_never_reaches_scoring() {
    let answers = balanced_answers();
    let baseline = compute_scores(&answers);

    let profiles = [
        PersonalInfo::default(),
        full_profile(),
        PersonalInfo {
            name: "Someone Else".to_string(),
            age: None,
            gender: Some(Gender::PreferNot),
            experience: Some(ExperienceLevel::Professional),
            goal: Some(FinancialGoal::QuickReturns),
        },
    ];

    for profile in profiles {
        let _ = recommend(&answers, &profile);
        assert_eq!(compute_scores(&answers), baseline);
    }
}
