use super::super::domain::{AnswerSet, ProductCategory, QuestionId};
use super::{ScoreComponent, ScoreFactor, SubScores};

/// Knowledge group. An `a` answer on any of these also flags the need for education.
pub(crate) const KNOWLEDGE_QUESTIONS: [QuestionId; 3] =
    [QuestionId::Q1, QuestionId::Q2, QuestionId::Q8];
const RISK_QUESTIONS: [QuestionId; 4] = [
    QuestionId::Q3,
    QuestionId::Q4,
    QuestionId::Q9,
    QuestionId::Q12,
];
const TIME_QUESTIONS: [QuestionId; 2] = [QuestionId::Q5, QuestionId::Q10];
const GOAL_QUESTIONS: [QuestionId; 3] = [QuestionId::Q6, QuestionId::Q7, QuestionId::Q11];
const PSYCH_QUESTIONS: [QuestionId; 3] = [QuestionId::Q13, QuestionId::Q14, QuestionId::Q15];

fn group_sum(answers: &AnswerSet, group: &[QuestionId]) -> u8 {
    group.iter().map(|question| answers.ordinal(*question)).sum()
}

pub(crate) fn sub_scores(answers: &AnswerSet) -> SubScores {
    SubScores {
        knowledge: group_sum(answers, &KNOWLEDGE_QUESTIONS),
        risk: group_sum(answers, &RISK_QUESTIONS),
        time: group_sum(answers, &TIME_QUESTIONS),
        goal: group_sum(answers, &GOAL_QUESTIONS),
        psych: group_sum(answers, &PSYCH_QUESTIONS),
    }
}

struct Components(Vec<ScoreComponent>);

impl Components {
    fn push(
        &mut self,
        category: ProductCategory,
        factor: ScoreFactor,
        points: u32,
        notes: String,
    ) {
        self.0.push(ScoreComponent {
            category,
            factor,
            points,
            notes,
        });
    }

    /// Two-way band: `high` when `hit`, otherwise `low`.
    fn band(
        &mut self,
        category: ProductCategory,
        factor: ScoreFactor,
        value: u8,
        rule: &str,
        hit: bool,
        (high, low): (u32, u32),
    ) {
        let points = if hit { high } else { low };
        let verdict = if hit { "meets" } else { "misses" };
        self.push(
            category,
            factor,
            points,
            format!("{} {value} {verdict} {rule}", factor.label()),
        );
    }
}

pub(crate) fn score_components(scores: &SubScores) -> Vec<ScoreComponent> {
    let mut components = Components(Vec::with_capacity(20));
    let SubScores {
        knowledge,
        risk,
        time,
        goal,
        psych,
    } = *scores;

    // Lower knowledge means more need for the education track.
    let education = (10 - i32::from(knowledge)).max(0) as u32 * 3;
    components.push(
        ProductCategory::Education,
        ScoreFactor::Knowledge,
        education,
        format!("knowledge {knowledge} leaves {education} points of education need"),
    );

    let stocks = ProductCategory::StocksBroker;
    let (time_points, time_rule) = if time >= 6 {
        (10, ">= 6")
    } else if time >= 4 {
        (6, ">= 4")
    } else {
        (3, "< 4")
    };
    components.push(
        stocks,
        ScoreFactor::TimeHorizon,
        time_points,
        format!("time horizon {time} {time_rule}"),
    );
    let (risk_points, risk_rule) = if risk <= 8 {
        (10, "<= 8")
    } else if risk <= 12 {
        (6, "<= 12")
    } else {
        (3, "> 12")
    };
    components.push(
        stocks,
        ScoreFactor::Risk,
        risk_points,
        format!("risk tolerance {risk} {risk_rule}"),
    );
    components.band(
        stocks,
        ScoreFactor::Knowledge,
        knowledge,
        ">= 8",
        knowledge >= 8,
        (5, 2),
    );
    components.band(
        stocks,
        ScoreFactor::GoalOrientation,
        goal,
        "<= 8",
        goal <= 8,
        (5, 2),
    );

    let cfd = ProductCategory::Cfd;
    components.band(
        cfd,
        ScoreFactor::TimeHorizon,
        time,
        "<= 6",
        time <= 6,
        (8, 4),
    );
    let (risk_points, risk_rule) = if (8..=12).contains(&risk) {
        (12, "within 8..=12")
    } else if risk > 12 {
        (8, "> 12")
    } else {
        (4, "< 8")
    };
    components.push(
        cfd,
        ScoreFactor::Risk,
        risk_points,
        format!("risk tolerance {risk} {risk_rule}"),
    );
    components.band(
        cfd,
        ScoreFactor::Knowledge,
        knowledge,
        ">= 6",
        knowledge >= 6,
        (5, 2),
    );
    components.band(
        cfd,
        ScoreFactor::GoalOrientation,
        goal,
        ">= 6",
        goal >= 6,
        (5, 2),
    );
    components.band(
        cfd,
        ScoreFactor::Psychology,
        psych,
        ">= 6",
        psych >= 6,
        (5, 2),
    );

    let forex = ProductCategory::Forex;
    components.band(
        forex,
        ScoreFactor::TimeHorizon,
        time,
        "<= 4",
        time <= 4,
        (10, 4),
    );
    components.band(
        forex,
        ScoreFactor::Risk,
        risk,
        ">= 10",
        risk >= 10,
        (10, 4),
    );
    components.band(
        forex,
        ScoreFactor::Knowledge,
        knowledge,
        ">= 8",
        knowledge >= 8,
        (5, 2),
    );
    components.band(
        forex,
        ScoreFactor::GoalOrientation,
        goal,
        ">= 8",
        goal >= 8,
        (5, 2),
    );
    components.band(
        forex,
        ScoreFactor::Psychology,
        psych,
        ">= 8",
        psych >= 8,
        (5, 2),
    );

    let binary = ProductCategory::BinaryOptions;
    components.band(
        binary,
        ScoreFactor::TimeHorizon,
        time,
        "<= 3",
        time <= 3,
        (12, 3),
    );
    components.band(
        binary,
        ScoreFactor::Risk,
        risk,
        ">= 12",
        risk >= 12,
        (12, 4),
    );
    components.band(
        binary,
        ScoreFactor::GoalOrientation,
        goal,
        ">= 10",
        goal >= 10,
        (6, 2),
    );
    components.band(
        binary,
        ScoreFactor::Psychology,
        psych,
        ">= 10",
        psych >= 10,
        (6, 2),
    );

    components.0
}
