use serde::Serialize;

use super::domain::{AnswerOption, QuestionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub value: AnswerOption,
    pub text: &'static str,
}

/// A single questionnaire item as presented to the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub options: [QuestionOption; 4],
}

impl Question {
    pub fn option_text(&self, value: AnswerOption) -> &'static str {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.text)
            .unwrap_or_default()
    }
}

const fn options(texts: [&'static str; 4]) -> [QuestionOption; 4] {
    [
        QuestionOption {
            value: AnswerOption::A,
            text: texts[0],
        },
        QuestionOption {
            value: AnswerOption::B,
            text: texts[1],
        },
        QuestionOption {
            value: AnswerOption::C,
            text: texts[2],
        },
        QuestionOption {
            value: AnswerOption::D,
            text: texts[3],
        },
    ]
}

const QUESTIONS: [Question; 15] = [
    Question {
        id: QuestionId::Q1,
        prompt: "How would you rate your understanding of financial markets?",
        options: options([
            "I'm a complete beginner",
            "I understand the basics",
            "I'm knowledgeable but not an expert",
            "I have extensive knowledge and experience",
        ]),
    },
    Question {
        id: QuestionId::Q2,
        prompt: "How familiar are you with financial instruments like stocks, bonds, options, and derivatives?",
        options: options([
            "Not familiar at all",
            "Somewhat familiar with stocks and bonds",
            "Familiar with most common instruments",
            "Very familiar with a wide range of instruments",
        ]),
    },
    Question {
        id: QuestionId::Q5,
        prompt: "What's your primary investment time horizon?",
        options: options([
            "Less than 1 year",
            "1-3 years",
            "3-10 years",
            "More than 10 years",
        ]),
    },
    Question {
        id: QuestionId::Q6,
        prompt: "What is your primary financial goal?",
        options: options([
            "Preserving capital and generating some income",
            "Growing assets steadily over time",
            "Achieving significant growth, accepting volatility",
            "Maximizing growth potential, even with high risk",
        ]),
    },
    Question {
        id: QuestionId::Q7,
        prompt: "How often would you ideally like to monitor or adjust your investments?",
        options: options([
            "Annually or less frequently",
            "Quarterly or monthly",
            "Weekly",
            "Daily or multiple times per day",
        ]),
    },
    Question {
        id: QuestionId::Q3,
        prompt: "If your investment lost 20% of its value in a month, what would you do?",
        options: options([
            "Sell everything immediately to prevent further losses",
            "Sell some positions to reduce risk",
            "Hold and wait for recovery",
            "Buy more to take advantage of lower prices",
        ]),
    },
    Question {
        id: QuestionId::Q4,
        prompt: "Which statement best describes your attitude toward investment risk?",
        options: options([
            "I want to minimize risk and am willing to accept lower returns",
            "I'm willing to accept moderate risk for moderate returns",
            "I'm comfortable with high risk for potentially high returns",
            "I seek maximum returns and am willing to accept significant risk",
        ]),
    },
    Question {
        id: QuestionId::Q8,
        prompt: "How would you rate your understanding of leverage in trading?",
        options: options([
            "I don't understand leverage",
            "I understand the basics but have never used it",
            "I understand and have some experience with leverage",
            "I'm very comfortable using leverage in my trading",
        ]),
    },
    Question {
        id: QuestionId::Q9,
        prompt: "What percentage of your total investment portfolio would you be comfortable allocating to higher-risk products?",
        options: options([
            "0-10% (very cautious)",
            "10-25% (somewhat cautious)",
            "25-50% (somewhat aggressive)",
            "More than 50% (very aggressive)",
        ]),
    },
    Question {
        id: QuestionId::Q10,
        prompt: "How soon do you expect to need access to the money you invest?",
        options: options([
            "I may need it within 6 months",
            "Within 1-2 years",
            "Within 3-5 years",
            "Not for at least 5 years",
        ]),
    },
    Question {
        id: QuestionId::Q11,
        prompt: "Which of these potential returns is most appealing to you?",
        options: options([
            "5% annually with very low risk",
            "8-12% annually with moderate risk",
            "15-25% annually with high risk",
            "Potential for 50%+ with very high risk",
        ]),
    },
    Question {
        id: QuestionId::Q12,
        prompt: "How do you feel about the possibility of losing money in the short term?",
        options: options([
            "I'm very uncomfortable with any losses",
            "I can tolerate small losses if recovery is likely",
            "I understand losses happen and am generally comfortable with volatility",
            "I'm fully prepared for significant fluctuations if long-term potential is high",
        ]),
    },
    Question {
        id: QuestionId::Q13,
        prompt: "What best describes your decision-making in financial matters?",
        options: options([
            "I'm very methodical and research thoroughly",
            "I balance analysis with intuition",
            "I often trust my instincts",
            "I make quick decisions and enjoy the excitement",
        ]),
    },
    Question {
        id: QuestionId::Q14,
        prompt: "How would you describe your interest in financial markets?",
        options: options([
            "I want to invest but don't enjoy following markets",
            "I find markets somewhat interesting",
            "I actively enjoy following market developments",
            "I'm passionate about trading and market analysis",
        ]),
    },
    Question {
        id: QuestionId::Q15,
        prompt: "How do you feel about making frequent trading decisions?",
        options: options([
            "I prefer a set-and-forget approach",
            "I'm comfortable with occasional adjustments",
            "I enjoy being actively involved",
            "I find frequent trading stimulating and engaging",
        ]),
    },
];

/// Questions in the order they are shown to the respondent.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

pub fn question_at(index: usize) -> Option<&'static Question> {
    QUESTIONS.get(index)
}

pub fn question(id: QuestionId) -> &'static Question {
    QUESTIONS
        .iter()
        .find(|question| question.id == id)
        .unwrap_or(&QUESTIONS[0])
}

pub const fn question_count() -> usize {
    QUESTIONS.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_covers_every_identifier_once() {
        let ids: HashSet<QuestionId> = questions().iter().map(|question| question.id).collect();
        assert_eq!(ids.len(), 15);
        for id in QuestionId::ordered() {
            assert!(ids.contains(&id), "{id} missing from catalog");
        }
    }

    #[test]
    fn display_order_interleaves_groups() {
        let order: Vec<&str> = questions().iter().map(|question| question.id.key()).collect();
        assert_eq!(
            order,
            vec![
                "q1", "q2", "q5", "q6", "q7", "q3", "q4", "q8", "q9", "q10", "q11", "q12", "q13",
                "q14", "q15"
            ]
        );
    }

    #[test]
    fn lookup_by_id_returns_matching_question() {
        let leverage = question(QuestionId::Q8);
        assert_eq!(leverage.id, QuestionId::Q8);
        assert_eq!(
            leverage.option_text(AnswerOption::A),
            "I don't understand leverage"
        );
        assert!(question_at(15).is_none());
    }
}
