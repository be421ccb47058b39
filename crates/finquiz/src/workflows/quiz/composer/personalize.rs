use super::super::domain::{ExperienceLevel, FinancialGoal, PersonalInfo, ProductCategory};

impl FinancialGoal {
    pub const fn reason(self) -> &'static str {
        match self {
            Self::GrowWealth => "Aligned with your goal of long-term wealth growth 🌱",
            Self::PassiveIncome => "Can help generate the passive income you're looking for 💸",
            Self::QuickReturns => "Offers potential for the quicker returns you desire ⚡",
            Self::Retirement => "Supports your retirement planning objectives 🏖️",
            Self::MajorPurchase => "Can help you save for your planned major purchase 🏡",
            Self::Learn => "Perfect for your goal of learning about investing 🧠",
        }
    }
}

const BEGINNER_REASON: &str = "Accessible even with your beginner level experience ✨";
const PROFESSIONAL_REASON: &str = "Leverages your professional financial background 🏆";

/// Append profile-driven reasons after the base list. Checks are independent and
/// always run in this order: goal, beginner, professional.
pub(crate) fn personalize_reasons(
    reasons: &mut Vec<String>,
    selected: Option<ProductCategory>,
    info: &PersonalInfo,
) {
    if let Some(goal) = info.goal {
        reasons.push(goal.reason().to_string());
    }

    if info.experience == Some(ExperienceLevel::Beginner)
        && selected != Some(ProductCategory::Education)
    {
        reasons.push(BEGINNER_REASON.to_string());
    }

    if info.experience == Some(ExperienceLevel::Professional)
        && selected.is_some_and(ProductCategory::is_leveraged)
    {
        reasons.push(PROFESSIONAL_REASON.to_string());
    }
}
