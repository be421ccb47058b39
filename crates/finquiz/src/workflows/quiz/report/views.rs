use serde::Serialize;

use super::super::composer::Recommendation;
use super::super::domain::{Gender, PersonalInfo, ProductCategory, ProfileChoice};

const GENERIC_TAGLINE: &str = "We're excited about your financial journey! 🌟";
const SECONDARY_EDUCATION_NOTE: &str = "We also recommend our Educational Product to help build your knowledge and confidence before diving in.";

/// Presentation-ready strings for the result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub marker: &'static str,
    pub headline: String,
    pub tagline: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_fit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_note: Option<&'static str>,
    pub call_to_action: String,
}

impl ResultView {
    pub fn build(recommendation: &Recommendation, info: &PersonalInfo) -> Self {
        let headline = match info.display_name() {
            Some(name) => format!("{name}, Here's Your Perfect Match!"),
            None => "Your Personalized Recommendation".to_string(),
        };

        let profile_fit = info.age.map(|age| {
            format!(
                "Based on your age group ({}), {} with similar goals often find success with our {} approach.",
                age.key(),
                cohort(info.gender),
                recommendation.title.to_lowercase()
            )
        });

        let secondary_note = (recommendation.secondary == Some(ProductCategory::Education))
            .then_some(SECONDARY_EDUCATION_NOTE);

        Self {
            marker: marker(recommendation.category),
            headline,
            tagline: tagline(recommendation.category),
            profile_fit,
            secondary_note,
            call_to_action: format!("Get Started with {}", recommendation.title),
        }
    }
}

fn cohort(gender: Option<Gender>) -> &'static str {
    match gender {
        Some(Gender::Male) => "men",
        Some(Gender::Female) => "women",
        Some(Gender::PreferNot) => "people like you",
        _ => "individuals",
    }
}

fn marker(category: Option<ProductCategory>) -> &'static str {
    match category {
        Some(ProductCategory::Education) => "📚",
        Some(ProductCategory::StocksBroker) => "📈",
        Some(ProductCategory::Cfd) => "💹",
        Some(ProductCategory::Forex) => "💱",
        Some(ProductCategory::BinaryOptions) => "🎲",
        None => "🌟",
    }
}

fn tagline(category: Option<ProductCategory>) -> &'static str {
    match category {
        Some(ProductCategory::Education) => {
            "Knowledge is power! We're excited to help you build a strong foundation 🧠"
        }
        Some(ProductCategory::StocksBroker) => {
            "Great choice for building long-term wealth with confidence 🌱"
        }
        Some(ProductCategory::Cfd) => {
            "Ready for some action with controlled risk? CFDs could be perfect for you! 🚀"
        }
        Some(ProductCategory::Forex) => {
            "The currency markets are calling your name! Fast-paced and exciting! ⚡"
        }
        Some(ProductCategory::BinaryOptions) => {
            "You've got the risk appetite of a true trader! Let's make those quick wins! 🔥"
        }
        None => GENERIC_TAGLINE,
    }
}
