use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Ordinal used for any question the respondent has not answered.
pub const MISSING_ANSWER_ORDINAL: u8 = 4;

/// Fixed identifiers for the fifteen questionnaire items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionId {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
    Q6,
    Q7,
    Q8,
    Q9,
    Q10,
    Q11,
    Q12,
    Q13,
    Q14,
    Q15,
}

impl QuestionId {
    /// Identifiers in numeric order (not display order).
    pub const fn ordered() -> [Self; 15] {
        [
            Self::Q1,
            Self::Q2,
            Self::Q3,
            Self::Q4,
            Self::Q5,
            Self::Q6,
            Self::Q7,
            Self::Q8,
            Self::Q9,
            Self::Q10,
            Self::Q11,
            Self::Q12,
            Self::Q13,
            Self::Q14,
            Self::Q15,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Q1 => "q1",
            Self::Q2 => "q2",
            Self::Q3 => "q3",
            Self::Q4 => "q4",
            Self::Q5 => "q5",
            Self::Q6 => "q6",
            Self::Q7 => "q7",
            Self::Q8 => "q8",
            Self::Q9 => "q9",
            Self::Q10 => "q10",
            Self::Q11 => "q11",
            Self::Q12 => "q12",
            Self::Q13 => "q13",
            Self::Q14 => "q14",
            Self::Q15 => "q15",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|question| question.key() == normalized)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One of the four options offered for every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerOption {
    A,
    B,
    C,
    D,
}

impl AnswerOption {
    pub const fn ordered() -> [Self; 4] {
        [Self::A, Self::B, Self::C, Self::D]
    }

    /// Scoring weight: a=1, b=2, c=3, d=4.
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::A => 1,
            Self::B => 2,
            Self::C => 3,
            Self::D => 4,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "a" | "A" => Some(Self::A),
            "b" | "B" => Some(Self::B),
            "c" | "C" => Some(Self::C),
            "d" | "D" => Some(Self::D),
            _ => None,
        }
    }
}

impl fmt::Display for AnswerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Answers collected so far. Entries may be missing while the quiz is in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, AnswerOption>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same option for every question.
    pub fn uniform(option: AnswerOption) -> Self {
        QuestionId::ordered()
            .into_iter()
            .map(|question| (question, option))
            .collect()
    }

    pub fn with(mut self, question: QuestionId, option: AnswerOption) -> Self {
        self.answers.insert(question, option);
        self
    }

    pub fn insert(&mut self, question: QuestionId, option: AnswerOption) -> Option<AnswerOption> {
        self.answers.insert(question, option)
    }

    pub fn get(&self, question: QuestionId) -> Option<AnswerOption> {
        self.answers.get(&question).copied()
    }

    /// Ordinal for `question`, falling back to [`MISSING_ANSWER_ORDINAL`].
    pub fn ordinal(&self, question: QuestionId) -> u8 {
        self.get(question)
            .map(AnswerOption::ordinal)
            .unwrap_or(MISSING_ANSWER_ORDINAL)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == QuestionId::ordered().len()
    }

    pub fn missing(&self) -> Vec<QuestionId> {
        QuestionId::ordered()
            .into_iter()
            .filter(|question| !self.answers.contains_key(question))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, AnswerOption)> + '_ {
        self.answers
            .iter()
            .map(|(question, option)| (*question, *option))
    }
}

impl FromIterator<(QuestionId, AnswerOption)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerOption)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

/// Closed vocabularies collected on the intro form.
pub trait ProfileChoice: Sized + Copy + 'static {
    fn ordered() -> &'static [Self];
    fn key(self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .iter()
            .copied()
            .find(|choice| choice.key() == normalized)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AgeBand {
    #[serde(rename = "18-24")]
    From18To24,
    #[serde(rename = "25-34")]
    From25To34,
    #[serde(rename = "35-44")]
    From35To44,
    #[serde(rename = "45-54")]
    From45To54,
    #[serde(rename = "55-64")]
    From55To64,
    #[serde(rename = "65+")]
    SixtyFivePlus,
}

impl ProfileChoice for AgeBand {
    fn ordered() -> &'static [Self] {
        &[
            Self::From18To24,
            Self::From25To34,
            Self::From35To44,
            Self::From45To54,
            Self::From55To64,
            Self::SixtyFivePlus,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Self::From18To24 => "18-24",
            Self::From25To34 => "25-34",
            Self::From35To44 => "35-44",
            Self::From45To54 => "45-54",
            Self::From55To64 => "55-64",
            Self::SixtyFivePlus => "65+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Nonbinary,
    Other,
    PreferNot,
}

impl ProfileChoice for Gender {
    fn ordered() -> &'static [Self] {
        &[
            Self::Male,
            Self::Female,
            Self::Nonbinary,
            Self::Other,
            Self::PreferNot,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Nonbinary => "nonbinary",
            Self::Other => "other",
            Self::PreferNot => "prefer-not",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Beginner,
    #[serde(rename = "some")]
    Occasional,
    Experienced,
    Professional,
}

impl ProfileChoice for ExperienceLevel {
    fn ordered() -> &'static [Self] {
        &[
            Self::Beginner,
            Self::Occasional,
            Self::Experienced,
            Self::Professional,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Occasional => "some",
            Self::Experienced => "experienced",
            Self::Professional => "professional",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinancialGoal {
    GrowWealth,
    PassiveIncome,
    QuickReturns,
    Retirement,
    MajorPurchase,
    Learn,
}

impl ProfileChoice for FinancialGoal {
    fn ordered() -> &'static [Self] {
        &[
            Self::GrowWealth,
            Self::PassiveIncome,
            Self::QuickReturns,
            Self::Retirement,
            Self::MajorPurchase,
            Self::Learn,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Self::GrowWealth => "grow-wealth",
            Self::PassiveIncome => "passive-income",
            Self::QuickReturns => "quick-returns",
            Self::Retirement => "retirement",
            Self::MajorPurchase => "major-purchase",
            Self::Learn => "learn",
        }
    }
}

/// Intro-form profile. Only feeds personalization copy, never scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_choice")]
    pub age: Option<AgeBand>,
    #[serde(default, deserialize_with = "deserialize_choice")]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "deserialize_choice")]
    pub experience: Option<ExperienceLevel>,
    #[serde(default, deserialize_with = "deserialize_choice")]
    pub goal: Option<FinancialGoal>,
}

impl PersonalInfo {
    /// Trimmed name, or `None` when blank. A whitespace-only name counts as no name, so
    /// descriptions and headlines fall back to their unprefixed form.
    pub fn display_name(&self) -> Option<&str> {
        let trimmed = self.name.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Intro-form fields still left blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.display_name().is_none() {
            missing.push("name");
        }
        if self.age.is_none() {
            missing.push("age");
        }
        if self.gender.is_none() {
            missing.push("gender");
        }
        if self.experience.is_none() {
            missing.push("experience");
        }
        if self.goal.is_none() {
            missing.push("goal");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Empty or unrecognized values become `None` rather than failing the payload.
pub(crate) fn deserialize_choice<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: ProfileChoice,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(T::parse))
}

/// Product lines the engine can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductCategory {
    Education,
    StocksBroker,
    Cfd,
    Forex,
    BinaryOptions,
}

impl ProductCategory {
    /// Canonical order; also the tie-break order during selection.
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Education,
            Self::StocksBroker,
            Self::Cfd,
            Self::Forex,
            Self::BinaryOptions,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::StocksBroker => "stocksBroker",
            Self::Cfd => "cfd",
            Self::Forex => "forex",
            Self::BinaryOptions => "binaryOptions",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::StocksBroker => "Stocks Broker",
            Self::Cfd => "CFD",
            Self::Forex => "Forex",
            Self::BinaryOptions => "Binary Options",
        }
    }

    /// Products where professional experience earns an extra reason.
    pub const fn is_leveraged(self) -> bool {
        matches!(self, Self::Cfd | Self::Forex | Self::BinaryOptions)
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-category totals produced by the scoring engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub education: u32,
    pub stocks_broker: u32,
    pub cfd: u32,
    pub forex: u32,
    pub binary_options: u32,
}

impl CategoryScores {
    pub fn get(&self, category: ProductCategory) -> u32 {
        match category {
            ProductCategory::Education => self.education,
            ProductCategory::StocksBroker => self.stocks_broker,
            ProductCategory::Cfd => self.cfd,
            ProductCategory::Forex => self.forex,
            ProductCategory::BinaryOptions => self.binary_options,
        }
    }

    pub(crate) fn add(&mut self, category: ProductCategory, points: u32) {
        let slot = match category {
            ProductCategory::Education => &mut self.education,
            ProductCategory::StocksBroker => &mut self.stocks_broker,
            ProductCategory::Cfd => &mut self.cfd,
            ProductCategory::Forex => &mut self.forex,
            ProductCategory::BinaryOptions => &mut self.binary_options,
        };
        *slot += points;
    }

    /// Scores in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductCategory, u32)> + '_ {
        ProductCategory::ordered()
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}
