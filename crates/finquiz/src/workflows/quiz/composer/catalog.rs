use super::super::domain::ProductCategory;

/// Fixed copy for one recommendation outcome.
pub(crate) struct ProductCopy {
    pub(crate) title: &'static str,
    /// Opening word when the respondent gave a name, e.g. "your".
    pub(crate) opening: &'static str,
    pub(crate) body: &'static str,
    pub(crate) reasons: [&'static str; 4],
}

impl ProductCopy {
    /// `"Name, your ..."` when a name is present, otherwise `"Your ..."`.
    pub(crate) fn description(&self, name: Option<&str>) -> String {
        match name {
            Some(name) => format!("{name}, {}{}", self.opening, self.body),
            None => format!("{}{}", capitalize(self.opening), self.body),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

const EDUCATION: ProductCopy = ProductCopy {
    title: "Education Program",
    opening: "based",
    body: " on your answers, we recommend starting with our Education product. This will help you build a solid foundation in market understanding and trading principles.",
    reasons: [
        "Build foundational knowledge of financial markets 📚",
        "Learn trading strategies and risk management 🛡️",
        "Practice in a safe environment before risking real money 🔬",
        "Structured curriculum designed by industry experts 👨‍🏫",
    ],
};

const STOCKS_BROKER: ProductCopy = ProductCopy {
    title: "Long-term Stock Investing",
    opening: "your",
    body: " profile indicates you're well-suited for traditional stock investing with a long-term approach.",
    reasons: [
        "Build wealth over time with less active management 📈",
        "Lower fees compared to active trading 💰",
        "Historically proven investment approach 🏛️",
        "More stable and predictable returns 🛡️",
    ],
};

const CFD: ProductCopy = ProductCopy {
    title: "Contract for Difference (CFD) Trading",
    opening: "your",
    body: " answers suggest you may be interested in more active trading with leverage via CFDs.",
    reasons: [
        "Trade with leverage (5-30x your investment) 💪",
        "Ability to profit in both rising and falling markets 🔄",
        "No need to own the underlying asset 🧩",
        "Access to a wide range of markets 🌎",
    ],
};

const FOREX: ProductCopy = ProductCopy {
    title: "Forex Trading",
    opening: "your",
    body: " risk profile and trading preferences align with Forex trading in the currency markets.",
    reasons: [
        "24-hour market with high liquidity 🕒",
        "Low entry barriers and trading costs 🚪",
        "Ability to use high leverage 📊",
        "Potential for quick profits from currency fluctuations 💱",
    ],
};

const BINARY_OPTIONS: ProductCopy = ProductCopy {
    title: "Binary Options Trading",
    opening: "your",
    body: " responses indicate you might be interested in binary options trading.",
    reasons: [
        "Simple yes/no outcome ✅❌",
        "Fixed risk and reward known upfront 📊",
        "Quick results - trades can be as short as 60 seconds ⚡",
        "Potential for high percentage returns on successful trades 🚀",
    ],
};

const CONSULTATION: ProductCopy = ProductCopy {
    title: "Personalized Consultation",
    opening: "your",
    body: " profile is unique and would benefit from a personalized consultation with our financial advisors.",
    reasons: [
        "Custom strategy based on your specific needs 🎯",
        "Professional guidance tailored to your goals 🧭",
        "Comprehensive approach to your financial future 🔮",
        "Access to our full range of products and services 🛒",
    ],
};

/// Copy for a selected category, or the consultation fallback for `None`.
pub(crate) fn copy_for(category: Option<ProductCategory>) -> &'static ProductCopy {
    match category {
        Some(ProductCategory::Education) => &EDUCATION,
        Some(ProductCategory::StocksBroker) => &STOCKS_BROKER,
        Some(ProductCategory::Cfd) => &CFD,
        Some(ProductCategory::Forex) => &FOREX,
        Some(ProductCategory::BinaryOptions) => &BINARY_OPTIONS,
        None => &CONSULTATION,
    }
}
