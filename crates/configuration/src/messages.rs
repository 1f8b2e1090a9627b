use core_types::MarginTip;
use serde::Deserialize;
use std::fmt;

/// Interface languages with a bundled message set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Kazakh
    #[default]
    Kk,
    /// Russian
    Ru,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Kk => write!(f, "kk"),
            Language::Ru => write!(f, "ru"),
        }
    }
}

/// Every language's message set.
#[derive(Debug, Clone, Deserialize)]
pub struct Messages {
    pub kk: MessageSet,
    pub ru: MessageSet,
}

impl Messages {
    pub fn for_language(&self, language: Language) -> &MessageSet {
        match language {
            Language::Kk => &self.kk,
            Language::Ru => &self.ru,
        }
    }
}

/// User-facing text for one language.
///
/// `break_even` may contain `{x0}` and `advice` may contain `{tip}`; both are
/// substituted by the render helpers below.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageSet {
    pub title: String,
    pub subtitle: String,
    pub about: String,
    pub inputs: String,
    pub price: String,
    pub unit_cost: String,
    pub fixed_cost: String,
    pub max_quantity: String,
    pub results: String,
    pub break_even: String,
    pub no_break_even: String,
    /// Appended to the break-even sentence when the point lies past the charted range.
    pub beyond_range: String,
    pub chart_title: String,
    pub quantity_axis: String,
    pub money_axis: String,
    pub revenue: String,
    pub costs: String,
    pub profit: String,
    pub export_done: String,
    pub advice_header: String,
    pub advice: String,
    pub footer: String,
    pub tips: TipMessages,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TipMessages {
    pub low_or_no_margin: String,
    pub thin_margin: String,
    pub healthy_margin: String,
}

impl MessageSet {
    /// Break-even sentence with the quantity rounded to two decimals.
    pub fn render_break_even(&self, quantity: f64) -> String {
        self.break_even.replace("{x0}", &format!("{:.2}", quantity))
    }

    pub fn tip(&self, tip: MarginTip) -> &str {
        match tip {
            MarginTip::LowOrNoMargin => &self.tips.low_or_no_margin,
            MarginTip::ThinMargin => &self.tips.thin_margin,
            MarginTip::HealthyMargin => &self.tips.healthy_margin,
        }
    }

    pub fn render_advice(&self, tip: MarginTip) -> String {
        self.advice.replace("{tip}", self.tip(tip))
    }
}
