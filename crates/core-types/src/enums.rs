use serde::{Deserialize, Serialize};

/// Advisory category derived from the per-unit margin.
///
/// The variants carry no text. Presentation code maps each one to a
/// localized message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginTip {
    /// Price does not exceed unit cost. Advice: reduce the unit cost.
    LowOrNoMargin,
    /// Positive margin below the thin-margin ratio. Advice: raise the price.
    ThinMargin,
    /// Advice: grow volume through promotion.
    HealthyMargin,
}

impl MarginTip {
    /// All categories, in classification priority order.
    pub const ALL: [MarginTip; 3] = [
        MarginTip::LowOrNoMargin,
        MarginTip::ThinMargin,
        MarginTip::HealthyMargin,
    ];

    /// Returns the stable snake_case key used in message catalogs.
    pub fn key(&self) -> &'static str {
        match self {
            MarginTip::LowOrNoMargin => "low_or_no_margin",
            MarginTip::ThinMargin => "thin_margin",
            MarginTip::HealthyMargin => "healthy_margin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_names_match_catalog_keys() {
        for tip in MarginTip::ALL {
            let json = serde_json::to_string(&tip).unwrap();
            assert_eq!(json, format!("\"{}\"", tip.key()));
        }
    }
}
