use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Which published rate table a quote comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateKind {
    Mortgage,
    Loan,
}

impl RateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mortgage => "mortgage",
            Self::Loan => "loan",
        }
    }

    /// Hard-coded rate used when the source is unreachable or unparsable.
    pub fn fallback_rate(&self) -> f64 {
        match self {
            Self::Mortgage => 4.2,
            Self::Loan => 6.5,
        }
    }
}

impl std::fmt::Display for RateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single bank's published rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankRate {
    pub bank_name: String,
    pub rate: f64,
}

/// Averaged rate suggestion served to the calculator UI.
///
/// This value only ever reaches the engine as an ordinary `interest_rate`
/// input; the engine has no idea where it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestRateQuote {
    /// Average across banks, percent, 2 decimal places
    pub average_rate: f64,
    /// Human-readable publication period, e.g. "May 2025"
    pub period: String,
    pub last_updated: NaiveDateTime,
    pub source: String,
    /// True when the quote is the hard-coded fallback, not scraped data
    pub is_default: bool,
    pub details: Vec<BankRate>,
}

impl InterestRateQuote {
    /// The quote used when the source cannot be fetched or parsed.
    pub fn fallback(kind: RateKind) -> Self {
        let now = chrono::Utc::now();
        let rate = kind.fallback_rate();

        Self {
            average_rate: rate,
            period: now.format("%B %Y").to_string(),
            last_updated: now.naive_utc(),
            source: "Default values (rate source unavailable)".to_string(),
            is_default: true,
            details: vec![BankRate {
                bank_name: "Default".to_string(),
                rate,
            }],
        }
    }
}
