use crate::core::{AppError, Result};
use crate::modules::rates::models::RateKind;
use std::env;

/// Interest rate source settings.
///
/// Each rate kind has its own source page; quotes are cached in-process for
/// `cache_ttl_hours` (24 by default, matching the legacy freshness window).
#[derive(Debug, Clone)]
pub struct RatesConfig {
    pub mortgage_url: String,
    pub loan_url: String,
    pub cache_ttl_hours: u64,
}

impl RatesConfig {
    pub fn from_env() -> Result<Self> {
        Ok(RatesConfig {
            mortgage_url: env::var("RATES_MORTGAGE_URL").unwrap_or_else(|_| {
                "https://www.boi.org.il/en/information-and-service/interest-rates/mortgage"
                    .to_string()
            }),
            loan_url: env::var("RATES_LOAN_URL").unwrap_or_else(|_| {
                "https://www.boi.org.il/en/information-and-service/interest-rates/consumer-credit"
                    .to_string()
            }),
            cache_ttl_hours: env::var("RATES_CACHE_TTL_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .map_err(|_| AppError::configuration("Invalid RATES_CACHE_TTL_HOURS"))?,
        })
    }

    pub fn source_url(&self, kind: RateKind) -> &str {
        match kind {
            RateKind::Mortgage => &self.mortgage_url,
            RateKind::Loan => &self.loan_url,
        }
    }
}
