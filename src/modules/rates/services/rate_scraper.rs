use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::RatesConfig;
use crate::core::money::round2;
use crate::core::{AppError, Result};
use crate::modules::rates::models::{BankRate, InterestRateQuote, RateKind};

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/91.0.4472.124 Safari/537.36";

/// Fetches published per-bank rates from the configured source pages.
///
/// Any failure along the way (network, HTTP status, a table with no parsable
/// rates) resolves to the hard-coded fallback quote; callers never see an
/// error from this component.
pub struct RateScraper {
    client: Client,
    config: RatesConfig,
}

impl RateScraper {
    pub fn new(config: RatesConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Fetch the current quote for a rate kind, falling back to the default
    /// quote on any failure.
    pub async fn fetch_rates(&self, kind: RateKind) -> InterestRateQuote {
        match self.try_fetch(kind).await {
            Ok(quote) => {
                info!(
                    kind = %kind,
                    average_rate = quote.average_rate,
                    banks = quote.details.len(),
                    "Fetched rates from source"
                );
                quote
            }
            Err(e) => {
                warn!(kind = %kind, error = %e, "Rate fetch failed, using default rate");
                InterestRateQuote::fallback(kind)
            }
        }
    }

    async fn try_fetch(&self, kind: RateKind) -> Result<InterestRateQuote> {
        let url = self.config.source_url(kind);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(Duration::from_secs(10))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::rate_source(format!(
                "source returned status {}",
                response.status()
            )));
        }

        let html = response.text().await?;
        let details = parse_rate_table(&html);

        if details.is_empty() {
            return Err(AppError::rate_source("no parsable rates in source page"));
        }

        let sum: f64 = details.iter().map(|d| d.rate).sum();
        let average_rate = round2(sum / details.len() as f64);
        let now = chrono::Utc::now();

        Ok(InterestRateQuote {
            average_rate,
            period: now.format("%B %Y").to_string(),
            last_updated: now.naive_utc(),
            source: url.to_string(),
            is_default: false,
            details,
        })
    }
}

/// Extract bank-name/rate pairs from the first two cells of each table row.
///
/// The source pages are plain HTML tables; rows whose second cell does not
/// parse as a percentage are skipped.
pub(crate) fn parse_rate_table(html: &str) -> Vec<BankRate> {
    let mut rates = Vec::new();

    for raw_row in html.split("<tr").skip(1) {
        let row = raw_row.split("</tr>").next().unwrap_or(raw_row);
        let cells: Vec<String> = row
            .split("<td")
            .skip(1)
            .filter_map(|cell| cell.split_once('>'))
            .map(|(_, rest)| strip_tags(rest.split("</td>").next().unwrap_or(rest)))
            .collect();

        if cells.len() < 2 {
            continue;
        }

        let bank_name = cells[0].clone();
        // Rates may arrive as "4,2 %" in some locales
        let rate_text = cells[1].replace('%', "").replace(',', ".").trim().to_string();

        match rate_text.parse::<f64>() {
            Ok(rate) if rate.is_finite() => rates.push(BankRate { bank_name, rate }),
            _ => warn!(
                bank = bank_name.as_str(),
                text = rate_text.as_str(),
                "Could not parse rate value"
            ),
        }
    }

    rates
}

/// Drop markup from a table cell, keeping the visible text.
fn strip_tags(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut in_tag = false;

    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.trim().to_string()
}
