// HTTP handlers for interest rate endpoints
//
// Endpoints:
// - GET /api/rates/mortgage         - Full mortgage rate quote
// - GET /api/rates/loan             - Full consumer loan rate quote
// - GET /api/rates/average/mortgage - Bare average mortgage rate
// - GET /api/rates/average/loan     - Bare average loan rate

use actix_web::{web, HttpResponse};
use tracing::info;

use crate::modules::rates::models::{InterestRateQuote, RateKind};
use crate::modules::rates::services::{RateCache, RateScraper};

/// Serve a quote from the cache, fetching and repopulating on a miss.
async fn cached_quote(
    kind: RateKind,
    scraper: &RateScraper,
    cache: &RateCache,
) -> InterestRateQuote {
    if let Some(quote) = cache.get(kind).await {
        info!(kind = %kind, period = quote.period.as_str(), "Returning cached rates");
        return quote;
    }

    let quote = scraper.fetch_rates(kind).await;
    cache.put(kind, quote.clone()).await;
    quote
}

/// GET /api/rates/mortgage
pub async fn get_mortgage_rates(
    scraper: web::Data<RateScraper>,
    cache: web::Data<RateCache>,
) -> HttpResponse {
    let quote = cached_quote(RateKind::Mortgage, &scraper, &cache).await;
    HttpResponse::Ok().json(quote)
}

/// GET /api/rates/loan
pub async fn get_loan_rates(
    scraper: web::Data<RateScraper>,
    cache: web::Data<RateCache>,
) -> HttpResponse {
    let quote = cached_quote(RateKind::Loan, &scraper, &cache).await;
    HttpResponse::Ok().json(quote)
}

/// GET /api/rates/average/mortgage
///
/// Bare average used by the calculator form to pre-fill its rate field.
pub async fn get_average_mortgage_rate(
    scraper: web::Data<RateScraper>,
    cache: web::Data<RateCache>,
) -> HttpResponse {
    let quote = cached_quote(RateKind::Mortgage, &scraper, &cache).await;
    HttpResponse::Ok().json(quote.average_rate)
}

/// GET /api/rates/average/loan
pub async fn get_average_loan_rate(
    scraper: web::Data<RateScraper>,
    cache: web::Data<RateCache>,
) -> HttpResponse {
    let quote = cached_quote(RateKind::Loan, &scraper, &cache).await;
    HttpResponse::Ok().json(quote.average_rate)
}

/// Configure rate routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/rates")
            .route("/mortgage", web::get().to(get_mortgage_rates))
            .route("/loan", web::get().to(get_loan_rates))
            .route("/average/mortgage", web::get().to(get_average_mortgage_rate))
            .route("/average/loan", web::get().to(get_average_loan_rate)),
    );
}
