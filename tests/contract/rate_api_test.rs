// Contract tests for the interest rate endpoints.
//
// The scraper is pointed at an unreachable source, so every fetch resolves to
// the hard-coded fallback quote; the endpoints must keep answering 200.

use actix_web::{test, web, App};
use serde_json::Value;

use loancalc::config::RatesConfig;
use loancalc::modules::rates;
use loancalc::modules::rates::services::{RateCache, RateScraper};

fn unreachable_config() -> RatesConfig {
    RatesConfig {
        mortgage_url: "http://127.0.0.1:1/mortgage".to_string(),
        loan_url: "http://127.0.0.1:1/loan".to_string(),
        cache_ttl_hours: 24,
    }
}

macro_rules! rate_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(RateScraper::new(unreachable_config())))
                .app_data(web::Data::new(RateCache::new(24)))
                .service(web::scope("/api").configure(rates::controllers::configure)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_mortgage_rates_fall_back_to_default() {
    let app = rate_app!();

    let req = test::TestRequest::get().uri("/api/rates/mortgage").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["averageRate"], 4.2);
    assert_eq!(body["isDefault"], true);
    assert!(!body["details"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_loan_rates_fall_back_to_default() {
    let app = rate_app!();

    let req = test::TestRequest::get().uri("/api/rates/loan").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["averageRate"], 6.5);
    assert_eq!(body["isDefault"], true);
}

#[actix_web::test]
async fn test_average_endpoints_return_bare_rate() {
    let app = rate_app!();

    let req = test::TestRequest::get()
        .uri("/api/rates/average/mortgage")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, Value::from(4.2));

    let req = test::TestRequest::get()
        .uri("/api/rates/average/loan")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, Value::from(6.5));
}

#[actix_web::test]
async fn test_second_request_served_from_cache() {
    let app = rate_app!();

    // First request populates the cache with the fallback quote
    let req = test::TestRequest::get().uri("/api/rates/mortgage").to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;

    // Second request must return the same cached quote (same timestamp)
    let req = test::TestRequest::get().uri("/api/rates/mortgage").to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(first["lastUpdated"], second["lastUpdated"]);
    assert_eq!(first["averageRate"], second["averageRate"]);
}
