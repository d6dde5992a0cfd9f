// Contract tests for the loan endpoints.
//
// The store pool points at an unreachable MySQL so every store interaction
// fails fast; the endpoints must still serve computed schedules, because
// persistence is best-effort by contract.

use actix_web::{test, web, App};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;

use loancalc::modules::loans;

fn unreachable_pool() -> MySqlPool {
    MySqlPoolOptions::new()
        .acquire_timeout(Duration::from_millis(200))
        .connect_lazy("mysql://loancalc@127.0.0.1:1/loan_cache")
        .expect("lazy pool")
}

fn decimal(value: &Value) -> Decimal {
    value
        .as_str()
        .unwrap_or_else(|| panic!("expected decimal string, got {value}"))
        .parse()
        .expect("decimal value")
}

macro_rules! loan_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(unreachable_pool()))
                .service(web::scope("/api").configure(loans::controllers::configure)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_calculate_returns_annuity_schedule() {
    let app = loan_app!();

    let req = test::TestRequest::post()
        .uri("/api/loans/calculate")
        .set_json(serde_json::json!({
            "loanAmount": 100000,
            "interestRate": 5.5,
            "termInYears": 30
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["calculationMethod"], "shpitzer");
    assert_eq!(body["termInYears"], 30);
    assert_eq!(decimal(&body["monthlyPayment"]), dec!(567.79));

    let schedule = body["paymentSchedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 360);

    let first = &schedule[0];
    assert_eq!(first["paymentNumber"], 1);
    assert_eq!(decimal(&first["interest"]), dec!(458.33));
    assert_eq!(decimal(&first["principal"]), dec!(109.46));

    let last = &schedule[359];
    assert_eq!(decimal(&last["remainingBalance"]), Decimal::ZERO);
}

#[actix_web::test]
async fn test_calculate_fixed_principal_schedule() {
    let app = loan_app!();

    let req = test::TestRequest::post()
        .uri("/api/loans/calculate")
        .set_json(serde_json::json!({
            "loanAmount": 120000,
            "interestRate": 6.0,
            "termInYears": 10,
            "calculationMethod": "fixedprincipal"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["calculationMethod"], "fixedprincipal");
    assert_eq!(decimal(&body["monthlyPayment"]), dec!(1600));

    let schedule = body["paymentSchedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 120);
    assert_eq!(decimal(&schedule[0]["principal"]), dec!(1000));
    assert_eq!(decimal(&schedule[0]["interest"]), dec!(600));
    assert_eq!(decimal(&schedule[0]["payment"]), dec!(1600));

    // Final row repays the prior row's balance exactly
    let prior_balance = decimal(&schedule[118]["remainingBalance"]);
    assert_eq!(decimal(&schedule[119]["principal"]), prior_balance);
    assert_eq!(decimal(&schedule[119]["remainingBalance"]), Decimal::ZERO);
}

#[actix_web::test]
async fn test_calculate_rejects_invalid_parameters() {
    let app = loan_app!();

    for body in [
        serde_json::json!({"loanAmount": 0, "interestRate": 5.5, "termInYears": 30}),
        serde_json::json!({"loanAmount": -1000, "interestRate": 5.5, "termInYears": 30}),
        serde_json::json!({"loanAmount": 100000, "interestRate": 0, "termInYears": 30}),
        serde_json::json!({"loanAmount": 100000, "interestRate": 5.5, "termInYears": 0}),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/loans/calculate")
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}

#[actix_web::test]
async fn test_payments_computes_on_store_miss() {
    let app = loan_app!();

    // Store is unreachable: the endpoint must fall back to computing
    let req = test::TestRequest::get()
        .uri("/api/loans/payments?loanAmount=12000&interestRate=3.0&termInYears=1")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let schedule = body["paymentSchedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 12);
    assert_eq!(decimal(&schedule[11]["remainingBalance"]), Decimal::ZERO);
}

#[actix_web::test]
async fn test_payments_unrecognized_method_defaults_to_annuity() {
    let app = loan_app!();

    let req = test::TestRequest::get()
        .uri("/api/loans/payments?loanAmount=100000&interestRate=5.5&termInYears=30&calculationMethod=balloon")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["calculationMethod"], "shpitzer");
    assert_eq!(decimal(&body["monthlyPayment"]), dec!(567.79));
}

#[actix_web::test]
async fn test_payments_rejects_invalid_parameters() {
    let app = loan_app!();

    let req = test::TestRequest::get()
        .uri("/api/loans/payments?loanAmount=-5&interestRate=5.5&termInYears=30")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
