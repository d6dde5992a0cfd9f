// HTTP handlers for loan calculation endpoints
//
// Endpoints:
// - POST /api/loans/calculate - Compute a schedule and store it
// - GET  /api/loans/payments  - Fetch a stored schedule or compute one

use actix_web::{web, HttpResponse};
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::loans::models::LoanCalculationRequest;
use crate::modules::loans::services::LoanService;

/// POST /api/loans/calculate
///
/// Computes a fresh amortization schedule for the posted loan definition and
/// persists it best-effort.
///
/// # Returns
/// - 200: Full `LoanCalculationResult` with the payment schedule
/// - 400: Non-positive loan amount, interest rate or term
pub async fn calculate_loan(
    request: web::Json<LoanCalculationRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = LoanService::new(pool.get_ref().clone());
    let result = service.calculate_and_store(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /api/loans/payments
///
/// Returns the schedule for the loan parameters given in the query string
/// (`loanAmount`, `interestRate`, `termInYears`, optional
/// `calculationMethod`). A previously stored result with the same key is
/// returned as-is; otherwise the schedule is computed on the fly.
///
/// # Returns
/// - 200: Full `LoanCalculationResult`
/// - 400: Non-positive loan amount, interest rate or term
pub async fn get_payments(
    request: web::Query<LoanCalculationRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = LoanService::new(pool.get_ref().clone());
    let result = service.fetch_or_calculate(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Configure loan routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/loans")
            .route("/calculate", web::post().to(calculate_loan))
            .route("/payments", web::get().to(get_payments)),
    );
}
