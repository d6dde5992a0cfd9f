use sqlx::MySqlPool;
use tracing::{info, warn};

use crate::core::Result;
use crate::modules::loans::models::{LoanCalculationRequest, LoanCalculationResult};
use crate::modules::loans::repositories::LoanRepository;
use crate::modules::loans::services::AmortizationEngine;

/// Orchestrates the pure engine and the best-effort result store.
///
/// The store never gates a response: lookup failures degrade to a recompute
/// and persistence failures are logged and swallowed. The engine stays
/// unaware that a store exists.
pub struct LoanService {
    repository: LoanRepository,
}

impl LoanService {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: LoanRepository::new(pool),
        }
    }

    /// Compute a fresh schedule and persist it best-effort.
    pub async fn calculate_and_store(
        &self,
        request: LoanCalculationRequest,
    ) -> Result<LoanCalculationResult> {
        let result = AmortizationEngine::calculate(&request)?;

        info!(
            loan_amount = request.loan_amount,
            interest_rate = request.interest_rate,
            term_in_years = request.term_in_years,
            method = %result.calculation_method,
            "Calculated new amortization schedule"
        );

        self.persist_best_effort(&result).await;
        Ok(result)
    }

    /// Return the stored result for these parameters if one exists, otherwise
    /// compute, persist best-effort, and return the fresh result.
    pub async fn fetch_or_calculate(
        &self,
        request: LoanCalculationRequest,
    ) -> Result<LoanCalculationResult> {
        request.validate()?;

        let loan_amount = request.loan_amount_decimal()?;
        let interest_rate = request.interest_rate_decimal()?;
        let method = request.method();

        match self
            .repository
            .find_by_parameters(loan_amount, interest_rate, request.term_in_years, method)
            .await
        {
            Ok(Some(stored)) => {
                info!(
                    loan_amount = %loan_amount,
                    method = %method,
                    "Returning stored calculation"
                );
                return Ok(stored);
            }
            Ok(None) => {
                info!(
                    loan_amount = %loan_amount,
                    method = %method,
                    "No stored calculation, computing on the fly"
                );
            }
            Err(e) => {
                // Store trouble must not fail the request; treat as a miss
                warn!(error = %e, "Result store lookup failed, computing on the fly");
            }
        }

        let result = AmortizationEngine::calculate(&request)?;
        self.persist_best_effort(&result).await;
        Ok(result)
    }

    async fn persist_best_effort(&self, result: &LoanCalculationResult) {
        if let Err(e) = self.repository.insert(result).await {
            warn!(error = %e, id = result.id.as_str(), "Failed to persist calculation result");
        }
    }
}
