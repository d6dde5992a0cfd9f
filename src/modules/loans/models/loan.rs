use chrono::NaiveDateTime;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// Amortization method selector.
///
/// `Annuity` is the Shpitzer method: one level payment per month with a
/// shifting principal/interest mix. `FixedPrincipal` keeps the principal
/// portion level so the total payment shrinks over the term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationMethod {
    #[serde(rename = "shpitzer")]
    Annuity,
    #[serde(rename = "fixedprincipal")]
    FixedPrincipal,
}

impl CalculationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Annuity => "shpitzer",
            Self::FixedPrincipal => "fixedprincipal",
        }
    }

    /// Normalize a transport-level method string. Absent or unrecognized
    /// values fall back to the annuity method rather than erroring, matching
    /// the legacy API contract.
    pub fn from_input(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "fixedprincipal" || v == "fixed_principal" => Self::FixedPrincipal,
            _ => Self::Annuity,
        }
    }
}

impl std::fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Loan definition as it arrives at the transport boundary.
///
/// Amounts and rates come in as plain floats (the legacy wire format); they
/// are converted to `Decimal` before any schedule arithmetic happens.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanCalculationRequest {
    pub loan_amount: f64,
    /// Annual rate in percent (5.5 means 5.5%)
    pub interest_rate: f64,
    pub term_in_years: i32,
    #[serde(default)]
    pub calculation_method: Option<String>,
}

impl LoanCalculationRequest {
    pub fn new(loan_amount: f64, interest_rate: f64, term_in_years: i32) -> Self {
        Self {
            loan_amount,
            interest_rate,
            term_in_years,
            calculation_method: None,
        }
    }

    pub fn with_method(mut self, method: CalculationMethod) -> Self {
        self.calculation_method = Some(method.as_str().to_string());
        self
    }

    /// The normalized amortization method for this request.
    pub fn method(&self) -> CalculationMethod {
        CalculationMethod::from_input(self.calculation_method.as_deref())
    }

    /// Reject non-positive or non-finite inputs. This is the engine's only
    /// failure condition; everything past this point is deterministic.
    pub fn validate(&self) -> Result<()> {
        if !self.loan_amount.is_finite() || self.loan_amount <= 0.0 {
            return Err(AppError::invalid_parameters("loan amount must be positive"));
        }
        if !self.interest_rate.is_finite() || self.interest_rate <= 0.0 {
            return Err(AppError::invalid_parameters(
                "interest rate must be positive",
            ));
        }
        if self.term_in_years <= 0 {
            return Err(AppError::invalid_parameters(
                "term in years must be positive",
            ));
        }
        Ok(())
    }

    /// Loan amount on the cent grid. Only valid after `validate()`.
    pub fn loan_amount_decimal(&self) -> Result<Decimal> {
        Decimal::from_f64(self.loan_amount)
            .map(|d| d.round_dp(2))
            .ok_or_else(|| AppError::invalid_parameters("loan amount is not representable"))
    }

    /// Annual interest rate as a decimal percentage. Only valid after `validate()`.
    pub fn interest_rate_decimal(&self) -> Result<Decimal> {
        Decimal::from_f64(self.interest_rate)
            .ok_or_else(|| AppError::invalid_parameters("interest rate is not representable"))
    }
}

/// One row of the amortization schedule. Immutable once produced; rows are
/// chronological and `payment_number` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPaymentDetail {
    pub payment_number: i32,
    /// Total paid this period (principal + interest)
    pub payment: Decimal,
    /// Portion reducing the balance
    pub principal: Decimal,
    /// Portion compensating the lender
    pub interest: Decimal,
    /// Outstanding balance after this payment, zero on the final row
    pub remaining_balance: Decimal,
}

/// Full calculation output: the echoed loan definition, the reference monthly
/// payment and the complete schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanCalculationResult {
    pub id: String,
    pub loan_amount: Decimal,
    pub interest_rate: Decimal,
    pub term_in_years: i32,
    pub calculation_method: CalculationMethod,
    /// First period's total payment, kept as a display reference even when
    /// the final row's actual payment differs by rounding drift.
    pub monthly_payment: Decimal,
    pub payment_schedule: Vec<MonthlyPaymentDetail>,
    pub calculation_date: NaiveDateTime,
}

impl LoanCalculationResult {
    pub fn new(
        loan_amount: Decimal,
        interest_rate: Decimal,
        term_in_years: i32,
        calculation_method: CalculationMethod,
        monthly_payment: Decimal,
        payment_schedule: Vec<MonthlyPaymentDetail>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            loan_amount,
            interest_rate,
            term_in_years,
            calculation_method,
            monthly_payment,
            payment_schedule,
            calculation_date: chrono::Utc::now().naive_utc(),
        }
    }
}
