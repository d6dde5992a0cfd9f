use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::round_cents;
use crate::core::{AppError, Result};
use crate::modules::loans::models::{
    CalculationMethod, LoanCalculationRequest, LoanCalculationResult, MonthlyPaymentDetail,
};

/// Pure amortization schedule engine.
///
/// Given a loan definition it produces the full month-by-month schedule. No
/// I/O, no shared state: callers may invoke it concurrently and identical
/// inputs always produce identical schedules.
///
/// Every per-period amount is rounded to the cent as it is computed, and the
/// final period's principal is overridden with the exact outstanding balance.
/// Those two choices together are what make the balance land on exactly zero
/// and the principal column sum back to the loan amount despite rounding
/// drift over long terms.
pub struct AmortizationEngine;

impl AmortizationEngine {
    /// Calculate a payment schedule for a validated request.
    ///
    /// Fails only when the request carries non-positive (or non-finite)
    /// inputs; once validation passes the computation cannot error.
    pub fn calculate(request: &LoanCalculationRequest) -> Result<LoanCalculationResult> {
        request.validate()?;

        let method = request.method();
        let loan_amount = request.loan_amount_decimal()?;
        let interest_rate = request.interest_rate_decimal()?;
        let monthly_rate = interest_rate / Decimal::from(100) / Decimal::from(12);
        let number_of_payments = request.term_in_years * 12;

        debug!(
            loan_amount = %loan_amount,
            interest_rate = %interest_rate,
            term_in_years = request.term_in_years,
            method = %method,
            "Calculating amortization schedule"
        );

        let (monthly_payment, payment_schedule) = match method {
            CalculationMethod::Annuity => {
                Self::annuity_schedule(request, loan_amount, monthly_rate, number_of_payments)?
            }
            CalculationMethod::FixedPrincipal => {
                Self::fixed_principal_schedule(loan_amount, monthly_rate, number_of_payments)
            }
        };

        Ok(LoanCalculationResult::new(
            loan_amount,
            interest_rate,
            request.term_in_years,
            method,
            monthly_payment,
            payment_schedule,
        ))
    }

    /// Shpitzer method: one level payment for the whole term.
    ///
    /// The level payment comes from the growth-annuity formula
    /// `P * r * (1+r)^n / ((1+r)^n - 1)`, evaluated once in floating point
    /// and then pinned to the cent. The returned reference payment is this
    /// value; the final row's actual payment may differ by the accumulated
    /// rounding drift it absorbs.
    fn annuity_schedule(
        request: &LoanCalculationRequest,
        loan_amount: Decimal,
        monthly_rate: Decimal,
        number_of_payments: i32,
    ) -> Result<(Decimal, Vec<MonthlyPaymentDetail>)> {
        let rate = request.interest_rate / 100.0 / 12.0;
        let growth = (1.0 + rate).powi(number_of_payments);
        let payment = request.loan_amount * (rate * growth) / (growth - 1.0);

        let monthly_payment = Decimal::from_f64(payment)
            .map(round_cents)
            .ok_or_else(|| AppError::invalid_parameters("monthly payment is not representable"))?;

        let mut schedule = Vec::with_capacity(number_of_payments as usize);
        let mut remaining_balance = loan_amount;

        for month in 1..=number_of_payments {
            let interest = round_cents(remaining_balance * monthly_rate);

            // The last row repays the exact outstanding balance instead of
            // the formula value, reconciling accumulated rounding drift.
            let principal = if month == number_of_payments {
                remaining_balance
            } else {
                round_cents(monthly_payment - interest)
            };

            remaining_balance -= principal;
            if remaining_balance < Decimal::ZERO {
                remaining_balance = Decimal::ZERO;
            }

            schedule.push(MonthlyPaymentDetail {
                payment_number: month,
                payment: round_cents(principal + interest),
                principal,
                interest,
                remaining_balance,
            });
        }

        Ok((monthly_payment, schedule))
    }

    /// Fixed principal method: the principal portion is constant, interest
    /// shrinks with the balance and so does the total payment. The reference
    /// payment is the first (highest) period's total.
    fn fixed_principal_schedule(
        loan_amount: Decimal,
        monthly_rate: Decimal,
        number_of_payments: i32,
    ) -> (Decimal, Vec<MonthlyPaymentDetail>) {
        let fixed_principal = round_cents(loan_amount / Decimal::from(number_of_payments));
        let first_interest = round_cents(loan_amount * monthly_rate);
        let monthly_payment = fixed_principal + first_interest;

        let mut schedule = Vec::with_capacity(number_of_payments as usize);
        let mut remaining_balance = loan_amount;

        for month in 1..=number_of_payments {
            let interest = round_cents(remaining_balance * monthly_rate);

            // Same final-row override as the annuity variant
            let principal = if month == number_of_payments {
                remaining_balance
            } else {
                fixed_principal
            };

            remaining_balance -= principal;
            if remaining_balance < Decimal::ZERO {
                remaining_balance = Decimal::ZERO;
            }

            schedule.push(MonthlyPaymentDetail {
                payment_number: month,
                payment: round_cents(principal + interest),
                principal,
                interest,
                remaining_balance,
            });
        }

        (monthly_payment, schedule)
    }
}
