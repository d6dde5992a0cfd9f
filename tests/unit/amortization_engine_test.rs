// Property-based tests for the amortization engine invariants:
// schedule length, exact zero final balance, principal column summing back to
// the loan amount, level payments (annuity) and level principal
// (fixed principal) outside the final row.

use proptest::prelude::*;
use rust_decimal::Decimal;

use loancalc::modules::loans::models::{CalculationMethod, LoanCalculationRequest};
use loancalc::modules::loans::services::AmortizationEngine;

fn loan_amounts() -> impl Strategy<Value = f64> {
    // Cent-grid amounts from 10,000.00 to 2,000,000.00
    (1_000_000i64..=200_000_000i64).prop_map(|cents| cents as f64 / 100.0)
}

fn interest_rates() -> impl Strategy<Value = f64> {
    // Annual percent, 0.50% to 10.00% in basis points
    (50i64..=1_000i64).prop_map(|bps| bps as f64 / 100.0)
}

fn terms() -> impl Strategy<Value = i32> {
    1i32..=30
}

fn methods() -> impl Strategy<Value = CalculationMethod> {
    prop_oneof![
        Just(CalculationMethod::Annuity),
        Just(CalculationMethod::FixedPrincipal),
    ]
}

proptest! {
    #[test]
    fn schedule_has_one_row_per_month(
        amount in loan_amounts(),
        rate in interest_rates(),
        term in terms(),
        method in methods(),
    ) {
        let request = LoanCalculationRequest::new(amount, rate, term).with_method(method);
        let result = AmortizationEngine::calculate(&request).unwrap();

        prop_assert_eq!(result.payment_schedule.len(), (term * 12) as usize);
        for (i, row) in result.payment_schedule.iter().enumerate() {
            prop_assert_eq!(row.payment_number, (i + 1) as i32);
        }
    }

    #[test]
    fn balance_reaches_exactly_zero(
        amount in loan_amounts(),
        rate in interest_rates(),
        term in terms(),
        method in methods(),
    ) {
        let request = LoanCalculationRequest::new(amount, rate, term).with_method(method);
        let result = AmortizationEngine::calculate(&request).unwrap();

        let last = result.payment_schedule.last().unwrap();
        prop_assert_eq!(last.remaining_balance, Decimal::ZERO);

        // Balance never increases along the way
        let mut prior = result.loan_amount;
        for row in &result.payment_schedule {
            prop_assert!(row.remaining_balance <= prior);
            prior = row.remaining_balance;
        }
    }

    #[test]
    fn principal_column_sums_to_loan_amount(
        amount in loan_amounts(),
        rate in interest_rates(),
        term in terms(),
        method in methods(),
    ) {
        let request = LoanCalculationRequest::new(amount, rate, term).with_method(method);
        let result = AmortizationEngine::calculate(&request).unwrap();

        let total: Decimal = result.payment_schedule.iter().map(|r| r.principal).sum();
        prop_assert_eq!(total, result.loan_amount);
    }

    #[test]
    fn annuity_payments_are_level_except_last(
        amount in loan_amounts(),
        rate in interest_rates(),
        term in terms(),
    ) {
        let request = LoanCalculationRequest::new(amount, rate, term);
        let result = AmortizationEngine::calculate(&request).unwrap();

        let n = result.payment_schedule.len();
        for row in &result.payment_schedule[..n - 1] {
            prop_assert_eq!(row.payment, result.monthly_payment);
        }
    }

    #[test]
    fn fixed_principal_is_level_except_last(
        amount in loan_amounts(),
        rate in interest_rates(),
        term in terms(),
    ) {
        let request = LoanCalculationRequest::new(amount, rate, term)
            .with_method(CalculationMethod::FixedPrincipal);
        let result = AmortizationEngine::calculate(&request).unwrap();

        let n = result.payment_schedule.len();
        let expected = (result.loan_amount / Decimal::from(n as i64)).round_dp(2);
        for row in &result.payment_schedule[..n - 1] {
            prop_assert_eq!(row.principal, expected);
        }

        // Interest and total payment shrink with the balance
        for pair in result.payment_schedule.windows(2) {
            prop_assert!(pair[1].interest <= pair[0].interest);
            prop_assert!(pair[1].payment <= pair[0].payment);
        }
    }

    #[test]
    fn identical_inputs_yield_identical_schedules(
        amount in loan_amounts(),
        rate in interest_rates(),
        term in terms(),
        method in methods(),
    ) {
        let request = LoanCalculationRequest::new(amount, rate, term).with_method(method);
        let a = AmortizationEngine::calculate(&request).unwrap();
        let b = AmortizationEngine::calculate(&request).unwrap();

        prop_assert_eq!(a.monthly_payment, b.monthly_payment);
        prop_assert_eq!(a.payment_schedule, b.payment_schedule);
    }
}
