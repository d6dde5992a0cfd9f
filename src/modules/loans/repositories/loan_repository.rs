use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::loans::models::{
    CalculationMethod, LoanCalculationResult, MonthlyPaymentDetail,
};

/// MySQL-backed store of previously computed schedules, keyed by the four
/// loan parameters (amount, rate, term, method).
///
/// The schedule rows are stored as a JSON document alongside the key columns;
/// the store is a cache of engine output, never a source of truth the engine
/// reads from.
pub struct LoanRepository {
    pool: MySqlPool,
}

/// Row shape for `loan_calculations`
#[derive(sqlx::FromRow)]
struct LoanCalculationRow {
    id: String,
    loan_amount: Decimal,
    interest_rate: Decimal,
    term_in_years: i32,
    calculation_method: String,
    monthly_payment: Decimal,
    payment_schedule: String,
    calculation_date: chrono::NaiveDateTime,
}

impl TryFrom<LoanCalculationRow> for LoanCalculationResult {
    type Error = crate::core::AppError;

    fn try_from(row: LoanCalculationRow) -> Result<Self> {
        let payment_schedule: Vec<MonthlyPaymentDetail> =
            serde_json::from_str(&row.payment_schedule)?;

        Ok(LoanCalculationResult {
            id: row.id,
            loan_amount: row.loan_amount,
            interest_rate: row.interest_rate,
            term_in_years: row.term_in_years,
            calculation_method: CalculationMethod::from_input(Some(&row.calculation_method)),
            monthly_payment: row.monthly_payment,
            payment_schedule,
            calculation_date: row.calculation_date,
        })
    }
}

impl LoanRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Find a stored result matching the exact loan parameters. Returns the
    /// most recent match, or `None` on a miss.
    pub async fn find_by_parameters(
        &self,
        loan_amount: Decimal,
        interest_rate: Decimal,
        term_in_years: i32,
        method: CalculationMethod,
    ) -> Result<Option<LoanCalculationResult>> {
        let row = sqlx::query_as::<_, LoanCalculationRow>(
            r#"
            SELECT
                id, loan_amount, interest_rate, term_in_years,
                calculation_method, monthly_payment, payment_schedule,
                calculation_date
            FROM loan_calculations
            WHERE loan_amount = ?
              AND interest_rate = ?
              AND term_in_years = ?
              AND calculation_method = ?
            ORDER BY calculation_date DESC
            LIMIT 1
            "#,
        )
        .bind(loan_amount)
        .bind(interest_rate)
        .bind(term_in_years)
        .bind(method.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(LoanCalculationResult::try_from).transpose()
    }

    /// Persist a computed result. Callers treat failures as non-fatal.
    pub async fn insert(&self, result: &LoanCalculationResult) -> Result<()> {
        let payment_schedule = serde_json::to_string(&result.payment_schedule)?;

        sqlx::query(
            r#"
            INSERT INTO loan_calculations (
                id, loan_amount, interest_rate, term_in_years,
                calculation_method, monthly_payment, payment_schedule,
                calculation_date
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&result.id)
        .bind(result.loan_amount)
        .bind(result.interest_rate)
        .bind(result.term_in_years)
        .bind(result.calculation_method.as_str())
        .bind(result.monthly_payment)
        .bind(&payment_schedule)
        .bind(result.calculation_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
