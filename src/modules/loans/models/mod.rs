pub mod loan;

pub use loan::{
    CalculationMethod, LoanCalculationRequest, LoanCalculationResult, MonthlyPaymentDetail,
};
