pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{
    CalculationMethod, LoanCalculationRequest, LoanCalculationResult, MonthlyPaymentDetail,
};
pub use repositories::LoanRepository;
pub use services::{AmortizationEngine, LoanService};
