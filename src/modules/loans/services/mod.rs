pub mod amortization;
pub mod loan_service;

pub use amortization::AmortizationEngine;
pub use loan_service::LoanService;
