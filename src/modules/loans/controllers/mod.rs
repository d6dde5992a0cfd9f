pub mod loan_controller;

pub use loan_controller::{calculate_loan, configure, get_payments};
