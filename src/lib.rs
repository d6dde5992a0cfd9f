//! Loan amortization calculation service.
//!
//! The core is a pure amortization engine (Shpitzer and fixed-principal
//! methods) surrounded by an HTTP surface, a best-effort MySQL result store
//! keyed by loan parameters, and a cached interest-rate provider.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::loans;
pub use modules::rates;
