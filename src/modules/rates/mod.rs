pub mod controllers;
pub mod models;
pub mod services;

pub use models::{BankRate, InterestRateQuote, RateKind};
pub use services::{RateCache, RateScraper};
