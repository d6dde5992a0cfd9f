pub mod rate_quote;

pub use rate_quote::{BankRate, InterestRateQuote, RateKind};
