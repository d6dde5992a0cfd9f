pub mod health;
pub mod loans;
pub mod rates;
