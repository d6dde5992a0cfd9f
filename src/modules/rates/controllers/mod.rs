pub mod rate_controller;

pub use rate_controller::configure;
