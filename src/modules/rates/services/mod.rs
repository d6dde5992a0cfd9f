pub mod rate_cache;
pub mod rate_scraper;

pub use rate_cache::RateCache;
pub use rate_scraper::RateScraper;
