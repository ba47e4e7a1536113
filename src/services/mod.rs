pub mod analyzer;
pub mod llm_client;
pub mod usage_tracker;
pub mod website_fetcher;

pub use analyzer::*;
pub use llm_client::*;
pub use usage_tracker::*;
pub use website_fetcher::*;
