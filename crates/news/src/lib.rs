pub mod client;
pub mod screener;

pub use client::NewsApiClient;
pub use screener::{NewsScreener, KEYWORDS};
