pub mod config;
pub mod error;
pub mod providers;
pub mod symbols;
pub mod types;

pub use config::{BotMode, Config};
pub use error::{Error, Result};
pub use providers::{MarketData, NewsProvider, Notifier, TextGenerator};
pub use symbols::SymbolList;
pub use types::*;
