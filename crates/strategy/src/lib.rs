pub mod classifier;
pub mod config;
pub mod indicators;
pub mod snapshot;

pub use classifier::{classify, decide};
pub use config::SignalRules;
pub use snapshot::{NARRATIVE_WINDOW, SIGNAL_WINDOW};
