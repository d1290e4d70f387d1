pub mod client;
pub mod generator;

pub use client::OpenRouterClient;
pub use generator::{compose_prompt, NarrativeGenerator, FALLBACK};
