pub mod clock;
pub mod kucoin;
pub mod scheduler;

pub use clock::{Clock, TokioClock};
pub use kucoin::KucoinClient;
pub use scheduler::Scheduler;
