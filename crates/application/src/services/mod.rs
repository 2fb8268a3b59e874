pub mod cache;
pub mod iterative_resolver;
pub mod query_counter;
pub mod response_action;

pub use cache::{CacheStats, ResponseCache};
pub use iterative_resolver::{AskOutcome, IterativeResolver};
pub use query_counter::QueryCounter;
pub use response_action::{Referral, ResponseAction};
