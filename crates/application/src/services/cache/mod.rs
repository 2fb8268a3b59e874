pub mod key;
pub mod storage;

pub use key::{tld_key, ExactMatchKey};
pub use storage::{CacheMetrics, CacheStats, ResponseCache};
