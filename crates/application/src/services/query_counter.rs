use std::sync::atomic::{AtomicU64, Ordering};

/// Number of live queries handed to the transport. Cache hits are not counted.
#[derive(Debug, Default)]
pub struct QueryCounter {
    issued: AtomicU64,
}

impl QueryCounter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn increment(&self) {
        self.issued.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_and_counts() {
        let counter = QueryCounter::new();
        assert_eq!(counter.get(), 0);
        counter.increment();
        counter.increment();
        assert_eq!(counter.get(), 2);
    }
}
