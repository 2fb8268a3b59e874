use super::key::{tld_key, ExactMatchKey};
use compact_str::CompactString;
use dashmap::DashMap;
use rootwalk_domain::{DnsMessage, DomainName, RecordType};
use rustc_hash::FxBuildHasher;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::trace;

#[derive(Debug, Default)]
pub struct CacheMetrics {
    pub exact_hits: AtomicU64,
    pub tld_hits: AtomicU64,
    pub misses: AtomicU64,
}

/// Point-in-time view of the cache for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub exact_entries: usize,
    pub tld_entries: usize,
    pub exact_hits: u64,
    pub tld_hits: u64,
    pub misses: u64,
}

/// Two independent response memos: exact (name, type, server) and per-TLD
/// root referrals.
///
/// Entries never expire and the maps are unbounded; a later insert for the
/// same key replaces the earlier message.
pub struct ResponseCache {
    exact: DashMap<ExactMatchKey, Arc<DnsMessage>, FxBuildHasher>,
    tld: DashMap<CompactString, Arc<DnsMessage>, FxBuildHasher>,
    metrics: CacheMetrics,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self {
            exact: DashMap::with_hasher(FxBuildHasher),
            tld: DashMap::with_hasher(FxBuildHasher),
            metrics: CacheMetrics::default(),
        }
    }

    pub fn get_exact(
        &self,
        name: &DomainName,
        record_type: RecordType,
        server: SocketAddr,
    ) -> Option<Arc<DnsMessage>> {
        let key = ExactMatchKey::new(name.clone(), record_type, server);
        let hit = self.exact.get(&key).map(|entry| Arc::clone(entry.value()));

        if hit.is_some() {
            self.metrics.exact_hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.metrics.misses.fetch_add(1, Ordering::Relaxed);
        }
        hit
    }

    pub fn insert_exact(
        &self,
        name: &DomainName,
        record_type: RecordType,
        server: SocketAddr,
        message: Arc<DnsMessage>,
    ) {
        trace!(
            name = %name,
            record_type = %record_type,
            server = %server,
            "Caching exact-match response"
        );
        self.exact
            .insert(ExactMatchKey::new(name.clone(), record_type, server), message);
    }

    /// Root referral previously stored for `name`'s top-level label.
    pub fn get_tld(&self, name: &DomainName) -> Option<Arc<DnsMessage>> {
        let hit = self
            .tld
            .get(&tld_key(name))
            .map(|entry| Arc::clone(entry.value()));

        if hit.is_some() {
            self.metrics.tld_hits.fetch_add(1, Ordering::Relaxed);
        }
        hit
    }

    pub fn insert_tld(&self, name: &DomainName, message: Arc<DnsMessage>) {
        let key = tld_key(name);
        trace!(tld = %key, "Caching root response for TLD");
        self.tld.insert(key, message);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            exact_entries: self.exact.len(),
            tld_entries: self.tld.len(),
            exact_hits: self.metrics.exact_hits.load(Ordering::Relaxed),
            tld_hits: self.metrics.tld_hits.load(Ordering::Relaxed),
            misses: self.metrics.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}
