use compact_str::CompactString;
use rootwalk_domain::{DomainName, RecordType};
use std::net::SocketAddr;

/// "I already asked exactly this server exactly this question."
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExactMatchKey {
    pub name: DomainName,
    pub record_type: RecordType,
    pub server: SocketAddr,
}

impl ExactMatchKey {
    #[inline]
    pub fn new(name: DomainName, record_type: RecordType, server: SocketAddr) -> Self {
        Self {
            name,
            record_type,
            server,
        }
    }
}

/// Lower-cased top-level label; the root name maps to the empty key.
#[inline]
pub fn tld_key(name: &DomainName) -> CompactString {
    match name.top_level_label() {
        Some(label) => CompactString::new(label.to_ascii_lowercase()),
        None => CompactString::default(),
    }
}
