//! Iterative resolution from the root servers down.
//!
//! `lookup` walks the root list in order and returns the first definitive
//! answer. `ask` is the recursive step against one server: consult the
//! caches, otherwise send one live query, then classify the response and
//! either stop, restart at a CNAME target, or descend into the referred
//! nameservers one at a time.
//!
//! Resolution of one name is strictly sequential: candidates are tried in the
//! order the server listed them and the first success wins. Transport and
//! codec errors are never retried here; they unwind to the caller of the
//! outermost `lookup`.

use super::cache::{CacheStats, ResponseCache};
use super::query_counter::QueryCounter;
use super::response_action::{Referral, ResponseAction};
use crate::ports::{DnsTransport, MessageCodec};
use futures::future::{BoxFuture, FutureExt};
use rootwalk_domain::{
    DnsMessage, DnsQuery, DomainError, DomainName, RecordType, ResolverConfig, ResourceRecord,
};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// Result of asking one server: `found` is false for "try the next candidate".
#[derive(Debug, Clone)]
pub struct AskOutcome {
    pub found: bool,
    pub message: Arc<DnsMessage>,
}

impl AskOutcome {
    fn found(message: Arc<DnsMessage>) -> Self {
        Self {
            found: true,
            message,
        }
    }

    fn not_found(message: Arc<DnsMessage>) -> Self {
        Self {
            found: false,
            message,
        }
    }
}

pub struct IterativeResolver {
    transport: Arc<dyn DnsTransport>,
    codec: Arc<dyn MessageCodec>,
    root_servers: Arc<[SocketAddr]>,
    port: u16,
    timeout: Duration,
    max_depth: usize,
    cache: Arc<ResponseCache>,
    counter: Arc<QueryCounter>,
}

impl IterativeResolver {
    pub fn new(
        config: &ResolverConfig,
        transport: Arc<dyn DnsTransport>,
        codec: Arc<dyn MessageCodec>,
    ) -> Self {
        Self {
            transport,
            codec,
            root_servers: config.root_socket_addrs().into(),
            port: config.port,
            timeout: config.timeout(),
            max_depth: config.max_depth,
            cache: Arc::new(ResponseCache::new()),
            counter: Arc::new(QueryCounter::new()),
        }
    }

    /// Share an existing cache instead of starting empty.
    pub fn with_cache(mut self, cache: Arc<ResponseCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_counter(mut self, counter: Arc<QueryCounter>) -> Self {
        self.counter = counter;
        self
    }

    pub fn is_root(&self, server: SocketAddr) -> bool {
        self.root_servers.contains(&server)
    }

    /// Live queries issued so far.
    pub fn query_count(&self) -> u64 {
        self.counter.get()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Resolve `name`/`record_type` starting from the roots.
    ///
    /// Returns the first definitive response, or the last negative one when
    /// no root yields an answer.
    pub async fn lookup(
        &self,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<Arc<DnsMessage>, DomainError> {
        self.lookup_at(name, record_type, 0).await
    }

    /// Ask a single server, following whatever it hands back.
    pub async fn ask(
        &self,
        name: &DomainName,
        record_type: RecordType,
        server: SocketAddr,
    ) -> Result<AskOutcome, DomainError> {
        self.ask_at(name, record_type, server, 0).await
    }

    fn lookup_at<'a>(
        &'a self,
        name: &'a DomainName,
        record_type: RecordType,
        depth: usize,
    ) -> BoxFuture<'a, Result<Arc<DnsMessage>, DomainError>> {
        async move {
            let mut last = None;

            for &root in self.root_servers.iter() {
                let outcome = self.ask_at(name, record_type, root, depth).await?;
                if outcome.found {
                    return Ok(outcome.message);
                }
                debug!(
                    root = %root,
                    name = %name,
                    record_type = %record_type,
                    "Root gave no answer, trying next"
                );
                last = Some(outcome.message);
            }

            last.ok_or(DomainError::NoRootServers)
        }
        .boxed()
    }

    fn ask_at<'a>(
        &'a self,
        name: &'a DomainName,
        record_type: RecordType,
        server: SocketAddr,
        depth: usize,
    ) -> BoxFuture<'a, Result<AskOutcome, DomainError>> {
        async move {
            if depth > self.max_depth {
                return Err(DomainError::ResolutionLoop {
                    name: name.to_string(),
                    record_type,
                    depth,
                });
            }

            let response = self.fetch(name, record_type, server).await?;

            match ResponseAction::classify(&response, record_type) {
                ResponseAction::Failure => {
                    trace!(server = %server, rcode = %response.response_code, "Negative response");
                    Ok(AskOutcome::not_found(Arc::clone(&response)))
                }
                ResponseAction::Answer => {
                    trace!(
                        server = %server,
                        answers = response.answers.len(),
                        "Authoritative answer"
                    );
                    Ok(AskOutcome::found(Arc::clone(&response)))
                }
                ResponseAction::Alias(target) => {
                    debug!(
                        name = %name,
                        target = %target,
                        record_type = %record_type,
                        "Following CNAME from the root"
                    );
                    let resolved = self.lookup_at(target, record_type, depth + 1).await?;
                    Ok(AskOutcome::found(resolved))
                }
                ResponseAction::Referral(referral) => {
                    self.follow_referral(name, record_type, &response, referral, depth)
                        .await
                }
            }
        }
        .boxed()
    }

    async fn follow_referral(
        &self,
        name: &DomainName,
        record_type: RecordType,
        response: &Arc<DnsMessage>,
        referral: Referral<'_>,
        depth: usize,
    ) -> Result<AskOutcome, DomainError> {
        if referral.is_empty() {
            debug!(name = %name, "Non-authoritative response names no nameservers");
            return Ok(AskOutcome::not_found(Arc::clone(response)));
        }

        trace!(
            glued = referral.glued.len(),
            unglued = referral.unglued.len(),
            "Referral received"
        );

        for (nameserver, address) in referral.glued {
            let server = SocketAddr::new(IpAddr::V4(address), self.port);
            debug!(nameserver = %nameserver, server = %server, "Descending via glue");

            let outcome = self.ask_at(name, record_type, server, depth + 1).await?;
            if outcome.found {
                return Ok(outcome);
            }
        }

        for nameserver in referral.unglued {
            let ns_response = self
                .lookup_at(nameserver, RecordType::A, depth + 1)
                .await?;

            let Some(address) = ns_response.answers.iter().find_map(ResourceRecord::ipv4) else {
                debug!(nameserver = %nameserver, "No address for nameserver, skipping");
                continue;
            };

            let server = SocketAddr::new(IpAddr::V4(address), self.port);
            debug!(
                nameserver = %nameserver,
                server = %server,
                "Descending via resolved nameserver"
            );

            let outcome = self.ask_at(name, record_type, server, depth + 1).await?;
            if outcome.found {
                return Ok(outcome);
            }
        }

        Ok(AskOutcome::not_found(Arc::clone(response)))
    }

    /// Cached response for this hop, or one live query.
    async fn fetch(
        &self,
        name: &DomainName,
        record_type: RecordType,
        server: SocketAddr,
    ) -> Result<Arc<DnsMessage>, DomainError> {
        let to_root = self.is_root(server);

        if to_root {
            if let Some(cached) = self.cache.get_tld(name) {
                debug!(server = %server, name = %name, "TLD cache hit");
                return Ok(cached);
            }
        }

        if let Some(cached) = self.cache.get_exact(name, record_type, server) {
            debug!(
                server = %server,
                name = %name,
                record_type = %record_type,
                "Exact-match cache hit"
            );
            return Ok(cached);
        }

        let query = DnsQuery::new(name.clone(), record_type);
        let encoded = self.codec.encode_query(&query)?;

        self.counter.increment();
        debug!(
            server = %server,
            query = %query,
            protocol = self.transport.protocol_name(),
            "Sending query"
        );

        let bytes = self
            .transport
            .send(server, &encoded.bytes, self.timeout)
            .await?;
        let message = self.codec.decode_response(&bytes, server)?;

        if message.id != encoded.id {
            return Err(DomainError::MalformedResponse(format!(
                "response id {} from {} does not match query id {}",
                message.id, server, encoded.id
            )));
        }

        let message = Arc::new(message);
        self.cache
            .insert_exact(name, record_type, server, Arc::clone(&message));
        if to_root {
            self.cache.insert_tld(name, Arc::clone(&message));
        }

        Ok(message)
    }
}
