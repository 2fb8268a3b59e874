use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// IANA root servers a.root-servers.net through m.root-servers.net, in that order.
pub const DEFAULT_ROOT_SERVERS: [Ipv4Addr; 13] = [
    Ipv4Addr::new(198, 41, 0, 4),
    Ipv4Addr::new(199, 9, 14, 201),
    Ipv4Addr::new(192, 33, 4, 12),
    Ipv4Addr::new(199, 7, 91, 13),
    Ipv4Addr::new(192, 203, 230, 10),
    Ipv4Addr::new(192, 5, 5, 241),
    Ipv4Addr::new(192, 112, 36, 4),
    Ipv4Addr::new(198, 97, 190, 53),
    Ipv4Addr::new(192, 36, 148, 17),
    Ipv4Addr::new(192, 58, 128, 30),
    Ipv4Addr::new(193, 0, 14, 129),
    Ipv4Addr::new(199, 7, 83, 42),
    Ipv4Addr::new(202, 12, 27, 33),
];

/// Iterative resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Root servers, tried strictly in this order
    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<IpAddr>,

    /// Port used for roots and for every referred nameserver
    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-query timeout in milliseconds (no retry)
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Nesting bound for one top-level lookup (referrals, NS address lookups, alias restarts)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_servers: default_root_servers(),
            port: default_port(),
            query_timeout: default_query_timeout(),
            max_depth: default_max_depth(),
        }
    }
}

impl ResolverConfig {
    /// Root server socket addresses in configured order.
    pub fn root_socket_addrs(&self) -> Vec<SocketAddr> {
        self.root_servers
            .iter()
            .map(|ip| SocketAddr::new(*ip, self.port))
            .collect()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout)
    }

    pub fn with_root_servers(mut self, roots: Vec<IpAddr>) -> Self {
        self.root_servers = roots;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.query_timeout = timeout_ms;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

fn default_root_servers() -> Vec<IpAddr> {
    DEFAULT_ROOT_SERVERS.iter().copied().map(IpAddr::V4).collect()
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout() -> u64 {
    3000
}

fn default_max_depth() -> usize {
    48
}
