//! rootwalk Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_query;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod host_report;

pub use config::{CliOverrides, Config, ConfigError, ResolverConfig};
pub use dns_message::{DnsMessage, ResponseCode};
pub use dns_query::DnsQuery;
pub use dns_record::{RecordData, RecordType, ResourceRecord};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use host_report::{AddressEntry, AliasEntry, HostReport, MailExchangeEntry};
