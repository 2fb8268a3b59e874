use crate::services::IterativeResolver;
use rootwalk_domain::{
    AddressEntry, AliasEntry, DomainError, DomainName, HostReport, MailExchangeEntry, RecordData,
    RecordType,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// `host`-style lookup: CNAME, A, AAAA and MX for one target, in that order.
pub struct LookupHostUseCase {
    resolver: Arc<IterativeResolver>,
}

impl LookupHostUseCase {
    pub fn new(resolver: Arc<IterativeResolver>) -> Self {
        Self { resolver }
    }

    /// Any error aborts the whole report for this target.
    pub async fn execute(&self, target: &str) -> Result<HostReport, DomainError> {
        let name: DomainName = target.parse()?;
        let mut report = HostReport::new(target);

        let response = self.resolver.lookup(&name, RecordType::CNAME).await?;
        for record in response.answers_of_type(RecordType::CNAME) {
            if let RecordData::CNAME(canonical) = &record.data {
                report.aliases.push(AliasEntry {
                    alias: target.to_string(),
                    name: canonical.to_string(),
                });
            }
        }

        let response = self.resolver.lookup(&name, RecordType::A).await?;
        for record in response.answers_of_type(RecordType::A) {
            if let RecordData::A(address) = record.data {
                report.ipv4.push(AddressEntry {
                    name: record.name.to_string(),
                    address: IpAddr::V4(address),
                });
            }
        }

        let response = self.resolver.lookup(&name, RecordType::AAAA).await?;
        for record in response.answers_of_type(RecordType::AAAA) {
            if let RecordData::AAAA(address) = record.data {
                report.ipv6.push(AddressEntry {
                    name: record.name.to_string(),
                    address: IpAddr::V6(address),
                });
            }
        }

        let response = self.resolver.lookup(&name, RecordType::MX).await?;
        for record in response.answers_of_type(RecordType::MX) {
            if let RecordData::MX {
                preference,
                exchange,
            } = &record.data
            {
                report.mail.push(MailExchangeEntry {
                    name: record.name.to_string(),
                    preference: *preference,
                    exchange: exchange.to_string(),
                });
            }
        }

        debug!(
            target = target,
            aliases = report.aliases.len(),
            ipv4 = report.ipv4.len(),
            ipv6 = report.ipv6.len(),
            mail = report.mail.len(),
            "Host lookup complete"
        );

        Ok(report)
    }
}
