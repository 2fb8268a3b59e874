use serde::Serialize;
use std::net::IpAddr;

/// `{alias} is an alias for {name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasEntry {
    pub alias: String,
    pub name: String,
}

/// `{name} has address {address}` / `{name} has IPv6 address {address}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressEntry {
    pub name: String,
    pub address: IpAddr,
}

/// `{name} mail is handled by {preference} {exchange}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailExchangeEntry {
    pub name: String,
    pub preference: u16,
    pub exchange: String,
}

/// Everything discovered about one target name, grouped by record type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HostReport {
    pub target: String,
    pub aliases: Vec<AliasEntry>,
    pub ipv4: Vec<AddressEntry>,
    pub ipv6: Vec<AddressEntry>,
    pub mail: Vec<MailExchangeEntry>,
}

impl HostReport {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
            && self.ipv4.is_empty()
            && self.ipv6.is_empty()
            && self.mail.is_empty()
    }
}
