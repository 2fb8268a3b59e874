use super::RecordType;
use crate::domain_name::DomainName;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Type-specific payload of a resource record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(DomainName),
    NS(DomainName),
    MX { preference: u16, exchange: DomainName },
    /// Presentation text for types the resolver does not interpret.
    Other(String),
}

/// DNS resource record as seen by the resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Owner name
    pub name: DomainName,
    /// Record type
    pub record_type: RecordType,
    /// Time to live in seconds (carried, never enforced)
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn a(name: DomainName, ttl: u32, address: Ipv4Addr) -> Self {
        Self {
            name,
            record_type: RecordType::A,
            ttl,
            data: RecordData::A(address),
        }
    }

    pub fn aaaa(name: DomainName, ttl: u32, address: Ipv6Addr) -> Self {
        Self {
            name,
            record_type: RecordType::AAAA,
            ttl,
            data: RecordData::AAAA(address),
        }
    }

    pub fn cname(name: DomainName, ttl: u32, target: DomainName) -> Self {
        Self {
            name,
            record_type: RecordType::CNAME,
            ttl,
            data: RecordData::CNAME(target),
        }
    }

    pub fn ns(name: DomainName, ttl: u32, nameserver: DomainName) -> Self {
        Self {
            name,
            record_type: RecordType::NS,
            ttl,
            data: RecordData::NS(nameserver),
        }
    }

    pub fn mx(name: DomainName, ttl: u32, preference: u16, exchange: DomainName) -> Self {
        Self {
            name,
            record_type: RecordType::MX,
            ttl,
            data: RecordData::MX {
                preference,
                exchange,
            },
        }
    }

    pub fn other(name: DomainName, record_type: RecordType, ttl: u32, text: String) -> Self {
        Self {
            name,
            record_type,
            ttl,
            data: RecordData::Other(text),
        }
    }

    /// IPv4 address carried by an A record.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.data {
            RecordData::A(address) => Some(address),
            _ => None,
        }
    }
}
