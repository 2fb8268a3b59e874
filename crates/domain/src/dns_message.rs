use crate::dns_query::DnsQuery;
use crate::dns_record::{RecordData, RecordType, ResourceRecord};
use crate::domain_name::DomainName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// Response code of a DNS message (RFC 1035 §4.1.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u16),
}

impl ResponseCode {
    pub fn from_u16(value: u16) -> Self {
        match value {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            other => ResponseCode::Other(other),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseCode::NoError)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Other(code) => write!(f, "RCODE{}", code),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Structured DNS response, independent of any wire library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsMessage {
    pub id: u16,
    pub question: Option<DnsQuery>,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
    pub response_code: ResponseCode,
    pub authoritative: bool,
}

impl DnsMessage {
    /// Empty response to `question`, success code, not authoritative.
    pub fn response_to(id: u16, question: DnsQuery) -> Self {
        Self {
            id,
            question: Some(question),
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
            response_code: ResponseCode::NoError,
            authoritative: false,
        }
    }

    pub fn has_answers(&self) -> bool {
        !self.answers.is_empty()
    }

    /// True when any answer record carries the requested type.
    pub fn has_answer_of_type(&self, record_type: RecordType) -> bool {
        self.answers.iter().any(|r| r.record_type == record_type)
    }

    pub fn answers_of_type(
        &self,
        record_type: RecordType,
    ) -> impl Iterator<Item = &ResourceRecord> + '_ {
        self.answers
            .iter()
            .filter(move |r| r.record_type == record_type)
    }

    /// Target of the first CNAME anywhere in the answer section.
    pub fn first_cname_target(&self) -> Option<&DomainName> {
        self.answers.iter().find_map(|r| match &r.data {
            RecordData::CNAME(target) => Some(target),
            _ => None,
        })
    }

    /// Nameserver names from the NS records of the authority section, in order.
    pub fn referral_nameservers(&self) -> Vec<&DomainName> {
        self.authority
            .iter()
            .filter_map(|r| match &r.data {
                RecordData::NS(ns) => Some(ns),
                _ => None,
            })
            .collect()
    }

    /// Address of the first A record in the additional section owned by `nameserver`.
    pub fn glue_for(&self, nameserver: &DomainName) -> Option<Ipv4Addr> {
        self.additional
            .iter()
            .filter(|r| r.name == *nameserver)
            .find_map(ResourceRecord::ipv4)
    }
}
