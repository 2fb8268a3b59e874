use rootwalk_domain::{DnsMessage, DomainName, RecordType};
use std::net::Ipv4Addr;

/// What the resolver should do next with a response from one server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseAction<'a> {
    /// Response code other than NOERROR: this server cannot answer.
    Failure,
    /// Authoritative and final, positive or empty.
    Answer,
    /// Authoritative CNAME in place of the requested type; restart at the target.
    Alias(&'a DomainName),
    /// Non-authoritative delegation towards closer nameservers.
    Referral(Referral<'a>),
}

/// Referred nameservers split by whether the additional section carried an
/// A record for them. Both lists keep authority-section order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Referral<'a> {
    pub glued: Vec<(&'a DomainName, Ipv4Addr)>,
    pub unglued: Vec<&'a DomainName>,
}

impl Referral<'_> {
    pub fn is_empty(&self) -> bool {
        self.glued.is_empty() && self.unglued.is_empty()
    }
}

impl<'a> ResponseAction<'a> {
    pub fn classify(message: &'a DnsMessage, requested: RecordType) -> Self {
        if !message.response_code.is_success() {
            return ResponseAction::Failure;
        }

        if message.authoritative {
            if !message.has_answers() || message.has_answer_of_type(requested) {
                return ResponseAction::Answer;
            }
            return match message.first_cname_target() {
                Some(target) => ResponseAction::Alias(target),
                None => ResponseAction::Answer,
            };
        }

        let mut referral = Referral::default();
        for nameserver in message.referral_nameservers() {
            match message.glue_for(nameserver) {
                Some(address) => referral.glued.push((nameserver, address)),
                None => referral.unglued.push(nameserver),
            }
        }
        ResponseAction::Referral(referral)
    }
}
