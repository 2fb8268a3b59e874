use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

/// Absolute domain name stored as an ordered list of labels.
///
/// Labels keep the case they were parsed with (so they print back the way the
/// user or the server wrote them), but equality and hashing ignore ASCII case.
/// This makes `DomainName` usable directly as a cache key component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainName {
    labels: Vec<String>,
}

impl DomainName {
    /// The root of the hierarchy (`.`).
    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    /// Build a name from already split labels, applying the same checks as parsing.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        Self::validate(&labels)?;
        Ok(Self { labels })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Last label of the name (`com` for `www.example.com.`), `None` for the root.
    pub fn top_level_label(&self) -> Option<&str> {
        self.labels.last().map(String::as_str)
    }

    fn validate(labels: &[String]) -> Result<(), DomainError> {
        let mut total = 0usize;
        for label in labels {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "empty label in '{}'",
                    labels.join(".")
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' exceeds {} octets",
                    label, MAX_LABEL_LEN
                )));
            }
            total += label.len() + 1;
        }

        if total > MAX_NAME_LEN + 1 {
            return Err(DomainError::InvalidDomainName(format!(
                "name '{}' exceeds {} octets",
                labels.join("."),
                MAX_NAME_LEN
            )));
        }

        Ok(())
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "." {
            return Ok(Self::root());
        }

        let relative = trimmed.strip_suffix('.').unwrap_or(trimmed);
        Self::from_labels(relative.split('.'))
    }
}

impl TryFrom<String> for DomainName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DomainName> for String {
    fn from(name: DomainName) -> Self {
        name.to_string()
    }
}

impl PartialEq for DomainName {
    fn eq(&self, other: &Self) -> bool {
        self.labels.len() == other.labels.len()
            && self
                .labels
                .iter()
                .zip(&other.labels)
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

impl Eq for DomainName {}

impl Hash for DomainName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.labels.len().hash(state);
        for label in &self.labels {
            for byte in label.bytes() {
                state.write_u8(byte.to_ascii_lowercase());
            }
            // label separator, keeps ["ab","c"] and ["a","bc"] apart
            state.write_u8(b'.');
        }
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }
        for label in &self.labels {
            write!(f, "{}.", label)?;
        }
        Ok(())
    }
}
