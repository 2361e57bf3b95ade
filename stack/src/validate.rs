use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Stream group identifiers are `sg-` followed by at least nine
/// alphanumerics, with no upper bound on length.
pub const STREAM_GROUP_PATTERN: &str = r"^sg-[A-Za-z0-9]{9,}$";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("stream group id {id:?} does not match required pattern {pattern}")]
pub struct FormatError {
    pub id: String,
    pub pattern: &'static str,
}

/// A stream group identifier that has passed the format gate. The inner
/// string is exactly what was supplied; validation never rewrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StreamGroupId(String);

impl StreamGroupId {
    pub fn new(id: &str) -> Result<Self, FormatError> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern = PATTERN.get_or_init(|| Regex::new(STREAM_GROUP_PATTERN).unwrap());
        if pattern.is_match(id) {
            Ok(Self(id.to_owned()))
        } else {
            Err(FormatError {
                id: id.to_owned(),
                pattern: STREAM_GROUP_PATTERN,
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StreamGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The application identifier carries no format guarantee. Application
/// identity is enforced by the streaming service at session time, not here,
/// so any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ApplicationId(String);

impl From<String> for ApplicationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl ApplicationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_ids_unchanged() {
        for id in ["sg-abc123456", "sg-000000000", "sg-AbC123456789xyz"] {
            let validated = StreamGroupId::new(id).unwrap();
            assert_eq!(validated.as_str(), id);
        }
    }

    #[test]
    fn nine_character_suffix_is_the_boundary() {
        assert!(StreamGroupId::new("sg-a2c4e6g8i").is_ok());
        assert!(StreamGroupId::new("sg-a2c4e6g8").is_err());
    }

    #[test]
    fn rejects_wrong_prefix() {
        assert!(StreamGroupId::new("xg-abc123456").is_err());
        assert!(StreamGroupId::new("sg_abc123456").is_err());
        assert!(StreamGroupId::new("abc123456").is_err());
    }

    #[test]
    fn rejects_empty_string() {
        assert!(StreamGroupId::new("").is_err());
    }

    #[test]
    fn rejects_non_alphanumeric_suffix_even_when_long_enough() {
        assert!(StreamGroupId::new("sg-abc123456!").is_err());
        assert!(StreamGroupId::new("sg-abc_1234567").is_err());
        assert!(StreamGroupId::new("sg-abc 123456789").is_err());
    }

    #[test]
    fn error_names_the_expected_pattern() {
        let err = StreamGroupId::new("bogus").unwrap_err();
        assert!(err.to_string().contains(STREAM_GROUP_PATTERN));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn application_id_is_accepted_verbatim() {
        let id = ApplicationId::from("definitely not validated".to_owned());
        assert_eq!(id.as_str(), "definitely not validated");
    }
}
