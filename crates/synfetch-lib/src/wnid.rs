use crate::error::SynsetError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const PREFIX: char = 'n';
const DIGITS: usize = 8;

/// Taxonomy node identifier: `n` followed by eight decimal digits, e.g. `n01440764`.
///
/// Only the shape is checked. Whether the node exists is up to the service.
#[derive(Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Wnid(String);

impl Wnid {
    pub fn parse(value: &str) -> Result<Self, SynsetError> {
        let invalid = || SynsetError::InvalidWnid {
            wnid: value.to_string(),
        };

        let digits = value.strip_prefix(PREFIX).ok_or_else(invalid)?;
        if digits.len() != DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Wnid {
    type Err = SynsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Wnid {
    type Error = SynsetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Wnid> for String {
    fn from(value: Wnid) -> Self {
        value.0
    }
}

impl AsRef<str> for Wnid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Wnid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_canonical_wnid() {
        let wnid = Wnid::parse("n01440764").unwrap();
        assert_eq!(wnid.as_str(), "n01440764");
        assert_eq!(wnid.to_string(), "n01440764");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(Wnid::parse("n0144076").is_err());
        assert!(Wnid::parse("n014407640").is_err());
        assert!(Wnid::parse("n").is_err());
        assert!(Wnid::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_prefix() {
        assert!(Wnid::parse("x01440764").is_err());
        assert!(Wnid::parse("N01440764").is_err());
        assert!(Wnid::parse("001440764").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!(Wnid::parse("n0144076a").is_err());
        assert!(Wnid::parse("n+1440764").is_err());
        assert!(Wnid::parse("n 1440764").is_err());
        assert!(Wnid::parse("n０1440764").is_err());
    }

    #[test]
    fn test_parse_error_names_the_input() {
        match Wnid::parse("bogus") {
            Err(SynsetError::InvalidWnid { wnid }) => assert_eq!(wnid, "bogus"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_from_str_and_deserialize() {
        let wnid: Wnid = "n02084071".parse().unwrap();
        assert_eq!(wnid, Wnid::parse("n02084071").unwrap());

        let wnid: Wnid = serde_json::from_str("\"n02084071\"").unwrap();
        assert_eq!(wnid.as_str(), "n02084071");
        assert!(serde_json::from_str::<Wnid>("\"n2084071\"").is_err());
    }
}
