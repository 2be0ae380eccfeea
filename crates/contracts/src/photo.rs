//! Photo route identifier
//!
//! The detail route is pre-declared for a fixed, finite set of ids.
//! Anything outside the set must resolve to not-found at render time,
//! so construction goes through [`PhotoId::parse`] and nothing else.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a photo detail page, limited to the static set 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhotoId(u8);

impl PhotoId {
    /// The complete set of valid ids, in index-page display order.
    pub const ALL: [PhotoId; 6] = [
        PhotoId(1),
        PhotoId(2),
        PhotoId(3),
        PhotoId(4),
        PhotoId(5),
        PhotoId(6),
    ];

    /// Parse a raw route segment. Only the canonical single-digit
    /// spellings "1".."6" are accepted; "01", " 1" and friends are not.
    pub fn parse(raw: &str) -> Option<PhotoId> {
        match raw.as_bytes() {
            [d @ b'1'..=b'6'] => Some(PhotoId(d - b'0')),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self.0 {
            1 => "1",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            _ => "6",
        }
    }

    /// Path of the detail page for this id.
    pub fn href(&self) -> String {
        format!("/photo/{}", self.as_str())
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a route segment is outside the static set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePhotoIdError(pub String);

impl fmt::Display for ParsePhotoIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown photo id: {:?}", self.0)
    }
}

impl std::error::Error for ParsePhotoIdError {}

impl FromStr for PhotoId {
    type Err = ParsePhotoIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhotoId::parse(s).ok_or_else(|| ParsePhotoIdError(s.to_string()))
    }
}

// On the wire the id is the bare digit string, same as the route segment.
impl Serialize for PhotoId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PhotoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        PhotoId::parse(&raw).ok_or_else(|| D::Error::custom(ParsePhotoIdError(raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_the_static_set() {
        for (i, id) in PhotoId::ALL.iter().enumerate() {
            let raw = (i + 1).to_string();
            assert_eq!(PhotoId::parse(&raw), Some(*id));
            assert_eq!(id.as_str(), raw);
        }
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for raw in ["0", "7", "10", "01", " 1", "1 ", "", "abc", "-1", "1.0"] {
            assert_eq!(PhotoId::parse(raw), None, "{raw:?} must not parse");
        }
    }

    #[test]
    fn test_all_is_ordered() {
        let mut sorted = PhotoId::ALL;
        sorted.sort();
        assert_eq!(sorted, PhotoId::ALL);
        assert_eq!(PhotoId::ALL.len(), 6);
    }

    #[test]
    fn test_from_str_reports_the_bad_segment() {
        let err = "42".parse::<PhotoId>().unwrap_err();
        assert_eq!(err, ParsePhotoIdError("42".to_string()));
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_href() {
        assert_eq!(PhotoId::parse("3").unwrap().href(), "/photo/3");
    }

    #[test]
    fn test_serde_is_the_bare_digit() {
        let id = PhotoId::parse("5").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"5\"");
        assert_eq!(serde_json::from_str::<PhotoId>("\"5\"").unwrap(), id);
        assert!(serde_json::from_str::<PhotoId>("\"9\"").is_err());
        assert!(serde_json::from_str::<PhotoId>("5").is_err());
    }
}
