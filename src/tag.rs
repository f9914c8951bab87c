//! The Tag value type
//!
//! A tag names one entity: a kind plus an id, rendered canonically as
//! `<kind>-<id>`. Tags only come into existence through validated parsing,
//! so holding a `Tag` means holding a well-formed identifier. The canonical
//! string is the interchange form: it is what gets displayed, serialized,
//! and compared, and parsing it back yields an equal tag.

use crate::error::{Result, TagSetError};
use crate::kinds::{Catalogue, StandardCatalogue};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated, immutable entity identifier.
///
/// Equality compares kind and id, which is the same as comparing canonical
/// strings: the kind prefix never contains a dash, so `<kind>-<id>` splits
/// back into exactly one (kind, id) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    kind: String,
    id: String,
}

impl Tag {
    /// Parse a canonical tag string against a kind catalogue.
    ///
    /// The string splits at the first `-` into a kind prefix and an id
    /// suffix; the catalogue must recognize the kind and accept the id
    /// shape. Parsing is all-or-nothing: any failure yields
    /// [`TagSetError::InvalidTag`] carrying the original input.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagset::{StandardCatalogue, Tag};
    ///
    /// let tag = Tag::parse("unit-wordpress-0", &StandardCatalogue).unwrap();
    /// assert_eq!(tag.kind(), "unit");
    /// assert_eq!(tag.id(), "wordpress-0");
    /// ```
    pub fn parse(s: &str, catalogue: &dyn Catalogue) -> Result<Self> {
        let (kind, id) = s
            .split_once('-')
            .ok_or_else(|| TagSetError::InvalidTag(s.to_string()))?;
        if !catalogue.recognizes(kind) || !catalogue.validate(kind, id) {
            return Err(TagSetError::InvalidTag(s.to_string()));
        }
        Ok(Self {
            kind: kind.to_string(),
            id: id.to_string(),
        })
    }

    /// The kind of entity this tag names
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The id of the entity within its kind
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.id)
    }
}

/// Parses with the [`StandardCatalogue`]
impl FromStr for Tag {
    type Err = TagSetError;

    fn from_str(s: &str) -> Result<Self> {
        Tag::parse(s, &StandardCatalogue)
    }
}

/// Serializes as the canonical string
impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Deserializes by parsing a canonical string with the [`StandardCatalogue`]
impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_tags() {
        let tag: Tag = "unit-wordpress-0".parse().unwrap();
        assert_eq!(tag.kind(), "unit");
        assert_eq!(tag.id(), "wordpress-0");

        let tag: Tag = "machine-0".parse().unwrap();
        assert_eq!(tag.kind(), "machine");
        assert_eq!(tag.id(), "0");

        let tag: Tag = "application-rabbitmq-server".parse().unwrap();
        assert_eq!(tag.kind(), "application");
        assert_eq!(tag.id(), "rabbitmq-server");
    }

    #[test]
    fn test_parse_invalid_tags() {
        for input in [
            "not-a-tag",
            "unit-wordpress", // no unit number
            "machine-wordpress-0",
            "unit",  // no separator at all
            "-", // empty kind and id
            "",
        ] {
            let err = input.parse::<Tag>().unwrap_err();
            assert_eq!(err.to_string(), format!("\"{}\" is not a valid tag", input));
        }
    }

    #[test]
    fn test_display_is_canonical_form() {
        let tag: Tag = "unit-rabbitmq-server-0".parse().unwrap();
        assert_eq!(tag.to_string(), "unit-rabbitmq-server-0");
    }

    #[test]
    fn test_round_trip() {
        for input in ["unit-wordpress-0", "machine-0/lxd/1", "application-mysql"] {
            let tag: Tag = input.parse().unwrap();
            let reparsed: Tag = tag.to_string().parse().unwrap();
            assert_eq!(tag, reparsed);
        }
    }

    #[test]
    fn test_equality_matches_canonical_string() {
        let a: Tag = "unit-wordpress-0".parse().unwrap();
        let b: Tag = "unit-wordpress-0".parse().unwrap();
        let c: Tag = "unit-wordpress-1".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_custom_catalogue() {
        struct VolumeCatalogue;

        impl Catalogue for VolumeCatalogue {
            fn recognizes(&self, kind: &str) -> bool {
                kind == "volume"
            }

            fn validate(&self, kind: &str, id: &str) -> bool {
                kind == "volume" && id.chars().all(|c| c.is_ascii_digit()) && !id.is_empty()
            }
        }

        let tag = Tag::parse("volume-7", &VolumeCatalogue).unwrap();
        assert_eq!(tag.kind(), "volume");
        assert_eq!(tag.id(), "7");

        // The standard kinds are not part of this catalogue.
        assert!(Tag::parse("machine-0", &VolumeCatalogue).is_err());
    }

    #[test]
    fn test_serde_as_canonical_string() {
        let tag: Tag = "unit-wordpress-0".parse().unwrap();
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, "\"unit-wordpress-0\"");

        let back: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }

    #[test]
    fn test_serde_rejects_invalid_string() {
        let err = serde_json::from_str::<Tag>("\"not-a-tag\"").unwrap_err();
        assert!(err.to_string().contains("\"not-a-tag\" is not a valid tag"));
    }
}
