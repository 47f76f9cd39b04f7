//! Identifier newtypes with smart constructors.
//!
//! Section and subsection ids key the editable content hierarchy and double
//! as route parameters (`/section/<id>`). Both validate non-empty strings at
//! construction time; the raw constructor is never exported.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a top-level content section (e.g. `rooms`, `restaurant`).
///
/// Insertion order of sections in the store is display order; the id itself
/// carries no ordering meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Smart constructor: rejects the empty string.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidSectionId> {
        let raw = raw.into();
        if raw.is_empty() {
            Err(InvalidSectionId::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Identifier of a nested subsection within a section (e.g. a menu tab).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubSectionId(String);

impl SubSectionId {
    /// Smart constructor: rejects the empty string.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidSubSectionId> {
        let raw = raw.into();
        if raw.is_empty() {
            Err(InvalidSubSectionId::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubSectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

// ===== Error Types =====

/// Rejected section id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSectionId {
    /// Section ids must be non-empty.
    #[error("section id cannot be empty")]
    Empty,
}

/// Rejected subsection id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSubSectionId {
    /// Subsection ids must be non-empty.
    #[error("subsection id cannot be empty")]
    Empty,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_id_rejects_empty() {
        assert_eq!(SectionId::new(""), Err(InvalidSectionId::Empty));
    }

    #[test]
    fn section_id_accepts_non_empty() {
        let id = SectionId::new("rooms").expect("non-empty id should be accepted");
        assert_eq!(id.as_str(), "rooms");
        assert_eq!(id.to_string(), "rooms");
    }

    #[test]
    fn subsection_id_rejects_empty() {
        assert_eq!(SubSectionId::new(""), Err(InvalidSubSectionId::Empty));
    }

    #[test]
    fn subsection_id_accepts_non_empty() {
        let id = SubSectionId::new("wine-list").expect("non-empty id should be accepted");
        assert_eq!(id.as_str(), "wine-list");
    }

    #[test]
    fn section_id_serializes_as_bare_string() {
        let id = SectionId::new("rooms").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"rooms\"");
    }
}
