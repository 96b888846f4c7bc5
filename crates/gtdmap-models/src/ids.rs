//! Strongly typed identifiers.
//!
//! All identifiers are opaque strings owned by the upstream data store.
//! The newtypes only exist so a stream id can never be passed where a
//! company id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Identifier of a work item.
    ItemId
);
string_id!(
    /// Identifier of a GTD stream.
    StreamId
);
string_id!(
    /// Identifier of a company (business grouping).
    CompanyId
);
string_id!(
    /// Identifier of a project (business grouping fallback).
    ProjectId
);
string_id!(
    /// Identifier of the organization that owns a set of items.
    OrganizationId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(ItemId::new(), ItemId::new());
    }

    #[test]
    fn test_display_is_raw_string() {
        let id = StreamId::from("stream-42");
        assert_eq!(id.to_string(), "stream-42");
        assert_eq!(id.as_str(), "stream-42");
    }

    #[test]
    fn test_serializes_transparently() {
        let id = CompanyId::from("acme");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"acme\"");
    }
}
