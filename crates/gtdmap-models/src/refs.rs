//! References to the containers a work item is filed under.
//!
//! These are denormalized copies supplied by the data store alongside each
//! item, so the engine can label buckets without a second lookup.

use serde::{Deserialize, Serialize};

use crate::ids::{CompanyId, ProjectId, StreamId};

/// GTD role played by a stream.
///
/// Declaration order is the display order used when listing streams.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GtdRole {
    Inbox,
    NextActions,
    Projects,
    WaitingFor,
    SomedayMaybe,
    Contexts,
    Areas,
    Reference,
    #[default]
    Custom,
}

impl GtdRole {
    /// Returns the icon shown for streams with this role.
    pub fn icon(self) -> &'static str {
        match self {
            GtdRole::Inbox => "📥",
            GtdRole::NextActions => "⚡",
            GtdRole::Projects => "📁",
            GtdRole::WaitingFor => "⏳",
            GtdRole::SomedayMaybe => "🌟",
            GtdRole::Contexts => "🎯",
            GtdRole::Areas => "🏠",
            GtdRole::Reference => "📚",
            GtdRole::Custom => "🔧",
        }
    }

    /// Returns the wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            GtdRole::Inbox => "INBOX",
            GtdRole::NextActions => "NEXT_ACTIONS",
            GtdRole::Projects => "PROJECTS",
            GtdRole::WaitingFor => "WAITING_FOR",
            GtdRole::SomedayMaybe => "SOMEDAY_MAYBE",
            GtdRole::Contexts => "CONTEXTS",
            GtdRole::Areas => "AREAS",
            GtdRole::Reference => "REFERENCE",
            GtdRole::Custom => "CUSTOM",
        }
    }
}

/// A workflow stream an item belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamRef {
    pub id: StreamId,
    pub name: String,

    /// Display colour (hex), if the stream defines one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default)]
    pub gtd_role: GtdRole,

    /// Historical throughput as a percentage of completed over total items.
    /// Computed by the data store; the engine only passes it through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,
}

impl StreamRef {
    /// Creates a custom-role stream reference.
    pub fn new(id: impl Into<StreamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
            gtd_role: GtdRole::Custom,
            efficiency: None,
        }
    }

    /// Sets the GTD role.
    pub fn with_role(mut self, role: GtdRole) -> Self {
        self.gtd_role = role;
        self
    }

    /// Sets the display colour.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the efficiency percentage.
    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = Some(efficiency);
        self
    }
}

/// A company an item is done for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRef {
    pub id: CompanyId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl CompanyRef {
    pub fn new(id: impl Into<CompanyId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            industry: None,
        }
    }
}

/// A project an item is part of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub id: ProjectId,
    pub name: String,
}

impl ProjectRef {
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gtd_role_order_follows_workflow() {
        assert!(GtdRole::Inbox < GtdRole::NextActions);
        assert!(GtdRole::Reference < GtdRole::Custom);
    }

    #[test]
    fn test_gtd_role_serialization() {
        let json = serde_json::to_string(&GtdRole::WaitingFor).unwrap();
        assert_eq!(json, "\"WAITING_FOR\"");
        assert_eq!(GtdRole::WaitingFor.as_str(), "WAITING_FOR");
    }

    #[test]
    fn test_stream_ref_defaults_role_when_missing() {
        let stream: StreamRef =
            serde_json::from_str(r#"{"id":"s1","name":"Inbox"}"#).unwrap();
        assert_eq!(stream.gtd_role, GtdRole::Custom);
        assert!(stream.efficiency.is_none());
    }
}
