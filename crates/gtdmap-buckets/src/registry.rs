//! View type registry.
//!
//! The five classification dimensions are an enum; each maps to a static
//! `ViewType` descriptor holding its display data and the fixed bucket
//! definitions it emits. The table is built at compile time and never
//! mutated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BucketError, Result};

/// Identifier of a classification dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewTypeId {
    Urgency,
    Energy,
    Horizon,
    Business,
    Stream,
}

impl ViewTypeId {
    /// All view types in catalog order.
    pub const ALL: [ViewTypeId; 5] = [
        ViewTypeId::Urgency,
        ViewTypeId::Energy,
        ViewTypeId::Horizon,
        ViewTypeId::Business,
        ViewTypeId::Stream,
    ];

    /// Returns the wire id.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewTypeId::Urgency => "urgency",
            ViewTypeId::Energy => "energy",
            ViewTypeId::Horizon => "horizon",
            ViewTypeId::Business => "business",
            ViewTypeId::Stream => "stream",
        }
    }

    /// Returns the static descriptor for this view.
    pub fn view_type(self) -> &'static ViewType {
        match self {
            ViewTypeId::Urgency => &VIEW_TYPES[0],
            ViewTypeId::Energy => &VIEW_TYPES[1],
            ViewTypeId::Horizon => &VIEW_TYPES[2],
            ViewTypeId::Business => &VIEW_TYPES[3],
            ViewTypeId::Stream => &VIEW_TYPES[4],
        }
    }
}

impl fmt::Display for ViewTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewTypeId {
    type Err = BucketError;

    fn from_str(s: &str) -> Result<Self> {
        ViewTypeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| BucketError::UnknownViewType(s.to_string()))
    }
}

/// Grouping used by the catalog to cluster views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewCategory {
    Perspective,
    Time,
    Organization,
    Execution,
    Workflow,
}

/// Static display data for one bucket of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BucketDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// A registered classification dimension.
///
/// `buckets` lists the fixed buckets in display order. Business and stream
/// views derive most buckets from the data and only register their
/// catch-all bucket here.
#[derive(Debug, Serialize)]
pub struct ViewType {
    pub id: ViewTypeId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub category: ViewCategory,
    pub buckets: &'static [BucketDefinition],
}

impl ViewType {
    /// Looks up a static bucket definition by id.
    pub fn bucket(&self, id: &str) -> Option<&'static BucketDefinition> {
        self.buckets.iter().find(|b| b.id == id)
    }
}

/// Returns every registered view type in catalog order.
pub fn view_types() -> &'static [ViewType] {
    &VIEW_TYPES
}

/// Resolves a wire id to its descriptor.
pub fn lookup(id: &str) -> Result<&'static ViewType> {
    id.parse::<ViewTypeId>().map(ViewTypeId::view_type)
}

pub(crate) const URGENCY_BUCKETS: [BucketDefinition; 4] = [
    BucketDefinition {
        id: "overdue",
        name: "Overdue",
        description: "Past their deadline and need attention now",
        icon: "🔴",
        color: "#DC2626",
    },
    BucketDefinition {
        id: "urgent",
        name: "Due soon",
        description: "Due within the next 48 hours",
        icon: "🟡",
        color: "#F59E0B",
    },
    BucketDefinition {
        id: "important",
        name: "Important",
        description: "High priority without an imminent deadline",
        icon: "🔵",
        color: "#3B82F6",
    },
    BucketDefinition {
        id: "normal",
        name: "Normal",
        description: "No pressing deadline or priority",
        icon: "🟢",
        color: "#10B981",
    },
];

pub(crate) const ENERGY_BUCKETS: [BucketDefinition; 5] = [
    BucketDefinition {
        id: "high-energy",
        name: "High energy",
        description: "Needs full concentration",
        icon: "🔋",
        color: "#DC2626",
    },
    BucketDefinition {
        id: "medium-energy",
        name: "Medium energy",
        description: "Standard effort",
        icon: "🔄",
        color: "#F59E0B",
    },
    BucketDefinition {
        id: "low-energy",
        name: "Low energy",
        description: "Simple work for low-energy moments",
        icon: "🪫",
        color: "#10B981",
    },
    BucketDefinition {
        id: "creative-energy",
        name: "Creative",
        description: "Open-ended creative work",
        icon: "🎨",
        color: "#8B5CF6",
    },
    BucketDefinition {
        id: "administrative-energy",
        name: "Administrative",
        description: "Routine admin that batches well",
        icon: "🗂️",
        color: "#6B7280",
    },
];

pub(crate) const HORIZON_BUCKETS: [BucketDefinition; 6] = [
    BucketDefinition {
        id: "horizon-0",
        name: "Runway (Actions)",
        description: "Current actions and next steps",
        icon: "🛫",
        color: "#10B981",
    },
    BucketDefinition {
        id: "horizon-1",
        name: "10,000ft (Projects)",
        description: "Multi-step projects",
        icon: "🏢",
        color: "#3B82F6",
    },
    BucketDefinition {
        id: "horizon-2",
        name: "20,000ft (Areas)",
        description: "Areas of responsibility",
        icon: "🌍",
        color: "#8B5CF6",
    },
    BucketDefinition {
        id: "horizon-3",
        name: "30,000ft (Goals)",
        description: "One to two year goals",
        icon: "🎯",
        color: "#F59E0B",
    },
    BucketDefinition {
        id: "horizon-4",
        name: "40,000ft (Vision)",
        description: "Three to five year vision",
        icon: "🌟",
        color: "#EF4444",
    },
    BucketDefinition {
        id: "horizon-5",
        name: "50,000ft (Purpose)",
        description: "Life purpose and principles",
        icon: "🌌",
        color: "#EC4899",
    },
];

pub(crate) const UNGROUPED_BUCKET: BucketDefinition = BucketDefinition {
    id: "ungrouped",
    name: "Ungrouped",
    description: "Not tied to a company or project",
    icon: "🏠",
    color: "#6B7280",
};

pub(crate) const UNASSIGNED_STREAM_BUCKET: BucketDefinition = BucketDefinition {
    id: "stream-unassigned",
    name: "Unassigned",
    description: "Not routed into any stream",
    icon: "📋",
    color: "#6B7280",
};

static VIEW_TYPES: [ViewType; 5] = [
    ViewType {
        id: ViewTypeId::Urgency,
        name: "Traffic map",
        description: "Deadlines and urgency, like street traffic",
        icon: "🚦",
        color: "#DC2626",
        category: ViewCategory::Time,
        buckets: &URGENCY_BUCKETS,
    },
    ViewType {
        id: ViewTypeId::Energy,
        name: "Energy map",
        description: "By the energy the work demands",
        icon: "⚡",
        color: "#F59E0B",
        category: ViewCategory::Execution,
        buckets: &ENERGY_BUCKETS,
    },
    ViewType {
        id: ViewTypeId::Horizon,
        name: "Altitude map",
        description: "By GTD horizon of focus (0-5)",
        icon: "🛩️",
        color: "#3B82F6",
        category: ViewCategory::Perspective,
        buckets: &HORIZON_BUCKETS,
    },
    ViewType {
        id: ViewTypeId::Business,
        name: "Business map",
        description: "By company and project",
        icon: "🏢",
        color: "#10B981",
        category: ViewCategory::Organization,
        buckets: &[UNGROUPED_BUCKET],
    },
    ViewType {
        id: ViewTypeId::Stream,
        name: "Infrastructure map",
        description: "By GTD workflow stream",
        icon: "🌊",
        color: "#8B5CF6",
        category: ViewCategory::Workflow,
        buckets: &[UNASSIGNED_STREAM_BUCKET],
    },
];
