//! Energy view: one bucket per energy level.

use gtdmap_models::{EnergyLevel, ItemId, Priority, WorkItem};

use crate::bucket::{BucketGroup, BucketMetadata, TimeOfDay};
use crate::registry::ENERGY_BUCKETS;

const HIGH_ENERGY_CONTEXTS: [&str; 2] = ["@computer", "@calls"];
const LOW_ENERGY_CONTEXTS: [&str; 2] = ["@waiting", "@reading"];

/// Estimates above this many hours need high energy.
const LONG_ESTIMATE_HOURS: f32 = 4.0;
/// Estimates below this many hours need little energy.
const SHORT_ESTIMATE_HOURS: f32 = 1.0;

/// Returns the energy an item needs: the explicit requirement if set,
/// otherwise an estimate from priority, size and context.
pub fn infer_energy(item: &WorkItem) -> EnergyLevel {
    if let Some(level) = item.energy_required {
        return level;
    }

    let hours = item.estimated_hours.unwrap_or(SHORT_ESTIMATE_HOURS);
    let context = item.context.as_deref().unwrap_or("");

    if item.priority.is_elevated()
        || hours > LONG_ESTIMATE_HOURS
        || HIGH_ENERGY_CONTEXTS.iter().any(|c| context.contains(c))
    {
        EnergyLevel::High
    } else if item.priority == Priority::Low
        || hours < SHORT_ESTIMATE_HOURS
        || LOW_ENERGY_CONTEXTS.iter().any(|c| context.contains(c))
    {
        EnergyLevel::Low
    } else {
        EnergyLevel::Medium
    }
}

/// Position of a level in `ENERGY_BUCKETS`.
fn slot(level: EnergyLevel) -> usize {
    match level {
        EnergyLevel::High => 0,
        EnergyLevel::Medium => 1,
        EnergyLevel::Low => 2,
        EnergyLevel::Creative => 3,
        EnergyLevel::Administrative => 4,
    }
}

const LEVELS: [EnergyLevel; 5] = [
    EnergyLevel::High,
    EnergyLevel::Medium,
    EnergyLevel::Low,
    EnergyLevel::Creative,
    EnergyLevel::Administrative,
];

fn metadata(level: EnergyLevel) -> BucketMetadata {
    let (best_time, focus_required) = match level {
        EnergyLevel::High => (TimeOfDay::Morning, true),
        EnergyLevel::Medium => (TimeOfDay::Afternoon, false),
        EnergyLevel::Low => (TimeOfDay::Evening, false),
        EnergyLevel::Creative => (TimeOfDay::Morning, true),
        EnergyLevel::Administrative => (TimeOfDay::Afternoon, false),
    };
    BucketMetadata::Energy {
        energy_level: level,
        best_time,
        focus_required,
    }
}

pub(super) fn classify(items: &[&WorkItem]) -> Vec<BucketGroup> {
    let mut groups: [Vec<ItemId>; 5] = Default::default();

    for item in items {
        groups[slot(infer_energy(item))].push(item.id.clone());
    }

    ENERGY_BUCKETS
        .iter()
        .zip(LEVELS)
        .zip(groups)
        .map(|((definition, level), ids)| {
            BucketGroup::from_definition(definition, ids, metadata(level))
        })
        .collect()
}
