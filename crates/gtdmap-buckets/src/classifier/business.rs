//! Business view: one bucket per company, falling back to project.

use std::collections::HashMap;

use gtdmap_models::{ItemId, WorkItem};

use crate::bucket::{BucketGroup, BucketMetadata, GroupKey};
use crate::registry::UNGROUPED_BUCKET;

/// Colours assigned to groups by display position.
const PALETTE: [&str; 6] = ["#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899"];

const COMPANY_ICON: &str = "🏢";
const PROJECT_ICON: &str = "📁";

struct Group {
    name: String,
    industry: Option<String>,
    item_ids: Vec<ItemId>,
    revenue_impact: usize,
}

/// Company wins over project; neither means ungrouped.
fn group_of(item: &WorkItem) -> (GroupKey, String, Option<String>) {
    if let Some(company) = &item.company {
        (
            GroupKey::Company(company.id.clone()),
            company.name.clone(),
            company.industry.clone(),
        )
    } else if let Some(project) = &item.project {
        (GroupKey::Project(project.id.clone()), project.name.clone(), None)
    } else {
        (GroupKey::Ungrouped, UNGROUPED_BUCKET.name.to_string(), None)
    }
}

fn bucket_id(key: &GroupKey) -> String {
    match key {
        GroupKey::Company(id) => format!("company-{}", id),
        GroupKey::Project(id) => format!("project-{}", id),
        GroupKey::Ungrouped => UNGROUPED_BUCKET.id.to_string(),
    }
}

/// Groups are ordered by name, then key; the ungrouped bucket is always
/// present and last.
pub(super) fn classify(items: &[&WorkItem]) -> Vec<BucketGroup> {
    let mut groups: HashMap<GroupKey, Group> = HashMap::new();
    let mut ungrouped = Vec::new();
    let mut ungrouped_impact = 0;

    for item in items {
        let (key, name, industry) = group_of(item);
        if key == GroupKey::Ungrouped {
            ungrouped.push(item.id.clone());
            if item.priority.is_elevated() {
                ungrouped_impact += 1;
            }
            continue;
        }

        let group = groups.entry(key).or_insert_with(|| Group {
            name,
            industry,
            item_ids: Vec::new(),
            revenue_impact: 0,
        });
        group.item_ids.push(item.id.clone());
        if item.priority.is_elevated() {
            group.revenue_impact += 1;
        }
    }

    let mut ordered: Vec<(GroupKey, Group)> = groups.into_iter().collect();
    ordered.sort_by(|(ka, a), (kb, b)| a.name.cmp(&b.name).then_with(|| ka.cmp(kb)));

    let mut buckets: Vec<BucketGroup> = ordered
        .into_iter()
        .enumerate()
        .map(|(position, (key, group))| {
            let icon = match key {
                GroupKey::Project(_) => PROJECT_ICON,
                _ => COMPANY_ICON,
            };
            BucketGroup {
                id: bucket_id(&key),
                description: format!("Work for {}", group.name),
                name: group.name,
                icon: icon.to_string(),
                color: PALETTE[position % PALETTE.len()].to_string(),
                count: group.item_ids.len(),
                item_ids: group.item_ids,
                metadata: BucketMetadata::Business {
                    group: key,
                    industry: group.industry,
                    revenue_impact: group.revenue_impact,
                },
            }
        })
        .collect();

    buckets.push(BucketGroup::from_definition(
        &UNGROUPED_BUCKET,
        ungrouped,
        BucketMetadata::Business {
            group: GroupKey::Ungrouped,
            industry: None,
            revenue_impact: ungrouped_impact,
        },
    ));

    buckets
}
