//! Item store for work item persistence.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use gtdmap_models::{ItemId, ItemStatus, OrganizationId, StreamId, WorkItem};

use crate::atomic::{ensure_dir, read_json, remove_file, write_json};
use crate::error::{PersistenceError, Result};
use crate::source::WorkItemSource;

/// Manages persistence of work items.
///
/// Items are stored as individual JSON files organized by organization:
/// ```text
/// base_path/
/// └── items/
///     └── {organization_id}/
///         ├── {item_id}.json
///         └── {item_id}.json
/// ```
///
/// Completed and canceled items stay on disk; they are the history that
/// stream efficiency is computed from.
pub struct ItemStore {
    base_path: PathBuf,
}

impl ItemStore {
    /// Creates a new ItemStore with the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn org_dir(&self, organization_id: &OrganizationId) -> Result<PathBuf> {
        let segment = path_segment("organization", organization_id.as_str())?;
        Ok(self.base_path.join("items").join(segment))
    }

    fn item_path(&self, organization_id: &OrganizationId, item_id: &ItemId) -> Result<PathBuf> {
        let segment = path_segment("work item", item_id.as_str())?;
        Ok(self.org_dir(organization_id)?.join(format!("{}.json", segment)))
    }

    /// Saves a work item, replacing any previous version.
    pub fn save_item(&self, organization_id: &OrganizationId, item: &WorkItem) -> Result<()> {
        let path = self.item_path(organization_id, &item.id)?;
        ensure_dir(&self.org_dir(organization_id)?)?;
        write_json(&path, item)
    }

    /// Loads a work item by ID.
    pub fn load_item(&self, organization_id: &OrganizationId, item_id: &ItemId) -> Result<WorkItem> {
        let path = self.item_path(organization_id, item_id)?;
        if !path.exists() {
            return Err(PersistenceError::item_not_found(item_id));
        }

        let item: WorkItem = read_json(&path)?;
        if &item.id != item_id {
            return Err(PersistenceError::InvalidData(format!(
                "{} holds item {}",
                path.display(),
                item.id
            )));
        }
        Ok(item)
    }

    /// Lists every stored item of an organization, active or not.
    ///
    /// Items are sorted by creation time, then id. Unreadable files are
    /// skipped with a warning, including items whose `horizonLevel` is
    /// outside 0-255.
    pub fn list_items(&self, organization_id: &OrganizationId) -> Result<Vec<WorkItem>> {
        let dir = self.org_dir(organization_id)?;
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir).map_err(|source| PersistenceError::ReadError {
            path: dir.clone(),
            source,
        })?;

        let mut items = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| PersistenceError::ReadError {
                path: dir.clone(),
                source,
            })?;

            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "json") {
                continue;
            }
            match read_json::<WorkItem>(&path) {
                Ok(item) => items.push(item),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable work item"),
            }
        }

        items.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(items)
    }

    /// Deletes a work item. Returns whether a file was removed.
    pub fn delete_item(&self, organization_id: &OrganizationId, item_id: &ItemId) -> Result<bool> {
        remove_file(&self.item_path(organization_id, item_id)?)
    }
}

/// Checks that an id can be used as a single file name under the store root.
///
/// Empty ids, `.`, `..` and ids containing a path separator or NUL would
/// resolve outside their directory and are rejected.
pub fn path_segment<'a>(kind: &str, id: &'a str) -> Result<&'a str> {
    let escapes = id.is_empty()
        || id == "."
        || id == ".."
        || id.contains(['/', '\\', '\0']);
    if escapes {
        return Err(PersistenceError::InvalidData(format!(
            "{} id {:?} is not a valid file name",
            kind, id
        )));
    }
    Ok(id)
}

/// Completion rate per stream, `round(100 * completed / total)`.
///
/// Every item routed into a stream counts towards its total, canceled ones
/// included.
pub fn stream_efficiency(items: &[WorkItem]) -> HashMap<StreamId, f64> {
    let mut tallies: HashMap<&StreamId, (usize, usize)> = HashMap::new();
    for item in items {
        let Some(stream_id) = item.stream_id() else {
            continue;
        };
        let (completed, total) = tallies.entry(stream_id).or_default();
        *total += 1;
        if item.status == ItemStatus::Completed {
            *completed += 1;
        }
    }

    tallies
        .into_iter()
        .map(|(id, (completed, total))| {
            let efficiency = (100.0 * completed as f64 / total as f64).round();
            (id.clone(), efficiency)
        })
        .collect()
}

impl WorkItemSource for ItemStore {
    fn fetch_active_work_items(&self, organization_id: &OrganizationId) -> Result<Vec<WorkItem>> {
        let history = self.list_items(organization_id)?;
        let efficiency = stream_efficiency(&history);

        let active: Vec<WorkItem> = history
            .into_iter()
            .filter(WorkItem::is_active)
            .map(|mut item| {
                if let Some(stream) = item.stream.as_mut() {
                    stream.efficiency = efficiency.get(&stream.id).copied();
                }
                item
            })
            .collect();

        debug!(
            organization = %organization_id,
            active = active.len(),
            streams = efficiency.len(),
            "Fetched active work items"
        );

        Ok(active)
    }
}
