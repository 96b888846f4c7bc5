//! Stream view: one bucket per workflow stream.

use std::collections::HashMap;

use gtdmap_models::{ItemId, StreamId, StreamRef, WorkItem};

use crate::bucket::{BucketGroup, BucketMetadata};
use crate::registry::UNASSIGNED_STREAM_BUCKET;

const DEFAULT_STREAM_COLOR: &str = "#6B7280";

/// Streams are ordered by GTD role, then name; items without a stream fall
/// into the unassigned bucket, which is always present and last.
///
/// `efficiency` is copied from the first `StreamRef` seen for each stream.
pub(super) fn classify(items: &[&WorkItem]) -> Vec<BucketGroup> {
    let mut streams: HashMap<&StreamId, (&StreamRef, Vec<ItemId>)> = HashMap::new();
    let mut unassigned = Vec::new();

    for &item in items {
        match &item.stream {
            Some(stream) => streams
                .entry(&stream.id)
                .or_insert_with(|| (stream, Vec::new()))
                .1
                .push(item.id.clone()),
            None => unassigned.push(item.id.clone()),
        }
    }

    let mut ordered: Vec<(&StreamRef, Vec<ItemId>)> = streams.into_values().collect();
    ordered.sort_by(|(a, _), (b, _)| {
        a.gtd_role
            .cmp(&b.gtd_role)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut buckets: Vec<BucketGroup> = ordered
        .into_iter()
        .map(|(stream, ids)| BucketGroup {
            id: format!("stream-{}", stream.id),
            name: stream.name.clone(),
            description: format!("Work in the {} stream ({})", stream.name, stream.gtd_role.as_str()),
            icon: stream.gtd_role.icon().to_string(),
            color: stream
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_STREAM_COLOR.to_string()),
            count: ids.len(),
            item_ids: ids,
            metadata: BucketMetadata::Stream {
                stream_id: Some(stream.id.clone()),
                gtd_role: Some(stream.gtd_role),
                efficiency: stream.efficiency,
            },
        })
        .collect();

    buckets.push(BucketGroup::from_definition(
        &UNASSIGNED_STREAM_BUCKET,
        unassigned,
        BucketMetadata::Stream {
            stream_id: None,
            gtd_role: None,
            efficiency: None,
        },
    ));

    buckets
}
