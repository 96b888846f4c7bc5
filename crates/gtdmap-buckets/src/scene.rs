//! 3D scene layout for a classification.
//!
//! Buckets are laid out on a three-column grid. Bucket size drives the
//! height and depth of each shape; horizon buckets are raised to their
//! level.

use serde::{Deserialize, Serialize};

use crate::bucket::{BucketGroup, BucketMetadata, BucketViewData, UrgencyLevel};
use crate::registry::ViewTypeId;

const GRID_COLUMNS: usize = 3;
const COLUMN_SPACING: f64 = 300.0;
const ROW_SPACING: f64 = 200.0;
const DEPTH_PER_ITEM: f64 = 10.0;
const HEIGHT_PER_ITEM: f64 = 5.0;
const MIN_HEIGHT: f64 = 50.0;
const EMPTY_OPACITY: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub elevation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    Mountain,
    TrafficLight,
    Building,
}

impl Shape {
    fn for_view(view: ViewTypeId) -> Self {
        match view {
            ViewTypeId::Horizon => Shape::Mountain,
            ViewTypeId::Urgency => Shape::TrafficLight,
            _ => Shape::Building,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    Pulse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visualization {
    pub shape: Shape,
    pub height: f64,
    pub opacity: f64,
    pub animation: Option<Animation>,
}

/// A bucket placed in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneBucket {
    #[serde(flatten)]
    pub bucket: BucketGroup,
    pub position: Position,
    pub visualization: Visualization,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub position: Vector3,
    pub target: Vector3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionalLight {
    pub intensity: f64,
    pub position: Vector3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lighting {
    pub ambient: f64,
    pub directional: DirectionalLight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Controls {
    pub enable_zoom: bool,
    pub enable_rotate: bool,
    pub enable_pan: bool,
}

/// Scene description handed to a 3D renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneView {
    pub view_type: ViewTypeId,
    pub buckets: Vec<SceneBucket>,
    pub camera: Camera,
    pub lighting: Lighting,
    pub controls: Controls,
}

fn position(index: usize, bucket: &BucketGroup) -> Position {
    let elevation = match bucket.metadata {
        BucketMetadata::Horizon { horizon_level, .. } => f64::from(horizon_level),
        _ => 0.0,
    };

    Position {
        x: (index % GRID_COLUMNS) as f64 * COLUMN_SPACING,
        y: (index / GRID_COLUMNS) as f64 * ROW_SPACING,
        z: bucket.count as f64 * DEPTH_PER_ITEM,
        elevation,
    }
}

fn visualization(view: ViewTypeId, bucket: &BucketGroup) -> Visualization {
    let critical = matches!(
        bucket.metadata,
        BucketMetadata::Urgency {
            urgency_level: UrgencyLevel::Critical,
            ..
        }
    );

    Visualization {
        shape: Shape::for_view(view),
        height: (bucket.count as f64 * HEIGHT_PER_ITEM).max(MIN_HEIGHT),
        opacity: if bucket.is_empty() { EMPTY_OPACITY } else { 1.0 },
        animation: critical.then_some(Animation::Pulse),
    }
}

/// Lays out `data` as a 3D scene.
pub fn scene_for(data: &BucketViewData) -> SceneView {
    let view = data.view_type();
    let buckets = data
        .buckets
        .iter()
        .enumerate()
        .map(|(i, bucket)| SceneBucket {
            bucket: bucket.clone(),
            position: position(i, bucket),
            visualization: visualization(view, bucket),
        })
        .collect();

    SceneView {
        view_type: view,
        buckets,
        camera: Camera {
            position: Vector3 {
                x: 0.0,
                y: -500.0,
                z: 300.0,
            },
            target: Vector3 {
                x: 300.0,
                y: 200.0,
                z: 0.0,
            },
        },
        lighting: Lighting {
            ambient: 0.4,
            directional: DirectionalLight {
                intensity: 0.8,
                position: Vector3 {
                    x: 100.0,
                    y: 100.0,
                    z: 100.0,
                },
            },
        },
        controls: Controls {
            enable_zoom: true,
            enable_rotate: true,
            enable_pan: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_at;
    use chrono::{Duration, Utc};
    use gtdmap_models::WorkItem;

    #[test]
    fn test_grid_layout() {
        let items: Vec<WorkItem> = (0..12)
            .map(|i| WorkItem::builder(format!("item {}", i)).horizon(1).build())
            .collect();
        let data = classify_at(ViewTypeId::Horizon, &items, Utc::now());
        let scene = scene_for(&data);

        assert_eq!(scene.buckets.len(), 6);
        let projects = &scene.buckets[1];
        assert_eq!(projects.position.x, 300.0);
        assert_eq!(projects.position.y, 0.0);
        assert_eq!(projects.position.z, 120.0);
        assert_eq!(projects.position.elevation, 1.0);
        assert_eq!(projects.visualization.height, 60.0);
        assert_eq!(projects.visualization.shape, Shape::Mountain);

        let goals = &scene.buckets[3];
        assert_eq!(goals.position.x, 0.0);
        assert_eq!(goals.position.y, 200.0);
        assert_eq!(goals.visualization.height, 50.0);
        assert_eq!(goals.visualization.opacity, 0.3);
    }

    #[test]
    fn test_overdue_bucket_pulses() {
        let now = Utc::now();
        let items = vec![WorkItem::builder("late").due(now - Duration::hours(2)).build()];
        let data = classify_at(ViewTypeId::Urgency, &items, now);
        let scene = scene_for(&data);

        assert_eq!(scene.buckets[0].bucket.id, "overdue");
        assert_eq!(scene.buckets[0].visualization.animation, Some(Animation::Pulse));
        assert_eq!(scene.buckets[0].visualization.shape, Shape::TrafficLight);
        assert_eq!(scene.buckets[1].visualization.animation, None);
    }

    #[test]
    fn test_scene_wire_format() {
        let data = classify_at(ViewTypeId::Business, &[], Utc::now());
        let json = serde_json::to_value(scene_for(&data)).unwrap();

        assert_eq!(json["viewType"], "business");
        assert_eq!(json["buckets"][0]["id"], "ungrouped");
        assert_eq!(json["buckets"][0]["visualization"]["shape"], "building");
        assert_eq!(json["camera"]["position"]["y"], -500.0);
        assert_eq!(json["controls"]["enableZoom"], true);
    }
}
