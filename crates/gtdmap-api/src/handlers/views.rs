//! Bucket view handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use tracing::debug;

use gtdmap_buckets::{
    aggregate_for, classify_at, scene_for, view_types, BucketStats, BucketViewData, SceneView,
    ViewTypeId,
};

use crate::error::Result;
use crate::state::AppState;
use crate::types::{StatsQuery, ViewListResponse, ViewQuery};

/// Classifies the organization's active items along `view_type`.
///
/// The view type is checked before any items are fetched.
async fn classify_view(
    state: &AppState,
    view_type: &str,
    organization_id: Option<String>,
) -> Result<BucketViewData> {
    let view: ViewTypeId = view_type.parse()?;
    let org = state.organization(organization_id)?;

    let items = state.active_items(org.clone()).await?;
    debug!(view = %view, organization = %org, items = items.len(), "Classifying view");

    Ok(classify_at(view, &items, Utc::now()))
}

/// GET /api/views - List the registered view types.
pub async fn list_views() -> Json<ViewListResponse> {
    let views = view_types();
    Json(ViewListResponse {
        views,
        total: views.len(),
    })
}

/// GET /api/views/:view_type - Bucket the organization's active items.
pub async fn get_view(
    State(state): State<AppState>,
    Path(view_type): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<BucketViewData>> {
    let data = classify_view(&state, &view_type, query.organization_id).await?;
    Ok(Json(data))
}

/// GET /api/views/:view_type/stats - Statistics, with a recommendation
/// when `bucket` names one of the view's buckets.
pub async fn get_view_stats(
    State(state): State<AppState>,
    Path(view_type): Path<String>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<BucketStats>> {
    let data = classify_view(&state, &view_type, query.organization_id).await?;
    let selected = query.bucket.as_deref().and_then(|id| data.bucket(id));

    Ok(Json(aggregate_for(&data, data.view_type(), selected)))
}

/// GET /api/views/:view_type/3d - 3D scene layout of the buckets.
pub async fn get_view_scene(
    State(state): State<AppState>,
    Path(view_type): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<SceneView>> {
    let data = classify_view(&state, &view_type, query.organization_id).await?;
    Ok(Json(scene_for(&data)))
}
