//! Estate API endpoints.
//!
//! Estate creation, tree planting, height statistics and drone plans.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use estate_core::{FlightResult, Plot, Tree, TreeStats};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::service;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateEstateRequest {
    pub length: u32,
    pub width: u32,
}

#[derive(Debug, Deserialize)]
pub struct PlantTreeRequest {
    pub x: u32,
    pub y: u32,
    pub height: u32,
}

/// Response carrying an estate ID.
#[derive(Debug, Serialize)]
pub struct EstateIdResponse {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct DronePlanQuery {
    /// 0 or absent means no limit
    #[serde(default, alias = "max-distance")]
    pub max_distance: Option<u64>,
}

/// Create a new estate.
/// POST /estate
pub async fn create_estate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateEstateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EstateIdResponse>), ApiError> {
    let Json(req) = payload?;
    let id = service::create_estate(&*state, state.rules(), Plot::new(req.length, req.width)).await?;
    Ok((StatusCode::CREATED, Json(EstateIdResponse { id })))
}

/// Plant a tree in an estate.
/// POST /estate/:id/tree
pub async fn plant_tree(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<PlantTreeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EstateIdResponse>), ApiError> {
    let Json(req) = payload?;
    let tree = Tree::new(req.x, req.y, req.height);
    let id = service::plant_tree(&*state, state.rules(), &id, tree).await?;
    Ok((StatusCode::CREATED, Json(EstateIdResponse { id })))
}

/// Tree height statistics.
/// GET /estate/:id/stats
pub async fn get_tree_stats(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TreeStats>, ApiError> {
    let stats = service::tree_stats(&*state, &id).await?;
    Ok(Json(stats))
}

/// Drone flight distance, optionally bounded.
/// GET /estate/:id/drone-plan?max_distance=N
pub async fn get_drone_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    query: Result<Query<DronePlanQuery>, QueryRejection>,
) -> Result<Json<FlightResult>, ApiError> {
    let Query(query) = query?;
    let plan = service::drone_plan(&*state, state.rules(), &id, query.max_distance).await?;
    Ok(Json(plan))
}
