//! Handlers for the `/equipment` resource.
//!
//! Every route requires a bearer token.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use mim_core::equipment::{normalize_numero_interne, parse_positive_id_segment};
use mim_db::repositories::{EquipmentRepo, EquipmentTypeRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::inventory::ingest::{create_equipment, CreateEquipmentRequest};
use crate::inventory::type_config::get_type_config;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for the internal number availability check.
#[derive(Debug, Serialize)]
pub struct NumeroCheck {
    pub exists: bool,
}

/// GET /api/v1/equipment/types
///
/// All equipment types grouped by family.
pub async fn list_types(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let families = EquipmentTypeRepo::list_families(&state.pool).await?;
    Ok(Json(DataResponse { data: families }))
}

/// GET /api/v1/equipment/check-numero/{numeroInterne}
///
/// Whether an equipment already uses the (trimmed) internal number.
pub async fn check_numero(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(numero_interne): Path<String>,
) -> AppResult<impl IntoResponse> {
    let numero_interne = normalize_numero_interne(&numero_interne)?;
    let exists = EquipmentRepo::exists_by_numero(&state.pool, &numero_interne).await?;
    Ok(Json(DataResponse {
        data: NumeroCheck { exists },
    }))
}

/// GET /api/v1/equipment/types/{idType}/config
///
/// Base options and custom field definitions for one type.
pub async fn type_config(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id_type): Path<String>,
) -> AppResult<impl IntoResponse> {
    let type_id = parse_positive_id_segment(&id_type, "idType")?;
    let config = get_type_config(&state.pool, type_id).await?;
    Ok(Json(DataResponse { data: config }))
}

/// POST /api/v1/equipment
///
/// Create an equipment with its custom field values. Returns 201.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEquipmentRequest>,
) -> AppResult<impl IntoResponse> {
    let today = Utc::now().date_naive();
    let view = create_equipment(&state.pool, &input, today, &auth).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}
