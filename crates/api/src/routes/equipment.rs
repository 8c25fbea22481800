//! Route definitions for the `/equipment` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::equipment;
use crate::state::AppState;

/// Routes mounted at `/equipment`. All require auth.
///
/// ```text
/// POST   /                                 -> create
/// GET    /types                            -> list_types
/// GET    /types/{idType}/config            -> type_config
/// GET    /check-numero/{numeroInterne}     -> check_numero
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(equipment::create))
        .route("/types", get(equipment::list_types))
        .route("/types/{id_type}/config", get(equipment::type_config))
        .route(
            "/check-numero/{numero_interne}",
            get(equipment::check_numero),
        )
}
