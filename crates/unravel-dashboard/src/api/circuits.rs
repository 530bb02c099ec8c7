//! Circuit construction endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::dto::{CircuitRequest, CircuitResponse};
use crate::error::ApiError;
use crate::pipeline;
use crate::state::AppState;

/// POST /api/circuits - Build an algorithm circuit and return its visualization.
pub async fn build_circuit(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CircuitRequest>,
) -> Result<Json<CircuitResponse>, ApiError> {
    let request = req.to_request()?;
    let built = pipeline::build(&state, &request)?;
    Ok(Json(CircuitResponse::from(&built)))
}
