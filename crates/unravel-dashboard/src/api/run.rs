//! Build-and-execute endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::dto::{CircuitResponse, ResultHistogram, RunRequest, RunResponse};
use crate::error::ApiError;
use crate::pipeline;
use crate::state::AppState;

/// POST /api/run - Build an algorithm circuit, execute it and return the counts.
pub async fn run(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RunRequest>,
) -> Result<Json<RunResponse>, ApiError> {
    let spec =
        pipeline::resolve_backend(&state, req.provider.as_deref(), req.backend.as_deref())?;
    let shots = req.shots.unwrap_or(state.config.default_shots);

    let request = req.circuit.to_request()?;
    let built = pipeline::build(&state, &request)?;
    let result = pipeline::execute(&state, spec, &built.circuit, shots).await?;

    Ok(Json(RunResponse {
        build: CircuitResponse::from(&built),
        provider: spec.provider.display_name().to_string(),
        backend: spec.name.to_string(),
        histogram: ResultHistogram::from(&result),
        counts: result.counts,
    }))
}
