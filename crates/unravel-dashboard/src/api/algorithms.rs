//! Algorithm catalog endpoints.

use axum::{Json, extract::Path};
use unravel_algos::{AlgorithmDescriptor, AlgorithmKind};

use crate::error::ApiError;

/// GET /api/algorithms - Every algorithm with its parameter ranges and references.
pub async fn list_algorithms() -> Json<Vec<AlgorithmDescriptor>> {
    Json(
        AlgorithmKind::ALL
            .into_iter()
            .map(AlgorithmKind::descriptor)
            .collect(),
    )
}

/// GET /api/algorithms/{slug} - One algorithm by slug or alias.
pub async fn get_algorithm(Path(slug): Path<String>) -> Result<Json<AlgorithmDescriptor>, ApiError> {
    let kind: AlgorithmKind = slug
        .parse()
        .map_err(|_| ApiError::NotFound(format!("Algorithm '{slug}' not found")))?;
    Ok(Json(kind.descriptor()))
}
