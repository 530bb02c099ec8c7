//! Circuit dispatch: the single path from a built circuit to counts.

use std::time::Instant;

use tracing::{info, warn};
use unravel_ir::Circuit;

use crate::backend::{Backend, ValidationResult};
use crate::error::{HalError, HalResult};
use crate::provider::BackendSpec;
use crate::registry::BackendRegistry;
use crate::result::ExecutionResult;

/// Run `circuit` on `backend` for `shots` shots.
///
/// Checks availability, validates, submits and waits for a terminal state.
/// Every failure surfaces as a [`HalError`].
pub async fn run_circuit(
    backend: &dyn Backend,
    circuit: &Circuit,
    shots: u32,
) -> HalResult<ExecutionResult> {
    let availability = backend.availability().await?;
    if !availability.is_available {
        return Err(HalError::BackendUnavailable(
            availability
                .status_message
                .unwrap_or_else(|| backend.name().to_string()),
        ));
    }

    if let ValidationResult::Invalid { reasons } = backend.validate(circuit).await? {
        warn!(backend = backend.name(), circuit = circuit.name(), "circuit rejected");
        return Err(HalError::InvalidCircuit(reasons.join("; ")));
    }

    let start = Instant::now();
    let job_id = backend.submit(circuit, shots).await?;
    info!(
        job = %job_id,
        backend = backend.name(),
        circuit = circuit.name(),
        qubits = circuit.num_qubits(),
        shots,
        "job submitted"
    );

    let result = backend.wait(&job_id).await?;
    info!(
        job = %job_id,
        outcomes = result.counts.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "job completed"
    );
    Ok(result)
}

/// Create the backend described by `spec` and run `circuit` on it.
///
/// A `seed` makes the backend's sampling reproducible.
pub async fn dispatch(
    registry: &BackendRegistry,
    spec: &BackendSpec,
    circuit: &Circuit,
    shots: u32,
    seed: Option<u64>,
) -> HalResult<ExecutionResult> {
    let mut config = spec.config();
    if let Some(seed) = seed {
        config = config.with_extra("seed", serde_json::json!(seed));
    }
    let backend = registry.create(spec.name, config)?;
    run_circuit(backend.as_ref(), circuit, shots).await
}
