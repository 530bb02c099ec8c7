//! The per-request pipeline: build the circuit, then optionally execute it.

use tracing::info;
use unravel_algos::{AlgorithmRequest, BuiltCircuit};
use unravel_hal::{BackendSpec, ExecutionResult, Provider, dispatch};
use unravel_ir::Circuit;

use crate::error::ApiError;
use crate::session::Session;
use crate::state::AppState;

/// Build the circuit described by `request`.
pub fn build(state: &AppState, request: &AlgorithmRequest) -> Result<BuiltCircuit, ApiError> {
    let mut rng = state.rng();
    Ok(request.build(&mut rng)?)
}

/// Run `circuit` on the backend described by `spec`.
pub async fn execute(
    state: &AppState,
    spec: &BackendSpec,
    circuit: &Circuit,
    shots: u32,
) -> Result<ExecutionResult, ApiError> {
    if !(1..=state.config.max_shots).contains(&shots) {
        return Err(ApiError::BadRequest(format!(
            "Shots must be between 1 and {}",
            state.config.max_shots
        )));
    }
    let result = dispatch(&state.registry, spec, circuit, shots, state.config.seed).await?;
    info!(
        backend = spec.name,
        circuit = circuit.name(),
        outcomes = result.counts.len(),
        "execution finished"
    );
    Ok(result)
}

/// Resolve an API provider/backend pair. Unlike the pages, an unknown backend
/// name is an error rather than a fallback.
pub fn resolve_backend(
    state: &AppState,
    provider: Option<&str>,
    backend: Option<&str>,
) -> Result<&'static BackendSpec, ApiError> {
    let provider = match provider {
        Some(name) => name.parse::<Provider>()?,
        None => state.config.default_provider,
    };
    match backend {
        Some(name) => Ok(provider.backend(name)?),
        None => Ok(provider.default_backend()),
    }
}

/// Everything an algorithm page shows below its widgets.
#[derive(Debug, Default)]
pub struct PageOutcome {
    /// The circuit, when the parameters were valid.
    pub built: Option<BuiltCircuit>,
    /// Execution result, when the run button was pressed and it succeeded.
    pub result: Option<ExecutionResult>,
    /// What went wrong, if anything.
    pub error: Option<ApiError>,
}

/// Run every pipeline stage the session asks for.
///
/// A failed execution still reports the circuit that was built.
pub async fn run_page(state: &AppState, session: &mut Session) -> PageOutcome {
    let mut outcome = PageOutcome::default();
    if let Some(err) = session.invalid.take() {
        outcome.error = Some(err);
        return outcome;
    }

    let built = match session.request().and_then(|request| build(state, &request)) {
        Ok(built) => built,
        Err(e) => {
            outcome.error = Some(e);
            return outcome;
        }
    };

    if session.run {
        match execute(state, session.backend, &built.circuit, session.shots).await {
            Ok(result) => outcome.result = Some(result),
            Err(e) => outcome.error = Some(e),
        }
    }

    outcome.built = Some(built);
    outcome
}

impl PageOutcome {
    /// Status code the page is served with.
    pub fn status(&self) -> axum::http::StatusCode {
        self.error
            .as_ref()
            .map_or(axum::http::StatusCode::OK, ApiError::status)
    }
}
