//! Unravel local statevector simulator
//!
//! Every backend offered by the simulator providers is served by one
//! [`SimulatorBackend`]; the backend's [`SimulationMethod`](unravel_hal::SimulationMethod)
//! selects between re-simulating each shot and sampling the final state.
//!
//! | Qubits | Memory |
//! |--------|--------|
//! | 11 | ~32 KB |
//! | 20 | ~16 MB |
//!
//! # Example
//!
//! ```ignore
//! use unravel_adapter_sim::SimulatorBackend;
//! use unravel_hal::{Backend, Provider};
//!
//! let backend = SimulatorBackend::from_spec(Provider::BasicAer.default_backend());
//! let job_id = backend.submit(&circuit, 1000).await?;
//! let result = backend.wait(&job_id).await?;
//! println!("Results: {:?}", result.counts);
//! ```

mod simulator;
mod statevector;

pub use simulator::{DEFAULT_MAX_QUBITS, SimulatorBackend};

use unravel_hal::{BackendRegistry, BackendSpec};

/// Register a simulator factory for every provider backend.
pub fn register_simulators(registry: &mut BackendRegistry) {
    for spec in BackendSpec::all() {
        registry.register::<SimulatorBackend>(spec.name);
    }
}
