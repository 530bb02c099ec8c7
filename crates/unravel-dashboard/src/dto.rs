//! Data Transfer Objects for the dashboard API.
//!
//! These types bridge the circuit, algorithm and execution structures to
//! JSON-serializable API bodies.

use serde::{Deserialize, Serialize};

use unravel_algos::{
    AlgorithmKind, AlgorithmRequest, AlgorithmSelection, BalancedPattern, BitString, BuiltCircuit,
    DjFunction, Scheme,
};
use unravel_hal::{BackendSpec, ExecutionResult, Provider};
use unravel_ir::{Circuit, Instruction, InstructionKind};

use crate::error::ApiError;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request to build an algorithm circuit.
#[derive(Debug, Clone, Deserialize)]
pub struct CircuitRequest {
    /// Algorithm slug or alias (`deutsch-jozsa`, `bv`, `ghz`, ...).
    pub algorithm: String,
    /// Qubit count; the algorithm's default when absent.
    #[serde(default)]
    pub qubits: Option<u32>,
    /// Deutsch-Jozsa oracle function.
    #[serde(default)]
    pub function: Option<DjFunction>,
    /// Balanced oracle X pattern.
    #[serde(default)]
    pub x_gates: Option<String>,
    /// Balanced oracle CX pattern.
    #[serde(default)]
    pub cx_gates: Option<String>,
    /// Bernstein-Vazirani secret; random when absent.
    #[serde(default)]
    pub secret: Option<String>,
    /// Entangled state.
    #[serde(default)]
    pub scheme: Option<Scheme>,
}

impl CircuitRequest {
    /// Resolve into a typed build request.
    pub fn to_request(&self) -> Result<AlgorithmRequest, ApiError> {
        let selection: AlgorithmSelection = self.algorithm.parse()?;
        let mut request = selection.request();

        match &mut request {
            AlgorithmRequest::DeutschJozsa {
                qubits,
                function,
                pattern,
            } => {
                *qubits = self.qubits.unwrap_or(*qubits);
                *function = self.function.unwrap_or_default();
                if *function == DjFunction::Balanced
                    && (self.x_gates.is_some() || self.cx_gates.is_some())
                {
                    let fallback = BalancedPattern::alternating(*qubits);
                    let x_gates = match &self.x_gates {
                        Some(bits) => bits.parse::<BitString>()?,
                        None => fallback.x_gates,
                    };
                    let cx_gates = match &self.cx_gates {
                        Some(bits) => bits.parse::<BitString>()?,
                        None => fallback.cx_gates,
                    };
                    *pattern = Some(BalancedPattern::new(x_gates, cx_gates)?);
                }
            }
            AlgorithmRequest::BernsteinVazirani { qubits, secret } => {
                *qubits = self.qubits.unwrap_or(*qubits);
                *secret = self
                    .secret
                    .as_deref()
                    .map(str::parse::<BitString>)
                    .transpose()?;
            }
            AlgorithmRequest::Entanglement { qubits, scheme } => {
                *qubits = self.qubits.unwrap_or(*qubits);
                *scheme = selection.scheme_or(self.scheme);
            }
        }
        Ok(request)
    }
}

/// Request to build and execute an algorithm circuit.
#[derive(Debug, Clone, Deserialize)]
pub struct RunRequest {
    /// What to build.
    #[serde(flatten)]
    pub circuit: CircuitRequest,
    /// Provider slug or display name; the configured default when absent.
    #[serde(default)]
    pub provider: Option<String>,
    /// Backend name; the provider's first backend when absent.
    #[serde(default)]
    pub backend: Option<String>,
    /// Shot count; the configured default when absent.
    #[serde(default)]
    pub shots: Option<u32>,
}

// ============================================================================
// Circuit Visualization DTOs
// ============================================================================

/// Circuit visualization data for frontend rendering.
#[derive(Debug, Serialize)]
pub struct CircuitVisualization {
    /// Circuit name.
    pub name: String,
    /// Number of qubits.
    pub num_qubits: usize,
    /// Number of classical bits.
    pub num_clbits: usize,
    /// Circuit depth.
    pub depth: usize,
    /// Total number of operations (barriers excluded).
    pub num_ops: usize,
    /// Operations organized by time layer for visualization.
    pub layers: Vec<CircuitLayer>,
    /// Text diagram.
    pub diagram: String,
}

/// A single time layer in the circuit.
#[derive(Debug, Serialize)]
pub struct CircuitLayer {
    /// Depth index (0-based).
    pub depth: usize,
    /// Operations at this depth.
    pub operations: Vec<OperationView>,
}

/// A single operation for visualization.
#[derive(Debug, Serialize)]
pub struct OperationView {
    /// Gate name (e.g., "h", "cx", "ry").
    pub gate: String,
    /// Display label (e.g., "H", "X", "RY(π/2)").
    pub label: String,
    /// Qubit indices this operation acts on.
    pub qubits: Vec<u32>,
    /// Classical bit indices (for measurements).
    pub clbits: Vec<u32>,
    /// Whether this is a measurement operation.
    pub is_measurement: bool,
    /// Whether this is a barrier.
    pub is_barrier: bool,
}

impl CircuitVisualization {
    pub fn from_circuit(circuit: &Circuit) -> Self {
        let layers = circuit
            .layers()
            .into_iter()
            .enumerate()
            .map(|(depth, ops)| CircuitLayer {
                depth,
                operations: ops.into_iter().map(instruction_to_view).collect(),
            })
            .collect();

        Self {
            name: circuit.name().to_string(),
            num_qubits: circuit.num_qubits(),
            num_clbits: circuit.num_clbits(),
            depth: circuit.depth(),
            num_ops: circuit.num_ops(),
            layers,
            diagram: circuit.draw(),
        }
    }
}

fn instruction_to_view(instruction: &Instruction) -> OperationView {
    let label = match &instruction.kind {
        InstructionKind::Gate(g) => g.label(),
        InstructionKind::Measure => "M".to_string(),
        InstructionKind::Barrier => "░".to_string(),
    };

    OperationView {
        gate: instruction.name().to_string(),
        label,
        qubits: instruction.qubits.iter().map(|q| q.0).collect(),
        clbits: instruction.clbits.iter().map(|c| c.0).collect(),
        is_measurement: instruction.is_measure(),
        is_barrier: instruction.is_barrier(),
    }
}

/// Response from the circuit endpoint.
#[derive(Debug, Serialize)]
pub struct CircuitResponse {
    /// Which algorithm was built.
    pub algorithm: AlgorithmKind,
    /// The assembled circuit.
    pub circuit: CircuitVisualization,
    /// The oracle on its own, for query algorithms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle: Option<CircuitVisualization>,
    /// The Bernstein-Vazirani secret used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<BitString>,
    /// The balanced pattern used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<BalancedPattern>,
    /// Readout the algorithm predicts with certainty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
}

impl From<&BuiltCircuit> for CircuitResponse {
    fn from(built: &BuiltCircuit) -> Self {
        Self {
            algorithm: built.kind,
            circuit: CircuitVisualization::from_circuit(&built.circuit),
            oracle: built.oracle.as_ref().map(CircuitVisualization::from_circuit),
            secret: built.secret.clone(),
            pattern: built.pattern.clone(),
            expected: built.expected_outcome(),
        }
    }
}

// ============================================================================
// Result DTOs
// ============================================================================

/// Result histogram data.
#[derive(Debug, Serialize)]
pub struct ResultHistogram {
    /// Number of shots.
    pub shots: u32,
    /// Execution time in milliseconds.
    pub execution_time_ms: Option<u64>,
    /// Histogram bars, ordered by bit-string.
    pub bars: Vec<HistogramBar>,
    /// Statistics.
    pub statistics: ResultStatistics,
}

/// A single bar in the histogram.
#[derive(Debug, Serialize)]
pub struct HistogramBar {
    /// Bitstring result.
    pub bitstring: String,
    /// Count of this outcome.
    pub count: u64,
    /// Probability (count / shots).
    pub probability: f64,
}

/// Statistics about the result.
#[derive(Debug, Serialize)]
pub struct ResultStatistics {
    /// Total number of shots.
    pub total_shots: u64,
    /// Number of unique outcomes.
    pub unique_outcomes: usize,
    /// Most frequent outcome.
    pub most_frequent: String,
    /// Most frequent count.
    pub most_frequent_count: u64,
}

impl From<&ExecutionResult> for ResultHistogram {
    fn from(result: &ExecutionResult) -> Self {
        let total_shots = result.counts.total_shots();
        let bars: Vec<HistogramBar> = result
            .counts
            .sorted()
            .into_iter()
            .map(|(bitstring, count)| HistogramBar {
                bitstring: bitstring.to_string(),
                count,
                probability: if total_shots == 0 {
                    0.0
                } else {
                    count as f64 / total_shots as f64
                },
            })
            .collect();

        let (most_frequent, most_frequent_count) = result
            .counts
            .most_frequent()
            .map(|(bits, count)| (bits.to_string(), count))
            .unwrap_or_default();

        Self {
            shots: result.shots,
            execution_time_ms: result.execution_time_ms,
            statistics: ResultStatistics {
                total_shots,
                unique_outcomes: bars.len(),
                most_frequent,
                most_frequent_count,
            },
            bars,
        }
    }
}

/// Response from the run endpoint.
#[derive(Debug, Serialize)]
pub struct RunResponse {
    /// The circuit that ran.
    #[serde(flatten)]
    pub build: CircuitResponse,
    /// Provider display name.
    pub provider: String,
    /// Backend name.
    pub backend: String,
    /// Raw counts.
    pub counts: unravel_hal::Counts,
    /// Counts as histogram bars.
    pub histogram: ResultHistogram,
}

// ============================================================================
// Catalog DTOs
// ============================================================================

/// A provider and the backends it offers.
#[derive(Debug, Serialize)]
pub struct ProviderView {
    /// Provider slug.
    pub slug: String,
    /// Provider display name.
    pub name: String,
    /// Backends, first one is the default.
    pub backends: Vec<BackendView>,
}

/// One backend of a provider.
#[derive(Debug, Serialize)]
pub struct BackendView {
    /// Backend name.
    pub name: String,
    /// Simulation method.
    pub method: String,
    /// Short description.
    pub description: String,
}

impl From<&BackendSpec> for BackendView {
    fn from(spec: &BackendSpec) -> Self {
        Self {
            name: spec.name.to_string(),
            method: spec.method.to_string(),
            description: spec.description.to_string(),
        }
    }
}

impl From<Provider> for ProviderView {
    fn from(provider: Provider) -> Self {
        Self {
            slug: provider.slug().to_string(),
            name: provider.display_name().to_string(),
            backends: provider.backends().iter().map(BackendView::from).collect(),
        }
    }
}

// ============================================================================
// Health DTOs
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status (always "ok" if responding).
    pub status: String,
    /// Dashboard version.
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
