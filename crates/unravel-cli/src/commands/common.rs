//! Helpers shared by the commands.

use anyhow::Result;
use console::style;
use tracing::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use unravel_adapter_sim::register_simulators;
use unravel_algos::{AlgorithmKind, AlgorithmRequest, BalancedPattern, BuiltCircuit, DjFunction};
use unravel_hal::{BackendRegistry, ExecutionResult};

use crate::BuildArgs;

/// Registry holding every simulator backend.
pub fn registry() -> BackendRegistry {
    let mut registry = BackendRegistry::new();
    register_simulators(&mut registry);
    registry
}

/// Typed build request from the command-line arguments.
pub fn to_request(args: &BuildArgs) -> Result<AlgorithmRequest> {
    let qubits = args
        .qubits
        .unwrap_or(args.algorithm.kind.descriptor().default_qubits);

    let request = match args.algorithm.kind {
        AlgorithmKind::DeutschJozsa => {
            let function = args.function.unwrap_or_default();
            let pattern = match (function, &args.x_gates, &args.cx_gates) {
                (DjFunction::Balanced, None, None) => None,
                (DjFunction::Balanced, x_gates, cx_gates) => {
                    let fallback = BalancedPattern::alternating(qubits);
                    Some(BalancedPattern::new(
                        x_gates.clone().unwrap_or(fallback.x_gates),
                        cx_gates.clone().unwrap_or(fallback.cx_gates),
                    )?)
                }
                _ => None,
            };
            AlgorithmRequest::DeutschJozsa {
                qubits,
                function,
                pattern,
            }
        }
        AlgorithmKind::BernsteinVazirani => AlgorithmRequest::BernsteinVazirani {
            qubits,
            secret: args.secret.clone(),
        },
        AlgorithmKind::Entanglement => AlgorithmRequest::Entanglement {
            qubits,
            scheme: args.algorithm.scheme_or(args.scheme),
        },
    };
    debug!(?request, "resolved build request");
    Ok(request)
}

/// Build the circuit the arguments describe.
pub fn build(args: &BuildArgs) -> Result<BuiltCircuit> {
    let request = to_request(args)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(request.build(&mut rng)?)
}

/// One line describing what was built.
pub fn describe(built: &BuiltCircuit) -> String {
    let circuit = &built.circuit;
    let mut line = format!(
        "{}: {} qubits, {} clbits, depth {}, {} ops",
        circuit.name(),
        circuit.num_qubits(),
        circuit.num_clbits(),
        circuit.depth(),
        circuit.num_ops()
    );
    if let Some(secret) = &built.secret {
        line.push_str(&format!(", secret {secret}"));
    }
    if let Some(pattern) = &built.pattern {
        line.push_str(&format!(
            ", X gates {} CX gates {}",
            pattern.x_gates, pattern.cx_gates
        ));
    }
    line
}

/// Print the counts as a bar chart, ordered by bit-string.
pub fn print_results(result: &ExecutionResult) {
    println!(
        "\n{} Results ({} shots):",
        style("✓").green().bold(),
        result.shots
    );

    let sorted = result.counts.sorted();
    let total = result.counts.total_shots() as f64;

    for (bitstring, count) in sorted.iter().take(32) {
        let prob = *count as f64 / total * 100.0;
        let bar_len = (prob / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);

        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            style(bitstring).cyan(),
            count,
            prob,
            style(bar).green()
        );
    }

    if sorted.len() > 32 {
        println!("  ... and {} more outcomes", sorted.len() - 32);
    }

    if let Some(time_ms) = result.execution_time_ms {
        println!("\n  Execution time: {} ms", style(time_ms).yellow());
    }
}
