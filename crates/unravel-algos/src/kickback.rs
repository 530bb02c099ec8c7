//! The phase-kickback frame shared by Deutsch-Jozsa and Bernstein-Vazirani.

use unravel_ir::{Circuit, IrError, QubitId};

use crate::error::AlgoResult;

/// Wrap `oracle` in the query frame over `n` input qubits and one ancilla.
///
/// Hadamards on the inputs, the ancilla prepared in |−⟩, a barrier, the
/// oracle, a barrier, Hadamards on the inputs again, an optional barrier,
/// then input qubit `i` measured into classical bit `i`.
pub(crate) fn query_circuit(
    name: &str,
    n: u32,
    oracle: &Circuit,
    barrier_before_measure: bool,
) -> AlgoResult<Circuit> {
    if oracle.num_qubits() != n as usize + 1 {
        return Err(IrError::WidthMismatch {
            qubits: n + 1,
            clbits: n,
            other_qubits: oracle.num_qubits() as u32,
            other_clbits: oracle.num_clbits() as u32,
        }
        .into());
    }

    let ancilla = QubitId(n);
    let mut circuit = Circuit::with_size(name, n + 1, n);

    for q in 0..n {
        circuit.h(QubitId(q))?;
    }
    circuit.x(ancilla)?.h(ancilla)?;
    circuit.barrier_all()?;

    circuit.compose(oracle)?;
    circuit.barrier_all()?;

    for q in 0..n {
        circuit.h(QubitId(q))?;
    }
    if barrier_before_measure {
        circuit.barrier_all()?;
    }
    circuit.measure_range(n)?;

    Ok(circuit)
}
