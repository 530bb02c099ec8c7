//! Property tests for circuit layering and drawing.

use proptest::prelude::*;
use unravel_ir::{Circuit, QubitId};

/// Random two-qubit-or-less gate stream over `n` qubits.
fn ops(n: u32) -> impl Strategy<Value = Vec<(u32, Option<u32>)>> {
    prop::collection::vec((0..n, prop::option::of(0..n)), 0..40)
}

fn build(n: u32, ops: &[(u32, Option<u32>)]) -> Circuit {
    let mut circuit = Circuit::with_size("random", n, n);
    for &(a, b) in ops {
        match b {
            Some(b) if b != a => {
                circuit.cx(QubitId(a), QubitId(b)).unwrap();
            }
            _ => {
                circuit.h(QubitId(a)).unwrap();
            }
        }
    }
    circuit.barrier_all().unwrap();
    circuit.measure_all().unwrap();
    circuit
}

proptest! {
    #[test]
    fn depth_never_exceeds_op_count(n in 1u32..6, stream in ops(5)) {
        let stream: Vec<_> = stream
            .into_iter()
            .map(|(a, b)| (a % n, b.map(|b| b % n)))
            .collect();
        let circuit = build(n, &stream);
        prop_assert!(circuit.depth() <= circuit.num_ops());
        prop_assert!(circuit.depth() >= 1);
    }

    #[test]
    fn layers_cover_every_instruction(n in 1u32..6, stream in ops(5)) {
        let stream: Vec<_> = stream
            .into_iter()
            .map(|(a, b)| (a % n, b.map(|b| b % n)))
            .collect();
        let circuit = build(n, &stream);
        let placed: usize = circuit.layers().iter().map(Vec::len).sum();
        prop_assert_eq!(placed, circuit.instructions().len());
    }

    #[test]
    fn diagram_has_one_line_per_wire_and_spacer(n in 1u32..6, stream in ops(5)) {
        let stream: Vec<_> = stream
            .into_iter()
            .map(|(a, b)| (a % n, b.map(|b| b % n)))
            .collect();
        let circuit = build(n, &stream);
        let wires = (2 * n) as usize;
        prop_assert_eq!(circuit.draw().split('\n').count(), 2 * wires - 1);
    }
}
