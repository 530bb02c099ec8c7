//! Structural properties of the oracle and state builders.

use proptest::prelude::*;
use unravel_algos::{BitString, balanced_oracle, bernstein_vazirani_oracle, ghz_state, w_angles, w_state};
use unravel_ir::{QubitId, StandardGate};

/// An `n` together with two bit-strings of length `n`.
fn sized_strings() -> impl Strategy<Value = (u32, Vec<bool>, Vec<bool>)> {
    (1u32..=10).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec(any::<bool>(), n as usize),
            prop::collection::vec(any::<bool>(), n as usize),
        )
    })
}

proptest! {
    #[test]
    fn balanced_oracle_matches_pattern((n, x, c) in sized_strings()) {
        let xs = BitString::from_bits(x.clone());
        let cs = BitString::from_bits(c.clone());
        let oracle = balanced_oracle(n, &xs, &cs).unwrap();
        let insts = oracle.instructions();

        let x_count = x.iter().filter(|b| **b).count();
        let cx_count = c.iter().filter(|b| **b).count();
        prop_assert_eq!(insts.len(), 2 * x_count + cx_count);

        let before: Vec<_> = insts[..x_count].iter().map(|i| i.qubits[0]).collect();
        let after: Vec<_> = insts[x_count + cx_count..].iter().map(|i| i.qubits[0]).collect();
        let expected_x: Vec<_> = (0..n).filter(|&i| x[i as usize]).map(QubitId).collect();
        prop_assert_eq!(&before, &expected_x);
        prop_assert_eq!(&after, &expected_x);

        for inst in &insts[..x_count] {
            prop_assert_eq!(inst.as_gate(), Some(&StandardGate::X));
        }

        let cx: Vec<_> = insts[x_count..x_count + cx_count].iter().map(|i| i.qubits.clone()).collect();
        let expected_cx: Vec<_> = (0..n)
            .filter(|&i| c[i as usize])
            .map(|i| vec![QubitId(i), QubitId(n)])
            .collect();
        prop_assert_eq!(cx, expected_cx);
    }

    #[test]
    fn bv_oracle_reverses_secret((n, s, _) in sized_strings()) {
        let secret = BitString::from_bits(s.clone());
        let oracle = bernstein_vazirani_oracle(n, &secret).unwrap();

        let mut controls: Vec<u32> = oracle
            .instructions()
            .iter()
            .map(|inst| {
                assert_eq!(inst.as_gate(), Some(&StandardGate::CX));
                assert_eq!(inst.qubits[1], QubitId(n));
                inst.qubits[0].0
            })
            .collect();
        controls.sort_unstable();

        let mut expected: Vec<u32> = (0..n as usize)
            .filter(|&k| s[k])
            .map(|k| n - 1 - k as u32)
            .collect();
        expected.sort_unstable();
        prop_assert_eq!(controls, expected);
    }

    #[test]
    fn wrong_length_is_rejected(n in 1u32..=10, extra in 1usize..3) {
        let long = BitString::zeros(n as usize + extra);
        prop_assert!(bernstein_vazirani_oracle(n, &long).is_err());
        prop_assert!(balanced_oracle(n, &long, &BitString::alternating(n as usize)).is_err());
    }

    #[test]
    fn ghz_fans_out_from_qubit_zero(n in 2u32..=10) {
        let circuit = ghz_state(n).unwrap();
        let gates: Vec<_> = circuit.gates().collect();
        prop_assert_eq!(gates[0].as_gate(), Some(&StandardGate::H));
        prop_assert_eq!(gates.len() as u32, n);
        for gate in &gates[1..] {
            prop_assert_eq!(gate.as_gate(), Some(&StandardGate::CX));
            prop_assert_eq!(gate.qubits[0], QubitId(0));
        }
    }

    #[test]
    fn w_rotations_use_cascade_angles(n in 2u32..=10) {
        let circuit = w_state(n).unwrap();
        let rotations: Vec<_> = circuit
            .gates()
            .filter_map(|inst| inst.as_gate().and_then(|g| g.angle()).map(|a| (inst.qubits[0].0, a)))
            .collect();
        let angles = w_angles(n);
        prop_assert_eq!(rotations.len() as u32, n);

        let nf = f64::from(n);
        prop_assert!((rotations[0].1 - 2.0 * (1.0 / nf).sqrt().acos()).abs() < 1e-12);
        for (k, (qubit, angle)) in rotations.iter().enumerate() {
            prop_assert_eq!(*qubit, k as u32);
            prop_assert!((angle - angles[k]).abs() < 1e-12);
            if k > 0 {
                let expected = -2.0 * (1.0 / (nf - k as f64)).sqrt().acos();
                prop_assert!((angle - expected).abs() < 1e-12);
            }
        }
    }
}
