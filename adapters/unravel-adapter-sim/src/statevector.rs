//! Statevector simulation engine.
//!
//! Basis index bit `q` holds the value of qubit `q`.

use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::FRAC_1_SQRT_2;

use unravel_ir::StandardGate;

type Matrix2 = [[Complex64; 2]; 2];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// The 2x2 unitary a gate applies to its target qubit.
///
/// Controlled gates map to the matrix of their target operation.
fn target_matrix(gate: &StandardGate) -> Matrix2 {
    match *gate {
        StandardGate::X | StandardGate::CX => [[ZERO, ONE], [ONE, ZERO]],
        StandardGate::H => {
            let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
            [[h, h], [h, -h]]
        }
        StandardGate::Ry(theta) => {
            let (c, s) = ((theta / 2.0).cos(), (theta / 2.0).sin());
            [
                [Complex64::new(c, 0.0), Complex64::new(-s, 0.0)],
                [Complex64::new(s, 0.0), Complex64::new(c, 0.0)],
            ]
        }
    }
}

/// A pure state over `n` qubits.
#[derive(Debug, Clone)]
pub struct Statevector {
    amplitudes: Vec<Complex64>,
}

impl Statevector {
    /// Create a statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let mut amplitudes = vec![ZERO; 1 << num_qubits];
        amplitudes[0] = ONE;
        Self { amplitudes }
    }

    /// Amplitude of a basis state.
    #[cfg(test)]
    pub fn amplitude(&self, index: usize) -> Complex64 {
        self.amplitudes[index]
    }

    /// Apply `gate` to `qubits`, given as `[controls.., target]`.
    pub fn apply_gate(&mut self, gate: &StandardGate, qubits: &[usize]) {
        let matrix = target_matrix(gate);
        let controls = gate.num_controls() as usize;
        let control_mask = qubits[..controls].iter().fold(0usize, |m, q| m | (1 << q));
        self.apply_controlled(control_mask, qubits[controls], &matrix);
    }

    /// Apply `matrix` to `target` on every basis pair whose control bits are all set.
    fn apply_controlled(&mut self, control_mask: usize, target: usize, matrix: &Matrix2) {
        let target_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if i & target_mask != 0 || i & control_mask != control_mask {
                continue;
            }
            let j = i | target_mask;
            let (a, b) = (self.amplitudes[i], self.amplitudes[j]);
            self.amplitudes[i] = matrix[0][0] * a + matrix[0][1] * b;
            self.amplitudes[j] = matrix[1][0] * a + matrix[1][1] * b;
        }
    }

    /// Probability of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Probability that `qubit` reads 1.
    pub fn probability_one(&self, qubit: usize) -> f64 {
        let mask = 1 << qubit;
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }

    /// Measure one qubit, collapsing the state onto the observed value.
    pub fn measure<R: Rng>(&mut self, qubit: usize, rng: &mut R) -> bool {
        let p_one = self.probability_one(qubit);
        let outcome = rng.r#gen::<f64>() < p_one;
        let norm = if outcome { p_one } else { 1.0 - p_one }.sqrt();

        let mask = 1 << qubit;
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if (i & mask != 0) == outcome {
                if norm > 0.0 {
                    *amp /= norm;
                }
            } else {
                *amp = ZERO;
            }
        }
        outcome
    }
}

/// Samples basis states from a fixed distribution.
pub struct Sampler {
    cumulative: Vec<f64>,
}

impl Sampler {
    /// Build a sampler over the final distribution of `state`.
    pub fn new(state: &Statevector) -> Self {
        let mut total = 0.0;
        let cumulative = state
            .probabilities()
            .into_iter()
            .map(|p| {
                total += p;
                total
            })
            .collect();
        Self { cumulative }
    }

    /// Draw one basis index.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let total = self.cumulative.last().copied().unwrap_or(0.0);
        let r = rng.r#gen::<f64>() * total;
        // Rounding can leave `r` at the very top of the range.
        self.cumulative
            .partition_point(|&c| c <= r)
            .min(self.cumulative.len().saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitude(0), ONE));
        assert!((1..4).all(|i| approx_eq(sv.amplitude(i), ZERO)));
    }

    #[test]
    fn test_bell_state() {
        let mut sv = Statevector::new(2);
        sv.apply_gate(&StandardGate::H, &[0]);
        sv.apply_gate(&StandardGate::CX, &[0, 1]);

        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        assert!(approx_eq(sv.amplitude(0), h));
        assert!(approx_eq(sv.amplitude(1), ZERO));
        assert!(approx_eq(sv.amplitude(2), ZERO));
        assert!(approx_eq(sv.amplitude(3), h));
    }

    #[test]
    fn test_cx_needs_control() {
        let mut sv = Statevector::new(2);
        sv.apply_gate(&StandardGate::CX, &[0, 1]);
        assert!(approx_eq(sv.amplitude(0), ONE));

        sv.apply_gate(&StandardGate::X, &[0]);
        sv.apply_gate(&StandardGate::CX, &[0, 1]);
        assert!(approx_eq(sv.amplitude(0b11), ONE));
    }

    #[test]
    fn test_ry_splits_probability() {
        let mut sv = Statevector::new(1);
        let theta = 2.0 * (1.0f64 / 3.0).sqrt().acos();
        sv.apply_gate(&StandardGate::Ry(theta), &[0]);
        assert!((sv.probability_one(0) - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_measure_collapses() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sv = Statevector::new(2);
        sv.apply_gate(&StandardGate::H, &[0]);
        sv.apply_gate(&StandardGate::CX, &[0, 1]);

        let first = sv.measure(0, &mut rng);
        let p = sv.probability_one(1);
        assert!((p - if first { 1.0 } else { 0.0 }).abs() < 1e-10);
        assert_eq!(sv.measure(1, &mut rng), first);
    }

    #[test]
    fn test_sample_deterministic() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut sv = Statevector::new(2);
        sv.apply_gate(&StandardGate::X, &[1]);
        let sampler = Sampler::new(&sv);
        for _ in 0..100 {
            assert_eq!(sampler.sample(&mut rng), 0b10);
        }
    }
}
