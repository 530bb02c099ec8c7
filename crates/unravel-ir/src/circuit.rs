//! High-level circuit builder API.

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// A quantum circuit: fixed-width quantum and classical registers plus an
/// ordered instruction list.
///
/// Every instruction is validated when it is appended, so a `Circuit` never
/// references a qubit or classical bit outside its registers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Width of the quantum register.
    num_qubits: u32,
    /// Width of the classical register.
    num_clbits: u32,
    /// Instructions in program order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            instructions: vec![],
        }
    }

    /// Append a validated instruction.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        self.validate(&instruction)?;
        self.instructions.push(instruction);
        Ok(self)
    }

    fn validate(&self, instruction: &Instruction) -> IrResult<()> {
        let gate_name = instruction.as_gate().map(|g| g.name().to_string());

        if let InstructionKind::Gate(gate) = &instruction.kind {
            let got = instruction.qubits.len() as u32;
            if gate.num_qubits() != got {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name().to_string(),
                    expected: gate.num_qubits(),
                    got,
                });
            }
        }

        if instruction.is_measure() && instruction.qubits.len() != instruction.clbits.len() {
            return Err(IrError::MeasureArity {
                qubits: instruction.qubits.len(),
                clbits: instruction.clbits.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for &qubit in &instruction.qubits {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit,
                    num_qubits: self.num_qubits,
                    gate_name,
                });
            }
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit { qubit, gate_name });
            }
        }

        for &clbit in &instruction.clbits {
            if clbit.0 >= self.num_clbits {
                return Err(IrError::ClbitNotFound {
                    clbit,
                    num_clbits: self.num_clbits,
                });
            }
        }

        Ok(())
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Ry(theta), qubit))
    }

    // =========================================================================
    // Multi-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::CX, control, target))
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.apply(Instruction::measure(qubit, clbit))
    }

    /// Measure qubit `i` into classical bit `i` for every `i < count`.
    pub fn measure_range(&mut self, count: u32) -> IrResult<&mut Self> {
        for i in 0..count {
            self.measure(QubitId(i), ClbitId(i))?;
        }
        Ok(self)
    }

    /// Measure every qubit into the classical bit of the same index.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        self.measure_range(self.num_qubits)
    }

    /// Apply a barrier to all qubits.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        self.apply(Instruction::barrier((0..self.num_qubits).map(QubitId)))
    }

    /// Append every instruction of `other`, mapping its qubit `i` onto this
    /// circuit's qubit `i`.
    ///
    /// `other` must not be wider than `self` in either register.
    pub fn compose(&mut self, other: &Circuit) -> IrResult<&mut Self> {
        if other.num_qubits > self.num_qubits || other.num_clbits > self.num_clbits {
            return Err(IrError::WidthMismatch {
                qubits: self.num_qubits,
                clbits: self.num_clbits,
                other_qubits: other.num_qubits,
                other_clbits: other.num_clbits,
            });
        }
        self.instructions.extend(other.instructions.iter().cloned());
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits as usize
    }

    /// Instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Gate instructions only, in program order.
    pub fn gates(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter().filter(|inst| inst.is_gate())
    }

    /// Number of operations, not counting barriers.
    pub fn num_ops(&self) -> usize {
        self.instructions
            .iter()
            .filter(|inst| !inst.is_barrier())
            .count()
    }

    /// Whether the circuit holds no instructions at all.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Circuit depth: the longest chain of operations on any wire.
    /// Barriers do not add depth.
    pub fn depth(&self) -> usize {
        self.layers()
            .iter()
            .filter(|layer| layer.iter().any(|inst| !inst.is_barrier()))
            .count()
    }

    /// Group instructions into time layers: each instruction lands in the
    /// first layer after every earlier instruction touching its operands.
    pub fn layers(&self) -> Vec<Vec<&Instruction>> {
        let mut layers: Vec<Vec<&Instruction>> = vec![];
        let mut qubit_depth = vec![0usize; self.num_qubits()];
        let mut clbit_depth = vec![0usize; self.num_clbits()];

        for inst in &self.instructions {
            let layer = inst
                .qubits
                .iter()
                .map(|q| qubit_depth[q.index()])
                .chain(inst.clbits.iter().map(|c| clbit_depth[c.index()]))
                .max()
                .unwrap_or(0);

            while layers.len() <= layer {
                layers.push(vec![]);
            }
            layers[layer].push(inst);

            for q in &inst.qubits {
                qubit_depth[q.index()] = layer + 1;
            }
            for c in &inst.clbits {
                clbit_depth[c.index()] = layer + 1;
            }
        }

        layers
    }

    /// Whether no gate follows a measurement on the same qubit.
    pub fn has_terminal_measurements_only(&self) -> bool {
        let mut measured = FxHashSet::default();
        for inst in &self.instructions {
            match inst.kind {
                InstructionKind::Measure => measured.extend(inst.qubits.iter().copied()),
                InstructionKind::Gate(_) => {
                    if inst.qubits.iter().any(|q| measured.contains(q)) {
                        return false;
                    }
                }
                InstructionKind::Barrier => {}
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circuit_with_size() {
        let circuit = Circuit::with_size("test", 3, 2);
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 2);
        assert!(circuit.is_empty());
        assert_eq!(circuit.depth(), 0);
    }

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::with_size("bell", 2, 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap()
            .measure(QubitId(1), ClbitId(1))
            .unwrap();

        assert_eq!(circuit.depth(), 3); // H, CX, parallel measures
        assert_eq!(circuit.num_ops(), 4);
        assert_eq!(circuit.instructions().iter().filter(|i| i.is_measure()).count(), 2);
    }

    #[test]
    fn test_rejects_unknown_qubit() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let err = circuit.x(QubitId(2)).unwrap_err();
        assert!(matches!(err, IrError::QubitNotFound { num_qubits: 2, .. }));
    }

    #[test]
    fn test_rejects_unknown_clbit() {
        let mut circuit = Circuit::with_size("test", 2, 1);
        let err = circuit.measure(QubitId(1), ClbitId(1)).unwrap_err();
        assert!(matches!(err, IrError::ClbitNotFound { .. }));
    }

    #[test]
    fn test_rejects_duplicate_operand() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let err = circuit.cx(QubitId(1), QubitId(1)).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));
    }

    #[test]
    fn test_rejects_wrong_arity() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let err = circuit
            .apply(Instruction::gate(StandardGate::CX, [QubitId(0)]))
            .unwrap_err();
        assert!(matches!(err, IrError::QubitCountMismatch { expected: 2, got: 1, .. }));
    }

    #[test]
    fn test_barriers_do_not_add_depth() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.barrier_all().unwrap();
        circuit.h(QubitId(1)).unwrap();
        assert_eq!(circuit.depth(), 2);
        assert_eq!(circuit.num_ops(), 2);
        assert_eq!(circuit.layers().len(), 3);
    }

    #[test]
    fn test_compose() {
        let mut oracle = Circuit::with_size("oracle", 3, 0);
        oracle.cx(QubitId(0), QubitId(2)).unwrap();

        let mut circuit = Circuit::with_size("outer", 3, 2);
        circuit.h(QubitId(0)).unwrap();
        circuit.compose(&oracle).unwrap();

        assert_eq!(circuit.instructions().len(), 2);
        assert_eq!(
            circuit.instructions()[1].qubits,
            vec![QubitId(0), QubitId(2)]
        );
    }

    #[test]
    fn test_compose_width_mismatch() {
        let oracle = Circuit::with_size("oracle", 4, 0);
        let mut circuit = Circuit::with_size("outer", 3, 2);
        let err = circuit.compose(&oracle).unwrap_err();
        assert!(matches!(err, IrError::WidthMismatch { other_qubits: 4, .. }));
    }

    #[test]
    fn test_terminal_measurements() {
        let mut circuit = Circuit::with_size("test", 1, 1);
        circuit.h(QubitId(0)).unwrap();
        circuit.measure(QubitId(0), ClbitId(0)).unwrap();
        assert!(circuit.has_terminal_measurements_only());

        circuit.x(QubitId(0)).unwrap();
        assert!(!circuit.has_terminal_measurements_only());
    }
}
