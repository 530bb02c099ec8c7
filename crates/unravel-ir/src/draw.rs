//! Unicode text diagrams of circuits.
//!
//! Qubit wires are drawn first (`q0` at the top), followed by one wire per
//! classical bit. Instructions are packed left to right into columns: an
//! instruction lands in the first column where every wire between its
//! topmost and bottommost operand is free, so vertical connectors never
//! overlap another element.

use crate::circuit::Circuit;
use crate::instruction::{Instruction, InstructionKind};

const QUANTUM_WIRE: char = '─';
const CLASSICAL_WIRE: char = '═';
const SPACER: char = ' ';

/// Glyph set used for a vertical connector.
struct Connector {
    spacer: char,
    quantum: char,
    classical: char,
}

const GATE_CONNECTOR: Connector = Connector {
    spacer: '│',
    quantum: '┼',
    classical: '╪',
};

const MEASURE_CONNECTOR: Connector = Connector {
    spacer: '║',
    quantum: '╫',
    classical: '╬',
};

/// One drawn column: a glyph (or nothing) for every text line.
struct Column {
    glyphs: Vec<Option<String>>,
}

impl Column {
    fn width(&self) -> usize {
        self.glyphs
            .iter()
            .flatten()
            .map(|g| g.chars().count())
            .max()
            .unwrap_or(1)
            + 2
    }
}

/// Lays out and renders a circuit diagram.
struct TextDrawer<'a> {
    circuit: &'a Circuit,
    num_lines: usize,
}

impl<'a> TextDrawer<'a> {
    fn new(circuit: &'a Circuit) -> Self {
        let wires = circuit.num_qubits() + circuit.num_clbits();
        Self {
            circuit,
            num_lines: (2 * wires).saturating_sub(1),
        }
    }

    fn qubit_line(&self, qubit: usize) -> usize {
        2 * qubit
    }

    fn clbit_line(&self, clbit: usize) -> usize {
        2 * (self.circuit.num_qubits() + clbit)
    }

    fn fill(&self, line: usize) -> char {
        if line % 2 == 1 {
            SPACER
        } else if line / 2 < self.circuit.num_qubits() {
            QUANTUM_WIRE
        } else {
            CLASSICAL_WIRE
        }
    }

    /// Text lines an instruction touches, as `(line, glyph)` pairs.
    fn operand_glyphs(&self, inst: &Instruction) -> Vec<(usize, String)> {
        match &inst.kind {
            InstructionKind::Gate(gate) => {
                let controls = gate.num_controls() as usize;
                inst.qubits
                    .iter()
                    .enumerate()
                    .map(|(pos, q)| {
                        let glyph = if pos < controls {
                            "■".to_string()
                        } else {
                            gate.label()
                        };
                        (self.qubit_line(q.index()), glyph)
                    })
                    .collect()
            }
            InstructionKind::Measure => inst
                .qubits
                .iter()
                .map(|q| (self.qubit_line(q.index()), "M".to_string()))
                .chain(
                    inst.clbits
                        .iter()
                        .map(|c| (self.clbit_line(c.index()), "╩".to_string())),
                )
                .collect(),
            InstructionKind::Barrier => inst
                .qubits
                .iter()
                .map(|q| (self.qubit_line(q.index()), "░".to_string()))
                .collect(),
        }
    }

    /// Fill the lines between the outermost operands of `inst`.
    fn connect(&self, inst: &Instruction, top: usize, bottom: usize, glyphs: &mut [Option<String>]) {
        let connector = match inst.kind {
            InstructionKind::Gate(_) => &GATE_CONNECTOR,
            InstructionKind::Measure => &MEASURE_CONNECTOR,
            InstructionKind::Barrier => {
                for line in top..=bottom {
                    if glyphs[line].is_none() && line % 2 == 1 {
                        glyphs[line] = Some("░".to_string());
                    }
                }
                return;
            }
        };

        for (line, slot) in glyphs.iter_mut().enumerate().take(bottom + 1).skip(top) {
            if slot.is_some() {
                continue;
            }
            let glyph = match self.fill(line) {
                SPACER => connector.spacer,
                QUANTUM_WIRE => connector.quantum,
                _ => connector.classical,
            };
            *slot = Some(glyph.to_string());
        }
    }

    fn layout(&self) -> Vec<Column> {
        let mut columns: Vec<Column> = vec![];
        let mut next_free = vec![0usize; self.num_lines];

        for inst in self.circuit.instructions() {
            let operands = self.operand_glyphs(inst);
            let Some(top) = operands.iter().map(|(line, _)| *line).min() else {
                continue;
            };
            let bottom = operands.iter().map(|(line, _)| *line).max().unwrap_or(top);

            let col = next_free[top..=bottom].iter().copied().max().unwrap_or(0);
            for slot in &mut next_free[top..=bottom] {
                *slot = col + 1;
            }

            while columns.len() <= col {
                columns.push(Column {
                    glyphs: vec![None; self.num_lines],
                });
            }
            let glyphs = &mut columns[col].glyphs;
            for (line, glyph) in operands {
                glyphs[line] = Some(glyph);
            }
            self.connect(inst, top, bottom, glyphs);
        }

        columns
    }

    fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = (0..self.circuit.num_qubits())
            .map(|q| format!("q{q}"))
            .collect();
        labels.extend((0..self.circuit.num_clbits()).map(|c| format!("c{c}")));
        let width = labels.iter().map(String::len).max().unwrap_or(0);
        labels
            .into_iter()
            .map(|label| format!("{label:>width$}: "))
            .collect()
    }

    fn render(&self) -> String {
        if self.num_lines == 0 {
            return String::new();
        }

        let columns = self.layout();
        let labels = self.labels();
        let prefix_width = labels.first().map_or(0, |l| l.chars().count());

        let mut lines = Vec::with_capacity(self.num_lines);
        for line in 0..self.num_lines {
            let fill = self.fill(line);
            let mut text = if line % 2 == 0 {
                labels[line / 2].clone()
            } else {
                " ".repeat(prefix_width)
            };

            if columns.is_empty() {
                text.push(fill);
            }
            for column in &columns {
                let width = column.width();
                let glyph = column.glyphs[line].as_deref().unwrap_or("");
                let len = glyph.chars().count();
                let left = (width - len) / 2;
                let right = width - len - left;
                text.extend(std::iter::repeat_n(fill, left));
                text.push_str(glyph);
                text.extend(std::iter::repeat_n(fill, right));
            }

            lines.push(text.trim_end().to_string());
        }

        lines.join("\n")
    }
}

impl Circuit {
    /// Render the circuit as a Unicode text diagram.
    pub fn draw(&self) -> String {
        TextDrawer::new(self).render()
    }
}
