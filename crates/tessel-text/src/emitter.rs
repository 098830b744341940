//! Emitter serializing circuits back to the text format.

use tessel_ir::{Circuit, CircuitItem};

/// Emit a circuit as text, one instruction per line.
pub fn emit(circuit: &Circuit) -> String {
    let mut emitter = Emitter::new();
    emitter.emit_circuit(circuit);
    emitter.output
}

/// Text emitter.
struct Emitter {
    output: String,
    indent: usize,
}

impl Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent: 0,
        }
    }

    fn emit_circuit(&mut self, circuit: &Circuit) {
        for item in circuit.items() {
            match item {
                CircuitItem::Operation(op) => self.writeln(&op.to_string()),
                CircuitItem::Repeat { count, body } => {
                    self.writeln(&format!("REPEAT {count} {{"));
                    self.indent += 1;
                    self.emit_circuit(body);
                    self.indent -= 1;
                    self.writeln("}");
                }
            }
        }
    }

    fn writeln(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
        self.output.push_str(line);
        self.output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_ir::Pauli;

    #[test]
    fn test_emit_repeat_block() {
        let mut body = Circuit::new();
        body.mpp(&[&[(Pauli::Z, 0), (Pauli::Z, 1)]]).unwrap();
        body.detector(&[-1, -2], &[0.5, 0.0]).unwrap();
        body.tick();

        let mut circuit = Circuit::new();
        circuit.qubit_coords(0, &[0.0, 0.0]).unwrap();
        circuit.mpp(&[&[(Pauli::Z, 0), (Pauli::Z, 1)]]).unwrap();
        circuit.repeat(4, body).unwrap();
        circuit.observable_include(0, &[-1]).unwrap();

        let text = emit(&circuit);
        assert_eq!(
            text,
            "QUBIT_COORDS(0, 0) 0\n\
             MPP Z0*Z1\n\
             REPEAT 4 {\n    \
             MPP Z0*Z1\n    \
             DETECTOR(0.5, 0) rec[-1] rec[-2]\n    \
             TICK\n\
             }\n\
             OBSERVABLE_INCLUDE(0) rec[-1]\n"
        );
    }

    #[test]
    fn test_roundtrip_preserves_structure() {
        let source = "R 0 1\nX_ERROR(0.001) 0 1\nREPEAT 2 {\n    CX 0 1\n    MR 1\n    TICK\n}\n";
        let circuit = crate::parse(source).unwrap();
        let emitted = emit(&circuit);
        assert_eq!(emitted, source);
        assert_eq!(crate::parse(&emitted).unwrap(), circuit);
    }
}
