//! OpenQASM 2.0 emitter.
//!
//! Renders an IR instruction sequence over a fixed qubit ordering. Output
//! layout:
//!
//! ```text
//! // <header lines>
//!
//! OPENQASM 2.0;
//! include "qelib1.inc";
//!
//!
//! // Qubits: [q0, q1]
//! qreg q[2];
//! creg m_c0[1];
//!
//!
//! h q[0];
//! cx q[0],q[1];
//! measure q[0] -> m_c0[0];
//! ```
//!
//! Operations outside `qelib1.inc` are decomposed (see [`crate::decompose`])
//! and preceded by a `// Gate: ...` comment set off by blank lines.

use crate::decompose::{Operation, decompose};
use crate::error::{QasmError, QasmResult};
use crate::format::{format_angle, format_float, is_valid_qasm_id};
use qbridge_ir::{CircuitIr, GateName, Instruction, Parameter, Qubit};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// The only version this emitter writes.
pub const QASM_VERSION: &str = "2.0";

/// Most significant digits an `f64` angle can meaningfully carry.
pub const MAX_PRECISION: usize = 17;

/// Options controlling QASM output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QasmOptions {
    /// Multi-line comment placed at the top of the file.
    #[serde(default)]
    pub header: Option<String>,

    /// Significant digits used for angles.
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// OpenQASM version to emit.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_precision() -> usize {
    10
}

fn default_version() -> String {
    QASM_VERSION.to_string()
}

impl Default for QasmOptions {
    fn default() -> Self {
        Self {
            header: None,
            precision: default_precision(),
            version: default_version(),
        }
    }
}

impl QasmOptions {
    /// Set the header comment.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the number of significant digits.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

/// Classical register holding the results of one measurement key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementRegister {
    /// The measurement key.
    pub key: String,
    /// Register name in the output.
    pub id: String,
    /// Number of bits.
    pub width: usize,
    /// Original key, kept when the id had to be synthesized.
    pub comment: Option<String>,
}

/// Rendered OpenQASM 2.0 program.
///
/// All rendering happens in [`QasmOutput::new`]; a failure there produces no
/// text at all.
#[derive(Debug, Clone)]
pub struct QasmOutput {
    text: String,
    registers: Vec<MeasurementRegister>,
}

impl QasmOutput {
    /// Render `instructions`, numbering qubits by their position in `qubits`.
    pub fn new(
        instructions: &[Instruction],
        qubits: &[Qubit],
        options: &QasmOptions,
    ) -> QasmResult<Self> {
        if options.version != QASM_VERSION {
            return Err(QasmError::UnsupportedVersion(options.version.clone()));
        }
        if !(1..=MAX_PRECISION).contains(&options.precision) {
            return Err(QasmError::InvalidPrecision(options.precision));
        }

        let slots: FxHashMap<&Qubit, usize> =
            qubits.iter().enumerate().map(|(i, q)| (q, i)).collect();
        let operations = instructions
            .iter()
            .map(|inst| lower(inst, &slots))
            .collect::<QasmResult<Vec<_>>>()?;
        let registers = assign_registers(&operations);

        let mut emitter = Emitter {
            writer: Writer::default(),
            registers: &registers,
            precision: options.precision,
        };
        emitter.write_preamble(qubits, options.header.as_deref());
        for op in &operations {
            emitter.write_operation(op)?;
        }

        let text = emitter.writer.finish();
        debug!(
            operations = operations.len(),
            registers = registers.len(),
            bytes = text.len(),
            "Rendered OpenQASM"
        );
        Ok(Self { text, registers })
    }

    /// Render a circuit over its own qubit order.
    pub fn from_circuit(circuit: &CircuitIr, options: &QasmOptions) -> QasmResult<Self> {
        let qubits: Vec<Qubit> = circuit.qubits().iter().cloned().collect();
        Self::new(circuit.instructions(), &qubits, options)
    }

    /// The program text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the output, returning the program text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Classical registers, in declaration order.
    pub fn registers(&self) -> &[MeasurementRegister] {
        &self.registers
    }

    /// Write the program to `path`.
    ///
    /// The text goes to a temporary file next to `path` which is then renamed
    /// into place; on any failure the temporary file is removed and `path` is
    /// left untouched.
    pub fn save(&self, path: impl AsRef<Path>) -> QasmResult<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(self.text.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(path)?;
        debug!(path = %path.display(), bytes = self.text.len(), "Saved OpenQASM");
        Ok(())
    }
}

impl fmt::Display for QasmOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render `circuit` to a QASM string.
pub fn circuit_to_qasm(circuit: &CircuitIr, options: &QasmOptions) -> QasmResult<String> {
    QasmOutput::from_circuit(circuit, options).map(QasmOutput::into_string)
}

// =============================================================================
// Lowering
// =============================================================================

fn lower(inst: &Instruction, slots: &FxHashMap<&Qubit, usize>) -> QasmResult<Operation> {
    let qubits = inst
        .qubits()
        .iter()
        .map(|q| {
            slots.get(q).copied().ok_or_else(|| QasmError::UnknownQubit {
                operation: inst.to_string(),
                qubit: q.to_string(),
            })
        })
        .collect::<QasmResult<Vec<_>>>()?;

    match inst.name() {
        GateName::Measure => {
            let key = inst.measurement_key().ok_or_else(|| {
                QasmError::InvalidOperation(format!("measurement without key: {inst}"))
            })?;
            Ok(Operation::measure(&qubits, key))
        }
        GateName::Unitary => {
            if let Some(symbol) = inst.params().iter().find(|p| p.is_symbolic()) {
                return Err(unbound(inst, symbol));
            }
            let matrix = inst.matrix().ok_or_else(|| {
                QasmError::InvalidOperation(format!("unitary without matrix: {inst}"))
            })?;
            Ok(Operation::unitary(&qubits, matrix))
        }
        gate => {
            let params = inst
                .params()
                .iter()
                .map(|p| p.as_f64().ok_or_else(|| unbound(inst, p)))
                .collect::<QasmResult<Vec<_>>>()?;
            Ok(Operation::gate(gate, &qubits, &params))
        }
    }
}

fn unbound(inst: &Instruction, param: &Parameter) -> QasmError {
    QasmError::UnboundParameter {
        operation: inst.to_string(),
        parameter: param.to_string(),
    }
}

/// Pick a register for each distinct measurement key, in first-use order.
fn assign_registers(operations: &[Operation]) -> Vec<MeasurementRegister> {
    let mut registers: Vec<MeasurementRegister> = Vec::new();
    let mut synthetic = 0;
    for op in operations {
        let Some(key) = op.key.as_deref() else {
            continue;
        };
        if registers.iter().any(|r| r.key == key) {
            continue;
        }
        let id = format!("m_{key}");
        let (id, comment) = if is_valid_qasm_id(&id) {
            (id, None)
        } else {
            let id = format!("m{synthetic}");
            synthetic += 1;
            (id, Some(key.replace('\n', " ")))
        };
        registers.push(MeasurementRegister {
            key: key.to_string(),
            id,
            width: op.qubits.len(),
            comment,
        });
    }
    registers
}

// =============================================================================
// Writing
// =============================================================================

/// Output buffer with deferred blank lines.
///
/// Gap requests take the maximum; the gap is flushed right before the next
/// text, so trailing requests never reach the output.
#[derive(Debug, Default)]
struct Writer {
    out: String,
    pending_gap: usize,
}

impl Writer {
    fn gap(&mut self, lines: usize) {
        self.pending_gap = self.pending_gap.max(lines);
    }

    fn write(&mut self, text: &str) {
        for _ in 0..self.pending_gap {
            self.out.push('\n');
        }
        self.pending_gap = 0;
        self.out.push_str(text);
    }

    fn finish(self) -> String {
        self.out
    }
}

struct Emitter<'a> {
    writer: Writer,
    registers: &'a [MeasurementRegister],
    precision: usize,
}

impl Emitter<'_> {
    fn write_preamble(&mut self, qubits: &[Qubit], header: Option<&str>) {
        if let Some(header) = header.filter(|h| !h.is_empty()) {
            for line in header.split('\n') {
                let comment = format!("// {line}");
                self.writer.write(comment.trim_end());
                self.writer.write("\n");
            }
            self.writer.write("\n");
        }

        self.writer.write("OPENQASM 2.0;\n");
        self.writer.write("include \"qelib1.inc\";\n");
        self.writer.gap(2);

        let labels: Vec<String> = qubits.iter().map(ToString::to_string).collect();
        self.writer
            .write(&format!("// Qubits: [{}]\n", labels.join(", ")));
        if !qubits.is_empty() {
            self.writer.write(&format!("qreg q[{}];\n", qubits.len()));
        }
        for reg in self.registers {
            match &reg.comment {
                None => self.writer.write(&format!("creg {}[{}];\n", reg.id, reg.width)),
                Some(comment) => self.writer.write(&format!(
                    "creg {}[{}];  // Measurement: {comment}\n",
                    reg.id, reg.width
                )),
            }
        }
        self.writer.gap(2);
    }

    fn write_operation(&mut self, op: &Operation) -> QasmResult<()> {
        let parts = decompose(op)?;
        if let Some(value) = parts
            .iter()
            .flat_map(|part| &part.params)
            .find(|value| !value.is_finite())
        {
            return Err(QasmError::NonFiniteAngle {
                operation: op.to_string(),
                value: *value,
            });
        }
        let texts = parts
            .iter()
            .map(|part| self.render(part))
            .collect::<QasmResult<Vec<_>>>()?;

        let decomposed = parts.len() != 1 || parts[0] != *op;
        let multiline = texts.first().is_some_and(|t| t.matches('\n').count() > 1);
        let annotate = decomposed || multiline;

        if annotate {
            self.writer.gap(1);
            self.writer
                .write(&format!("// Gate: {}\n", self.describe(op)));
        }
        for text in &texts {
            self.writer.write(text);
        }
        if annotate {
            self.writer.gap(1);
        }
        Ok(())
    }

    /// Text of a directly renderable operation.
    fn render(&self, op: &Operation) -> QasmResult<String> {
        if op.gate == GateName::Measure {
            return self.render_measure(op);
        }
        let name = qasm_name(op.gate).ok_or_else(|| QasmError::CannotExpress {
            operation: op.to_string(),
        })?;

        let mut line = String::from(name);
        if !op.params.is_empty() {
            let params: Vec<String> = op
                .params
                .iter()
                .map(|p| format_angle(*p, self.precision))
                .collect();
            line.push('(');
            line.push_str(&params.join(","));
            line.push(')');
        }
        let qubits: Vec<String> = op.qubits.iter().map(|q| format!("q[{q}]")).collect();
        line.push(' ');
        line.push_str(&qubits.join(","));
        line.push_str(";\n");
        Ok(line)
    }

    fn render_measure(&self, op: &Operation) -> QasmResult<String> {
        let key = op.key.as_deref().unwrap_or_default();
        let reg = self
            .registers
            .iter()
            .find(|r| r.key == key)
            .ok_or_else(|| QasmError::InvalidOperation(format!("no register for key '{key}'")))?;
        Ok(op
            .qubits
            .iter()
            .enumerate()
            .map(|(bit, q)| format!("measure q[{q}] -> {}[{bit}];\n", reg.id))
            .collect())
    }

    /// Label used in `// Gate:` comments.
    fn describe(&self, op: &Operation) -> String {
        match (op.gate, op.key.as_deref()) {
            (GateName::Measure, Some(key)) => format!("{}({key})", op.gate),
            _ if op.params.is_empty() => op.gate.to_string(),
            _ => {
                let params: Vec<String> = op
                    .params
                    .iter()
                    .map(|p| format_float(*p, self.precision))
                    .collect();
                format!("{}({})", op.gate, params.join(", "))
            }
        }
    }
}

/// Instruction name in `qelib1.inc`.
fn qasm_name(gate: GateName) -> Option<&'static str> {
    let name = match gate {
        GateName::I => "id",
        GateName::X => "x",
        GateName::Y => "y",
        GateName::Z => "z",
        GateName::H => "h",
        GateName::S => "s",
        GateName::Sdg => "sdg",
        GateName::T => "t",
        GateName::Tdg => "tdg",
        GateName::SX => "sx",
        GateName::SXdg => "sxdg",
        GateName::RX => "rx",
        GateName::RY => "ry",
        GateName::RZ => "rz",
        GateName::Phase | GateName::U1 => "u1",
        GateName::U2 => "u2",
        GateName::U | GateName::U3 => "u3",
        GateName::CX => "cx",
        GateName::CY => "cy",
        GateName::CZ => "cz",
        GateName::CH => "ch",
        GateName::Swap => "swap",
        GateName::CRZ => "crz",
        GateName::CPhase | GateName::CU1 => "cu1",
        GateName::CCX => "ccx",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_gap_takes_max() {
        let mut w = Writer::default();
        w.write("a\n");
        w.gap(1);
        w.gap(2);
        w.gap(1);
        w.write("b\n");
        w.gap(3);
        assert_eq!(w.finish(), "a\n\n\nb\n");
    }

    #[test]
    fn test_register_naming() {
        let ops = vec![
            Operation::measure(&[0, 1], "c"),
            Operation::measure(&[2], "0:result"),
            Operation::measure(&[3], "c"),
            Operation::measure(&[4], "line\nbreak"),
        ];
        let regs = assign_registers(&ops);
        assert_eq!(regs.len(), 3);
        assert_eq!(regs[0].id, "m_c");
        assert_eq!(regs[0].width, 2);
        assert_eq!(regs[0].comment, None);
        assert_eq!(regs[1].id, "m0");
        assert_eq!(regs[1].comment.as_deref(), Some("0:result"));
        assert_eq!(regs[2].id, "m1");
        assert_eq!(regs[2].comment.as_deref(), Some("line break"));
    }

    #[test]
    fn test_qasm_names_cover_native_set() {
        for gate in GateName::ALL {
            if gate != GateName::Measure {
                assert_eq!(
                    qasm_name(gate).is_some(),
                    crate::decompose::is_native(gate),
                    "{gate}"
                );
            }
        }
    }

    #[test]
    fn test_options_defaults_from_yaml_like_json() {
        let options: QasmOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, QasmOptions::default());
        assert_eq!(options.precision, 10);
        assert_eq!(options.version, "2.0");
    }
}
