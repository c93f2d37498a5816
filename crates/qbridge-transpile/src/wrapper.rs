//! The circuit wrapper: one source circuit, its IR, and cached emissions.

use crate::native::NativeCircuit;
use qbridge_ir::{CircuitIr, PackageError, PackageResult, Vendor};
use qbridge_qasm::{QasmOptions, QasmOutput, QasmResult};
use rustc_hash::FxHashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, instrument};

/// A native circuit plus everything derived from it.
///
/// The IR is built once in [`CircuitWrapper::new`]. Each target vendor is
/// emitted at most once; later requests return the cached circuit.
#[derive(Debug)]
pub struct CircuitWrapper {
    source: Arc<NativeCircuit>,
    ir: CircuitIr,
    outputs: RwLock<FxHashMap<Vendor, Arc<NativeCircuit>>>,
    emissions: AtomicUsize,
}

impl CircuitWrapper {
    /// Wrap a native circuit, building its IR.
    pub fn new(circuit: impl Into<NativeCircuit>) -> PackageResult<Self> {
        Self::from_arc(Arc::new(circuit.into()))
    }

    /// Wrap a shared native circuit.
    pub fn from_arc(source: Arc<NativeCircuit>) -> PackageResult<Self> {
        let ir = source.to_ir()?;
        debug!(
            vendor = %source.vendor(),
            instructions = ir.len(),
            qubits = ir.num_qubits(),
            "Wrapped circuit"
        );
        Ok(Self {
            source,
            ir,
            outputs: RwLock::new(FxHashMap::default()),
            emissions: AtomicUsize::new(0),
        })
    }

    /// Vendor of the wrapped circuit.
    pub fn source_vendor(&self) -> Vendor {
        self.source.vendor()
    }

    /// The wrapped circuit.
    pub fn source(&self) -> &Arc<NativeCircuit> {
        &self.source
    }

    /// The circuit IR.
    pub fn ir(&self) -> &CircuitIr {
        &self.ir
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.ir.num_qubits()
    }

    /// Number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.ir.num_clbits()
    }

    /// Number of free parameters.
    pub fn num_parameters(&self) -> usize {
        self.ir.num_parameters()
    }

    /// Vendors this wrapper can be asked for.
    pub fn supported_targets(&self) -> &'static [Vendor] {
        &Vendor::ALL
    }

    /// The circuit in `target`'s model.
    ///
    /// Asking for the source vendor returns the wrapped circuit itself.
    #[instrument(skip(self), fields(source = %self.source_vendor()))]
    pub fn transpile(&self, target: Vendor) -> PackageResult<Arc<NativeCircuit>> {
        if target == self.source_vendor() {
            return Ok(Arc::clone(&self.source));
        }

        {
            let outputs = self.outputs.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(cached) = outputs.get(&target) {
                debug!("Emission cache hit");
                return Ok(Arc::clone(cached));
            }
        }

        let mut outputs = self.outputs.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = outputs.get(&target) {
            debug!("Emission cache hit after lock upgrade");
            return Ok(Arc::clone(cached));
        }
        let emitted = Arc::new(NativeCircuit::from_ir(&self.ir, target)?);
        self.emissions.fetch_add(1, Ordering::Relaxed);
        info!(operations = emitted.len(), "Emitted circuit");
        outputs.insert(target, Arc::clone(&emitted));
        Ok(emitted)
    }

    /// Like [`transpile`](Self::transpile), naming the target as a string.
    pub fn transpile_to(&self, target: &str) -> PackageResult<Arc<NativeCircuit>> {
        let vendor = target
            .parse::<Vendor>()
            .map_err(|_| PackageError::UnsupportedTarget {
                origin: self.source_vendor(),
                target: target.to_string(),
            })?;
        self.transpile(vendor)
    }

    /// How many native circuits have been emitted so far.
    pub fn emission_count(&self) -> usize {
        self.emissions.load(Ordering::Relaxed)
    }

    /// Render the circuit as OpenQASM 2.0.
    pub fn to_qasm(&self, options: &QasmOptions) -> QasmResult<QasmOutput> {
        QasmOutput::from_circuit(&self.ir, options)
    }

    /// Render the circuit as OpenQASM 2.0 and write it to `path`.
    pub fn save_qasm(&self, path: impl AsRef<Path>, options: &QasmOptions) -> QasmResult<()> {
        self.to_qasm(options)?.save(path)
    }
}
