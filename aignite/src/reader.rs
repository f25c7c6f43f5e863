//! Rebuilds a logic network from an AIGER event stream.
//!
//! [`AigerReader`] consumes the structural events of one AIGER file in the
//! order the format guarantees them: the header first, then AND gates in
//! strictly increasing node-index order, with outputs, latches and symbol
//! table entries interleaved anywhere after the header. Signals are stored in
//! a table indexed by AIGER node index, so operand literals resolve with a
//! shift and a bounds check.
//!
//! Outputs and latch next-states are not wired when their events arrive: a
//! symbol table entry may still name them later, addressed by declaration
//! index. They are kept as pending entries and wired by [`AigerReader::finish`]
//! once the stream is drained. Dropping a reader without calling `finish`
//! wires nothing, so a load that fails midway leaves no half-connected
//! outputs in the backend.

use crate::lit::Lit;
use crate::names::NameMap;
use crate::network::{Capabilities, Network, ResetClass};

/// A failed load.
///
/// Everything here is fatal: a malformed file is never patched or re-parsed.
/// Name conflicts are the only tolerated anomaly and are handled inside
/// [`NameMap::insert`] instead.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A literal referenced a node that has not been declared yet.
    #[error("literal {lit} references a node beyond the {len} declared so far")]
    LiteralOutOfRange {
        /// The offending literal, in packed encoding.
        lit: u32,
        /// How many nodes the signal table held at that point.
        len: usize,
    },
    /// An AND gate arrived out of the strictly increasing index order.
    #[error("and gate declared for node {index}, but node {expected} was expected next")]
    AndGateOutOfOrder {
        /// The node index the gate claimed.
        index: u32,
        /// The next free slot in the signal table.
        expected: usize,
    },
    /// A symbol table entry referenced a declaration that does not exist.
    #[error("{kind} symbol index {index} has no matching declaration")]
    SymbolIndexOutOfRange {
        /// Which symbol section the entry came from.
        kind: &'static str,
        /// The declaration index the entry claimed.
        index: usize,
    },
    /// The backend does not implement an operation the file needs.
    #[error("network backend does not implement {0}")]
    MissingCapability(&'static str),
    /// The tokenizer rejected the input.
    #[error("malformed aiger input: {0:?}")]
    Parse(aiger::AigerError),
    /// The input could not be read at all.
    #[error("failed to read aiger input")]
    Io(#[from] std::io::Error),
}

struct PendingOutput {
    lit: Lit,
    name: Option<String>,
}

struct PendingLatch {
    next: Lit,
    reset: ResetClass,
    name: Option<String>,
}

/// Event sink that builds a network in `N` from one AIGER stream.
///
/// All state is owned by the reader and lives for one load; a second load
/// needs a second reader. The backend's optional capabilities are probed once
/// here, at construction, so every event handler just checks a flag.
pub struct AigerReader<'a, N: Network> {
    ntk: &'a mut N,
    names: Option<&'a mut NameMap<N::Sig>>,
    caps: Capabilities,
    signals: Vec<N::Sig>,
    outputs: Vec<PendingOutput>,
    latches: Vec<PendingLatch>,
    num_inputs: usize,
}

impl<'a, N: Network> AigerReader<'a, N> {
    /// Creates a reader that builds into `ntk`, recording display names into
    /// `names` if one is supplied.
    pub fn new(ntk: &'a mut N, names: Option<&'a mut NameMap<N::Sig>>) -> Self {
        let caps = ntk.capabilities();
        Self {
            ntk,
            names,
            caps,
            signals: Vec::new(),
            outputs: Vec::new(),
            latches: Vec::new(),
            num_inputs: 0,
        }
    }

    /// Looks up the signal a literal refers to, complementing it if the
    /// literal is inverted.
    fn resolve(&mut self, lit: Lit) -> Result<N::Sig, LoadError> {
        let Some(&signal) = self.signals.get(lit.index() as usize) else {
            return Err(LoadError::LiteralOutOfRange {
                lit: lit.raw(),
                len: self.signals.len(),
            });
        };

        if lit.is_inverted() {
            Ok(self.ntk.create_not(signal))
        } else {
            Ok(signal)
        }
    }

    fn record_name(&mut self, signal: N::Sig, name: &str) {
        if let Some(names) = self.names.as_deref_mut() {
            names.insert(signal, name);
        }
    }

    /// Handles the header: creates the constant, all primary inputs and all
    /// register outputs, in that order, so the signal table matches the AIGER
    /// node numbering.
    ///
    /// # Errors
    ///
    /// [`LoadError::MissingCapability`] if latches are declared but the
    /// backend does not advertise registers.
    pub fn on_header(&mut self, num_inputs: usize, num_latches: usize) -> Result<(), LoadError> {
        if num_latches > 0 && !self.caps.registers {
            return Err(LoadError::MissingCapability("registers"));
        }

        self.num_inputs = num_inputs;

        let constant = self.ntk.get_constant(false);
        self.signals.push(constant);

        for _ in 0..num_inputs {
            let pi = self.ntk.create_pi();
            self.signals.push(pi);
        }

        for _ in 0..num_latches {
            let ro = self.ntk.create_ro();
            self.signals.push(ro);
        }

        Ok(())
    }

    /// Names a primary input. Input names need no finalization step, so they
    /// are wired immediately.
    ///
    /// # Errors
    ///
    /// [`LoadError::SymbolIndexOutOfRange`] if no such input was declared.
    pub fn on_input_name(&mut self, index: usize, name: &str) -> Result<(), LoadError> {
        if index >= self.num_inputs {
            return Err(LoadError::SymbolIndexOutOfRange {
                kind: "input",
                index,
            });
        }

        let signal = self.signals[1 + index];
        self.record_name(signal, name);
        if self.caps.signal_names {
            self.ntk.set_name(signal, name);
        }
        Ok(())
    }

    /// Handles one AND gate, resolving both operand literals against the
    /// signal table.
    ///
    /// # Errors
    ///
    /// [`LoadError::AndGateOutOfOrder`] if `index` is not the next free slot
    /// in the signal table, and [`LoadError::LiteralOutOfRange`] if an
    /// operand is a forward reference.
    pub fn on_and(&mut self, index: u32, left: Lit, right: Lit) -> Result<(), LoadError> {
        if index as usize != self.signals.len() {
            return Err(LoadError::AndGateOutOfOrder {
                index,
                expected: self.signals.len(),
            });
        }

        let left = self.resolve(left)?;
        let right = self.resolve(right)?;
        let gate = self.ntk.create_and(left, right);
        self.signals.push(gate);
        Ok(())
    }

    /// Records a latch's next-state literal and reset class for finalization.
    pub fn on_latch(&mut self, next: Lit, reset: ResetClass) {
        self.latches.push(PendingLatch {
            next,
            reset,
            name: None,
        });
    }

    /// Records an output literal for finalization.
    pub fn on_output(&mut self, lit: Lit) {
        self.outputs.push(PendingOutput { lit, name: None });
    }

    /// Names an output, addressed by declaration index.
    ///
    /// # Errors
    ///
    /// [`LoadError::SymbolIndexOutOfRange`] if no such output was declared.
    pub fn on_output_name(&mut self, index: usize, name: &str) -> Result<(), LoadError> {
        let pending =
            self.outputs
                .get_mut(index)
                .ok_or(LoadError::SymbolIndexOutOfRange {
                    kind: "output",
                    index,
                })?;
        pending.name = Some(name.to_string());
        Ok(())
    }

    /// Names a latch, addressed by declaration index. The register output
    /// carries the name directly; the pending entry keeps it too, so the
    /// next-state signal can be named `<name>_next` at finalization.
    ///
    /// # Errors
    ///
    /// [`LoadError::SymbolIndexOutOfRange`] if no such latch was declared.
    pub fn on_latch_name(&mut self, index: usize, name: &str) -> Result<(), LoadError> {
        let pending =
            self.latches
                .get_mut(index)
                .ok_or(LoadError::SymbolIndexOutOfRange {
                    kind: "latch",
                    index,
                })?;
        pending.name = Some(name.to_string());

        let signal = self.signals[1 + self.num_inputs + index];
        self.record_name(signal, name);
        if self.caps.signal_names {
            self.ntk.set_name(signal, name);
        }
        Ok(())
    }

    /// Wires every pending output and latch into the backend.
    ///
    /// Outputs come first, in declaration order, then latch next-states, so
    /// latch inputs occupy the output indices immediately after the primary
    /// outputs. Unnamed entries get deterministic defaults: `po<n>` by output
    /// declaration index, `li<n>` counting latches from 1.
    ///
    /// Consuming `self` makes this a one-shot step; a reader that is dropped
    /// instead (because the stream broke off early) wires nothing.
    ///
    /// # Errors
    ///
    /// [`LoadError::LiteralOutOfRange`] if a pending literal references a
    /// node the file never declared.
    pub fn finish(mut self) -> Result<(), LoadError> {
        let outputs = std::mem::take(&mut self.outputs);
        let latches = std::mem::take(&mut self.latches);
        let mut output_idx = 0;

        for pending in outputs {
            let signal = self.resolve(pending.lit)?;
            self.ntk.create_po(signal);

            if let Some(name) = pending.name.as_deref() {
                self.record_name(signal, name);
                if self.caps.output_names {
                    self.ntk.set_output_name(output_idx, name);
                }
            } else if self.caps.output_names && !self.ntk.has_output_name(output_idx) {
                self.ntk.set_output_name(output_idx, &format!("po{}", output_idx));
            }
            output_idx += 1;
        }

        for (latch_idx, pending) in latches.into_iter().enumerate() {
            let signal = self.resolve(pending.next)?;
            if let Some(name) = pending.name.as_deref() {
                self.record_name(signal, &format!("{}_next", name));
            }
            self.ntk.create_ri(signal, pending.reset);

            if self.caps.output_names && !self.ntk.has_output_name(output_idx) {
                self.ntk
                    .set_output_name(output_idx, &format!("li{}", 1 + latch_idx));
            }
            output_idx += 1;
        }

        Ok(())
    }
}

fn convert(lit: &aiger::Literal) -> Lit {
    Lit::new(lit.variable() as u32, lit.is_inverted())
}

/// Reads one AIGER file from `source` into `ntk`, recording display names
/// into `names` if one is supplied.
///
/// The `aiger` crate does the byte-level decoding; this function only routes
/// its records to an [`AigerReader`] and finishes it. The crate's records
/// carry no latch reset values, so every tokenized latch gets
/// [`ResetClass::Zero`], the AIGER default.
///
/// # Errors
///
/// [`LoadError::Parse`] when the tokenizer rejects the input, or any of the
/// structural errors of [`AigerReader`].
pub fn read_aiger<R, N>(
    source: R,
    ntk: &mut N,
    names: Option<&mut NameMap<N::Sig>>,
) -> Result<(), LoadError>
where
    R: std::io::Read,
    N: Network,
{
    let tokens = aiger::Reader::from_reader(source).map_err(LoadError::Parse)?;
    let header = tokens.header();

    let mut reader = AigerReader::new(ntk, names);
    reader.on_header(header.i, header.l)?;

    for record in tokens.records() {
        match record.map_err(LoadError::Parse)? {
            // Input declarations carry no information beyond the header's
            // input count; the tokenizer has already validated them.
            aiger::Aiger::Input(_) => {}
            aiger::Aiger::Latch { output: _, input } => {
                reader.on_latch(convert(&input), ResetClass::Zero);
            }
            aiger::Aiger::Output(lit) => {
                reader.on_output(convert(&lit));
            }
            aiger::Aiger::AndGate { output, inputs } => {
                reader.on_and(
                    output.variable() as u32,
                    convert(&inputs[0]),
                    convert(&inputs[1]),
                )?;
            }
            aiger::Aiger::Symbol {
                type_spec,
                position,
                symbol,
            } => match type_spec {
                aiger::Symbol::Input => reader.on_input_name(position, &symbol)?,
                aiger::Symbol::Output => reader.on_output_name(position, &symbol)?,
                aiger::Symbol::Latch => reader.on_latch_name(position, &symbol)?,
            },
        }
    }

    reader.finish()
}
