//! The capability interface between the loader and a network backend.
//!
//! The loader drives node construction entirely through [`Network`]. The five
//! required operations are enough to rebuild any combinational AIG; sequential
//! elements and display names are optional capabilities that a backend
//! advertises through [`Network::capabilities`]. The loader probes the
//! capability set once, when a reader is constructed, and never calls an
//! optional operation the backend did not advertise.

use std::hash::Hash;

/// The optional operations a [`Network`] backend advertises.
///
/// All flags default to `false`; a backend overrides
/// [`Network::capabilities`] to claim the operations it implements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// `create_ro`/`create_ri` are implemented.
    pub registers: bool,
    /// `set_name`/`has_name` are implemented.
    pub signal_names: bool,
    /// `set_output_name`/`has_output_name` are implemented.
    pub output_names: bool,
}

/// The initial-value constraint of a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetClass {
    /// The register starts at 0.
    Zero,
    /// The register starts at 1.
    One,
    /// The initial state is unconstrained.
    Nondeterministic,
}

/// A logic network that nodes can be created in.
///
/// Signals are opaque handles owned by the backend; the loader only copies
/// them around and hands them back. The optional operations have placeholder
/// bodies that panic: a backend advertising a capability without overriding
/// the matching methods violates the contract.
pub trait Network {
    /// A handle to a node, with polarity.
    type Sig: Copy + Eq + Hash;

    /// Returns the constant signal with the given value.
    fn get_constant(&mut self, value: bool) -> Self::Sig;
    /// Creates a primary input.
    fn create_pi(&mut self) -> Self::Sig;
    /// Creates a primary output driven by `signal`.
    fn create_po(&mut self, signal: Self::Sig);
    /// Returns the logical complement of `signal`.
    fn create_not(&mut self, signal: Self::Sig) -> Self::Sig;
    /// Creates a two-input AND gate.
    fn create_and(&mut self, a: Self::Sig, b: Self::Sig) -> Self::Sig;

    /// The optional operations this backend implements.
    fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    /// Creates a register output (the present-state signal of a latch).
    fn create_ro(&mut self) -> Self::Sig {
        unimplemented!("backend does not implement registers")
    }

    /// Creates a register input: the next-state of the register output
    /// created by the matching (in creation order) `create_ro` call.
    fn create_ri(&mut self, _next: Self::Sig, _reset: ResetClass) {
        unimplemented!("backend does not implement registers")
    }

    /// Attaches a display name to a signal.
    fn set_name(&mut self, _signal: Self::Sig, _name: &str) {
        unimplemented!("backend does not implement signal names")
    }

    /// Whether a signal already has a display name.
    fn has_name(&self, _signal: Self::Sig) -> bool {
        unimplemented!("backend does not implement signal names")
    }

    /// Attaches a display name to an output index.
    fn set_output_name(&mut self, _index: usize, _name: &str) {
        unimplemented!("backend does not implement output names")
    }

    /// Whether an output index already has a display name.
    fn has_output_name(&self, _index: usize) -> bool {
        unimplemented!("backend does not implement output names")
    }
}
