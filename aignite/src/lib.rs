//! Loading AIGER files into and-inverter graphs.
//!
//! An and-inverter graph (AIG) represents boolean logic with two-input AND
//! gates and inverters. Inversion is carried on the edges rather than as
//! separate gate nodes, so complementing a signal is free, and the two
//! primitives together are universal.
//!
//! The AIGER format serializes such a graph compactly: every node gets an
//! index, and a reference to a node is a *literal*, the index shifted left by
//! one with the polarity in the low bit. Node 0 is constant false, the first
//! indices after it are the primary inputs, then the latch outputs, then the
//! AND gates in topological order. Because gates are declared in strictly
//! increasing index order, a single pass over the file can resolve every
//! operand against the nodes built so far.
//!
//! The loader here is split from the storage it fills. [`reader::AigerReader`]
//! consumes the structural events of one file and drives any backend that
//! implements [`network::Network`]; [`aig::Aig`] is the bundled
//! petgraph-backed backend. Display names from the symbol table land both in
//! the backend (when it supports naming) and in a bidirectional
//! [`names::NameMap`], so callers can link the rebuilt netlist to external
//! pin names.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(missing_docs)]

pub mod aig;
mod aig_graphviz;
pub mod lit;
pub mod names;
pub mod network;
pub mod reader;
