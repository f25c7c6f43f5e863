//! A petgraph-backed And-Inverter Graph.
//!
//! Nodes are stored in a [`StableGraph`]; edges point from a driver to the
//! node it feeds, and the edge weight records whether the connection is
//! inverted. Complementing a signal therefore costs nothing: an [`AigSig`]
//! carries the polarity bit, and NOT just flips it.

use std::collections::HashMap;
use std::ops::Not;

use petgraph::prelude::*;

use crate::names::NameMap;
use crate::network::{Capabilities, Network, ResetClass};
use crate::reader::{read_aiger, LoadError};

/// A node of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AigNode {
    /// The constant-false node; every graph has exactly one.
    False,
    /// A primary input, numbered in creation order.
    Input(u32),
    /// A register output (the present-state side of a latch).
    Latch(u32),
    /// A two-input AND gate.
    And,
    /// A primary output, numbered in creation order.
    Output(u32),
}

/// A node handle plus a polarity bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AigSig {
    node: NodeIndex,
    inverted: bool,
}

impl AigSig {
    /// Builds a signal from a node index and a polarity.
    #[must_use]
    pub const fn new(node: NodeIndex, inverted: bool) -> Self {
        Self { node, inverted }
    }

    /// The node this signal refers to.
    #[must_use]
    pub const fn node(self) -> NodeIndex {
        self.node
    }

    /// Whether this signal is an inverted reference to its node.
    #[must_use]
    pub const fn is_inverted(self) -> bool {
        self.inverted
    }
}

impl Not for AigSig {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self {
            node: self.node,
            inverted: !self.inverted,
        }
    }
}

/// Node counts of an [`Aig`], by kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AigCounts {
    /// Primary inputs.
    pub inputs: usize,
    /// Latches.
    pub latches: usize,
    /// AND gates.
    pub ands: usize,
    /// Primary outputs.
    pub outputs: usize,
}

/// An And-Inverter Graph stored in a petgraph [`StableGraph`].
pub struct Aig {
    graph: StableGraph<AigNode, bool, Directed>,
    zero: NodeIndex,
    input_count: u32,
    latches: Vec<NodeIndex>,
    resets: Vec<Option<ResetClass>>,
    wired_latches: usize,
    outputs: Vec<NodeIndex>,
    signal_names: HashMap<AigSig, String>,
    output_names: HashMap<usize, String>,
}

impl Default for Aig {
    fn default() -> Self {
        Self::new()
    }
}

impl Aig {
    /// Creates an empty graph holding only the constant-false node.
    #[must_use]
    pub fn new() -> Self {
        let mut graph = StableGraph::default();
        let zero = graph.add_node(AigNode::False);
        Self {
            graph,
            zero,
            input_count: 0,
            latches: Vec::new(),
            resets: Vec::new(),
            wired_latches: 0,
            outputs: Vec::new(),
            signal_names: HashMap::new(),
            output_names: HashMap::new(),
        }
    }

    /// Loads an AIGER file from disk, returning the graph and its name map.
    ///
    /// # Errors
    ///
    /// [`LoadError::Io`] if the file cannot be opened, otherwise whatever
    /// [`read_aiger`] reports.
    pub fn from_aiger(path: &str) -> Result<(Self, NameMap<AigSig>), LoadError> {
        let file = std::fs::File::open(path)?;
        let mut aig = Self::new();
        let mut names = NameMap::new();
        read_aiger(file, &mut aig, Some(&mut names))?;
        Ok((aig, names))
    }

    /// The underlying graph.
    #[must_use]
    pub fn graph(&self) -> &StableGraph<AigNode, bool> {
        &self.graph
    }

    /// The constant-false node.
    #[must_use]
    pub fn zero(&self) -> NodeIndex {
        self.zero
    }

    /// The primary output nodes, in declaration order.
    #[must_use]
    pub fn outputs(&self) -> &[NodeIndex] {
        &self.outputs
    }

    /// Counts the nodes of the graph by kind.
    #[must_use]
    pub fn counts(&self) -> AigCounts {
        let mut counts = AigCounts::default();
        for node in self.graph.node_indices() {
            match self.graph[node] {
                AigNode::False => {}
                AigNode::Input(_) => counts.inputs += 1,
                AigNode::Latch(_) => counts.latches += 1,
                AigNode::And => counts.ands += 1,
                AigNode::Output(_) => counts.outputs += 1,
            }
        }
        counts
    }

    /// The display name of a signal, if one was set.
    #[must_use]
    pub fn signal_name(&self, signal: AigSig) -> Option<&str> {
        self.signal_names.get(&signal).map(String::as_str)
    }

    /// The display name of an output index, if one was set.
    #[must_use]
    pub fn output_name(&self, index: usize) -> Option<&str> {
        self.output_names.get(&index).map(String::as_str)
    }

    /// The reset class of a latch, once its next-state has been wired.
    #[must_use]
    pub fn latch_reset(&self, index: usize) -> Option<ResetClass> {
        self.resets.get(index).copied().flatten()
    }
}

impl Network for Aig {
    type Sig = AigSig;

    fn get_constant(&mut self, value: bool) -> AigSig {
        AigSig::new(self.zero, value)
    }

    fn create_pi(&mut self) -> AigSig {
        let index = self.input_count;
        self.input_count += 1;
        AigSig::new(self.graph.add_node(AigNode::Input(index)), false)
    }

    fn create_po(&mut self, signal: AigSig) {
        let index = self.outputs.len() as u32;
        let output = self.graph.add_node(AigNode::Output(index));
        self.graph.add_edge(signal.node, output, signal.inverted);
        self.outputs.push(output);
    }

    fn create_not(&mut self, signal: AigSig) -> AigSig {
        !signal
    }

    fn create_and(&mut self, a: AigSig, b: AigSig) -> AigSig {
        let gate = self.graph.add_node(AigNode::And);
        self.graph.add_edge(a.node, gate, a.inverted);
        self.graph.add_edge(b.node, gate, b.inverted);
        AigSig::new(gate, false)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            registers: true,
            signal_names: true,
            output_names: true,
        }
    }

    fn create_ro(&mut self) -> AigSig {
        let index = self.latches.len() as u32;
        let node = self.graph.add_node(AigNode::Latch(index));
        self.latches.push(node);
        self.resets.push(None);
        AigSig::new(node, false)
    }

    fn create_ri(&mut self, next: AigSig, reset: ResetClass) {
        // Register inputs pair up with register outputs in creation order.
        assert!(
            self.wired_latches < self.latches.len(),
            "create_ri called without a matching create_ro"
        );
        let latch = self.latches[self.wired_latches];
        self.graph.add_edge(next.node, latch, next.inverted);
        self.resets[self.wired_latches] = Some(reset);
        self.wired_latches += 1;
    }

    fn set_name(&mut self, signal: AigSig, name: &str) {
        self.signal_names.insert(signal, name.to_string());
    }

    fn has_name(&self, signal: AigSig) -> bool {
        self.signal_names.contains_key(&signal)
    }

    fn set_output_name(&mut self, index: usize, name: &str) {
        self.output_names.insert(index, name.to_string());
    }

    fn has_output_name(&self, index: usize) -> bool {
        self.output_names.contains_key(&index)
    }
}

#[cfg(test)]
mod tests {
    use petgraph::{prelude::*, visit::EdgeRef};

    use super::{Aig, AigNode, AigSig};
    use crate::names::NameMap;
    use crate::network::{Network, ResetClass};
    use crate::reader::read_aiger;

    #[test]
    fn and_gates_carry_polarity_on_edges() {
        let mut aig = Aig::new();
        let a = aig.create_pi();
        let b = aig.create_pi();
        let gate = aig.create_and(a, !b);

        assert_eq!(aig.graph()[gate.node()], AigNode::And);
        let weights = aig
            .graph()
            .edges_directed(gate.node(), Incoming)
            .map(|edge| (edge.source(), *edge.weight()))
            .collect::<Vec<_>>();
        assert!(weights.contains(&(a.node(), false)));
        assert!(weights.contains(&(b.node(), true)));
    }

    #[test]
    fn not_is_a_polarity_flip() {
        let mut aig = Aig::new();
        let a = aig.create_pi();
        let na = aig.create_not(a);
        assert_eq!(na.node(), a.node());
        assert!(na.is_inverted());
        assert_eq!(aig.counts().ands, 0);
    }

    #[test]
    fn register_inputs_pair_with_register_outputs_in_order() {
        let mut aig = Aig::new();
        let d = aig.create_pi();
        let first = aig.create_ro();
        let second = aig.create_ro();
        aig.create_ri(d, ResetClass::One);
        aig.create_ri(!d, ResetClass::Nondeterministic);

        assert_eq!(aig.latch_reset(0), Some(ResetClass::One));
        assert_eq!(aig.latch_reset(1), Some(ResetClass::Nondeterministic));

        let next_of = |latch: AigSig| {
            aig.graph()
                .edges_directed(latch.node(), Incoming)
                .map(|edge| (edge.source(), *edge.weight()))
                .collect::<Vec<_>>()
        };
        assert_eq!(next_of(first), [(d.node(), false)]);
        assert_eq!(next_of(second), [(d.node(), true)]);
    }

    #[test]
    fn load_negated_and_of_input_and_constant() {
        // One input; node 2 is AND(input, false); the sole output is the
        // complement of that gate, so it is constant true.
        let src = "aag 2 1 0 1 1\n2\n5\n4 2 0\n";
        let mut aig = Aig::new();
        read_aiger(src.as_bytes(), &mut aig, None).unwrap();

        let counts = aig.counts();
        assert_eq!(counts.inputs, 1);
        assert_eq!(counts.ands, 1);
        assert_eq!(counts.outputs, 1);

        let output = aig.outputs()[0];
        let driver = aig
            .graph()
            .edges_directed(output, Incoming)
            .next()
            .unwrap();
        assert_eq!(aig.graph()[driver.source()], AigNode::And);
        assert!(*driver.weight());
        assert_eq!(aig.output_name(0), Some("po0"));
    }

    #[test]
    fn load_records_symbol_table_names() {
        let src = "aag 2 1 0 1 1\n2\n4\n4 3 2\ni0 a\no0 y\n";
        let mut aig = Aig::new();
        let mut names = NameMap::new();
        read_aiger(src.as_bytes(), &mut aig, Some(&mut names)).unwrap();

        let input = AigSig::new(NodeIndex::new(1), false);
        assert_eq!(aig.signal_name(input), Some("a"));
        assert_eq!(aig.output_name(0), Some("y"));

        let gate = AigSig::new(NodeIndex::new(2), false);
        assert!(names.has_name(gate, "y"));
        assert_eq!(names.name_to_signal().get("y"), Some(&gate));
    }

    #[test]
    fn load_wires_latches_with_default_reset() {
        // One input, one latch whose next-state is AND(input, latch).
        let src = "aag 3 1 1 1 1\n2\n4 6\n4\n6 4 2\nl0 r\n";
        let mut aig = Aig::new();
        let mut names = NameMap::new();
        read_aiger(src.as_bytes(), &mut aig, Some(&mut names)).unwrap();

        let counts = aig.counts();
        assert_eq!(counts.latches, 1);
        assert_eq!(aig.latch_reset(0), Some(ResetClass::Zero));

        let latch = AigSig::new(NodeIndex::new(2), false);
        assert_eq!(aig.signal_name(latch), Some("r"));
        let gate = AigSig::new(NodeIndex::new(3), false);
        assert!(names.has_name(gate, "r_next"));

        // The latch drives the only PO; its own next-state occupies the
        // output index right after it.
        assert_eq!(aig.output_name(0), Some("po0"));
        assert_eq!(aig.output_name(1), Some("li1"));
    }

    #[test]
    fn malformed_header_is_rejected() {
        let src = "aag 1 1 0 1\n2\n2\n";
        let mut aig = Aig::new();
        assert!(read_aiger(src.as_bytes(), &mut aig, None).is_err());
    }
}
