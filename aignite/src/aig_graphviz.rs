//! Graphviz output for [`Aig`], for eyeballing small graphs.

use std::io;

use crate::aig::{Aig, AigNode, AigSig};

impl Aig {
    /// Writes the graph in Graphviz dot format.
    ///
    /// Inverted edges are drawn with a circle at the tail, the usual AIG
    /// convention. Named inputs, latches and outputs show their names.
    ///
    /// # Errors
    ///
    /// Whatever the writer reports.
    pub fn to_graphviz<W: io::Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w, "strict digraph {{")?;

        for node in self.graph().node_indices() {
            match self.graph()[node] {
                AigNode::False => {
                    writeln!(w, "{} [shape=box,label=\"0\"];", node.index())?;
                }
                AigNode::Input(index) => {
                    let label = self
                        .signal_name(AigSig::new(node, false))
                        .map_or_else(|| format!("Input {}", index), str::to_string);
                    writeln!(
                        w,
                        "{} [shape=box,color=blue,label=\"{}\"];",
                        node.index(),
                        label
                    )?;
                }
                AigNode::Latch(index) => {
                    let label = self
                        .signal_name(AigSig::new(node, false))
                        .map_or_else(|| format!("Latch {}", index), str::to_string);
                    writeln!(
                        w,
                        "{} [shape=box,color=orange,label=\"{}\"];",
                        node.index(),
                        label
                    )?;
                }
                AigNode::And => {
                    writeln!(w, "{} [label=\"And {0}\"];", node.index())?;
                }
                AigNode::Output(index) => {
                    let label = self
                        .output_name(index as usize)
                        .map_or_else(|| format!("Output {}", index), str::to_string);
                    writeln!(
                        w,
                        "{} [shape=box,color=green,label=\"{}\"];",
                        node.index(),
                        label
                    )?;
                }
            }
        }

        for edge in self.graph().edge_indices() {
            let (from, to) = self.graph().edge_endpoints(edge).unwrap();
            write!(w, "{} -> {}", from.index(), to.index())?;
            writeln!(
                w,
                " {};",
                if self.graph()[edge] {
                    "[dir=both,arrowtail=odot]"
                } else {
                    ""
                }
            )?;
        }

        writeln!(w, "}}")
    }
}

#[cfg(test)]
mod tests {
    use crate::aig::Aig;
    use crate::reader::read_aiger;

    #[test]
    fn dot_output_mentions_every_node() {
        let src = "aag 2 1 0 1 1\n2\n4\n4 3 2\ni0 a\no0 y\n";
        let mut aig = Aig::new();
        read_aiger(src.as_bytes(), &mut aig, None).unwrap();

        let mut dot = Vec::new();
        aig.to_graphviz(&mut dot).unwrap();
        let dot = String::from_utf8(dot).unwrap();

        assert!(dot.starts_with("strict digraph {"));
        assert!(dot.contains("label=\"a\""));
        assert!(dot.contains("label=\"y\""));
        assert!(dot.contains("label=\"And 2\""));
        assert!(dot.contains("[dir=both,arrowtail=odot]"));
    }
}
