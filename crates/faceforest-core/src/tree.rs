//! The cycle forest emitted by face discovery.

use serde::{Deserialize, Serialize};

/// One face and the faces detached from inside it.
///
/// `cycle` lists vertex names in walk order, closed: the first name is
/// repeated as the last. A node with an empty cycle is an aggregator that
/// only groups its children (a component that decomposed into several
/// sibling faces).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleTree {
    /// Closed sequence of vertex names describing the face; empty for a
    /// pure aggregator.
    pub cycle: Vec<usize>,
    /// Faces nested inside this one.
    pub children: Vec<CycleTree>,
}

impl CycleTree {
    /// Returns `true` if the node carries neither a cycle nor children.
    ///
    /// Empty trees are dropped from discovery output.
    pub fn is_empty(&self) -> bool {
        self.cycle.is_empty() && self.children.is_empty()
    }

    /// Appends this node's cycles to `out` in pre-order, skipping
    /// empty-cycle aggregators.
    fn collect_cycles<'a>(&'a self, out: &mut Vec<&'a [usize]>) {
        if !self.cycle.is_empty() {
            out.push(&self.cycle);
        }
        for child in &self.children {
            child.collect_cycles(out);
        }
    }
}

/// The result of a successful discovery: one tree per connected component
/// that produced at least one face.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discovery {
    /// The cycle forest, in component discovery order.
    pub forest: Vec<CycleTree>,
}

impl Discovery {
    /// Flattens the forest to its cycles in pre-order, skipping empty-cycle
    /// aggregator nodes.
    pub fn cycles(&self) -> Vec<&[usize]> {
        let mut out = Vec::new();
        for tree in &self.forest {
            tree.collect_cycles(&mut out);
        }
        out
    }
}
