use alloc::vec::Vec;

use petgraph::graph::NodeIndex;

use crate::algo::path::AugmentingPath;
use crate::algo::search::levels;
use crate::amount::Amount;
use crate::arc::ArcId;
use crate::id::Id;
use crate::network::FlowNetwork;

/// Finds augmenting paths inside the layered (level) graph of one phase.
///
/// An arc `(u, v)` is admissible if it has positive residual capacity and
/// `level(v) == level(u) + 1`. Each node keeps a cursor to its current arc; arcs behind the
/// cursor are saturated or lead to a dead end and are never looked at again within the phase.
#[derive(Clone, Debug, Default)]
pub struct BlockingFlowSearch {
    level: Vec<Option<usize>>,
    current: Vec<Option<ArcId>>,
}

impl BlockingFlowSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the layered graph for a new phase.
    ///
    /// Returns `false` if `sink` is unreachable, i.e. the flow is maximal.
    pub fn layer<NodeId: Id, A: Amount>(
        &mut self,
        network: &FlowNetwork<NodeId, A>,
        source: NodeIndex,
        sink: NodeIndex,
    ) -> bool {
        self.level = levels(network, source);
        self.current = (0..network.node_count())
            .map(|u| network.first_arc(NodeIndex::new(u)))
            .collect();
        self.level[sink.index()].is_some()
    }

    pub fn level(&self, u: NodeIndex) -> Option<usize> {
        self.level[u.index()]
    }

    /// Finds the next source to sink path in the layered graph, or `None` once the flow of
    /// this phase is blocking.
    ///
    /// The caller is expected to augment the returned path before asking for the next one.
    pub fn next_path<NodeId: Id, A: Amount>(
        &mut self,
        network: &FlowNetwork<NodeId, A>,
        source: NodeIndex,
        sink: NodeIndex,
    ) -> Option<AugmentingPath> {
        let mut stack = Vec::new();
        let mut u = source;

        loop {
            if u == sink {
                return Some(AugmentingPath::new(stack));
            }

            match self.admissible_arc(network, u) {
                Some(arc) => {
                    stack.push(arc);
                    u = network.head(arc);
                }
                None => {
                    // Dead end: drop `u` from the layered graph and retreat.
                    self.level[u.index()] = None;
                    let arc = stack.pop()?;
                    u = network.tail(arc);
                    self.current[u.index()] = network.next_arc(arc);
                }
            }
        }
    }

    fn admissible_arc<NodeId: Id, A: Amount>(
        &mut self,
        network: &FlowNetwork<NodeId, A>,
        u: NodeIndex,
    ) -> Option<ArcId> {
        let next_level = self.level[u.index()]? + 1;
        while let Some(arc) = self.current[u.index()] {
            let v = network.head(arc);
            if self.level[v.index()] == Some(next_level) && network.residual(arc) > A::zero() {
                return Some(arc);
            }
            self.current[u.index()] = network.next_arc(arc);
        }
        None
    }
}
