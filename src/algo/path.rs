use alloc::vec::Vec;

use petgraph::graph::NodeIndex;

use crate::amount::Amount;
use crate::arc::ArcId;
use crate::id::Id;
use crate::network::FlowNetwork;

/// A source to sink path of arcs with positive residual capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AugmentingPath {
    arcs: Vec<ArcId>,
}

impl AugmentingPath {
    /// `arcs` must be ordered from source to sink.
    pub fn new(arcs: Vec<ArcId>) -> Self {
        Self { arcs }
    }

    /// Walks the discovering arcs back from `sink` to `source`.
    ///
    /// Returns `None` if `sink` was never discovered.
    pub fn from_predecessors<NodeId, A>(
        network: &FlowNetwork<NodeId, A>,
        pred: &[Option<ArcId>],
        source: NodeIndex,
        sink: NodeIndex,
    ) -> Option<Self>
    where
        NodeId: Id,
        A: Amount,
    {
        let mut arcs = Vec::new();
        let mut v = sink;
        while v != source {
            let arc = pred[v.index()]?;
            arcs.push(arc);
            v = network.tail(arc);
        }
        arcs.reverse();
        Some(Self { arcs })
    }

    pub fn arcs(&self) -> &[ArcId] {
        &self.arcs
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// The smallest residual capacity along the path.
    pub fn bottleneck<NodeId: Id, A: Amount>(&self, network: &FlowNetwork<NodeId, A>) -> A {
        self.arcs
            .iter()
            .map(|&arc| network.residual(arc))
            .min()
            .unwrap_or_else(A::zero)
    }

    /// Pushes `amount` along every arc of the path.
    pub fn augment<NodeId: Id, A: Amount>(&self, network: &mut FlowNetwork<NodeId, A>, amount: A) {
        debug_assert!(!self.is_empty(), "bug: augmenting along an empty path");
        for &arc in &self.arcs {
            log::trace!(
                "{:?} --> {:?}: {amount}",
                network.node_id(network.tail(arc)),
                network.node_id(network.head(arc))
            );
            network.augment(arc, amount);
        }
    }
}
