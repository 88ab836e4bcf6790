use petgraph::graph::NodeIndex;

use crate::algo::augmenting::{AugmentingPathSolver, PathSearch};
use crate::algo::path::AugmentingPath;
use crate::algo::search::any_augmenting_path;
use crate::amount::Amount;
use crate::id::Id;
use crate::network::FlowNetwork;

/// Whatever augmenting path depth-first search stumbles on first.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirst;

impl PathSearch for DepthFirst {
    const NAME: &'static str = "ford-fulkerson";

    fn find_path<NodeId: Id, A: Amount>(
        network: &FlowNetwork<NodeId, A>,
        source: NodeIndex,
        sink: NodeIndex,
    ) -> Option<AugmentingPath> {
        any_augmenting_path(network, source, sink)
    }
}

/// Ford–Fulkerson with depth-first path search. The number of augmentations is bounded by the
/// flow value only, so this is the baseline the other algorithms improve on.
pub type FordFulkerson<NodeId, A> = AugmentingPathSolver<NodeId, A, DepthFirst>;
