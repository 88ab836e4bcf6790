use petgraph::graph::NodeIndex;

use crate::algo::augmenting::{AugmentingPathSolver, PathSearch};
use crate::algo::path::AugmentingPath;
use crate::algo::search::shortest_augmenting_path;
use crate::amount::Amount;
use crate::id::Id;
use crate::network::FlowNetwork;

/// Shortest (fewest arcs) augmenting paths found by breadth-first search.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirst;

impl PathSearch for BreadthFirst {
    const NAME: &'static str = "edmonds-karp";

    fn find_path<NodeId: Id, A: Amount>(
        network: &FlowNetwork<NodeId, A>,
        source: NodeIndex,
        sink: NodeIndex,
    ) -> Option<AugmentingPath> {
        shortest_augmenting_path(network, source, sink)
    }
}

/// Edmonds–Karp: O(V E²) augmenting path algorithm.
pub type EdmondsKarp<NodeId, A> = AugmentingPathSolver<NodeId, A, BreadthFirst>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::MaxFlow;
    use crate::error::Error;

    #[test]
    fn single_arc_takes_one_augmentation() {
        let network = FlowNetwork::from_arcs([("s", "t", 10)]).unwrap();
        let mut solver = EdmondsKarp::new(network, "s", "t").unwrap();

        assert_eq!(solver.compute_max_flow(), Ok(10));
        assert_eq!(solver.stats().augmentations, 1);
        assert_eq!(solver.compute_max_flow(), Ok(0));
        assert_eq!(solver.stats().augmentations, 1);
        assert_eq!(solver.flow_value(), Ok(10));
    }

    #[test]
    fn cancels_flow_through_reverse_arcs() {
        // Once s-a-b-t carries flow, reaching 2 needs the flow on a-b to be pushed back.
        let network = FlowNetwork::from_arcs([
            ('s', 'a', 1),
            ('s', 'c', 1),
            ('a', 'b', 1),
            ('c', 'b', 1),
            ('a', 'd', 1),
            ('b', 't', 1),
            ('d', 't', 1),
        ])
        .unwrap();
        let mut solver = EdmondsKarp::new(network, 's', 't').unwrap();

        assert_eq!(solver.compute_max_flow(), Ok(2));
        assert!(solver.network().check(&'s', &'t').is_ok());
    }

    #[test]
    fn invalid_endpoints_are_rejected() {
        let network = FlowNetwork::from_arcs([(1, 2, 3)]).unwrap();
        assert_eq!(
            EdmondsKarp::new(network.clone(), 1, 9).unwrap_err(),
            Error::MissingNode("9".into())
        );
        assert_eq!(
            EdmondsKarp::new(network, 2, 2).unwrap_err(),
            Error::SourceIsSink
        );
    }
}
