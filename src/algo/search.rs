//! Searches over the residual network. None of them mutate the network.

use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use petgraph::graph::NodeIndex;

use crate::algo::path::AugmentingPath;
use crate::amount::Amount;
use crate::arc::ArcId;
use crate::id::Id;
use crate::network::FlowNetwork;

/// Breadth-first search for an augmenting path with the fewest arcs.
///
/// Stops as soon as `sink` is discovered. Returns `None` if `sink` is unreachable.
pub fn shortest_augmenting_path<NodeId: Id, A: Amount>(
    network: &FlowNetwork<NodeId, A>,
    source: NodeIndex,
    sink: NodeIndex,
) -> Option<AugmentingPath> {
    let mut pred: Vec<Option<ArcId>> = vec![None; network.node_count()];
    let mut visited = vec![false; network.node_count()];
    let mut queue = VecDeque::from([source]);
    visited[source.index()] = true;

    while let Some(u) = queue.pop_front() {
        for (arc, v) in network.out_arcs(u) {
            if !visited[v.index()] && network.residual(arc) > A::zero() {
                visited[v.index()] = true;
                pred[v.index()] = Some(arc);
                if v == sink {
                    return AugmentingPath::from_predecessors(network, &pred, source, sink);
                }
                queue.push_back(v);
            }
        }
    }

    None
}

/// Depth-first search for any augmenting path. Uses an explicit stack, so deep networks do not
/// exhaust the call stack.
///
/// Returns `None` if `sink` is unreachable.
pub fn any_augmenting_path<NodeId: Id, A: Amount>(
    network: &FlowNetwork<NodeId, A>,
    source: NodeIndex,
    sink: NodeIndex,
) -> Option<AugmentingPath> {
    let mut pred: Vec<Option<ArcId>> = vec![None; network.node_count()];
    let mut visited = vec![false; network.node_count()];
    let mut stack = vec![source];
    visited[source.index()] = true;

    while let Some(u) = stack.pop() {
        for (arc, v) in network.out_arcs(u) {
            if !visited[v.index()] && network.residual(arc) > A::zero() {
                visited[v.index()] = true;
                pred[v.index()] = Some(arc);
                if v == sink {
                    return AugmentingPath::from_predecessors(network, &pred, source, sink);
                }
                stack.push(v);
            }
        }
    }

    None
}

/// Labels every node with its distance from `source` over arcs with positive residual capacity.
/// Unreached nodes get `None`.
pub fn levels<NodeId: Id, A: Amount>(
    network: &FlowNetwork<NodeId, A>,
    source: NodeIndex,
) -> Vec<Option<usize>> {
    let mut level = vec![None; network.node_count()];
    let mut queue = VecDeque::from([source]);
    level[source.index()] = Some(0);

    while let Some(u) = queue.pop_front() {
        let next = level[u.index()].map(|l| l + 1);
        for (arc, v) in network.out_arcs(u) {
            if level[v.index()].is_none() && network.residual(arc) > A::zero() {
                level[v.index()] = next;
                queue.push_back(v);
            }
        }
    }

    level
}

/// Marks the nodes reachable from `source` over arcs with positive residual capacity.
pub fn residual_reachable<NodeId: Id, A: Amount>(
    network: &FlowNetwork<NodeId, A>,
    source: NodeIndex,
) -> Vec<bool> {
    levels(network, source)
        .into_iter()
        .map(|level| level.is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> FlowNetwork<char, i32> {
        FlowNetwork::from_arcs([
            ('s', 'a', 3),
            ('s', 'b', 2),
            ('a', 't', 2),
            ('b', 't', 3),
            ('a', 'b', 1),
        ])
        .unwrap()
    }

    fn nodes_on(network: &FlowNetwork<char, i32>, path: &AugmentingPath) -> Vec<char> {
        let mut nodes = vec![network.node_id(network.tail(path.arcs()[0]))];
        nodes.extend(path.arcs().iter().map(|&arc| network.node_id(network.head(arc))));
        nodes
    }

    #[test]
    fn breadth_first_finds_a_shortest_path() {
        let network = diamond();
        let (s, t) = network.endpoints(&'s', &'t').unwrap();

        let path = shortest_augmenting_path(&network, s, t).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(nodes_on(&network, &path)[0], 's');
        assert_eq!(nodes_on(&network, &path)[2], 't');
        assert_eq!(path.bottleneck(&network), 2);
    }

    #[test]
    fn depth_first_finds_a_valid_path() {
        let network = diamond();
        let (s, t) = network.endpoints(&'s', &'t').unwrap();

        let path = any_augmenting_path(&network, s, t).unwrap();
        let nodes = nodes_on(&network, &path);
        assert_eq!(nodes.first(), Some(&'s'));
        assert_eq!(nodes.last(), Some(&'t'));
        assert!(nodes
            .windows(2)
            .all(|w| network.residual_capacity(&w[0], &w[1]) > 0));
    }

    #[test]
    fn saturated_arcs_are_not_followed() {
        let mut network = FlowNetwork::from_arcs([('s', 'a', 1), ('a', 't', 1)]).unwrap();
        let (s, t) = network.endpoints(&'s', &'t').unwrap();

        let path = shortest_augmenting_path(&network, s, t).unwrap();
        let amount = path.bottleneck(&network);
        path.augment(&mut network, amount);

        assert_eq!(shortest_augmenting_path(&network, s, t), None);
        assert_eq!(any_augmenting_path(&network, s, t), None);
    }

    #[test]
    fn levels_follow_residual_arcs_only() {
        let mut network = diamond();
        network.add_node('x');
        let s = network.index_of(&'s').unwrap();

        let level = levels(&network, s);
        let level_of = |id: char| level[network.index_of(&id).unwrap().index()];
        assert_eq!(level_of('s'), Some(0));
        assert_eq!(level_of('a'), Some(1));
        assert_eq!(level_of('b'), Some(1));
        assert_eq!(level_of('t'), Some(2));
        assert_eq!(level_of('x'), None);
    }
}
