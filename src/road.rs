use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::capacity::CapacityAssigner;
use crate::error::Error;
use crate::id::Id;
use crate::network::FlowNetwork;

/// An undirected road segment between two intersections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct RoadSegment<NodeId> {
    pub from: NodeId,
    pub to: NodeId,
}

impl<NodeId> RoadSegment<NodeId> {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}

/// Turns every road segment into two opposing arcs whose capacities are drawn independently
/// from `assigner`. Segments that loop back to the same intersection cannot carry flow and are
/// skipped.
pub fn build_road_network<NodeId, A, I, C>(
    segments: I,
    assigner: &mut C,
) -> Result<FlowNetwork<NodeId, A>, Error>
where
    NodeId: Id,
    A: Amount,
    I: IntoIterator<Item = RoadSegment<NodeId>>,
    C: CapacityAssigner<NodeId, A>,
{
    let mut network = FlowNetwork::new();
    for RoadSegment { from, to } in segments {
        if from == to {
            log::debug!("skipping road segment looping at {from:?}");
            network.add_node(from);
            continue;
        }
        let forward = assigner.capacity(&from, &to);
        let backward = assigner.capacity(&to, &from);
        network.add_arc(from, to, forward)?;
        network.add_arc(to, from, backward)?;
    }

    log::debug!(
        "road network: {} intersections, {} arcs",
        network.node_count(),
        network.arc_count()
    );
    Ok(network)
}
