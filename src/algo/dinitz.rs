use petgraph::graph::NodeIndex;

use crate::algo::blocking::BlockingFlowSearch;
use crate::algo::{MaxFlow, Stats};
use crate::amount::Amount;
use crate::error::Error;
use crate::id::Id;
use crate::network::FlowNetwork;

/// Dinitz's blocking flow algorithm, O(V² E).
///
/// Every phase layers the residual network by distance from the source and then saturates it
/// with a blocking flow. The distance of the sink grows strictly from one phase to the next, so
/// there are at most V phases.
#[derive(Clone, Debug)]
pub struct Dinitz<NodeId, A> {
    network: FlowNetwork<NodeId, A>,
    source: NodeIndex,
    sink: NodeIndex,
    search: BlockingFlowSearch,
    stats: Stats,
}

impl<NodeId: Id, A: Amount> Dinitz<NodeId, A> {
    /// Fails with [`Error::MissingNode`] or [`Error::SourceIsSink`] before any flow is pushed.
    pub fn new(
        network: FlowNetwork<NodeId, A>,
        source: NodeId,
        sink: NodeId,
    ) -> Result<Self, Error> {
        let (source, sink) = network.endpoints(&source, &sink)?;
        Ok(Self {
            network,
            source,
            sink,
            search: BlockingFlowSearch::new(),
            stats: Stats::default(),
        })
    }

    fn blocking_flow(&mut self) -> Result<A, Error> {
        let mut pushed = A::zero();
        while let Some(path) = self.search.next_path(&self.network, self.source, self.sink) {
            let bottleneck = path.bottleneck(&self.network);
            path.augment(&mut self.network, bottleneck);
            pushed = pushed
                .checked_add(&bottleneck)
                .ok_or(Error::ArithmeticOverflow)?;
            self.stats.augmentations += 1;
        }
        Ok(pushed)
    }
}

impl<NodeId: Id, A: Amount> MaxFlow for Dinitz<NodeId, A> {
    type NodeId = NodeId;
    type Amount = A;

    fn compute_max_flow(&mut self) -> Result<A, Error> {
        let mut total = A::zero();

        while self.search.layer(&self.network, self.source, self.sink) {
            let pushed = self.blocking_flow()?;
            self.stats.phases += 1;
            log::debug!(
                "dinitz: phase {} at sink distance {:?} pushed {pushed}",
                self.stats.phases,
                self.search.level(self.sink)
            );
            total = total.checked_add(&pushed).ok_or(Error::ArithmeticOverflow)?;
        }

        log::info!(
            "dinitz: max flow {:?} --> {:?} = {total} ({} phases, {} augmentations)",
            self.source(),
            self.sink(),
            self.stats.phases,
            self.stats.augmentations
        );
        Ok(total)
    }

    fn network(&self) -> &FlowNetwork<NodeId, A> {
        &self.network
    }

    fn into_network(self) -> FlowNetwork<NodeId, A> {
        self.network
    }

    fn source(&self) -> NodeId {
        self.network.node_id(self.source)
    }

    fn sink(&self) -> NodeId {
        self.network.node_id(self.sink)
    }

    fn stats(&self) -> Stats {
        self.stats
    }
}
