use core::marker::PhantomData;

use petgraph::graph::NodeIndex;

use crate::algo::path::AugmentingPath;
use crate::algo::{MaxFlow, Stats};
use crate::amount::Amount;
use crate::error::Error;
use crate::id::Id;
use crate::network::FlowNetwork;

/// The strategy used to find a single augmenting path in the residual network.
pub trait PathSearch {
    /// Short name used in log output.
    const NAME: &'static str;

    /// Returns `None` when `sink` can no longer be reached.
    fn find_path<NodeId: Id, A: Amount>(
        network: &FlowNetwork<NodeId, A>,
        source: NodeIndex,
        sink: NodeIndex,
    ) -> Option<AugmentingPath>;
}

/// Repeatedly finds an augmenting path with `S`, pushes its bottleneck along it and stops once
/// the sink is unreachable.
#[derive(Clone, Debug)]
pub struct AugmentingPathSolver<NodeId, A, S> {
    network: FlowNetwork<NodeId, A>,
    source: NodeIndex,
    sink: NodeIndex,
    stats: Stats,
    _strategy: PhantomData<S>,
}

impl<NodeId, A, S> AugmentingPathSolver<NodeId, A, S>
where
    NodeId: Id,
    A: Amount,
    S: PathSearch,
{
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
            stats: Stats::default(),
            _strategy: PhantomData,
        })
    }
}

impl<NodeId, A, S> MaxFlow for AugmentingPathSolver<NodeId, A, S>
where
    NodeId: Id,
    A: Amount,
    S: PathSearch,
{
    type NodeId = NodeId;
    type Amount = A;

    fn compute_max_flow(&mut self) -> Result<A, Error> {
        let mut total = A::zero();

        while let Some(path) = S::find_path(&self.network, self.source, self.sink) {
            let bottleneck = path.bottleneck(&self.network);
            path.augment(&mut self.network, bottleneck);
            total = total
                .checked_add(&bottleneck)
                .ok_or(Error::ArithmeticOverflow)?;

            self.stats.phases += 1;
            self.stats.augmentations += 1;
            log::debug!(
                "{}: path of {} arcs, bottleneck {bottleneck}",
                S::NAME,
                path.len()
            );
        }

        log::info!(
            "{}: max flow {:?} --> {:?} = {total} ({} augmentations)",
            S::NAME,
            self.source(),
            self.sink(),
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
