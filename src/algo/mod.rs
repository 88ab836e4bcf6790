use core::fmt;
use core::str::FromStr;

use crate::amount::Amount;
use crate::error::Error;
use crate::id::Id;
use crate::network::FlowNetwork;

pub mod augmenting;
pub mod blocking;
pub mod dinitz;
pub mod edmonds_karp;
pub mod ford_fulkerson;
pub mod path;
pub mod search;

pub use dinitz::Dinitz;
pub use edmonds_karp::EdmondsKarp;
pub use ford_fulkerson::FordFulkerson;

/// Counters collected while computing a flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Layering rounds (Dinitz) or successful path searches (augmenting path solvers).
    pub phases: usize,
    /// Augmenting paths pushed.
    pub augmentations: usize,
}

/// A maximum flow algorithm bound to a network and a (source, sink) pair.
pub trait MaxFlow {
    type NodeId: Id;
    type Amount: Amount;

    /// Augments until no augmenting path remains and returns the flow added by this call.
    ///
    /// Once the flow is maximal, calling this again adds (and returns) zero.
    ///
    /// Fails with [`Error::ArithmeticOverflow`] when the flow value does not fit in the amount
    /// type. The flow pushed up to that point stays in the network. It still respects capacities
    /// and antisymmetry, but its value cannot be represented, so `flow_value` and
    /// [`FlowNetwork::check`] report the same error. [`FlowNetwork::reset`] clears it.
    fn compute_max_flow(&mut self) -> Result<Self::Amount, Error>;

    fn network(&self) -> &FlowNetwork<Self::NodeId, Self::Amount>;

    fn into_network(self) -> FlowNetwork<Self::NodeId, Self::Amount>
    where
        Self: Sized;

    fn source(&self) -> Self::NodeId;

    fn sink(&self) -> Self::NodeId;

    fn stats(&self) -> Stats;

    /// The value of the flow currently held by the network.
    fn flow_value(&self) -> Result<Self::Amount, Error> {
        self.network().flow_value(&self.source())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Algorithm {
    Dinitz,
    EdmondsKarp,
    FordFulkerson,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Dinitz,
        Algorithm::EdmondsKarp,
        Algorithm::FordFulkerson,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dinitz => "dinitz",
            Algorithm::EdmondsKarp => "edmonds-karp",
            Algorithm::FordFulkerson => "ford-fulkerson",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.name() == s)
            .ok_or(())
    }
}

/// Runs `algorithm` on `network` and returns the maximum flow value together with the network
/// holding the flow.
pub fn max_flow<NodeId, A>(
    network: FlowNetwork<NodeId, A>,
    source: NodeId,
    sink: NodeId,
    algorithm: Algorithm,
) -> Result<(A, FlowNetwork<NodeId, A>), Error>
where
    NodeId: Id,
    A: Amount,
{
    fn run<M: MaxFlow>(
        mut solver: M,
    ) -> Result<(M::Amount, FlowNetwork<M::NodeId, M::Amount>), Error> {
        let value = solver.compute_max_flow()?;
        Ok((value, solver.into_network()))
    }

    match algorithm {
        Algorithm::Dinitz => run(Dinitz::new(network, source, sink)?),
        Algorithm::EdmondsKarp => run(EdmondsKarp::new(network, source, sink)?),
        Algorithm::FordFulkerson => run(FordFulkerson::new(network, source, sink)?),
    }
}
