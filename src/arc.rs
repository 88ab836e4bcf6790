use petgraph::graph::EdgeIndex;
use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// Index of an arc inside a [`FlowNetwork`](crate::FlowNetwork).
pub type ArcId = EdgeIndex<u32>;

/// A directed arc of the flow network together with its current flow.
///
/// Every arc has a reverse twin (possibly of zero capacity). The flow on the twin is always the
/// negation of the flow on this arc.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowArc<A> {
    capacity: A,
    flow: A,
    reverse: ArcId,
}

impl<A: Amount> FlowArc<A> {
    pub(crate) fn new(capacity: A, reverse: ArcId) -> Self {
        Self {
            capacity,
            flow: A::zero(),
            reverse,
        }
    }

    pub fn capacity(&self) -> A {
        self.capacity
    }

    pub fn flow(&self) -> A {
        self.flow
    }

    /// The index of the paired arc (head, tail).
    pub fn reverse(&self) -> ArcId {
        self.reverse
    }

    pub fn residual_capacity(&self) -> A {
        self.capacity - self.flow
    }

    pub(crate) fn set_capacity(&mut self, capacity: A) {
        self.capacity = capacity;
    }

    pub(crate) fn set_reverse(&mut self, reverse: ArcId) {
        self.reverse = reverse;
    }

    pub(crate) fn add_flow(&mut self, amount: A) {
        self.flow += amount;
    }

    pub(crate) fn clear_flow(&mut self) {
        self.flow = A::zero();
    }
}

/// An arc as supplied by the graph collaborator, e.g. one row of an input CSV.
///
/// A missing capacity is filled in by a [`CapacityAssigner`](crate::CapacityAssigner).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct RawArc<NodeId, A> {
    pub tail: NodeId,
    pub head: NodeId,
    #[serde(default)]
    pub capacity: Option<A>,
}

impl<NodeId, A> RawArc<NodeId, A> {
    pub fn new(tail: NodeId, head: NodeId, capacity: A) -> Self {
        Self {
            tail,
            head,
            capacity: Some(capacity),
        }
    }
}

/// An arc carrying positive flow in the final solution.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FlowRecord<NodeId, A> {
    pub tail: NodeId,
    pub head: NodeId,
    pub flow: A,
}
