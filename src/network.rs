use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::{EdgeRef, IntoEdgeReferences, IntoNodeIdentifiers};
use petgraph::Direction;

use crate::algo::search::residual_reachable;
use crate::amount::Amount;
use crate::arc::{ArcId, FlowArc, FlowRecord, RawArc};
use crate::capacity::CapacityAssigner;
use crate::error::Error;
use crate::id::Id;

pub type NodePair<NodeId> = (NodeId, NodeId);

/// A directed flow network whose arcs carry a capacity and the current flow.
///
/// Every arc `(u, v)` has its reversal `(v, u)` present. Reversals that were never supplied by
/// the caller have zero capacity and only become usable once flow is pushed on their twin.
#[derive(Clone, Debug)]
pub struct FlowNetwork<NodeId, A> {
    graph: DiGraph<NodeId, FlowArc<A>>,
    // Map from caller node ids to nodes in `graph`.
    node_map: BTreeMap<NodeId, NodeIndex>,
    // Random access to the arc between two nodes.
    arcs: BTreeMap<NodePair<NodeIndex>, ArcId>,
}

/// The source side of a minimum cut along with the arcs leaving it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinCut<NodeId, A> {
    pub source_side: BTreeSet<NodeId>,
    pub arcs: Vec<NodePair<NodeId>>,
    pub capacity: A,
}

impl<NodeId: Id, A: Amount> Default for FlowNetwork<NodeId, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<NodeId: Id, A: Amount> FlowNetwork<NodeId, A> {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: BTreeMap::new(),
            arcs: BTreeMap::new(),
        }
    }

    /// Builds a network from `(tail, head, capacity)` triples.
    pub fn from_arcs<I>(arcs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (NodeId, NodeId, A)>,
    {
        arcs.into_iter()
            .try_fold(Self::new(), |mut acc, (tail, head, capacity)| {
                acc.add_arc(tail, head, capacity)?;
                Ok(acc)
            })
    }

    /// Builds a network from collaborator-supplied arcs, asking `assigner` for every capacity
    /// that is missing.
    pub fn from_raw_arcs<I, C>(arcs: I, assigner: &mut C) -> Result<Self, Error>
    where
        I: IntoIterator<Item = RawArc<NodeId, A>>,
        C: CapacityAssigner<NodeId, A>,
    {
        arcs.into_iter().try_fold(Self::new(), |mut acc, raw| {
            let capacity = match raw.capacity {
                Some(capacity) => capacity,
                None => assigner.capacity(&raw.tail, &raw.head),
            };
            acc.add_arc(raw.tail, raw.head, capacity)?;
            Ok(acc)
        })
    }

    /// Builds a network from any petgraph graph, with `capacity` mapping each edge to its
    /// capacity. Isolated nodes of `g` are kept.
    pub fn from_graph<G, F>(g: G, mut capacity: F) -> Result<Self, Error>
    where
        G: IntoEdgeReferences<NodeId = NodeId> + IntoNodeIdentifiers,
        F: FnMut(G::EdgeRef) -> A,
    {
        let mut network = Self::new();
        for n in g.node_identifiers() {
            network.add_node(n);
        }
        for e in g.edge_references() {
            network.add_arc(e.source(), e.target(), capacity(e))?;
        }
        Ok(network)
    }

    pub fn add_node(&mut self, id: NodeId) -> NodeIndex {
        match self.node_map.get(&id) {
            Some(&n) => n,
            None => {
                let n = self.graph.add_node(id);
                self.node_map.insert(id, n);
                n
            }
        }
    }

    /// Adds an arc of the given capacity, creating its endpoints if needed.
    ///
    /// Adding an arc that is already present increases its capacity, failing with
    /// [`Error::ArithmeticOverflow`] if the sum does not fit. The zero-capacity reversal is created
    /// alongside when it does not exist yet.
    pub fn add_arc(&mut self, tail: NodeId, head: NodeId, capacity: A) -> Result<ArcId, Error> {
        if tail == head {
            return Err(Error::SelfLoop(format!("{tail:?}")));
        }
        if capacity < A::zero() {
            return Err(Error::NegativeCapacity);
        }

        let u = self.add_node(tail);
        let v = self.add_node(head);

        if let Some(&arc) = self.arcs.get(&(u, v)) {
            let total = self.graph[arc]
                .capacity()
                .checked_add(&capacity)
                .ok_or(Error::ArithmeticOverflow)?;
            self.graph[arc].set_capacity(total);
            return Ok(arc);
        }

        // Arcs are always inserted in pairs, so the reversal is missing as well.
        let arc = self
            .graph
            .add_edge(u, v, FlowArc::new(capacity, EdgeIndex::end()));
        let reverse = self.graph.add_edge(v, u, FlowArc::new(A::zero(), arc));
        self.graph[arc].set_reverse(reverse);
        self.arcs.insert((u, v), arc);
        self.arcs.insert((v, u), reverse);

        Ok(arc)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of arcs, reversals included.
    pub fn arc_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node_map.contains_key(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_weights().copied()
    }

    pub fn index_of(&self, id: &NodeId) -> Result<NodeIndex, Error> {
        self.node_map
            .get(id)
            .copied()
            .ok_or_else(|| Error::MissingNode(format!("{id:?}")))
    }

    pub fn node_id(&self, n: NodeIndex) -> NodeId {
        self.graph[n]
    }

    /// Resolves and validates a (source, sink) pair.
    pub fn endpoints(
        &self,
        source: &NodeId,
        sink: &NodeId,
    ) -> Result<NodePair<NodeIndex>, Error> {
        let s = self.index_of(source)?;
        let t = self.index_of(sink)?;
        if s == t {
            return Err(Error::SourceIsSink);
        }
        Ok((s, t))
    }

    pub fn arc(&self, arc: ArcId) -> &FlowArc<A> {
        &self.graph[arc]
    }

    pub fn arc_between(&self, tail: &NodeId, head: &NodeId) -> Option<ArcId> {
        let u = self.node_map.get(tail)?;
        let v = self.node_map.get(head)?;
        self.arcs.get(&(*u, *v)).copied()
    }

    pub fn tail(&self, arc: ArcId) -> NodeIndex {
        self.graph.raw_edges()[arc.index()].source()
    }

    pub fn head(&self, arc: ArcId) -> NodeIndex {
        self.graph.raw_edges()[arc.index()].target()
    }

    /// Capacity of `(tail, head)`, zero if there is no such arc.
    pub fn capacity(&self, tail: &NodeId, head: &NodeId) -> A {
        self.arc_between(tail, head)
            .map_or_else(A::zero, |arc| self.graph[arc].capacity())
    }

    /// Flow on `(tail, head)`, zero if there is no such arc.
    pub fn flow(&self, tail: &NodeId, head: &NodeId) -> A {
        self.arc_between(tail, head)
            .map_or_else(A::zero, |arc| self.graph[arc].flow())
    }

    /// `capacity(tail, head) - flow(tail, head)`, zero if there is no such arc.
    pub fn residual_capacity(&self, tail: &NodeId, head: &NodeId) -> A {
        self.arc_between(tail, head)
            .map_or_else(A::zero, |arc| self.residual(arc))
    }

    pub fn residual(&self, arc: ArcId) -> A {
        self.graph[arc].residual_capacity()
    }

    /// Heads of all arcs leaving `node`, zero-capacity reversals included.
    pub fn neighbors(&self, node: &NodeId) -> Result<impl Iterator<Item = NodeId> + '_, Error> {
        let u = self.index_of(node)?;
        Ok(self.graph.neighbors(u).map(move |v| self.graph[v]))
    }

    /// Arcs leaving `u` together with their heads.
    pub fn out_arcs(&self, u: NodeIndex) -> impl Iterator<Item = (ArcId, NodeIndex)> + '_ {
        self.graph.edges(u).map(|e| (e.id(), e.target()))
    }

    pub fn first_arc(&self, u: NodeIndex) -> Option<ArcId> {
        self.graph.first_edge(u, Direction::Outgoing)
    }

    /// The arc after `arc` in the outgoing list of its tail.
    pub fn next_arc(&self, arc: ArcId) -> Option<ArcId> {
        self.graph.next_edge(arc, Direction::Outgoing)
    }

    /// Pushes `amount` along `arc`, taking it back from the reversal.
    ///
    /// Panics if `amount` is not positive or exceeds the residual capacity of `arc`.
    pub fn augment(&mut self, arc: ArcId, amount: A) {
        let residual = self.residual(arc);
        assert!(
            amount > A::zero() && amount <= residual,
            "bug: augmenting by {amount} on an arc with residual capacity {residual}"
        );

        let reverse = self.graph[arc].reverse();
        self.graph[arc].add_flow(amount);
        self.graph[reverse].add_flow(-amount);
    }

    /// Removes all flow from the network.
    pub fn reset(&mut self) {
        self.graph
            .edge_weights_mut()
            .for_each(|arc| arc.clear_flow());
    }

    /// Flow leaving `u` minus flow entering it.
    pub fn net_outflow(&self, u: NodeIndex) -> Result<A, Error> {
        self.graph.edges(u).try_fold(A::zero(), |acc, e| {
            acc.checked_add(&e.weight().flow())
                .ok_or(Error::ArithmeticOverflow)
        })
    }

    /// The value of the current flow, i.e. the net outflow of `source`.
    pub fn flow_value(&self, source: &NodeId) -> Result<A, Error> {
        self.net_outflow(self.index_of(source)?)
    }

    /// Maps ordered pairs of nodes to the flow between them. Only pairs with a strictly positive
    /// flow are present.
    pub fn positive_flows(&self) -> BTreeMap<NodePair<NodeId>, A> {
        self.graph
            .edge_references()
            .filter(|e| e.weight().flow() > A::zero())
            .map(|e| ((self.graph[e.source()], self.graph[e.target()]), e.weight().flow()))
            .collect()
    }

    pub fn flow_records(&self) -> Vec<FlowRecord<NodeId, A>> {
        self.positive_flows()
            .into_iter()
            .map(|((tail, head), flow)| FlowRecord { tail, head, flow })
            .collect()
    }

    /// Finds one path from `source` to `sink` along arcs carrying positive flow, fewest arcs
    /// first. Returns `None` when no flow reaches `sink`.
    pub fn flow_path(&self, source: &NodeId, sink: &NodeId) -> Result<Option<Vec<NodeId>>, Error> {
        let (s, t) = self.endpoints(source, sink)?;

        let mut pred: Vec<Option<NodeIndex>> = vec![None; self.graph.node_count()];
        let mut visited = vec![false; self.graph.node_count()];
        let mut queue = VecDeque::from([s]);
        visited[s.index()] = true;

        'search: while let Some(u) = queue.pop_front() {
            for e in self.graph.edges(u) {
                let v = e.target();
                if !visited[v.index()] && e.weight().flow() > A::zero() {
                    visited[v.index()] = true;
                    pred[v.index()] = Some(u);
                    if v == t {
                        break 'search;
                    }
                    queue.push_back(v);
                }
            }
        }

        if !visited[t.index()] {
            return Ok(None);
        }

        let mut path = vec![self.graph[t]];
        let mut v = t;
        while let Some(u) = pred[v.index()] {
            path.push(self.graph[u]);
            v = u;
        }
        path.reverse();
        Ok(Some(path))
    }

    /// The cut made of all nodes still reachable from `source` in the residual network. Once a
    /// maximum flow has been computed its capacity equals the flow value.
    pub fn min_cut(&self, source: &NodeId) -> Result<MinCut<NodeId, A>, Error> {
        let s = self.index_of(source)?;
        let reachable = residual_reachable(self, s);

        let mut arcs = Vec::new();
        let mut capacity = A::zero();
        for e in self.graph.edge_references() {
            if reachable[e.source().index()]
                && !reachable[e.target().index()]
                && e.weight().capacity() > A::zero()
            {
                arcs.push((self.graph[e.source()], self.graph[e.target()]));
                capacity = capacity
                    .checked_add(&e.weight().capacity())
                    .ok_or(Error::ArithmeticOverflow)?;
            }
        }

        let source_side = self
            .graph
            .node_indices()
            .filter(|n| reachable[n.index()])
            .map(|n| self.graph[n])
            .collect();

        Ok(MinCut {
            source_side,
            arcs,
            capacity,
        })
    }

    /// Verifies antisymmetry, capacity bounds and flow conservation.
    pub fn check(&self, source: &NodeId, sink: &NodeId) -> Result<(), Error> {
        let (s, t) = self.endpoints(source, sink)?;

        for e in self.graph.edge_references() {
            let arc = e.weight();
            let reverse = &self.graph[arc.reverse()];
            let (u, v) = (self.graph[e.source()], self.graph[e.target()]);
            if arc.flow() != -reverse.flow() {
                return Err(Error::InvariantViolated(format!(
                    "flow({u:?}, {v:?}) = {} is not the negation of flow({v:?}, {u:?}) = {}",
                    arc.flow(),
                    reverse.flow()
                )));
            }
            if arc.flow() > arc.capacity() {
                return Err(Error::InvariantViolated(format!(
                    "flow({u:?}, {v:?}) = {} exceeds capacity {}",
                    arc.flow(),
                    arc.capacity()
                )));
            }
        }

        for n in self.graph.node_indices().filter(|&n| n != s && n != t) {
            let excess = self.net_outflow(n)?;
            if excess != A::zero() {
                return Err(Error::InvariantViolated(format!(
                    "flow is not conserved at {:?}, net outflow {excess}",
                    self.graph[n]
                )));
            }
        }

        let (out_s, out_t) = (self.net_outflow(s)?, self.net_outflow(t)?);
        if out_s != -out_t {
            return Err(Error::InvariantViolated(format!(
                "source sends {out_s} but sink receives {}",
                -out_t
            )));
        }

        Ok(())
    }
}
