/*!
# Graph Types

This module defines the graph type the detection pipeline runs on. `Graph` is
a wrapper around petgraph's `StableGraph`, fixed to undirected edges with
`f64` weights. Node attributes are the opaque vertex labels (protein
accessions in the typical deployment); any totally ordered label type works.

All tie-breaking and floating-point summation in the crate is driven by the
ascending order of labels, so `Graph` additionally exposes `sorted_nodes` and
the crate-internal `NodeOrder` ranking built from it.

# Examples

```rust
use glod::core::types::Graph;

let mut g = Graph::<&str>::new();
let a = g.add_node("P04637");
let b = g.add_node("P38398");
g.add_link(a, b);

assert_eq!(g.node_count(), 2);
assert_eq!(g.edge_weight_between(a, b), Some(1.0));
```
*/

use petgraph::Undirected;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::prelude::EdgeRef;
use petgraph::stable_graph::StableGraph as PetGraph;
use petgraph::visit::{IntoEdgeReferences, IntoNodeReferences};
use std::collections::{HashMap, HashSet};

/// Wrapper for `NodeIndex` that provides additional functionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) NodeIndex);

impl NodeId {
    /// Returns the numeric part of the node's index.
    pub fn index(&self) -> usize {
        self.0.index()
    }

    /// Creates a new `NodeId` from a `NodeIndex`.
    pub(crate) fn new(index: NodeIndex) -> Self {
        Self(index)
    }
}

/// Wrapper for `EdgeIndex` that provides additional functionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(pub(crate) EdgeIndex);

impl EdgeId {
    /// Returns the numeric part of the edge's index.
    pub fn index(&self) -> usize {
        self.0.index()
    }

    /// Creates a new `EdgeId` from an `EdgeIndex`.
    pub(crate) fn new(index: EdgeIndex) -> Self {
        Self(index)
    }
}

/// Undirected simple graph with `f64` edge weights.
///
/// Generic parameter `A` is the node label type. Unweighted edges are stored
/// with weight 1.0 via [`Graph::add_link`].
#[derive(Debug, Clone)]
pub struct Graph<A> {
    inner: PetGraph<A, f64, Undirected>,
}

impl<A> Default for Graph<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Graph<A> {
    /// Creates a new empty `Graph`.
    pub fn new() -> Self {
        Self {
            // StableGraph prevents node index recycling.
            inner: PetGraph::with_capacity(0, 0),
        }
    }

    /// Creates a new graph with pre-allocated capacity for nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            inner: PetGraph::with_capacity(nodes, edges),
        }
    }

    /// Returns a builder for constructing a graph with a fluent API.
    pub fn builder() -> GraphBuilder<A> {
        GraphBuilder::new()
    }

    /// Returns true if the graph contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Adds a node with the specified label to the graph.
    pub fn add_node(&mut self, attr: A) -> NodeId {
        NodeId::new(self.inner.add_node(attr))
    }

    /// Adds an edge with the given weight between two nodes.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: f64) -> EdgeId {
        EdgeId::new(self.inner.add_edge(source.0, target.0, weight))
    }

    /// Adds an unweighted edge (stored with weight 1.0) between two nodes.
    pub fn add_link(&mut self, source: NodeId, target: NodeId) -> EdgeId {
        self.add_edge(source, target, 1.0)
    }

    /// Returns the degree of a node (number of incident edges).
    pub fn degree(&self, node: NodeId) -> usize {
        self.inner.edges(node.0).count()
    }

    /// Returns true if there is an edge between the two nodes.
    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.inner.find_edge(a.0, b.0).is_some()
    }

    /// Returns the weight of the edge between the two nodes, if one exists.
    pub fn edge_weight_between(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.inner
            .find_edge(a.0, b.0)
            .and_then(|e| self.inner.edge_weight(e))
            .copied()
    }

    /// Returns an iterator over the neighbors of a node.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.inner.neighbors(node.0).map(NodeId::new)
    }

    /// Returns an iterator over the edges incident to a node, as
    /// (neighbor, weight) pairs.
    pub fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.inner.edges(node.0).map(move |e| {
            let other = if e.source() == node.0 {
                e.target()
            } else {
                e.source()
            };
            (NodeId::new(other), *e.weight())
        })
    }

    /// Returns the 2-hop neighborhood of a node: the union of the
    /// neighborhoods of its neighbors, duplicates collapsed. The node itself
    /// is part of the result whenever it has at least one edge.
    pub fn two_hop(&self, node: NodeId) -> HashSet<NodeId> {
        let mut hood = HashSet::new();
        for u in self.inner.neighbors(node.0) {
            hood.extend(self.inner.neighbors(u).map(NodeId::new));
        }
        hood
    }

    /// Returns a reference to the label of a node.
    pub fn node_attr(&self, node: NodeId) -> Option<&A> {
        self.inner.node_weight(node.0)
    }

    /// Returns an iterator over all nodes and their labels.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &A)> + '_ {
        self.inner
            .node_references()
            .map(|(idx, attr)| (NodeId::new(idx), attr))
    }

    /// Returns an iterator over all edges and their weights.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, &f64)> + '_ {
        self.inner.edge_references().map(|edge| {
            (
                NodeId::new(edge.source()),
                NodeId::new(edge.target()),
                edge.weight(),
            )
        })
    }

    /// Returns an iterator over all node IDs.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.inner.node_indices().map(NodeId::new)
    }
}

impl<A: Ord> Graph<A> {
    /// Returns all node IDs in ascending label order.
    ///
    /// This is the canonical iteration order of the crate: every phase of the
    /// detection pipeline and every quality metric visits nodes in this
    /// order, so results do not depend on insertion order.
    pub fn sorted_nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.node_ids().collect();
        nodes.sort_by(|a, b| {
            self.node_attr(*a)
                .cmp(&self.node_attr(*b))
                .then_with(|| a.index().cmp(&b.index()))
        });
        nodes
    }
}

/// Ascending label ranking over a graph's node set.
///
/// Built once per phase or metric invocation and used for every tie-break
/// ("smallest id wins") and every order-sensitive floating-point sum.
pub(crate) struct NodeOrder {
    sorted: Vec<NodeId>,
    rank: NodeMap<usize>,
}

impl NodeOrder {
    pub(crate) fn of<A: Ord>(graph: &Graph<A>) -> Self {
        let sorted = graph.sorted_nodes();
        let rank = sorted.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        Self { sorted, rank }
    }

    /// Rank of a node in ascending label order.
    pub(crate) fn rank(&self, node: NodeId) -> usize {
        self.rank[&node]
    }

    /// All nodes in ascending label order.
    pub(crate) fn nodes(&self) -> &[NodeId] {
        &self.sorted
    }

    /// Sorts the given nodes into ascending label order.
    pub(crate) fn sort(&self, nodes: impl IntoIterator<Item = NodeId>) -> Vec<NodeId> {
        let mut out: Vec<NodeId> = nodes.into_iter().collect();
        out.sort_by_key(|v| self.rank(*v));
        out
    }
}

/// type alias for [`HashMap`] that map [`NodeId`] to `T`
pub type NodeMap<T> = HashMap<NodeId, T>;

/// Builder for constructing graphs with a fluent API.
///
/// # Example
///
/// ```rust
/// use glod::core::types::Graph;
///
/// let graph = Graph::builder()
///     .add_node("a")
///     .add_node("b")
///     .add_link(0, 1)
///     .build();
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
pub struct GraphBuilder<A> {
    nodes: Vec<A>,
    edges: Vec<(usize, usize, f64)>,
}

impl<A> Default for GraphBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> GraphBuilder<A> {
    /// Creates a new `GraphBuilder`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Adds a node to the builder.
    pub fn add_node(mut self, attr: A) -> Self {
        self.nodes.push(attr);
        self
    }

    /// Adds a weighted edge (by node position) to the builder.
    pub fn add_edge(mut self, source: usize, target: usize, weight: f64) -> Self {
        self.edges.push((source, target, weight));
        self
    }

    /// Adds an unweighted edge (by node position) to the builder.
    pub fn add_link(self, source: usize, target: usize) -> Self {
        self.add_edge(source, target, 1.0)
    }

    /// Consumes the builder and constructs the graph.
    pub fn build(self) -> Graph<A> {
        let mut graph = Graph::with_capacity(self.nodes.len(), self.edges.len());

        let node_ids: Vec<NodeId> = self
            .nodes
            .into_iter()
            .map(|attr| graph.add_node(attr))
            .collect();

        for (source, target, weight) in self.edges {
            graph.add_edge(node_ids[source], node_ids[target], weight);
        }

        graph
    }
}
