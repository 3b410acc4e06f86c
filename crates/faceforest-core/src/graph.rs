//! Mutable planar graph model backed by a `petgraph` stable arena.
//!
//! Vertex records live in a [`StableUnGraph`]: slots are never compacted
//! during a discovery, so a `NodeIndex` is a stable handle for the lifetime
//! of the extraction session, and records cloned during wedge detachment
//! occupy fresh slots while sharing the original's name and position. An
//! undirected petgraph edge is a single record serving both directions, which
//! keeps adjacency symmetric under every mutation: removing it removes both
//! sides atomically.

pub mod components;

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableUnGraph};

use crate::geometry::Point;

/// A vertex record.
///
/// `name` is the index of the vertex in the caller's position array and is
/// the identity used in emitted cycles. It is not unique within the arena:
/// clones made during wedge detachment share the name of their original.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Original index into the caller-supplied position array.
    pub name: usize,
    /// Fixed position of the vertex.
    pub position: Point,
}

/// The mutable vertex store of one extraction session.
///
/// Grows monotonically: records are added at construction and by
/// [`FaceGraph::clone_vertex`], never removed. Edges are consumed as faces
/// and filaments are extracted. Not reusable across discoveries.
#[derive(Debug)]
pub struct FaceGraph {
    arena: StableUnGraph<Vertex, ()>,
    store: Vec<NodeIndex>,
}

impl FaceGraph {
    /// Builds the graph for a validated input.
    ///
    /// One record is created per distinct name that appears in at least one
    /// edge; named positions no edge touches never become records. Adjacency
    /// has set semantics: an edge supplied in both directions collapses to a
    /// single undirected edge.
    pub fn build(positions: &[Point], edges: &[(usize, usize)]) -> Self {
        let mut arena = StableUnGraph::with_capacity(positions.len(), edges.len());
        let mut store = Vec::new();
        let mut by_name: HashMap<usize, NodeIndex> = HashMap::with_capacity(positions.len());

        let mut intern = |name: usize| {
            *by_name.entry(name).or_insert_with(|| {
                let id = arena.add_node(Vertex {
                    name,
                    position: positions[name],
                });
                store.push(id);
                id
            })
        };

        let endpoints: Vec<(NodeIndex, NodeIndex)> = edges
            .iter()
            .map(|&(a, b)| (intern(a), intern(b)))
            .collect();
        for (a, b) in endpoints {
            arena.update_edge(a, b, ());
        }

        Self { arena, store }
    }

    /// The initial records plus any clones, in creation order.
    pub fn store(&self) -> &[NodeIndex] {
        &self.store
    }

    /// The vertex's original name.
    pub fn name(&self, id: NodeIndex) -> usize {
        self.arena[id].name
    }

    /// The vertex's position.
    pub fn position(&self, id: NodeIndex) -> Point {
        self.arena[id].position
    }

    /// Number of edges currently incident on `id`.
    pub fn degree(&self, id: NodeIndex) -> usize {
        self.arena.neighbors(id).count()
    }

    /// Iterates the vertices adjacent to `id`.
    pub fn neighbors(&self, id: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.arena.neighbors(id)
    }

    /// The first adjacent vertex of `id`, if any.
    pub fn first_neighbor(&self, id: NodeIndex) -> Option<NodeIndex> {
        self.arena.neighbors(id).next()
    }

    /// Inserts the undirected edge `(a, b)` if it is not already present.
    pub fn add_edge(&mut self, a: NodeIndex, b: NodeIndex) {
        self.arena.update_edge(a, b, ());
    }

    /// Removes the undirected edge between `a` and `b`.
    ///
    /// Returns `false` if no such edge exists.
    pub fn remove_edge_between(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        match self.arena.find_edge(a, b) {
            Some(edge) => self.arena.remove_edge(edge).is_some(),
            None => false,
        }
    }

    /// Clones `id` into a fresh record with the same name and position and
    /// no adjacency. The clone is appended to the store.
    pub fn clone_vertex(&mut self, id: NodeIndex) -> NodeIndex {
        let record = self.arena[id].clone();
        let clone = self.arena.add_node(record);
        self.store.push(clone);
        clone
    }

    /// Number of live edges in the whole graph.
    pub fn edge_count(&self) -> usize {
        self.arena.edge_count()
    }

    /// Number of vertex records in the arena, clones included.
    pub fn vertex_count(&self) -> usize {
        self.arena.node_count()
    }
}
