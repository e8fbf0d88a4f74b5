//! In-memory adjacency table
//!
//! Vertices live in an arena of adjacency records, located through a hash
//! index keyed by vertex id. Edges live once in a separate arena; each record
//! holds the handles of its incoming and outgoing edges, so an edge `s -> t`
//! is listed exactly once in `s`'s out-list and once in `t`'s in-list and both
//! lists resolve to the same stored edge.
//!
//! The table is append-only and single-owner. Hosts that share a graph across
//! threads must serialize access themselves.

use super::edge::Edge;
use super::element::{GraphElement, Summary};
use super::property::{PropertyError, PropertyStore};
use super::types::{EdgeId, VertexId};
use super::vertex::Vertex;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Vertex {0} already exists")]
    DuplicateVertex(VertexId),

    #[error("Vertex {0} not found")]
    UnknownVertex(VertexId),

    #[error("Edge {0} not found")]
    UnknownEdge(EdgeId),

    #[error("No vertex id left after {0}")]
    IdSpaceExhausted(VertexId),

    #[error(transparent)]
    Property(#[from] PropertyError),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Per-vertex record: the vertex plus its ordered in/out edge handles
#[derive(Debug, Clone)]
pub struct AdjacencyRecord {
    vertex: Vertex,
    in_edges: Vec<EdgeId>,
    out_edges: Vec<EdgeId>,
}

impl AdjacencyRecord {
    fn new(vertex: Vertex) -> Self {
        AdjacencyRecord {
            vertex,
            in_edges: Vec::new(),
            out_edges: Vec::new(),
        }
    }

    pub fn vertex(&self) -> &Vertex {
        &self.vertex
    }

    /// Handles of edges whose target is this vertex, in insertion order
    pub fn in_edges(&self) -> &[EdgeId] {
        &self.in_edges
    }

    /// Handles of edges whose source is this vertex, in insertion order
    pub fn out_edges(&self) -> &[EdgeId] {
        &self.out_edges
    }
}

/// Aggregate shape of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphStatistics {
    pub num_vertices: usize,
    pub num_edges: usize,
    pub max_in_degree: usize,
    pub max_out_degree: usize,
    pub self_loops: usize,
}

/// Directed graph with per-element properties
///
/// Owns every vertex and edge inserted into it. Query results borrow from the
/// graph; use [`in_edge_ids`](Graph::in_edge_ids) /
/// [`out_edge_ids`](Graph::out_edge_ids) for snapshots that outlive a borrow.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Adjacency records in insertion order
    records: Vec<AdjacencyRecord>,

    /// Vertex id -> position in `records`
    index: FxHashMap<VertexId, usize>,

    /// Edge arena, indexed by `EdgeId`
    edges: Vec<Edge>,

    /// Largest vertex id inserted so far
    max_id: Option<VertexId>,

    /// Graph-level metadata
    properties: PropertyStore,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================
    // Insertion
    // ============================================================

    /// Insert a vertex with empty in/out edge lists
    ///
    /// Fails with [`GraphError::DuplicateVertex`] if the id is taken, leaving
    /// the graph unchanged.
    pub fn add_vertex(&mut self, vertex: Vertex) -> GraphResult<VertexId> {
        let id = vertex.id();
        if self.index.contains_key(&id) {
            debug!("Rejected duplicate vertex {}", id);
            return Err(GraphError::DuplicateVertex(id));
        }

        self.index.insert(id, self.records.len());
        self.records.push(AdjacencyRecord::new(vertex));
        if self.max_id.map_or(true, |max| id > max) {
            self.max_id = Some(id);
        }

        debug!("Added vertex {}", id);
        Ok(id)
    }

    /// Insert vertices in order
    ///
    /// Partial application on failure: when item k fails, items before k stay
    /// inserted and the rest are not attempted.
    pub fn add_vertices<I>(&mut self, vertices: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = Vertex>,
    {
        for vertex in vertices {
            self.add_vertex(vertex)?;
        }
        Ok(())
    }

    /// Allocate [`unused_id`](Graph::unused_id) and insert a vertex under it
    /// in one step
    pub fn add_vertex_with_fresh_id(&mut self, properties: PropertyStore) -> GraphResult<VertexId> {
        let id = self.unused_id()?;
        self.add_vertex(Vertex::new_with_properties(id, properties))
    }

    /// Insert a directed edge
    ///
    /// Appends the edge to the target's in-list and the source's out-list.
    /// Fails with [`GraphError::UnknownVertex`] if either endpoint is absent,
    /// leaving the graph unchanged.
    pub fn add_edge(&mut self, edge: Edge) -> GraphResult<EdgeId> {
        let source = self.position(edge.source())?;
        let target = self.position(edge.target())?;

        let edge_id = EdgeId::new(self.edges.len() as u64);
        self.records[source].out_edges.push(edge_id);
        self.records[target].in_edges.push(edge_id);

        debug!("Added edge {} -> {} as {}", edge.source(), edge.target(), edge_id);
        self.edges.push(edge);
        Ok(edge_id)
    }

    /// Insert edges in order, with the same partial-application rule as
    /// [`add_vertices`](Graph::add_vertices)
    pub fn add_edges<I>(&mut self, edges: I) -> GraphResult<Vec<EdgeId>>
    where
        I: IntoIterator<Item = Edge>,
    {
        edges.into_iter().map(|edge| self.add_edge(edge)).collect()
    }

    // ============================================================
    // Lookup
    // ============================================================

    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn get_vertex(&self, id: VertexId) -> GraphResult<&Vertex> {
        Ok(&self.record(id)?.vertex)
    }

    /// Mutable access for in-place property updates; the id cannot change
    pub fn get_vertex_mut(&mut self, id: VertexId) -> GraphResult<&mut Vertex> {
        let idx = self.position(id)?;
        Ok(&mut self.records[idx].vertex)
    }

    /// Full adjacency record for a vertex
    pub fn get_adjacency(&self, id: VertexId) -> GraphResult<&AdjacencyRecord> {
        self.record(id)
    }

    pub fn get_edge(&self, id: EdgeId) -> GraphResult<&Edge> {
        self.edges.get(id.index()).ok_or(GraphError::UnknownEdge(id))
    }

    /// Mutable access to a stored edge; changes are seen from both endpoints
    pub fn get_edge_mut(&mut self, id: EdgeId) -> GraphResult<&mut Edge> {
        self.edges.get_mut(id.index()).ok_or(GraphError::UnknownEdge(id))
    }

    // ============================================================
    // Adjacency queries
    // ============================================================

    /// Snapshot of incoming edge handles
    pub fn in_edge_ids(&self, id: VertexId) -> GraphResult<Vec<EdgeId>> {
        Ok(self.record(id)?.in_edges.clone())
    }

    /// Snapshot of outgoing edge handles
    pub fn out_edge_ids(&self, id: VertexId) -> GraphResult<Vec<EdgeId>> {
        Ok(self.record(id)?.out_edges.clone())
    }

    /// Incoming edges in insertion order
    pub fn get_in_edges(&self, id: VertexId) -> GraphResult<Vec<&Edge>> {
        let record = self.record(id)?;
        Ok(self.resolve(&record.in_edges))
    }

    /// Outgoing edges in insertion order
    pub fn get_out_edges(&self, id: VertexId) -> GraphResult<Vec<&Edge>> {
        let record = self.record(id)?;
        Ok(self.resolve(&record.out_edges))
    }

    pub fn get_in_degree(&self, id: VertexId) -> GraphResult<usize> {
        Ok(self.record(id)?.in_edges.len())
    }

    pub fn get_out_degree(&self, id: VertexId) -> GraphResult<usize> {
        Ok(self.record(id)?.out_edges.len())
    }

    /// Distinct targets of outgoing edges, in first-seen order
    pub fn successors(&self, id: VertexId) -> GraphResult<Vec<VertexId>> {
        let record = self.record(id)?;
        Ok(self.neighbors(&record.out_edges, Edge::target))
    }

    /// Distinct sources of incoming edges, in first-seen order
    pub fn predecessors(&self, id: VertexId) -> GraphResult<Vec<VertexId>> {
        let record = self.record(id)?;
        Ok(self.neighbors(&record.in_edges, Edge::source))
    }

    // ============================================================
    // Whole-graph queries
    // ============================================================

    pub fn num_vertices(&self) -> usize {
        self.records.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One past the largest id in use, or [`VertexId::BASE`] for an empty graph
    ///
    /// Fails with [`GraphError::IdSpaceExhausted`] once `u64::MAX` is taken.
    /// Does not reserve the id; see
    /// [`add_vertex_with_fresh_id`](Graph::add_vertex_with_fresh_id).
    pub fn unused_id(&self) -> GraphResult<VertexId> {
        match self.max_id {
            None => Ok(VertexId::BASE),
            Some(max) => max.next().ok_or(GraphError::IdSpaceExhausted(max)),
        }
    }

    /// All vertex ids, ascending
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        let mut ids: Vec<VertexId> = self.index.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// All vertices in ascending id order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.records_by_id().into_iter().map(AdjacencyRecord::vertex)
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(idx, edge)| (EdgeId::new(idx as u64), edge))
    }

    /// Adjacency records in ascending vertex id order
    pub fn records_by_id(&self) -> Vec<&AdjacencyRecord> {
        let mut records: Vec<&AdjacencyRecord> = self.records.iter().collect();
        records.sort_unstable_by_key(|record| record.vertex.id());
        records
    }

    /// Each vertex in ascending id order with its out-edges in insertion order
    pub fn vertices_with_out_edges(&self) -> impl Iterator<Item = (&Vertex, Vec<&Edge>)> + '_ {
        self.records_by_id()
            .into_iter()
            .map(move |record| (&record.vertex, self.resolve(&record.out_edges)))
    }

    pub fn statistics(&self) -> GraphStatistics {
        GraphStatistics {
            num_vertices: self.num_vertices(),
            num_edges: self.num_edges(),
            max_in_degree: self.records.iter().map(|r| r.in_edges.len()).max().unwrap_or(0),
            max_out_degree: self.records.iter().map(|r| r.out_edges.len()).max().unwrap_or(0),
            self_loops: self.edges.iter().filter(|e| e.is_self_loop()).count(),
        }
    }

    // ============================================================
    // Internal helpers
    // ============================================================

    fn position(&self, id: VertexId) -> GraphResult<usize> {
        self.index
            .get(&id)
            .copied()
            .ok_or(GraphError::UnknownVertex(id))
    }

    fn record(&self, id: VertexId) -> GraphResult<&AdjacencyRecord> {
        Ok(&self.records[self.position(id)?])
    }

    // Handles in records always point into the arena; edges are never removed.
    fn resolve(&self, ids: &[EdgeId]) -> Vec<&Edge> {
        ids.iter().map(|id| &self.edges[id.index()]).collect()
    }

    fn neighbors(&self, ids: &[EdgeId], endpoint: fn(&Edge) -> VertexId) -> Vec<VertexId> {
        let mut seen = Vec::with_capacity(ids.len());
        for id in ids {
            let vertex = endpoint(&self.edges[id.index()]);
            if !seen.contains(&vertex) {
                seen.push(vertex);
            }
        }
        seen
    }
}

impl GraphElement for Graph {
    fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }

    fn fmt_identity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph: \n  # edges:    {}\n  # vertices: {}",
            self.num_edges(),
            self.num_vertices()
        )
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Summary(self), f)
    }
}
