use std::collections::HashMap;

/// A single observed link, `from -> to`. Immutable once inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    from: String,
    to: String,
}

impl Edge {
    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }
}

/// One discovered page. Owned by the [`Graph`]; created lazily the first
/// time its identifier appears on either end of an edge.
#[derive(Debug, Default)]
pub struct Vertex {
    value: String,
    outgoing: HashMap<String, Edge>,
}

impl Vertex {
    fn new(value: String) -> Self {
        Self {
            value,
            outgoing: HashMap::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn outgoing_edges(&self) -> &HashMap<String, Edge> {
        &self.outgoing
    }
}

/// Adjacency-map directed graph keyed by page identifier.
///
/// Simple graph, not a multigraph: at most one edge per `(from, to)` pair,
/// and every edge endpoint is present in the vertex set.
#[derive(Debug, Default)]
pub struct Graph {
    vertices: HashMap<String, Vertex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.outgoing.len()).sum()
    }

    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Iteration order is whatever the backing map yields. Callers that
    /// need deterministic output must sort.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Ensures both endpoints exist, then inserts `from -> to` if no such
    /// edge is present. Returns true iff a new edge was inserted.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        if !self.vertices.contains_key(from) {
            self.vertices.insert(from.to_string(), Vertex::new(from.to_string()));
        }
        if !self.vertices.contains_key(to) {
            self.vertices.insert(to.to_string(), Vertex::new(to.to_string()));
        }

        let vertex = self
            .vertices
            .get_mut(from)
            .expect("from vertex inserted above");
        if vertex.outgoing.contains_key(to) {
            return false;
        }
        vertex.outgoing.insert(
            to.to_string(),
            Edge {
                from: from.to_string(),
                to: to.to_string(),
            },
        );
        true
    }
}
