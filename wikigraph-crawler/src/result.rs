use crate::graph::Graph;
use serde::{Deserialize, Serialize};

/// Everything a finished run produced. The edge list preserves insertion
/// order, which is what the output file serializes.
#[derive(Debug)]
pub struct CrawlOutcome {
    pub graph: Graph,
    pub edges: Vec<(String, String)>,
    pub pages_fetched: usize,
    pub visited_count: usize,
}

impl CrawlOutcome {
    pub fn summary(&self, seed: &str) -> CrawlSummary {
        CrawlSummary {
            seed: seed.to_string(),
            vertex_count: self.graph.vertex_count(),
            edge_count: self.edges.len(),
            pages_fetched: self.pages_fetched,
            visited_count: self.visited_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlSummary {
    pub seed: String,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub pages_fetched: usize,
    pub visited_count: usize,
}
