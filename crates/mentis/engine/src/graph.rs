use crate::config::EdgePolicy;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Directed provenance graph over concept labels.
///
/// Nodes are unique by label. Whether a repeated edge adds a parallel edge
/// depends on the [`EdgePolicy`].
#[derive(Debug, Clone)]
pub struct ConceptGraph {
    graph: DiGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
    policy: EdgePolicy,
}

/// Serializable view of a [`ConceptGraph`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
}

impl ConceptGraph {
    pub fn new(policy: EdgePolicy) -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// Get or create the node for `label`.
    pub fn add_node(&mut self, label: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        let idx = self.graph.add_node(label.to_string());
        self.index.insert(label.to_string(), idx);
        idx
    }

    /// Add `from → to`, creating missing nodes. Returns whether a new edge was stored.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        let a = self.add_node(from);
        let b = self.add_node(to);
        match self.policy {
            EdgePolicy::Collapse => {
                if self.graph.contains_edge(a, b) {
                    return false;
                }
                self.graph.add_edge(a, b, ());
            }
            EdgePolicy::Accumulate => {
                self.graph.add_edge(a, b, ());
            }
        }
        true
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains_node(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.edge_multiplicity(from, to) > 0
    }

    /// Number of parallel `from → to` edges.
    pub fn edge_multiplicity(&self, from: &str, to: &str) -> usize {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&a), Some(&b)) => self.graph.edges_connecting(a, b).count(),
            _ => 0,
        }
    }

    /// Labels in insertion order.
    pub fn nodes(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].as_str())
            .collect()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_references()
            .map(|e| (self.graph[e.source()].as_str(), self.graph[e.target()].as_str()))
            .collect()
    }

    pub fn successors(&self, label: &str) -> Vec<&str> {
        self.neighbors(label, Direction::Outgoing)
    }

    pub fn predecessors(&self, label: &str) -> Vec<&str> {
        self.neighbors(label, Direction::Incoming)
    }

    fn neighbors(&self, label: &str, dir: Direction) -> Vec<&str> {
        let Some(&idx) = self.index.get(label) else {
            return Vec::new();
        };
        let mut out: Vec<&str> = self
            .graph
            .neighbors_directed(idx, dir)
            .map(|n| self.graph[n].as_str())
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes().into_iter().map(str::to_owned).collect(),
            edges: self
                .edges()
                .into_iter()
                .map(|(a, b)| (a.to_owned(), b.to_owned()))
                .collect(),
        }
    }
}

impl Default for ConceptGraph {
    fn default() -> Self {
        Self::new(EdgePolicy::default())
    }
}
