//! Story Graph - the immutable lookup structure over all story nodes.
//!
//! A graph is only ever handed out after passing [`validate`](StoryGraph::validate):
//! every choice target resolves, the start node exists, node ids are unique, and
//! every waypoint lies on the globe.

mod validate;

pub use validate::*;

use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::error::StoryError;
use crate::model::{NodeId, StoryNode, Waypoint};

/// On-disk shape of a story table.
#[derive(Debug, Deserialize)]
struct StoryTable {
    start: NodeId,
    origin: Waypoint,
    #[serde(default)]
    nodes: Vec<StoryNode>,
}

/// The complete, read-only story: nodes keyed by id plus the fixed entry point.
#[derive(Debug, Clone)]
pub struct StoryGraph {
    start: NodeId,

    /// Where every journey begins; seeds each visit log.
    origin: Waypoint,

    nodes: HashMap<NodeId, StoryNode>,

    /// Authoring order, for deterministic iteration.
    order: Vec<NodeId>,
}

impl StoryGraph {
    /// Build and validate a graph from its parts.
    pub fn new(
        start: impl Into<NodeId>,
        origin: Waypoint,
        nodes: impl IntoIterator<Item = StoryNode>,
    ) -> Result<Self, StoryError> {
        let mut graph = Self {
            start: start.into(),
            origin,
            nodes: HashMap::new(),
            order: Vec::new(),
        };

        let mut defects = Vec::new();
        for node in nodes {
            if graph.nodes.contains_key(&node.id) {
                defects.push(GraphDefect::DuplicateNode(node.id.clone()));
                continue;
            }
            graph.order.push(node.id.clone());
            graph.nodes.insert(node.id.clone(), node);
        }

        match validate_graph(&graph) {
            Ok(report) if defects.is_empty() => {
                graph.log_report(&report);
                Ok(graph)
            }
            Ok(_) => Err(StoryError::Invalid(defects)),
            Err(more) => {
                defects.extend(more);
                Err(StoryError::Invalid(defects))
            }
        }
    }

    /// Parse a TOML story table and build a validated graph from it.
    pub fn from_toml_str(source: &str) -> Result<Self, StoryError> {
        let table: StoryTable = toml::from_str(source)?;
        Self::new(table.start, table.origin, table.nodes)
    }

    /// The fixed entry point of every traversal.
    pub fn get_start_node_id(&self) -> &NodeId {
        &self.start
    }

    /// Look up a node by id.
    pub fn get_node(&self, id: &str) -> Result<&StoryNode, StoryError> {
        self.nodes
            .get(id)
            .ok_or_else(|| StoryError::NodeNotFound(id.to_string()))
    }

    /// The start node itself.
    pub fn start_node(&self) -> Result<&StoryNode, StoryError> {
        self.get_node(self.start.as_str())
    }

    /// The waypoint every visit log is seeded with.
    pub fn origin(&self) -> &Waypoint {
        &self.origin
    }

    /// Check if a node exists.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterate over all nodes in authoring order.
    pub fn nodes(&self) -> impl Iterator<Item = &StoryNode> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Get the total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the total number of choices across all nodes.
    pub fn choice_count(&self) -> usize {
        self.nodes.values().map(|n| n.choices.len()).sum()
    }

    /// Re-run the validation pass.
    pub fn validate(&self) -> Result<ValidationReport, StoryError> {
        validate_graph(self).map_err(StoryError::Invalid)
    }

    fn log_report(&self, report: &ValidationReport) {
        for id in &report.unreachable {
            warn!(node = %id, "story node is unreachable from the start node");
        }
        for id in &report.terminal {
            debug!(node = %id, "story node has no choices and ends the story");
        }
        debug!(
            nodes = self.len(),
            choices = self.choice_count(),
            start = %self.start,
            "story graph built"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Choice;

    fn origin() -> Waypoint {
        Waypoint::new("East Lansing, Michigan", 42.73698, -84.48387)
    }

    fn small_story() -> Vec<StoryNode> {
        vec![
            StoryNode::new("start", "Graduation", "Caps fly.").with_choice(
                Choice::new("Head to Chicago", "chicago")
                    .with_waypoint(Waypoint::new("Chicago, Illinois", 41.8781, -87.6298)),
            ),
            StoryNode::new("chicago", "Chicago", "Deep dish.")
                .with_choice(Choice::new("Go home", "start")),
        ]
    }

    #[test]
    fn test_build_and_lookup() {
        let graph = StoryGraph::new("start", origin(), small_story()).unwrap();

        assert_eq!(graph.get_start_node_id(), "start");
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.choice_count(), 2);
        assert_eq!(graph.get_node("chicago").unwrap().title, "Chicago");
        assert_eq!(graph.start_node().unwrap().title, "Graduation");
        assert_eq!(graph.origin(), &origin());
    }

    #[test]
    fn test_missing_node_lookup() {
        let graph = StoryGraph::new("start", origin(), small_story()).unwrap();

        let err = graph.get_node("atlantis").unwrap_err();
        assert!(matches!(err, StoryError::NodeNotFound(id) if id == "atlantis"));
        assert!(!graph.contains("atlantis"));
    }

    #[test]
    fn test_nodes_in_authoring_order() {
        let graph = StoryGraph::new("start", origin(), small_story()).unwrap();

        let ids: Vec<_> = graph.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["start", "chicago"]);
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut nodes = small_story();
        nodes.push(StoryNode::new("chicago", "Chicago Again", "Twice."));

        let err = StoryGraph::new("start", origin(), nodes).unwrap_err();
        match err {
            StoryError::Invalid(defects) => {
                assert_eq!(defects, vec![GraphDefect::DuplicateNode(NodeId::new("chicago"))]);
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_from_toml_str() {
        let graph = StoryGraph::from_toml_str(
            r#"
start = "start"

[origin]
name = "East Lansing, Michigan"
lat = 42.73698
lon = -84.48387

[[nodes]]
id = "start"
title = "Graduation"
description = "Caps fly."

[[nodes.choices]]
prompt = "Stay put"
target = "start"
"#,
        )
        .unwrap();

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.get_node("start").unwrap().choices[0].target, "start");
    }

    #[test]
    fn test_from_toml_str_parse_error() {
        let err = StoryGraph::from_toml_str("start = ").unwrap_err();
        assert!(matches!(err, StoryError::Parse(_)));
    }
}
