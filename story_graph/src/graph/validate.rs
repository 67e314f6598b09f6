//! Load-time validation of story graphs.

use std::collections::{HashSet, VecDeque};
use thiserror::Error;

use super::StoryGraph;
use crate::model::NodeId;

/// Node label used when the origin waypoint itself is defective.
pub const ORIGIN_LABEL: &str = "<origin>";

/// A structural defect that makes a story graph unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphDefect {
    #[error("start node '{0}' does not exist")]
    MissingStartNode(NodeId),

    #[error("node '{0}' is defined more than once")]
    DuplicateNode(NodeId),

    /// `choice` is the zero-based index into the node's menu.
    #[error("choice index {choice} of node '{node}' points at missing node '{target}'")]
    DanglingChoice {
        node: NodeId,
        choice: usize,
        target: NodeId,
    },

    #[error("waypoint '{name}' on '{node}' lies off the globe at ({lat}, {lon})")]
    WaypointOutOfRange {
        node: String,
        name: String,
        lat: f64,
        lon: f64,
    },
}

/// Non-fatal findings from a successful validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Nodes no path from the start node reaches, in authoring order.
    pub unreachable: Vec<NodeId>,

    /// Nodes without choices; reaching one ends the story.
    pub terminal: Vec<NodeId>,
}

impl ValidationReport {
    /// Check if the pass found nothing worth mentioning.
    pub fn is_clean(&self) -> bool {
        self.unreachable.is_empty() && self.terminal.is_empty()
    }
}

/// Check referential integrity, coordinates, and reachability.
pub(crate) fn validate_graph(graph: &StoryGraph) -> Result<ValidationReport, Vec<GraphDefect>> {
    let mut defects = Vec::new();

    if !graph.contains(graph.start.as_str()) {
        defects.push(GraphDefect::MissingStartNode(graph.start.clone()));
    }

    if !graph.origin.is_in_range() {
        defects.push(GraphDefect::WaypointOutOfRange {
            node: ORIGIN_LABEL.to_string(),
            name: graph.origin.name.clone(),
            lat: graph.origin.lat,
            lon: graph.origin.lon,
        });
    }

    let mut report = ValidationReport::default();

    for node in graph.nodes() {
        if node.is_terminal() {
            report.terminal.push(node.id.clone());
        }

        for (index, choice) in node.choices.iter().enumerate() {
            if !graph.contains(choice.target.as_str()) {
                defects.push(GraphDefect::DanglingChoice {
                    node: node.id.clone(),
                    choice: index,
                    target: choice.target.clone(),
                });
            }

            if let Some(waypoint) = &choice.waypoint {
                if !waypoint.is_in_range() {
                    defects.push(GraphDefect::WaypointOutOfRange {
                        node: node.id.to_string(),
                        name: waypoint.name.clone(),
                        lat: waypoint.lat,
                        lon: waypoint.lon,
                    });
                }
            }
        }
    }

    if !defects.is_empty() {
        return Err(defects);
    }

    let reachable = reachable_from(graph, &graph.start);
    report.unreachable = graph
        .nodes()
        .filter(|n| !reachable.contains(&n.id))
        .map(|n| n.id.clone())
        .collect();

    Ok(report)
}

/// Breadth-first walk over choice edges.
fn reachable_from<'g>(graph: &'g StoryGraph, start: &'g NodeId) -> HashSet<&'g NodeId> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();

    seen.insert(start);
    queue.push_back(start);

    while let Some(id) = queue.pop_front() {
        let Some(node) = graph.nodes.get(id) else {
            continue;
        };
        for choice in &node.choices {
            if seen.insert(&choice.target) {
                queue.push_back(&choice.target);
            }
        }
    }

    seen
}
