//! Story error types.

use thiserror::Error;

use crate::graph::GraphDefect;

/// Errors raised while building or querying a story graph.
#[derive(Debug, Error)]
pub enum StoryError {
    /// A node identifier did not resolve.
    #[error("story node not found: {0}")]
    NodeNotFound(String),

    /// The story table could not be parsed.
    #[error("failed to parse story table: {0}")]
    Parse(#[from] toml::de::Error),

    /// The story table parsed but describes a malformed graph.
    #[error("story graph has {} defect(s): {}", .0.len(), join_defects(.0))]
    Invalid(Vec<GraphDefect>),
}

fn join_defects(defects: &[GraphDefect]) -> String {
    defects
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
