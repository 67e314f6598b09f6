//! Traversal Engine - walks the story graph one choice at a time.
//!
//! A session starts at the graph's start node with a visit log seeded by the
//! graph's origin. Each valid selection appends the choice's waypoint (if it has
//! one) and moves to the choice's target. The graph is cyclic and sessions are
//! unbounded: revisiting a node is normal. A session ends when the caller stops
//! asking, or gracefully when it reaches a node with no choices.

mod visit_log;

pub use visit_log::*;

use serde::{Deserialize, Serialize};
use story_graph::{Choice, NodeId, StoryGraph, StoryNode, Waypoint};
use tracing::{debug, info, info_span, Span};
use uuid::Uuid;

use crate::error::SessionError;

/// Unique identifier for traversal sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What happened when a choice was taken.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: NodeId,
    pub to: NodeId,
    /// The waypoint appended to the visit log, if the choice carried one.
    pub waypoint: Option<Waypoint>,
}

/// One traveller's walk through a story graph.
#[derive(Debug)]
pub struct TraversalSession<'g> {
    id: SessionId,
    graph: &'g StoryGraph,
    current: NodeId,
    visit_log: VisitLog,
    steps_taken: usize,
    span: Span,
}

impl<'g> TraversalSession<'g> {
    /// Start a session at the graph's start node.
    pub fn new(graph: &'g StoryGraph) -> Result<Self, SessionError> {
        let start = graph.start_node()?;
        let id = SessionId::new();
        let span = info_span!("session", id = %id);

        span.in_scope(|| info!(start = %start.id, "traversal session started"));

        Ok(Self {
            id,
            graph,
            current: start.id.clone(),
            visit_log: VisitLog::new(graph.origin().clone()),
            steps_taken: 0,
            span,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The graph this session walks.
    pub fn graph(&self) -> &'g StoryGraph {
        self.graph
    }

    /// Identifier of the node the traveller is at.
    pub fn current_node_id(&self) -> &NodeId {
        &self.current
    }

    /// The node the traveller is at.
    pub fn current_node(&self) -> Result<&'g StoryNode, SessionError> {
        Ok(self.graph.get_node(self.current.as_str())?)
    }

    /// The current node's menu, in display order.
    pub fn current_choices(&self) -> Result<&'g [Choice], SessionError> {
        Ok(&self.current_node()?.choices)
    }

    /// Check if the story has run out of choices.
    pub fn is_finished(&self) -> Result<bool, SessionError> {
        Ok(self.current_node()?.is_terminal())
    }

    /// Take the choice at zero-based `index` on the current menu.
    ///
    /// On error the session is left exactly as it was.
    pub fn select(&mut self, index: usize) -> Result<Transition, SessionError> {
        let _guard = self.span.enter();

        let node = self.current_node()?;
        if node.is_terminal() {
            return Err(SessionError::StoryEnded {
                node: node.id.clone(),
            });
        }

        let choice = node.choice(index).ok_or(SessionError::InvalidChoice {
            index,
            available: node.choices.len(),
        })?;

        // Resolve before mutating so a dangling target leaves the session untouched.
        let target = self.graph.get_node(choice.target.as_str())?;

        if let Some(waypoint) = &choice.waypoint {
            self.visit_log.push(waypoint.clone());
        }
        self.current = target.id.clone();
        self.steps_taken += 1;

        debug!(
            from = %node.id,
            to = %target.id,
            waypoint = choice.waypoint.as_ref().map(|w| w.name.as_str()),
            step = self.steps_taken,
            "choice taken"
        );

        Ok(Transition {
            from: node.id.clone(),
            to: target.id.clone(),
            waypoint: choice.waypoint.clone(),
        })
    }

    /// Waypoints recorded so far.
    pub fn visit_log(&self) -> &VisitLog {
        &self.visit_log
    }

    /// Number of choices taken so far.
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// End the session and hand over the visit log.
    pub fn finish(self) -> VisitLog {
        self.span.in_scope(|| {
            info!(
                steps = self.steps_taken,
                waypoints = self.visit_log.len(),
                at = %self.current,
                "traversal session finished"
            )
        });
        self.visit_log
    }
}
