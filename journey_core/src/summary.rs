//! End-of-journey report.

use serde::Serialize;

use crate::map::summary_line;
use crate::session::{SessionId, TraversalSession, VisitLog};

/// Who travelled, how far, and where to. Serializes to the `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct JourneySummary {
    pub player: String,
    pub session_id: SessionId,
    pub steps_taken: usize,
    /// Whether the walk ended at a node with no choices rather than by quitting.
    pub finished_story: bool,
    pub waypoints: VisitLog,
    pub headline: String,
}

impl JourneySummary {
    /// Snapshot a session. The session itself is left untouched.
    pub fn new(
        player: impl Into<String>,
        session: &TraversalSession<'_>,
        finished_story: bool,
    ) -> Self {
        let waypoints = session.visit_log().clone();
        Self {
            player: player.into(),
            session_id: session.id(),
            steps_taken: session.steps_taken(),
            finished_story,
            headline: summary_line(waypoints.as_slice()),
            waypoints,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
