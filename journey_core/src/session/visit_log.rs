//! The ordered record of where a traveller has been.

use serde::Serialize;
use story_graph::Waypoint;

/// Waypoints in the order they were visited, always starting at the origin.
///
/// The log is append-only: entries are never reordered, removed, or deduplicated,
/// so a return trip shows up as a second entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VisitLog {
    waypoints: Vec<Waypoint>,
}

#[allow(clippy::len_without_is_empty)]
impl VisitLog {
    /// Create a log seeded with the starting location.
    pub fn new(origin: Waypoint) -> Self {
        Self {
            waypoints: vec![origin],
        }
    }

    /// Record a newly visited waypoint.
    pub fn push(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    /// The seeded starting location.
    pub fn origin(&self) -> &Waypoint {
        &self.waypoints[0]
    }

    /// The most recent waypoint (the origin if nothing else was recorded).
    pub fn last(&self) -> &Waypoint {
        &self.waypoints[self.waypoints.len() - 1]
    }

    /// Number of entries, origin included.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Check if anything beyond the origin was recorded.
    pub fn has_travelled(&self) -> bool {
        self.waypoints.len() > 1
    }

    /// Iterate over entries in visit order.
    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }

    pub fn as_slice(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Names of every entry in visit order.
    pub fn location_names(&self) -> Vec<&str> {
        self.waypoints.iter().map(|w| w.name.as_str()).collect()
    }

    pub fn into_vec(self) -> Vec<Waypoint> {
        self.waypoints
    }
}

impl<'a> IntoIterator for &'a VisitLog {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}
