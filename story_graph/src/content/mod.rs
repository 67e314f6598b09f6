//! The authored post-graduation travel story.
//!
//! The story is kept as a TOML data table beside the crate and embedded at build
//! time; it is parsed and validated once, on first use, and shared read-only for
//! the rest of the process.

use once_cell::sync::OnceCell;

use crate::error::StoryError;
use crate::graph::StoryGraph;

/// The raw story table.
pub const TRAVEL_STORY_TOML: &str = include_str!("../../content/travel_story.toml");

static TRAVEL_STORY: OnceCell<StoryGraph> = OnceCell::new();

/// The travel story graph, built on first call.
pub fn travel_story() -> Result<&'static StoryGraph, StoryError> {
    TRAVEL_STORY.get_or_try_init(|| StoryGraph::from_toml_str(TRAVEL_STORY_TOML))
}
