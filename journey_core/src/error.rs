//! Error types for sessions, rendering, and the text interface.

use std::io;
use std::path::PathBuf;

use story_graph::{NodeId, StoryError};
use thiserror::Error;

/// Errors raised by a traversal session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The selection is not on the current menu. Recoverable; nothing changed.
    #[error("choice index {index} is not one of the {available} available choices")]
    InvalidChoice { index: usize, available: usize },

    /// The current node has no choices left to take.
    #[error("the story has ended at '{node}'")]
    StoryEnded { node: NodeId },

    /// The story graph failed a lookup. Fatal for the session.
    #[error(transparent)]
    Story(#[from] StoryError),
}

impl SessionError {
    /// Check if the session can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SessionError::InvalidChoice { .. })
    }
}

/// Errors raised while configuring or saving a map.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read map style {path}: {source}")]
    ReadStyle { path: PathBuf, source: io::Error },

    #[error("invalid map style: {0}")]
    Style(#[from] toml::de::Error),

    /// The style parsed but cannot produce a drawable map.
    #[error("unusable map style: {0}")]
    Unusable(String),

    #[error("failed to write map to {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Errors raised by the interactive text interface.
#[derive(Debug, Error)]
pub enum InterfaceError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}
