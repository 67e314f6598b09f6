//! # Story Graph
//!
//! The "Story Bible" crate - holds the hand-authored travel story as immutable data
//! and exposes it as a validated, directed story graph. This crate contains no
//! traversal or rendering logic.
//!
//! ## Core Components
//!
//! - **model**: Story nodes, choices, and the geographic waypoints they carry
//! - **graph**: The lookup structure plus its load-time validation pass
//! - **content**: The authored post-graduation story, parsed once per process

pub mod content;
pub mod error;
pub mod graph;
pub mod model;

pub use content::*;
pub use error::*;
pub use graph::*;
pub use model::*;
