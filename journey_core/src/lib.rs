//! # Journey Core
//!
//! Drives a traveller through the story graph and draws where they went. This
//! crate interfaces with `story_graph`, owns the visit log for one session, and
//! renders that log onto any 2D drawing surface.
//!
//! ## Core Components
//!
//! - **session**: The traversal engine and the visit log it accumulates
//! - **interface**: Text prompts, input parsing, and the interactive play loop
//! - **map**: The world map renderer and its SVG and ASCII drawing surfaces
//! - **summary**: Serializable end-of-journey report
//!
//! ## Design Philosophy
//!
//! - **Content-Agnostic**: The engine walks any validated story graph
//! - **I/O at the Edges**: The engine never reads input; the interface layer does
//! - **Layered Drawing**: Maps are drawn back to front so later layers stay visible

pub mod error;
pub mod interface;
pub mod map;
pub mod session;
pub mod summary;

pub use error::*;
pub use map::*;
pub use session::*;
pub use summary::*;
