//! Pure in-memory processing of the fetched snapshot:
//! - [`ownership`] - Heuristic ENI-ownership correlation rules
//! - [`graph`] - The query surface the renderer walks
//!
//! Nothing in here performs I/O or fails; both modules are plain functions
//! over the frozen collections.

pub mod graph;
pub mod ownership;

pub use graph::ResourceGraph;
pub use ownership::{correlate, intersection_of};
