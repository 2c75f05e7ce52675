//! Terminal output:
//! - [`tree`] - The hierarchical inventory tree
//! - [`text`] - Name pairing, state coloring and rule formatting helpers

pub mod text;
pub mod tree;

pub use tree::render;
