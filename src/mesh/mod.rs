//! Mesh data structures and physical-group extraction

pub mod extract;
pub mod types;

pub use extract::{extract_boundaries, extract_domain};
pub use types::{CellBlock, CellSet, CellType, ExtractedMesh, Mesh};
