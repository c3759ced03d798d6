//! I/O module for reading GMSH meshes and writing XDMF/H5 pairs

pub mod msh;
pub mod xdmf;

pub use msh::read_msh;
pub use xdmf::{read_xdmf, write_xdmf};
