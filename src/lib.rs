//! msh2xdmf Library
//!
//! Converts GMSH `.msh` meshes into XDMF/HDF5 pairs for finite-element
//! solvers, preserving the mapping between named physical groups and the
//! integer tags used inside the mesh file.

pub mod convert;
pub mod error;
pub mod io;
pub mod mesh;
pub mod table;

#[cfg(feature = "import")]
pub mod import;

pub use convert::msh2xdmf;
pub use error::{Msh2XdmfError, Result};
