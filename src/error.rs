//! Error types for the converter
//!
//! This module defines all error types that can occur while reading a GMSH
//! mesh, extracting the domain/boundary cell blocks, and writing or
//! re-importing the XDMF/H5 pairs and the association table.

use thiserror::Error;

use crate::mesh::CellType;

/// Error types for mesh conversion operations
#[derive(Error, Debug)]
pub enum Msh2XdmfError {
    /// The `.msh` file is malformed or truncated.
    #[error("failed to parse MSH file: {0}")]
    MshParse(String),

    /// The `.msh` file uses a format version or mode this tool does not read.
    ///
    /// Only ASCII files in MSH format 2.2 or 4.1 are supported.
    #[error("unsupported MSH format: {0} (only ASCII 2.2 and 4.1 are supported)")]
    UnsupportedMshVersion(String),

    /// Mesh data violates an internal constraint, such as an element
    /// referencing a node tag that does not exist.
    #[error("invalid mesh data: {0}")]
    InvalidMesh(String),

    /// Cells of the requested kind exist but carry no physical-group tags.
    ///
    /// This is a user-input error: the physical group was never defined in
    /// the mesh generator, so there is nothing to re-tag or to associate.
    #[error(
        "no physical group found for the {kind}: tag the {kind} cells \
         ({cell_type}) with a physical group in GMSH"
    )]
    MissingPhysicalGroup {
        kind: &'static str,
        cell_type: CellType,
    },

    /// A physical group's membership is non-empty in more than one cell
    /// block, so there is no single block to read its tag value from.
    #[error(
        "physical group '{label}' is present in more than one cell block \
         (blocks {first} and {second})"
    )]
    AmbiguousPhysicalGroup {
        label: String,
        first: usize,
        second: usize,
    },

    /// The spatial dimension must be 2 or 3.
    #[error("invalid dimension {0}: expected 2 or 3")]
    InvalidDimension(usize),

    /// Invalid caller-supplied path or name.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The association table file is malformed.
    #[error("malformed association table: {0}")]
    Table(String),

    /// An XDMF/H5 pair does not have the expected dataset layout.
    #[error("invalid XDMF/H5 data: {0}")]
    Xdmf(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors from the underlying HDF5 library.
    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    /// Flat arrays could not be reshaped into the dataset dimensions.
    #[error("array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Convenience type alias for Results with [`Msh2XdmfError`]
pub type Result<T> = std::result::Result<T, Msh2XdmfError>;
