//! Core mesh data structures

use std::fmt;

use crate::error::{Msh2XdmfError, Result};

/// Topological cell types handled by the converter.
///
/// These are the cell types that can play the role of a domain or a
/// co-dimension-1 boundary in 2D and 3D meshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    /// 2-node line segment
    Line,
    /// 3-node triangle
    Triangle,
    /// 4-node tetrahedron
    Tetra,
}

impl CellType {
    /// Number of point indices per cell
    pub fn nodes_per_cell(self) -> usize {
        match self {
            CellType::Line => 2,
            CellType::Triangle => 3,
            CellType::Tetra => 4,
        }
    }

    /// Topological dimension of the cell
    pub fn dim(self) -> usize {
        match self {
            CellType::Line => 1,
            CellType::Triangle => 2,
            CellType::Tetra => 3,
        }
    }

    /// Map a GMSH element type code to a supported cell type.
    ///
    /// Returns `None` for codes this converter ignores (points, quads,
    /// hexahedra, higher-order elements).
    pub fn from_msh_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(CellType::Line),
            2 => Some(CellType::Triangle),
            4 => Some(CellType::Tetra),
            _ => None,
        }
    }

    /// Cell type of the top-dimensional domain for a given spatial dimension
    pub fn domain(dim: usize) -> Result<Self> {
        match dim {
            2 => Ok(CellType::Triangle),
            3 => Ok(CellType::Tetra),
            d => Err(Msh2XdmfError::InvalidDimension(d)),
        }
    }

    /// Cell type of the co-dimension-1 boundary for a given spatial dimension
    pub fn boundary(dim: usize) -> Result<Self> {
        match dim {
            2 => Ok(CellType::Line),
            3 => Ok(CellType::Triangle),
            d => Err(Msh2XdmfError::InvalidDimension(d)),
        }
    }

    /// XDMF topology type name for this cell type
    pub fn xdmf_topology(self) -> &'static str {
        match self {
            CellType::Line => "Polyline",
            CellType::Triangle => "Triangle",
            CellType::Tetra => "Tetrahedron",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellType::Line => "line",
            CellType::Triangle => "triangle",
            CellType::Tetra => "tetra",
        };
        write!(f, "{name}")
    }
}

/// A homogeneous group of cells sharing one topological type.
///
/// `cells` is a flat array of 0-based point indices,
/// `cell_type.nodes_per_cell()` entries per cell. `physical_tags`, when
/// present, holds the GMSH physical-group tag of each cell, indexed
/// identically to the cells.
#[derive(Debug, Clone)]
pub struct CellBlock {
    pub cell_type: CellType,
    pub cells: Vec<u64>,
    pub physical_tags: Option<Vec<i32>>,
}

impl CellBlock {
    /// Number of cells in this block
    pub fn num_cells(&self) -> usize {
        self.cells.len() / self.cell_type.nodes_per_cell()
    }
}

/// Membership of one named physical group across all cell blocks.
///
/// `blocks` is parallel to `Mesh::cell_blocks`; each entry lists the cells
/// of that block belonging to the group (usually all of a block or none).
#[derive(Debug, Clone)]
pub struct CellSet {
    pub label: String,
    pub blocks: Vec<Vec<usize>>,
}

/// Complete in-memory representation of a loaded GMSH mesh
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Point coordinates, always stored with 3 columns (z = 0 for 2D meshes)
    pub points: Vec<[f64; 3]>,

    /// Cell blocks in file order; several blocks may share a cell type
    pub cell_blocks: Vec<CellBlock>,

    /// Physical-group membership, in `$PhysicalNames` order
    pub cell_sets: Vec<CellSet>,
}

impl Mesh {
    /// Get total number of points
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Get total number of cells across all blocks
    pub fn num_cells(&self) -> usize {
        self.cell_blocks.iter().map(CellBlock::num_cells).sum()
    }
}

/// A single-block mesh produced by domain or boundary extraction.
///
/// Point coordinates are truncated to the working dimension and stored as a
/// flat row-major array; `tags` is the per-cell physical-group array, named
/// `"subdomains"` for the domain and `"boundaries"` for the boundary.
/// Constructed once per conversion, written immediately, then discarded.
#[derive(Debug, Clone)]
pub struct ExtractedMesh {
    pub dim: usize,
    pub points: Vec<f64>,
    pub cell_type: CellType,
    pub cells: Vec<u64>,
    pub tag_name: String,
    pub tags: Vec<i32>,
}

impl ExtractedMesh {
    /// Number of points
    pub fn num_points(&self) -> usize {
        self.points.len() / self.dim
    }

    /// Number of cells
    pub fn num_cells(&self) -> usize {
        self.cells.len() / self.cell_type.nodes_per_cell()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_type_selection() {
        assert_eq!(CellType::domain(2).unwrap(), CellType::Triangle);
        assert_eq!(CellType::domain(3).unwrap(), CellType::Tetra);
        assert_eq!(CellType::boundary(2).unwrap(), CellType::Line);
        assert_eq!(CellType::boundary(3).unwrap(), CellType::Triangle);
        assert!(matches!(
            CellType::domain(4),
            Err(Msh2XdmfError::InvalidDimension(4))
        ));
        assert!(matches!(
            CellType::boundary(1),
            Err(Msh2XdmfError::InvalidDimension(1))
        ));
    }

    #[test]
    fn test_msh_codes() {
        assert_eq!(CellType::from_msh_code(1), Some(CellType::Line));
        assert_eq!(CellType::from_msh_code(2), Some(CellType::Triangle));
        assert_eq!(CellType::from_msh_code(4), Some(CellType::Tetra));
        // Quads and points are ignored
        assert_eq!(CellType::from_msh_code(3), None);
        assert_eq!(CellType::from_msh_code(15), None);
    }

    #[test]
    fn test_block_cell_count() {
        let block = CellBlock {
            cell_type: CellType::Triangle,
            cells: vec![0, 1, 2, 0, 2, 3],
            physical_tags: Some(vec![1, 1]),
        };
        assert_eq!(block.num_cells(), 2);
    }

    #[test]
    fn test_extracted_mesh_counts() {
        let mesh = ExtractedMesh {
            dim: 2,
            points: vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0],
            cell_type: CellType::Triangle,
            cells: vec![0, 1, 2],
            tag_name: "subdomains".to_string(),
            tags: vec![1],
        };
        assert_eq!(mesh.num_points(), 3);
        assert_eq!(mesh.num_cells(), 1);
    }
}
