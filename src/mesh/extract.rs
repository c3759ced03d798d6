//! Domain and boundary extraction
//!
//! Filters the cell blocks of a loaded mesh by cell type to isolate the
//! top-dimensional domain cells and the co-dimension-1 boundary cells, and
//! reattaches their physical-group tags as a single named per-cell array.

use crate::error::{Msh2XdmfError, Result};
use crate::mesh::types::{CellType, ExtractedMesh, Mesh};

/// Extract the top-dimensional domain cells (`dim = 2` → triangles,
/// `dim = 3` → tetrahedra) with their physical tags as `"subdomains"`.
///
/// Returns `Ok(None)` with a warning when the mesh has no domain cells at
/// all; callers must skip writing in that case. Fails with
/// [`Msh2XdmfError::MissingPhysicalGroup`] when domain cells exist but carry
/// no physical-group tag data.
pub fn extract_domain(mesh: &Mesh, dim: usize) -> Result<Option<ExtractedMesh>> {
    extract_cells(mesh, dim, CellType::domain(dim)?, "subdomains", "domain")
}

/// Extract the co-dimension-1 boundary cells (`dim = 2` → lines,
/// `dim = 3` → triangles) with their physical tags as `"boundaries"`.
///
/// Returns `Ok(None)` with a warning when the mesh has no boundary cells.
/// Boundary cells without tag data are an error: an untagged boundary is
/// not a physical group and cannot round-trip through the association
/// table.
pub fn extract_boundaries(mesh: &Mesh, dim: usize) -> Result<Option<ExtractedMesh>> {
    extract_cells(mesh, dim, CellType::boundary(dim)?, "boundaries", "boundary")
}

fn extract_cells(
    mesh: &Mesh,
    dim: usize,
    cell_type: CellType,
    tag_name: &str,
    kind: &'static str,
) -> Result<Option<ExtractedMesh>> {
    let matching: Vec<_> = mesh
        .cell_blocks
        .iter()
        .filter(|b| b.cell_type == cell_type)
        .collect();

    if matching.is_empty() {
        log::warn!("no {kind} cells ({cell_type}) found in the mesh");
        return Ok(None);
    }

    // Concatenate matching blocks in order, cells and tags in lockstep.
    let mut cells = Vec::new();
    let mut tags = Vec::new();
    for block in matching {
        let block_tags = block
            .physical_tags
            .as_ref()
            .ok_or(Msh2XdmfError::MissingPhysicalGroup { kind, cell_type })?;
        cells.extend_from_slice(&block.cells);
        tags.extend_from_slice(block_tags);
    }

    // Drop the unused coordinate columns (2D meshes are stored with z = 0).
    let mut points = Vec::with_capacity(mesh.points.len() * dim);
    for p in &mesh.points {
        points.extend_from_slice(&p[..dim]);
    }

    log::info!(
        "extracted {} {kind} cells ({cell_type})",
        tags.len()
    );

    Ok(Some(ExtractedMesh {
        dim,
        points,
        cell_type,
        cells,
        tag_name: tag_name.to_string(),
        tags,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::types::{CellBlock, CellSet};

    /// Unit square: 4 lines tagged 2 ("edge"), 2 triangles tagged 1 ("plate")
    fn make_square_mesh() -> Mesh {
        let points = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ];
        let line_block = CellBlock {
            cell_type: CellType::Line,
            cells: vec![0, 1, 1, 2, 2, 3, 3, 0],
            physical_tags: Some(vec![2, 2, 2, 2]),
        };
        let tri_block = CellBlock {
            cell_type: CellType::Triangle,
            cells: vec![0, 1, 2, 0, 2, 3],
            physical_tags: Some(vec![1, 1]),
        };
        Mesh {
            points,
            cell_blocks: vec![line_block, tri_block],
            cell_sets: vec![
                CellSet {
                    label: "edge".to_string(),
                    blocks: vec![vec![0, 1, 2, 3], vec![]],
                },
                CellSet {
                    label: "plate".to_string(),
                    blocks: vec![vec![], vec![0, 1]],
                },
            ],
        }
    }

    #[test]
    fn test_extract_domain_2d() {
        let mesh = make_square_mesh();
        let domain = extract_domain(&mesh, 2).unwrap().unwrap();

        assert_eq!(domain.cell_type, CellType::Triangle);
        assert_eq!(domain.num_cells(), 2);
        assert_eq!(domain.tag_name, "subdomains");
        assert_eq!(domain.tags, vec![1, 1]);
        assert_eq!(domain.cells, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_extract_boundaries_2d() {
        let mesh = make_square_mesh();
        let boundaries = extract_boundaries(&mesh, 2).unwrap().unwrap();

        assert_eq!(boundaries.cell_type, CellType::Line);
        assert_eq!(boundaries.num_cells(), 4);
        assert_eq!(boundaries.tag_name, "boundaries");
        assert_eq!(boundaries.tags, vec![2, 2, 2, 2]);
    }

    #[test]
    fn test_domain_and_boundary_are_disjoint() {
        let mesh = make_square_mesh();
        let domain = extract_domain(&mesh, 2).unwrap().unwrap();
        let boundaries = extract_boundaries(&mesh, 2).unwrap().unwrap();

        // Different cell types, so no cell can belong to both.
        assert_ne!(domain.cell_type, boundaries.cell_type);
    }

    #[test]
    fn test_tag_alignment() {
        let mesh = make_square_mesh();
        let domain = extract_domain(&mesh, 2).unwrap().unwrap();
        let boundaries = extract_boundaries(&mesh, 2).unwrap().unwrap();

        assert_eq!(domain.tags.len(), domain.num_cells());
        assert_eq!(boundaries.tags.len(), boundaries.num_cells());
    }

    #[test]
    fn test_dimension_truncation() {
        let mesh = make_square_mesh();
        let domain = extract_domain(&mesh, 2).unwrap().unwrap();

        assert_eq!(domain.dim, 2);
        assert_eq!(domain.points.len(), mesh.points.len() * 2);
        // Coordinate pairs survive, the zero z column does not.
        assert_eq!(&domain.points[2..4], &[1.0, 0.0]);
    }

    #[test]
    fn test_multiple_blocks_concatenated_in_order() {
        let mut mesh = make_square_mesh();
        mesh.cell_blocks.push(CellBlock {
            cell_type: CellType::Triangle,
            cells: vec![1, 2, 3],
            physical_tags: Some(vec![7]),
        });
        let domain = extract_domain(&mesh, 2).unwrap().unwrap();

        assert_eq!(domain.num_cells(), 3);
        assert_eq!(domain.tags, vec![1, 1, 7]);
        assert_eq!(domain.cells, vec![0, 1, 2, 0, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_no_domain_cells_is_absent_not_error() {
        let mut mesh = make_square_mesh();
        mesh.cell_blocks.retain(|b| b.cell_type != CellType::Triangle);

        assert!(extract_domain(&mesh, 2).unwrap().is_none());
    }

    #[test]
    fn test_no_boundary_cells_is_absent_not_error() {
        let mut mesh = make_square_mesh();
        mesh.cell_blocks.retain(|b| b.cell_type != CellType::Line);

        assert!(extract_boundaries(&mesh, 2).unwrap().is_none());
    }

    #[test]
    fn test_untagged_domain_is_an_error() {
        let mut mesh = make_square_mesh();
        for block in &mut mesh.cell_blocks {
            if block.cell_type == CellType::Triangle {
                block.physical_tags = None;
            }
        }

        let err = extract_domain(&mesh, 2).unwrap_err();
        assert!(matches!(
            err,
            Msh2XdmfError::MissingPhysicalGroup {
                kind: "domain",
                cell_type: CellType::Triangle,
            }
        ));
    }

    #[test]
    fn test_untagged_boundary_is_an_error() {
        let mut mesh = make_square_mesh();
        for block in &mut mesh.cell_blocks {
            if block.cell_type == CellType::Line {
                block.physical_tags = None;
            }
        }

        let err = extract_boundaries(&mesh, 2).unwrap_err();
        assert!(matches!(
            err,
            Msh2XdmfError::MissingPhysicalGroup {
                kind: "boundary",
                ..
            }
        ));
    }

    #[test]
    fn test_extract_domain_3d() {
        let mesh = Mesh {
            points: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
            cell_blocks: vec![
                CellBlock {
                    cell_type: CellType::Triangle,
                    cells: vec![0, 1, 2],
                    physical_tags: Some(vec![4]),
                },
                CellBlock {
                    cell_type: CellType::Tetra,
                    cells: vec![0, 1, 2, 3],
                    physical_tags: Some(vec![9]),
                },
            ],
            cell_sets: vec![],
        };

        let domain = extract_domain(&mesh, 3).unwrap().unwrap();
        assert_eq!(domain.cell_type, CellType::Tetra);
        assert_eq!(domain.tags, vec![9]);
        assert_eq!(domain.points.len(), 12);

        // In 3D the boundary is made of triangles.
        let boundaries = extract_boundaries(&mesh, 3).unwrap().unwrap();
        assert_eq!(boundaries.cell_type, CellType::Triangle);
        assert_eq!(boundaries.tags, vec![4]);
    }

    #[test]
    fn test_invalid_dimension() {
        let mesh = make_square_mesh();
        assert!(matches!(
            extract_domain(&mesh, 4),
            Err(Msh2XdmfError::InvalidDimension(4))
        ));
    }
}
