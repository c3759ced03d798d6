//! Solver-side re-import of previously converted meshes
//!
//! Thin pass-through over the XDMF/H5 reader and the association table:
//! no extraction logic lives here. Compiled only with the `import` feature
//! so that builds for the conversion tool alone do not carry it.

use std::path::Path;

use crate::convert;
use crate::error::{Msh2XdmfError, Result};
use crate::io::xdmf::read_xdmf;
use crate::mesh::{CellType, ExtractedMesh};
use crate::table::AssociationTable;

/// Per-cell integer tags over one cell block, the reconstructed
/// equivalent of a solver-side tagged mesh function.
#[derive(Debug, Clone)]
pub struct MeshTags {
    pub cell_type: CellType,
    pub cells: Vec<u64>,
    pub values: Vec<i32>,
}

/// Everything reconstructed from a converted mesh directory
#[derive(Debug, Clone)]
pub struct ImportedMesh {
    /// The domain mesh, with its `"subdomains"` tag array
    pub domain: ExtractedMesh,
    /// Boundary cells and their physical tags
    pub boundaries: MeshTags,
    /// Subdomain tags, present only when requested
    pub subdomains: Option<MeshTags>,
    /// Label → integer tag association, coerced back to integers
    pub table: AssociationTable,
}

/// Re-import a converted mesh from `directory`.
///
/// When the XDMF pair does not exist yet, the conversion is run first from
/// `<prefix>.msh` in the same directory.
pub fn import_mesh(
    prefix: &str,
    dim: usize,
    directory: &Path,
    with_subdomains: bool,
) -> Result<ImportedMesh> {
    let domain_path = directory.join(format!("{prefix}_domain.xdmf"));
    let boundaries_path = directory.join(format!("{prefix}_boundaries.xdmf"));

    if !domain_path.exists() || !boundaries_path.exists() {
        log::info!("XDMF files for '{prefix}' not found; converting first");
        convert::msh2xdmf(&directory.join(format!("{prefix}.msh")), dim, directory)?;
    }

    let domain = read_xdmf(&domain_path, "subdomains")?;
    if domain.dim != dim {
        return Err(Msh2XdmfError::Xdmf(format!(
            "domain in '{}' has dimension {}, expected {dim}",
            domain_path.display(),
            domain.dim
        )));
    }

    let boundary_mesh = read_xdmf(&boundaries_path, "boundaries")?;
    let boundaries = MeshTags {
        cell_type: boundary_mesh.cell_type,
        cells: boundary_mesh.cells,
        values: boundary_mesh.tags,
    };

    let subdomains = with_subdomains.then(|| MeshTags {
        cell_type: domain.cell_type,
        cells: domain.cells.clone(),
        values: domain.tags.clone(),
    });

    let table =
        AssociationTable::read(&directory.join(format!("{prefix}_association_table.ini")))?;

    Ok(ImportedMesh {
        domain,
        boundaries,
        subdomains,
        table,
    })
}
