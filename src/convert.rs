//! Top-level conversion driver

use std::fs;
use std::path::Path;

use crate::error::{Msh2XdmfError, Result};
use crate::io::msh::read_msh;
use crate::io::xdmf::write_xdmf;
use crate::mesh::{extract_boundaries, extract_domain};
use crate::table::build_association_table;

/// Convert a GMSH mesh into XDMF/H5 pairs plus an association table.
///
/// Writes `<prefix>_domain.xdmf`/`.h5`, `<prefix>_boundaries.xdmf`/`.h5`
/// and `<prefix>_association_table.ini` into `directory`, where `<prefix>`
/// is the mesh file stem.
///
/// The domain is mandatory: domain cells without physical-group tags abort
/// the conversion before the domain file is written. A mesh without
/// boundary cells (or without domain cells) only produces a warning and
/// skips the corresponding file. There is no atomicity across the output
/// files; an aborted conversion can leave earlier outputs on disk.
pub fn msh2xdmf(msh_file: &Path, dim: usize, directory: &Path) -> Result<()> {
    if dim != 2 && dim != 3 {
        return Err(Msh2XdmfError::InvalidDimension(dim));
    }
    let prefix = msh_file
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            Msh2XdmfError::InvalidArgument(format!(
                "cannot derive an output prefix from '{}'",
                msh_file.display()
            ))
        })?;

    let mesh = read_msh(msh_file)?;
    fs::create_dir_all(directory)?;

    // The domain comes first so that its fatal missing-group error aborts
    // the conversion before anything is written.
    if let Some(domain) = extract_domain(&mesh, dim)? {
        write_xdmf(&domain, &directory.join(format!("{prefix}_domain.xdmf")))?;
    }
    if let Some(boundaries) = extract_boundaries(&mesh, dim)? {
        write_xdmf(
            &boundaries,
            &directory.join(format!("{prefix}_boundaries.xdmf")),
        )?;
    }

    let table = build_association_table(&mesh)?;
    println!("{}", table.render());
    table.write(&directory.join(format!("{prefix}_association_table.ini")))?;

    Ok(())
}
