//! XDMF/H5 writer and reader
//!
//! Each extracted mesh is serialized as a pair of files: a light XDMF XML
//! description next to an HDF5 sidecar holding the bulk arrays. The sidecar
//! layout is fixed: `data0` = point coordinates, `data1` = cell
//! connectivity, `data2` = the per-cell tag array.

use std::fs;
use std::path::Path;

use ndarray::Array2;

use crate::error::{Msh2XdmfError, Result};
use crate::mesh::{CellType, ExtractedMesh};

const GEOMETRY_DATASET: &str = "data0";
const TOPOLOGY_DATASET: &str = "data1";
const TAGS_DATASET: &str = "data2";

/// Write an extracted mesh as an XDMF + H5 pair.
///
/// The H5 sidecar is placed next to `xdmf_path` with the same stem and a
/// `.h5` extension, and the XDMF file references it by file name so the
/// pair stays relocatable as a unit.
pub fn write_xdmf(mesh: &ExtractedMesh, xdmf_path: &Path) -> Result<()> {
    let h5_path = xdmf_path.with_extension("h5");
    let h5_name = h5_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            Msh2XdmfError::InvalidArgument(format!(
                "output path '{}' has no file name",
                xdmf_path.display()
            ))
        })?
        .to_string();

    log::info!(
        "writing {} {} cells to {}",
        mesh.num_cells(),
        mesh.cell_type,
        xdmf_path.display()
    );

    let npc = mesh.cell_type.nodes_per_cell();
    let geometry = Array2::from_shape_vec((mesh.num_points(), mesh.dim), mesh.points.clone())?;
    let topology = Array2::from_shape_vec((mesh.num_cells(), npc), mesh.cells.clone())?;

    let file = hdf5::File::create(&h5_path)?;
    file.new_dataset_builder()
        .with_data(&geometry)
        .create(GEOMETRY_DATASET)?;
    file.new_dataset_builder()
        .with_data(&topology)
        .create(TOPOLOGY_DATASET)?;
    file.new_dataset_builder()
        .with_data(mesh.tags.as_slice())
        .create(TAGS_DATASET)?;

    fs::write(xdmf_path, render_xdmf(mesh, &h5_name))?;

    log::info!("successfully wrote {}", xdmf_path.display());
    Ok(())
}

fn render_xdmf(mesh: &ExtractedMesh, h5_name: &str) -> String {
    let geometry_type = if mesh.dim == 2 { "XY" } else { "XYZ" };
    let num_points = mesh.num_points();
    let num_cells = mesh.num_cells();
    let npc = mesh.cell_type.nodes_per_cell();
    let dim = mesh.dim;
    let topology = mesh.cell_type.xdmf_topology();
    let tag_name = &mesh.tag_name;

    format!(
        r#"<?xml version="1.0"?>
<!DOCTYPE Xdmf SYSTEM "Xdmf.dtd" []>
<Xdmf Version="3.0">
  <Domain>
    <Grid Name="Grid">
      <Geometry GeometryType="{geometry_type}">
        <DataItem DataType="Float" Dimensions="{num_points} {dim}" Format="HDF" Precision="8">{h5_name}:/{GEOMETRY_DATASET}</DataItem>
      </Geometry>
      <Topology NodesPerElement="{npc}" NumberOfElements="{num_cells}" TopologyType="{topology}">
        <DataItem DataType="Int" Dimensions="{num_cells} {npc}" Format="HDF" Precision="8">{h5_name}:/{TOPOLOGY_DATASET}</DataItem>
      </Topology>
      <Attribute AttributeType="Scalar" Center="Cell" Name="{tag_name}">
        <DataItem DataType="Int" Dimensions="{num_cells}" Format="HDF" Precision="4">{h5_name}:/{TAGS_DATASET}</DataItem>
      </Attribute>
    </Grid>
  </Domain>
</Xdmf>
"#
    )
}

/// Read back an XDMF + H5 pair written by [`write_xdmf`].
///
/// The bulk arrays are read from the H5 sidecar; the cell type is recovered
/// from the connectivity width and the working dimension from the geometry
/// width. `tag_name` names the per-cell array by convention
/// (`"subdomains"` or `"boundaries"`).
pub fn read_xdmf(xdmf_path: &Path, tag_name: &str) -> Result<ExtractedMesh> {
    let h5_path = xdmf_path.with_extension("h5");
    let file = hdf5::File::open(&h5_path)?;

    let geometry = file.dataset(GEOMETRY_DATASET)?.read_2d::<f64>()?;
    let topology = file.dataset(TOPOLOGY_DATASET)?.read_2d::<u64>()?;
    let tags = file.dataset(TAGS_DATASET)?.read_1d::<i32>()?;

    let dim = geometry.ncols();
    if dim != 2 && dim != 3 {
        return Err(Msh2XdmfError::Xdmf(format!(
            "geometry in '{}' has {dim} columns, expected 2 or 3",
            h5_path.display()
        )));
    }
    let cell_type = match topology.ncols() {
        2 => CellType::Line,
        3 => CellType::Triangle,
        4 => CellType::Tetra,
        n => {
            return Err(Msh2XdmfError::Xdmf(format!(
                "topology in '{}' has {n} nodes per cell, expected 2, 3 or 4",
                h5_path.display()
            )))
        }
    };
    if tags.len() != topology.nrows() {
        return Err(Msh2XdmfError::Xdmf(format!(
            "'{}' holds {} tags for {} cells",
            h5_path.display(),
            tags.len(),
            topology.nrows()
        )));
    }

    Ok(ExtractedMesh {
        dim,
        points: geometry.into_raw_vec(),
        cell_type,
        cells: topology.into_raw_vec(),
        tag_name: tag_name.to_string(),
        tags: tags.to_vec(),
    })
}
