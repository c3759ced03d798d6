//! GMSH `.msh` file reader
//!
//! Supports reading MSH format versions 2.2 and 4.1 (ASCII). Binary files
//! are rejected. Only the sections needed for physical-group extraction are
//! parsed: `$MeshFormat`, `$PhysicalNames`, `$Entities`, `$Nodes` and
//! `$Elements`; any other section is skipped.
//!
//! ## Supported element types
//! - 1 = Line (2-node)
//! - 2 = Triangle (3-node)
//! - 4 = Tetrahedron (4-node)
//!
//! Other element types are skipped. In version 4.1 files the per-cell
//! physical tag is inherited from the geometric entity owning the element
//! block; in version 2.2 files it is read directly from each element line.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Msh2XdmfError, Result};
use crate::mesh::{CellBlock, CellSet, CellType, Mesh};

/// One `(dimension, tag, name)` entry from the `$PhysicalNames` section
#[derive(Debug, Clone)]
struct PhysicalName {
    dim: usize,
    tag: i32,
    name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MshVersion {
    V2,
    V4,
}

/// Read a GMSH mesh file into the in-memory representation.
pub fn read_msh(path: &Path) -> Result<Mesh> {
    log::info!("reading MSH file {}", path.display());
    let file = File::open(path).map_err(|e| {
        Msh2XdmfError::InvalidArgument(format!("cannot open mesh file '{}': {e}", path.display()))
    })?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let mut version: Option<MshVersion> = None;
    let mut names: Vec<PhysicalName> = Vec::new();
    let mut entity_tags: HashMap<(usize, i32), Vec<i32>> = HashMap::new();
    let mut points: Vec<[f64; 3]> = Vec::new();
    let mut node_index: HashMap<u64, usize> = HashMap::new();
    let mut blocks: Vec<CellBlock> = Vec::new();

    while let Some(line) = lines.next() {
        let line = line?;
        let line = line.trim();
        match line {
            "$MeshFormat" => version = Some(parse_mesh_format(&mut lines)?),
            "$PhysicalNames" => names = parse_physical_names(&mut lines)?,
            "$Entities" => entity_tags = parse_entities(&mut lines)?,
            "$Nodes" => match require_version(version)? {
                MshVersion::V2 => parse_nodes_v2(&mut lines, &mut points, &mut node_index)?,
                MshVersion::V4 => parse_nodes_v4(&mut lines, &mut points, &mut node_index)?,
            },
            "$Elements" => match require_version(version)? {
                MshVersion::V2 => blocks = parse_elements_v2(&mut lines, &node_index)?,
                MshVersion::V4 => {
                    blocks = parse_elements_v4(&mut lines, &node_index, &entity_tags)?
                }
            },
            other => {
                if let Some(section) = other.strip_prefix('$') {
                    skip_section(&mut lines, section)?;
                }
            }
        }
    }

    if points.is_empty() {
        return Err(Msh2XdmfError::MshParse("missing $Nodes section".to_string()));
    }

    let cell_sets = build_cell_sets(&blocks, &names);

    log::info!(
        "read {} points, {} cell blocks, {} physical names",
        points.len(),
        blocks.len(),
        names.len()
    );

    Ok(Mesh {
        points,
        cell_blocks: blocks,
        cell_sets,
    })
}

fn require_version(version: Option<MshVersion>) -> Result<MshVersion> {
    version.ok_or_else(|| {
        Msh2XdmfError::MshParse("mesh data appears before the $MeshFormat section".to_string())
    })
}

fn next_line<I>(lines: &mut I, section: &str) -> Result<String>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Err(Msh2XdmfError::MshParse(format!(
            "unexpected end of file in ${section}"
        ))),
    }
}

fn expect_end<I>(lines: &mut I, section: &str) -> Result<()>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let line = next_line(lines, section)?;
    if line == format!("$End{section}") {
        Ok(())
    } else {
        Err(Msh2XdmfError::MshParse(format!(
            "expected $End{section}, found '{line}'"
        )))
    }
}

fn skip_section<I>(lines: &mut I, section: &str) -> Result<()>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let end = format!("$End{section}");
    for line in lines.by_ref() {
        if line?.trim() == end {
            return Ok(());
        }
    }
    Err(Msh2XdmfError::MshParse(format!(
        "unterminated ${section} section"
    )))
}

fn parse_tok<T: FromStr>(tok: &str, what: &str) -> Result<T> {
    tok.parse()
        .map_err(|_| Msh2XdmfError::MshParse(format!("invalid {what}: '{tok}'")))
}

fn parse_mesh_format<I>(lines: &mut I) -> Result<MshVersion>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let line = next_line(lines, "MeshFormat")?;
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(Msh2XdmfError::MshParse(format!(
            "invalid $MeshFormat line: '{line}'"
        )));
    }

    let version = match parts[0] {
        v if v.starts_with("2.") => MshVersion::V2,
        v if v.starts_with("4.") => MshVersion::V4,
        v => return Err(Msh2XdmfError::UnsupportedMshVersion(v.to_string())),
    };
    // file-type 1 means binary
    if parts[1] != "0" {
        return Err(Msh2XdmfError::UnsupportedMshVersion(format!(
            "{} binary",
            parts[0]
        )));
    }

    expect_end(lines, "MeshFormat")?;
    Ok(version)
}

fn parse_physical_names<I>(lines: &mut I) -> Result<Vec<PhysicalName>>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let count: usize = parse_tok(&next_line(lines, "PhysicalNames")?, "physical name count")?;
    let mut names = Vec::with_capacity(count);

    for _ in 0..count {
        let line = next_line(lines, "PhysicalNames")?;
        // Format: dimension tag "name" (the name may contain spaces)
        let (head, name) = match (line.find('"'), line.rfind('"')) {
            (Some(open), Some(close)) if close > open => {
                (&line[..open], line[open + 1..close].to_string())
            }
            _ => {
                return Err(Msh2XdmfError::MshParse(format!(
                    "invalid physical name line: '{line}'"
                )))
            }
        };
        let mut head = head.split_whitespace();
        let dim: usize = parse_tok(head.next().unwrap_or(""), "physical name dimension")?;
        let tag: i32 = parse_tok(head.next().unwrap_or(""), "physical name tag")?;
        names.push(PhysicalName { dim, tag, name });
    }

    expect_end(lines, "PhysicalNames")?;
    Ok(names)
}

/// Parse the `$Entities` section (4.1 only) into a map from
/// `(dimension, entity tag)` to the entity's physical tags.
fn parse_entities<I>(lines: &mut I) -> Result<HashMap<(usize, i32), Vec<i32>>>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let header = next_line(lines, "Entities")?;
    let counts: Vec<usize> = header
        .split_whitespace()
        .map(|t| parse_tok(t, "entity count"))
        .collect::<Result<_>>()?;
    if counts.len() != 4 {
        return Err(Msh2XdmfError::MshParse(format!(
            "invalid $Entities header: '{header}'"
        )));
    }

    let mut map = HashMap::new();
    for (dim, &count) in counts.iter().enumerate() {
        // Points carry a location (3 values), higher entities a bounding
        // box (6 values), before the physical tag count.
        let skip = if dim == 0 { 3 } else { 6 };
        for _ in 0..count {
            let line = next_line(lines, "Entities")?;
            let toks: Vec<&str> = line.split_whitespace().collect();
            if toks.len() < skip + 2 {
                return Err(Msh2XdmfError::MshParse(format!(
                    "invalid entity line: '{line}'"
                )));
            }
            let tag: i32 = parse_tok(toks[0], "entity tag")?;
            let n_phys: usize = parse_tok(toks[skip + 1], "physical tag count")?;
            if toks.len() < skip + 2 + n_phys {
                return Err(Msh2XdmfError::MshParse(format!(
                    "entity line is missing physical tags: '{line}'"
                )));
            }
            let phys: Vec<i32> = toks[skip + 2..skip + 2 + n_phys]
                .iter()
                .map(|t| parse_tok(t, "physical tag"))
                .collect::<Result<_>>()?;
            if !phys.is_empty() {
                map.insert((dim, tag), phys);
            }
        }
    }

    expect_end(lines, "Entities")?;
    Ok(map)
}

fn parse_nodes_v2<I>(
    lines: &mut I,
    points: &mut Vec<[f64; 3]>,
    node_index: &mut HashMap<u64, usize>,
) -> Result<()>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let count: usize = parse_tok(&next_line(lines, "Nodes")?, "node count")?;
    points.reserve(count);

    for _ in 0..count {
        let line = next_line(lines, "Nodes")?;
        let toks: Vec<&str> = line.split_whitespace().collect();
        if toks.len() < 4 {
            return Err(Msh2XdmfError::MshParse(format!(
                "invalid node line: '{line}'"
            )));
        }
        // Format: tag x y z
        let tag: u64 = parse_tok(toks[0], "node tag")?;
        let x: f64 = parse_tok(toks[1], "node coordinate")?;
        let y: f64 = parse_tok(toks[2], "node coordinate")?;
        let z: f64 = parse_tok(toks[3], "node coordinate")?;
        node_index.insert(tag, points.len());
        points.push([x, y, z]);
    }

    expect_end(lines, "Nodes")
}

fn parse_nodes_v4<I>(
    lines: &mut I,
    points: &mut Vec<[f64; 3]>,
    node_index: &mut HashMap<u64, usize>,
) -> Result<()>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let header = next_line(lines, "Nodes")?;
    let toks: Vec<&str> = header.split_whitespace().collect();
    if toks.len() < 4 {
        return Err(Msh2XdmfError::MshParse(format!(
            "invalid $Nodes header: '{header}'"
        )));
    }
    let n_blocks: usize = parse_tok(toks[0], "node block count")?;
    let n_nodes: usize = parse_tok(toks[1], "node count")?;
    points.reserve(n_nodes);

    for _ in 0..n_blocks {
        let block_header = next_line(lines, "Nodes")?;
        let btoks: Vec<&str> = block_header.split_whitespace().collect();
        if btoks.len() < 4 {
            return Err(Msh2XdmfError::MshParse(format!(
                "invalid node block header: '{block_header}'"
            )));
        }
        let n_in_block: usize = parse_tok(btoks[3], "node count")?;

        // Node tags come first, then the coordinates in the same order.
        let mut tags = Vec::with_capacity(n_in_block);
        for _ in 0..n_in_block {
            tags.push(parse_tok::<u64>(&next_line(lines, "Nodes")?, "node tag")?);
        }
        for tag in tags {
            let line = next_line(lines, "Nodes")?;
            let ctoks: Vec<&str> = line.split_whitespace().collect();
            if ctoks.len() < 3 {
                return Err(Msh2XdmfError::MshParse(format!(
                    "invalid node coordinate line: '{line}'"
                )));
            }
            let x: f64 = parse_tok(ctoks[0], "node coordinate")?;
            let y: f64 = parse_tok(ctoks[1], "node coordinate")?;
            let z: f64 = parse_tok(ctoks[2], "node coordinate")?;
            node_index.insert(tag, points.len());
            points.push([x, y, z]);
        }
    }

    expect_end(lines, "Nodes")
}

fn resolve_node(node_index: &HashMap<u64, usize>, tag: u64) -> Result<u64> {
    node_index
        .get(&tag)
        .map(|&i| i as u64)
        .ok_or_else(|| Msh2XdmfError::InvalidMesh(format!("element references unknown node {tag}")))
}

fn parse_elements_v2<I>(lines: &mut I, node_index: &HashMap<u64, usize>) -> Result<Vec<CellBlock>>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let count: usize = parse_tok(&next_line(lines, "Elements")?, "element count")?;
    let mut blocks: Vec<CellBlock> = Vec::new();

    for _ in 0..count {
        let line = next_line(lines, "Elements")?;
        let toks: Vec<&str> = line.split_whitespace().collect();
        if toks.len() < 3 {
            return Err(Msh2XdmfError::MshParse(format!(
                "invalid element line: '{line}'"
            )));
        }
        // Format: tag type n_tags tag1 ... tagN node1 node2 ...
        let code: i32 = parse_tok(toks[1], "element type")?;
        let n_tags: usize = parse_tok(toks[2], "element tag count")?;

        let Some(cell_type) = CellType::from_msh_code(code) else {
            log::debug!("skipping element of unsupported type {code}");
            continue;
        };

        // The first tag is the physical group tag.
        let physical: Option<i32> = if n_tags > 0 {
            Some(parse_tok(
                toks.get(3).copied().unwrap_or(""),
                "physical tag",
            )?)
        } else {
            None
        };

        let node_start = 3 + n_tags;
        let npc = cell_type.nodes_per_cell();
        if toks.len() < node_start + npc {
            return Err(Msh2XdmfError::MshParse(format!(
                "{cell_type} element has fewer than {npc} nodes: '{line}'"
            )));
        }

        // One block per cell type, in order of first appearance.
        let idx = match blocks.iter().position(|b| b.cell_type == cell_type) {
            Some(i) => i,
            None => {
                blocks.push(CellBlock {
                    cell_type,
                    cells: Vec::new(),
                    physical_tags: Some(Vec::new()),
                });
                blocks.len() - 1
            }
        };

        for tok in &toks[node_start..node_start + npc] {
            let tag: u64 = parse_tok(tok, "element node tag")?;
            let index = resolve_node(node_index, tag)?;
            blocks[idx].cells.push(index);
        }

        // A single untagged cell drops the whole tag array: a block is
        // either fully tagged or untagged.
        match (physical, &mut blocks[idx].physical_tags) {
            (Some(p), Some(tags)) => tags.push(p),
            (None, slot) => *slot = None,
            (Some(_), None) => {}
        }
    }

    expect_end(lines, "Elements")?;
    Ok(blocks)
}

fn parse_elements_v4<I>(
    lines: &mut I,
    node_index: &HashMap<u64, usize>,
    entity_tags: &HashMap<(usize, i32), Vec<i32>>,
) -> Result<Vec<CellBlock>>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let header = next_line(lines, "Elements")?;
    let toks: Vec<&str> = header.split_whitespace().collect();
    if toks.is_empty() {
        return Err(Msh2XdmfError::MshParse(format!(
            "invalid $Elements header: '{header}'"
        )));
    }
    let n_blocks: usize = parse_tok(toks[0], "element block count")?;
    let mut blocks = Vec::new();

    for _ in 0..n_blocks {
        let block_header = next_line(lines, "Elements")?;
        let btoks: Vec<&str> = block_header.split_whitespace().collect();
        if btoks.len() < 4 {
            return Err(Msh2XdmfError::MshParse(format!(
                "invalid element block header: '{block_header}'"
            )));
        }
        // Format: entityDim entityTag elementType numElementsInBlock
        let entity_dim: usize = parse_tok(btoks[0], "entity dimension")?;
        let entity_tag: i32 = parse_tok(btoks[1], "entity tag")?;
        let code: i32 = parse_tok(btoks[2], "element type")?;
        let n_elems: usize = parse_tok(btoks[3], "element count")?;

        let Some(cell_type) = CellType::from_msh_code(code) else {
            log::debug!("skipping {n_elems} elements of unsupported type {code}");
            for _ in 0..n_elems {
                next_line(lines, "Elements")?;
            }
            continue;
        };

        let npc = cell_type.nodes_per_cell();
        let mut cells = Vec::with_capacity(n_elems * npc);
        for _ in 0..n_elems {
            let line = next_line(lines, "Elements")?;
            let etoks: Vec<&str> = line.split_whitespace().collect();
            if etoks.len() < 1 + npc {
                return Err(Msh2XdmfError::MshParse(format!(
                    "{cell_type} element has fewer than {npc} nodes: '{line}'"
                )));
            }
            for tok in &etoks[1..1 + npc] {
                let tag: u64 = parse_tok(tok, "element node tag")?;
                cells.push(resolve_node(node_index, tag)?);
            }
        }

        // All elements of a block live on one geometric entity and inherit
        // its first physical tag; entities without physical tags produce an
        // untagged block.
        let physical_tags = entity_tags
            .get(&(entity_dim, entity_tag))
            .map(|phys| vec![phys[0]; n_elems]);

        blocks.push(CellBlock {
            cell_type,
            cells,
            physical_tags,
        });
    }

    expect_end(lines, "Elements")?;
    Ok(blocks)
}

/// Build the per-label membership arrays from the physical names and the
/// per-cell tag arrays. Label order follows the `$PhysicalNames` section,
/// which keeps the association table deterministic.
fn build_cell_sets(blocks: &[CellBlock], names: &[PhysicalName]) -> Vec<CellSet> {
    names
        .iter()
        .map(|pn| {
            let per_block = blocks
                .iter()
                .map(|block| {
                    if block.cell_type.dim() != pn.dim {
                        return Vec::new();
                    }
                    match &block.physical_tags {
                        Some(tags) => tags
                            .iter()
                            .enumerate()
                            .filter(|(_, &t)| t == pn.tag)
                            .map(|(i, _)| i)
                            .collect(),
                        None => Vec::new(),
                    }
                })
                .collect();
            CellSet {
                label: pn.name.clone(),
                blocks: per_block,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as IoWrite;
    use tempfile::NamedTempFile;

    const SQUARE_V2: &str = r#"$MeshFormat
2.2 0 8
$EndMeshFormat
$PhysicalNames
2
1 2 "edge"
2 1 "plate"
$EndPhysicalNames
$Nodes
4
1 0.0 0.0 0.0
2 1.0 0.0 0.0
3 1.0 1.0 0.0
4 0.0 1.0 0.0
$EndNodes
$Elements
6
1 1 2 2 1 1 2
2 1 2 2 2 2 3
3 1 2 2 3 3 4
4 1 2 2 4 4 1
5 2 2 1 1 1 2 3
6 2 2 1 1 1 3 4
$EndElements
"#;

    const SQUARE_V4: &str = r#"$MeshFormat
4.1 0 8
$EndMeshFormat
$PhysicalNames
2
1 2 "edge"
2 1 "plate"
$EndPhysicalNames
$Entities
2 1 1 0
1 0 0 0 0
2 1 0 0 0
1 0 0 0 1 0 0 1 2 2 1 -2
1 0 0 0 1 1 0 1 1 1 1
$EndEntities
$Nodes
1 4 1 4
2 1 0 4
1
2
3
4
0.0 0.0 0.0
1.0 0.0 0.0
1.0 1.0 0.0
0.0 1.0 0.0
$EndNodes
$Elements
2 4 1 4
1 1 1 2
1 1 2
2 2 3
2 1 2 2
3 1 2 3
4 1 3 4
$EndElements
"#;

    fn read_str(content: &str) -> Result<Mesh> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        read_msh(file.path())
    }

    #[test]
    fn test_read_v2_square() {
        let mesh = read_str(SQUARE_V2).unwrap();

        assert_eq!(mesh.num_points(), 4);
        assert_eq!(mesh.cell_blocks.len(), 2);

        let lines = &mesh.cell_blocks[0];
        assert_eq!(lines.cell_type, CellType::Line);
        assert_eq!(lines.num_cells(), 4);
        assert_eq!(lines.physical_tags, Some(vec![2, 2, 2, 2]));

        let tris = &mesh.cell_blocks[1];
        assert_eq!(tris.cell_type, CellType::Triangle);
        assert_eq!(tris.cells, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(tris.physical_tags, Some(vec![1, 1]));
    }

    #[test]
    fn test_read_v2_cell_sets() {
        let mesh = read_str(SQUARE_V2).unwrap();

        assert_eq!(mesh.cell_sets.len(), 2);
        assert_eq!(mesh.cell_sets[0].label, "edge");
        assert_eq!(mesh.cell_sets[0].blocks, vec![vec![0, 1, 2, 3], vec![]]);
        assert_eq!(mesh.cell_sets[1].label, "plate");
        assert_eq!(mesh.cell_sets[1].blocks, vec![vec![], vec![0, 1]]);
    }

    #[test]
    fn test_read_v4_square() {
        let mesh = read_str(SQUARE_V4).unwrap();

        assert_eq!(mesh.num_points(), 4);
        assert_eq!(mesh.cell_blocks.len(), 2);

        let lines = &mesh.cell_blocks[0];
        assert_eq!(lines.cell_type, CellType::Line);
        assert_eq!(lines.cells, vec![0, 1, 1, 2]);
        assert_eq!(lines.physical_tags, Some(vec![2, 2]));

        let tris = &mesh.cell_blocks[1];
        assert_eq!(tris.cell_type, CellType::Triangle);
        assert_eq!(tris.cells, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(tris.physical_tags, Some(vec![1, 1]));

        assert_eq!(mesh.cell_sets[0].label, "edge");
        assert_eq!(mesh.cell_sets[0].blocks, vec![vec![0, 1], vec![]]);
        assert_eq!(mesh.cell_sets[1].blocks, vec![vec![], vec![0, 1]]);
    }

    #[test]
    fn test_untagged_elements_give_untagged_block() {
        let content = r#"$MeshFormat
2.2 0 8
$EndMeshFormat
$Nodes
3
1 0.0 0.0 0.0
2 1.0 0.0 0.0
3 1.0 1.0 0.0
$EndNodes
$Elements
1
1 2 0 1 2 3
$EndElements
"#;
        let mesh = read_str(content).unwrap();
        assert_eq!(mesh.cell_blocks.len(), 1);
        assert_eq!(mesh.cell_blocks[0].physical_tags, None);
        assert!(mesh.cell_sets.is_empty());
    }

    #[test]
    fn test_binary_is_rejected() {
        let content = "$MeshFormat\n4.1 1 8\n$EndMeshFormat\n";
        assert!(matches!(
            read_str(content),
            Err(Msh2XdmfError::UnsupportedMshVersion(_))
        ));
    }

    #[test]
    fn test_unsupported_version_is_rejected() {
        let content = "$MeshFormat\n3.0 0 8\n$EndMeshFormat\n";
        assert!(matches!(
            read_str(content),
            Err(Msh2XdmfError::UnsupportedMshVersion(_))
        ));
    }

    #[test]
    fn test_missing_nodes_is_an_error() {
        let content = "$MeshFormat\n2.2 0 8\n$EndMeshFormat\n";
        assert!(matches!(
            read_str(content),
            Err(Msh2XdmfError::MshParse(_))
        ));
    }

    #[test]
    fn test_unknown_section_is_skipped() {
        let content = r#"$MeshFormat
2.2 0 8
$EndMeshFormat
$Comments
anything at all
$EndComments
$Nodes
1
1 0.0 0.0 0.0
$EndNodes
"#;
        let mesh = read_str(content).unwrap();
        assert_eq!(mesh.num_points(), 1);
    }

    #[test]
    fn test_unknown_element_type_is_skipped() {
        // A quad (type 3) between two triangles.
        let content = r#"$MeshFormat
2.2 0 8
$EndMeshFormat
$Nodes
4
1 0.0 0.0 0.0
2 1.0 0.0 0.0
3 1.0 1.0 0.0
4 0.0 1.0 0.0
$EndNodes
$Elements
3
1 2 2 1 1 1 2 3
2 3 2 1 1 1 2 3 4
3 2 2 1 1 1 3 4
$EndElements
"#;
        let mesh = read_str(content).unwrap();
        assert_eq!(mesh.cell_blocks.len(), 1);
        assert_eq!(mesh.cell_blocks[0].num_cells(), 2);
    }

    #[test]
    fn test_unknown_node_reference_is_an_error() {
        let content = r#"$MeshFormat
2.2 0 8
$EndMeshFormat
$Nodes
2
1 0.0 0.0 0.0
2 1.0 0.0 0.0
$EndNodes
$Elements
1
1 2 2 1 1 1 2 9
$EndElements
"#;
        assert!(matches!(
            read_str(content),
            Err(Msh2XdmfError::InvalidMesh(_))
        ));
    }

    #[test]
    fn test_missing_file_error_names_the_path() {
        let err = read_msh(Path::new("/nonexistent/square.msh")).unwrap_err();
        match err {
            Msh2XdmfError::InvalidArgument(msg) => {
                assert!(msg.contains("/nonexistent/square.msh"), "got: {msg}");
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_physical_name_with_spaces() {
        let content = r#"$MeshFormat
2.2 0 8
$EndMeshFormat
$PhysicalNames
1
2 1 "left plate"
$EndPhysicalNames
$Nodes
3
1 0.0 0.0 0.0
2 1.0 0.0 0.0
3 1.0 1.0 0.0
$EndNodes
$Elements
1
1 2 2 1 1 1 2 3
$EndElements
"#;
        let mesh = read_str(content).unwrap();
        assert_eq!(mesh.cell_sets[0].label, "left plate");
    }
}
