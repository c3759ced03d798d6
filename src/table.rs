//! Association table between physical group labels and integer tags
//!
//! The table lets downstream code refer to physical groups by name instead
//! of raw integer tag. It is persisted as a small `.ini`-style keyed text
//! section and must survive a write/read round trip unchanged.

use std::fs;
use std::path::Path;

use crate::error::{Msh2XdmfError, Result};
use crate::mesh::Mesh;

/// Reserved cell-set label marking lower-dimensional bounding entities.
///
/// Entries under this label are bookkeeping, not physical groups, and are
/// never written to the association table.
pub const BOUNDING_ENTITIES_LABEL: &str = "gmsh:bounding_entities";

const SECTION: &str = "ASSOCIATION TABLE";

/// Ordered mapping from physical group label to integer tag.
///
/// Insertion order is preserved so that serialization is deterministic
/// across runs on identical input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociationTable {
    entries: Vec<(String, i32)>,
}

impl AssociationTable {
    /// Append a label/tag pair
    pub fn insert(&mut self, label: impl Into<String>, tag: i32) {
        self.entries.push((label.into(), tag));
    }

    /// Look up the tag for a label
    pub fn get(&self, label: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, t)| *t)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.entries.iter().map(|(l, t)| (l.as_str(), *t))
    }

    /// Write the table as an `.ini`-style keyed section.
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut out = format!("[{SECTION}]\n");
        for (label, tag) in &self.entries {
            out.push_str(&format!("{label} = {tag}\n"));
        }
        fs::write(path, out)?;
        log::info!("wrote association table to {}", path.display());
        Ok(())
    }

    /// Read a table previously written by [`AssociationTable::write`],
    /// coercing tag values back to integers.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut table = AssociationTable::default();
        let mut in_section = false;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }
            if line.starts_with('[') {
                in_section = line == format!("[{SECTION}]");
                continue;
            }
            if !in_section {
                continue;
            }
            let (label, value) = line
                .split_once('=')
                .ok_or_else(|| Msh2XdmfError::Table(format!("malformed line '{line}'")))?;
            let tag: i32 = value.trim().parse().map_err(|_| {
                Msh2XdmfError::Table(format!(
                    "tag for '{}' is not an integer: '{}'",
                    label.trim(),
                    value.trim()
                ))
            })?;
            table.insert(label.trim(), tag);
        }

        Ok(table)
    }

    /// Pretty-print the label/tag correspondence as a boxed two-column
    /// table. Advisory output only, never parsed by callers.
    pub fn render(&self) -> String {
        let topbot = format!("+{:-^41}+", "");
        let separator = format!("+{:-^20}+{:-^20}+", "", "");

        let mut out = String::new();
        out.push_str(&topbot);
        out.push('\n');
        out.push_str(&format!("|{:^20}|{:^20}|\n", "GMSH label", "tag value"));
        out.push_str(&separator);
        out.push('\n');
        for (label, tag) in &self.entries {
            out.push_str(&format!("|{label:^20}|{tag:^20}|\n"));
        }
        out.push_str(&topbot);
        out
    }
}

/// Derive the label → tag association from the mesh's physical-group
/// bookkeeping.
///
/// For each labeled cell set, exactly one cell block is expected to hold
/// its members; the tag is read from that block's physical-tag array at the
/// first member cell (all cells of a group share one tag by construction in
/// GMSH). A label whose membership spans several blocks is a data-quality
/// error, reported as [`Msh2XdmfError::AmbiguousPhysicalGroup`] instead of
/// silently picking one block.
pub fn build_association_table(mesh: &Mesh) -> Result<AssociationTable> {
    let mut table = AssociationTable::default();

    for set in &mesh.cell_sets {
        if set.label == BOUNDING_ENTITIES_LABEL {
            continue;
        }

        let mut found: Option<usize> = None;
        for (index, members) in set.blocks.iter().enumerate() {
            if members.is_empty() {
                continue;
            }
            if let Some(first) = found {
                return Err(Msh2XdmfError::AmbiguousPhysicalGroup {
                    label: set.label.clone(),
                    first,
                    second: index,
                });
            }
            found = Some(index);
        }

        let Some(index) = found else {
            log::warn!(
                "physical group '{}' has no cells; leaving it out of the association table",
                set.label
            );
            continue;
        };

        let tags = mesh.cell_blocks[index].physical_tags.as_deref().ok_or_else(|| {
            Msh2XdmfError::InvalidMesh(format!(
                "cell set '{}' points at cell block {index}, which has no physical tags",
                set.label
            ))
        })?;
        let first_cell = set.blocks[index][0];
        let tag = *tags.get(first_cell).ok_or_else(|| {
            Msh2XdmfError::InvalidMesh(format!(
                "cell set '{}' references cell {first_cell} past the end of block {index}",
                set.label
            ))
        })?;

        table.insert(set.label.clone(), tag);
    }

    Ok(table)
}
