//! Human-readable scene trace
//!
//! Line-oriented dump of a [`SceneDoc`]: per-mesh vertex/index/bone counts,
//! per-bone affected-vertex counts with offset matrices, and the indented
//! node-hierarchy listing. Matrices print row-major, one row per line.
//!
//! The mesh pass also builds the [`SkinTable`], so a malformed asset (too
//! many influences on one vertex, out-of-range weight indices) fails the
//! dump instead of producing silently wrong skinning data.

use std::io::Write;

use glam::Mat4;

use crate::errors::Result;
use crate::scene::{SceneDoc, SceneNode};
use crate::skinning::SkinTable;

const BANNER: &str = "*******************************************************";
const INDENT_STEP: usize = 4;

/// Dumps the whole document: meshes first, then the node hierarchy.
pub fn report_scene<W: Write>(out: &mut W, doc: &SceneDoc) -> Result<()> {
    report_meshes(out, doc)?;
    report_hierarchy(out, doc)?;
    Ok(())
}

/// Dumps the mesh list and every bone with its offset matrix, then a totals
/// line. Returns the skin table built while validating the document.
pub fn report_meshes<W: Write>(out: &mut W, doc: &SceneDoc) -> Result<SkinTable> {
    let table = SkinTable::build(doc)?;

    writeln!(out, "{BANNER}")?;
    writeln!(out, "Parsing {} meshes", doc.meshes.len())?;
    writeln!(out)?;

    for (i, mesh) in doc.meshes.iter().enumerate() {
        writeln!(
            out,
            "  Mesh {i} '{}': vertices {} indices {} bones {}",
            mesh.name,
            mesh.vertex_count,
            mesh.index_count,
            mesh.bones.len()
        )?;
        writeln!(out)?;

        for bone in &mesh.bones {
            writeln!(
                out,
                "      Bone '{}': num vertices affected by this bone: {}",
                bone.name,
                bone.weights.len()
            )?;
            write_matrix(out, &bone.offset_matrix, 0)?;
            writeln!(out)?;
        }

        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Total vertices {} total indices {} total bones {}",
        doc.total_vertex_count(),
        doc.total_index_count(),
        doc.total_bone_count()
    )?;

    log::debug!("document resolves to {} distinct bones", table.bones.len());
    Ok(table)
}

/// Dumps the node tree, each level indented by four more spaces.
pub fn report_hierarchy<W: Write>(out: &mut W, doc: &SceneDoc) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{BANNER}")?;
    writeln!(out, "Parsing the node hierarchy")?;
    write_node(out, &doc.root, 0)?;

    let max_depth = doc.root.walk().map(|(_, depth)| depth).max().unwrap_or(0);
    log::debug!(
        "hierarchy contains {} nodes (max depth {max_depth})",
        doc.root.subtree_len()
    );
    Ok(())
}

fn write_node<W: Write>(out: &mut W, node: &SceneNode, depth: usize) -> Result<()> {
    let indent = depth * INDENT_STEP;
    writeln!(
        out,
        "{:indent$}Node name: '{}' num children {} num meshes {}",
        "",
        node.name,
        node.children.len(),
        node.mesh_count
    )?;
    writeln!(out, "{:indent$}Node transformation:", "")?;
    write_matrix(out, &node.transform, indent)?;

    let child_indent = indent + INDENT_STEP;
    for (i, child) in node.children().iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{:child_indent$}--- {i} ---", "")?;
        write_node(out, child, depth + 1)?;
    }
    Ok(())
}

/// Writes the matrix row-major, one row per line, at the given indent.
fn write_matrix<W: Write>(out: &mut W, matrix: &Mat4, indent: usize) -> Result<()> {
    for i in 0..4 {
        let row = matrix.row(i);
        writeln!(
            out,
            "{:indent$}{:.6} {:.6} {:.6} {:.6}",
            "", row.x, row.y, row.z, row.w
        )?;
    }
    Ok(())
}
