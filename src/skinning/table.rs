use crate::errors::{Result, RigError};
use crate::scene::SceneDoc;
use crate::skinning::{BoneIndex, VertexBoneBinding};

/// The flattened skinning view of a document: one binding per global vertex
/// plus the scene-global bone id table.
///
/// Global vertex indices address the whole-scene vertex list formed by
/// concatenating the meshes in document order; `base_vertex[i]` is the
/// offset at which mesh `i`'s vertices start.
#[derive(Debug, Default)]
pub struct SkinTable {
    pub base_vertex: Vec<u32>,
    pub bindings: Vec<VertexBoneBinding>,
    pub bones: BoneIndex,
}

impl SkinTable {
    /// Builds the table in a single pass over the document.
    ///
    /// Meshes are visited in document order and their bones in mesh order,
    /// which fixes the dense id assignment: the first bone name encountered
    /// gets id 0. A bone name shared between meshes resolves to the id it
    /// was first given.
    pub fn build(doc: &SceneDoc) -> Result<Self> {
        let mut table = Self {
            base_vertex: Vec::with_capacity(doc.meshes.len()),
            bindings: vec![VertexBoneBinding::new(); doc.total_vertex_count() as usize],
            bones: BoneIndex::new(),
        };

        let mut base = 0u32;
        for mesh in &doc.meshes {
            table.base_vertex.push(base);

            for bone in &mesh.bones {
                let bone_id = table.bones.intern(&bone.name);

                for vw in &bone.weights {
                    if vw.vertex >= mesh.vertex_count {
                        return Err(RigError::VertexOutOfRange {
                            bone: bone.name.clone(),
                            vertex: vw.vertex,
                            mesh: mesh.name.clone(),
                            vertex_count: mesh.vertex_count,
                        });
                    }

                    let global = base + vw.vertex;
                    if table.bindings[global as usize]
                        .push(bone_id, vw.weight)
                        .is_none()
                    {
                        return Err(RigError::BoneInfluenceOverflow {
                            vertex: global,
                            bone: bone.name.clone(),
                        });
                    }
                }
            }

            base += mesh.vertex_count;
        }

        log::debug!(
            "skin table: {} vertices, {} distinct bones across {} meshes",
            table.bindings.len(),
            table.bones.len(),
            doc.meshes.len()
        );

        Ok(table)
    }

    /// Global index of `local_vertex` within mesh `mesh_index`.
    #[must_use]
    pub fn global_vertex(&self, mesh_index: usize, local_vertex: u32) -> u32 {
        self.base_vertex[mesh_index] + local_vertex
    }

    /// The binding of one global vertex.
    #[must_use]
    pub fn binding(&self, global_vertex: u32) -> Option<&VertexBoneBinding> {
        self.bindings.get(global_vertex as usize)
    }
}
