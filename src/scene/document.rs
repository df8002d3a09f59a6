use crate::scene::{MeshRecord, SceneNode};

/// The imported scene: an ordered mesh list and the root of the node tree.
///
/// `SceneDoc` is pure data. It is produced once by an importer and then only
/// read, by the skinning pass and the reporter.
#[derive(Debug, Clone)]
pub struct SceneDoc {
    pub meshes: Vec<MeshRecord>,
    pub root: SceneNode,
}

impl SceneDoc {
    #[must_use]
    pub fn new(root: SceneNode) -> Self {
        Self {
            meshes: Vec::new(),
            root,
        }
    }

    /// Sum of the vertex counts of all meshes.
    #[must_use]
    pub fn total_vertex_count(&self) -> u32 {
        self.meshes.iter().map(|m| m.vertex_count).sum()
    }

    /// Sum of the index counts of all meshes.
    #[must_use]
    pub fn total_index_count(&self) -> u32 {
        self.meshes.iter().map(|m| m.index_count).sum()
    }

    /// Sum of the bone counts of all meshes (shared bones counted once per
    /// mesh that records them, matching the per-mesh view of the data).
    #[must_use]
    pub fn total_bone_count(&self) -> usize {
        self.meshes.iter().map(|m| m.bones.len()).sum()
    }
}
