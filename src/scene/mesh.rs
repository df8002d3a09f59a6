use glam::Mat4;

/// One vertex influence of a bone: a vertex index local to the owning mesh
/// and the weight the bone contributes to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexWeight {
    pub vertex: u32,
    pub weight: f32,
}

/// A skeletal joint as recorded by one mesh.
///
/// The offset matrix transforms a vertex from mesh local space into bone
/// space (the importer's inverse bind matrix). The weight list is ordered as
/// the importer produced it.
#[derive(Debug, Clone)]
pub struct BoneRecord {
    pub name: String,
    pub offset_matrix: Mat4,
    pub weights: Vec<VertexWeight>,
}

impl BoneRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, offset_matrix: Mat4) -> Self {
        Self {
            name: name.into(),
            offset_matrix,
            weights: Vec::new(),
        }
    }
}

/// One mesh of the document.
///
/// Only the counts and the bone list matter here; vertex attributes are not
/// retained. A mesh is identified by its position in [`SceneDoc::meshes`].
///
/// [`SceneDoc::meshes`]: crate::scene::SceneDoc
#[derive(Debug, Clone)]
pub struct MeshRecord {
    pub name: String,
    pub vertex_count: u32,
    pub index_count: u32,
    pub bones: Vec<BoneRecord>,
}

impl MeshRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, vertex_count: u32, index_count: u32) -> Self {
        Self {
            name: name.into(),
            vertex_count,
            index_count,
            bones: Vec::new(),
        }
    }

    /// Whether any bone influences this mesh.
    #[inline]
    #[must_use]
    pub fn has_bones(&self) -> bool {
        !self.bones.is_empty()
    }
}
