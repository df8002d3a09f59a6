use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use glam::Mat4;
use gltf::Gltf;

use crate::errors::{Result, RigError};
use crate::scene::{BoneRecord, MeshRecord, SceneDoc, SceneNode, VertexWeight};

/// Imports a glTF document into a [`SceneDoc`].
///
/// Each mesh *primitive* becomes one [`MeshRecord`] (primitives are the
/// per-material splits of a glTF mesh, which is also how classic asset
/// importers slice their meshes). When the primitive's mesh is instanced by
/// a node carrying a skin, the per-vertex `JOINTS_0`/`WEIGHTS_0` channels
/// are inverted into per-bone weight lists: bone `j` collects every
/// `(vertex, weight)` pair with a non-zero weight referencing joint slot `j`.
pub struct GltfLoader;

impl GltfLoader {
    /// Opens and imports the asset at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<SceneDoc> {
        let path = path.as_ref();
        let gltf = Gltf::open(path)?;
        let base_dir = path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Self::from_gltf(&gltf, &base_dir)
    }

    /// Imports an already-parsed document. `base_dir` resolves relative
    /// buffer URIs.
    pub fn from_gltf(gltf: &Gltf, base_dir: &Path) -> Result<SceneDoc> {
        let buffers = load_buffers(gltf, base_dir)?;

        // A glTF skin hangs off the instancing node, not the mesh. Record
        // which skin drives each mesh; the first instance wins.
        let mut mesh_skins: Vec<Option<usize>> = vec![None; gltf.meshes().count()];
        for node in gltf.nodes() {
            if let (Some(mesh), Some(skin)) = (node.mesh(), node.skin()) {
                match mesh_skins[mesh.index()] {
                    None => mesh_skins[mesh.index()] = Some(skin.index()),
                    Some(existing) if existing != skin.index() => {
                        log::warn!(
                            "mesh '{}' is instanced with more than one skin, keeping skin {}",
                            mesh_label(&mesh),
                            existing
                        );
                    }
                    Some(_) => {}
                }
            }
        }

        let skins: Vec<gltf::Skin> = gltf.skins().collect();

        let mut meshes = Vec::new();
        for mesh in gltf.meshes() {
            let skin = mesh_skins[mesh.index()].map(|i| &skins[i]);
            let primitive_count = mesh.primitives().count();

            for (prim_index, primitive) in mesh.primitives().enumerate() {
                let name = if primitive_count > 1 {
                    format!("{}.{prim_index}", mesh_label(&mesh))
                } else {
                    mesh_label(&mesh)
                };
                meshes.push(load_primitive(&name, &primitive, skin, &buffers)?);
            }
        }

        log::info!(
            "imported {} mesh primitives, {} skins, {} nodes",
            meshes.len(),
            skins.len(),
            gltf.nodes().count()
        );

        let mut doc = SceneDoc::new(build_root(gltf));
        doc.meshes = meshes;
        Ok(doc)
    }
}

fn load_primitive(
    name: &str,
    primitive: &gltf::Primitive,
    skin: Option<&gltf::Skin>,
    buffers: &[Vec<u8>],
) -> Result<MeshRecord> {
    let vertex_count = primitive
        .get(&gltf::Semantic::Positions)
        .map_or(0, |accessor| accessor.count()) as u32;
    let index_count = primitive.indices().map_or(0, |accessor| accessor.count()) as u32;

    let mut record = MeshRecord::new(name, vertex_count, index_count);
    let Some(skin) = skin else {
        return Ok(record);
    };

    record.bones = load_skin_bones(skin, buffers);

    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(Vec::as_slice));
    let (Some(joints), Some(weights)) = (reader.read_joints(0), reader.read_weights(0)) else {
        log::warn!("mesh '{name}' is skinned but carries no JOINTS_0/WEIGHTS_0 channels");
        return Ok(record);
    };

    for (vertex, (joint_ids, joint_weights)) in
        joints.into_u16().zip(weights.into_f32()).enumerate()
    {
        for (&slot, &weight) in joint_ids.iter().zip(joint_weights.iter()) {
            if weight <= 0.0 {
                continue;
            }
            if let Some(bone) = record.bones.get_mut(slot as usize) {
                bone.weights.push(VertexWeight {
                    vertex: vertex as u32,
                    weight,
                });
            } else {
                log::warn!(
                    "mesh '{name}' vertex {vertex} references joint slot {slot} outside the skin"
                );
            }
        }
    }

    Ok(record)
}

/// One [`BoneRecord`] per skin joint, in joint order. The offset matrix is
/// the joint's inverse bind matrix; identity when the accessor is absent or
/// short, per the glTF default.
fn load_skin_bones(skin: &gltf::Skin, buffers: &[Vec<u8>]) -> Vec<BoneRecord> {
    let joint_count = skin.joints().count();
    let reader = skin.reader(|buffer| buffers.get(buffer.index()).map(Vec::as_slice));

    let mut offsets: Vec<Mat4> = reader
        .read_inverse_bind_matrices()
        .map(|iter| iter.map(|m| Mat4::from_cols_array_2d(&m)).collect())
        .unwrap_or_default();
    offsets.resize(joint_count, Mat4::IDENTITY);

    skin.joints()
        .zip(offsets)
        .map(|(joint, offset)| BoneRecord::new(node_label(&joint), offset))
        .collect()
}

fn build_root(gltf: &Gltf) -> SceneNode {
    let scene = gltf.default_scene().or_else(|| gltf.scenes().next());

    // Assets may declare several root nodes; hang them under one synthetic
    // root named after the scene so the document always has a single tree.
    let mut root = SceneNode::new(
        scene
            .as_ref()
            .and_then(gltf::Scene::name)
            .unwrap_or("Scene"),
        Mat4::IDENTITY,
    );
    if let Some(scene) = scene {
        root.children = scene.nodes().map(|node| build_node(&node)).collect();
    }
    root
}

fn build_node(node: &gltf::Node) -> SceneNode {
    let mut out = SceneNode::new(
        node_label(node),
        Mat4::from_cols_array_2d(&node.transform().matrix()),
    );
    out.mesh_count = node
        .mesh()
        .map_or(0, |mesh| mesh.primitives().count() as u32);
    out.children = node.children().map(|child| build_node(&child)).collect();
    out
}

fn mesh_label(mesh: &gltf::Mesh) -> String {
    mesh.name()
        .map_or_else(|| format!("mesh_{}", mesh.index()), str::to_string)
}

fn node_label(node: &gltf::Node) -> String {
    node.name()
        .map_or_else(|| format!("node_{}", node.index()), str::to_string)
}

fn load_buffers(gltf: &Gltf, base_dir: &Path) -> Result<Vec<Vec<u8>>> {
    let mut buffer_data = Vec::with_capacity(gltf.buffers().count());
    for buffer in gltf.buffers() {
        let data = match buffer.source() {
            gltf::buffer::Source::Bin => gltf
                .blob
                .as_deref()
                .ok_or(RigError::MissingBlob)?
                .to_vec(),
            gltf::buffer::Source::Uri(uri) => {
                if let Some(rest) = uri.strip_prefix("data:") {
                    decode_data_uri(rest)?
                } else {
                    fs::read(base_dir.join(uri))?
                }
            }
        };
        if data.len() < buffer.length() {
            return Err(RigError::Gltf(format!(
                "buffer {} holds {} bytes, expected at least {}",
                buffer.index(),
                data.len(),
                buffer.length()
            )));
        }
        buffer_data.push(data);
    }
    Ok(buffer_data)
}

fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let (meta, payload) = uri
        .split_once(',')
        .ok_or_else(|| RigError::DataUri("missing ',' separator".to_string()))?;
    if !meta.ends_with(";base64") {
        return Err(RigError::DataUri(format!(
            "unsupported encoding in '{meta}'"
        )));
    }
    Ok(base64::engine::general_purpose::STANDARD.decode(payload)?)
}
