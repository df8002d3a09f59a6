//! Scene document model
//!
//! The read-only input consumed by the skinning and report passes:
//! - [`SceneDoc`]: mesh list plus the root of the node tree
//! - [`MeshRecord`] / [`BoneRecord`] / [`VertexWeight`]: per-mesh skinning input
//! - [`SceneNode`]: named node with a local transform and owned children

pub mod document;
pub mod mesh;
pub mod node;

pub use document::SceneDoc;
pub use mesh::{BoneRecord, MeshRecord, VertexWeight};
pub use node::{SceneNode, Walk};
