#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod assets;
pub mod errors;
pub mod report;
pub mod scene;
pub mod skinning;

pub use assets::GltfLoader;
pub use errors::{Result, RigError};
pub use scene::{BoneRecord, MeshRecord, SceneDoc, SceneNode, VertexWeight};
pub use skinning::{BoneIndex, SkinTable, VertexBoneBinding, MAX_BONES_PER_VERTEX};
