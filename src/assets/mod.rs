//! Asset import
//!
//! Turns an on-disk asset into the in-memory [`SceneDoc`] the rest of the
//! crate operates on. Only glTF (`.gltf` / `.glb`) is supported.
//!
//! [`SceneDoc`]: crate::scene::SceneDoc

pub mod loaders;

pub use loaders::GltfLoader;
