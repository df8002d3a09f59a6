//! Error Types
//!
//! The single error type [`RigError`] covers all failure modes of the
//! library: asset import, buffer resolution, and skinning-table
//! construction. All public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, RigError>`.

use thiserror::Error;

/// The main error type for rigscope.
#[derive(Error, Debug)]
pub enum RigError {
    // ========================================================================
    // Asset Import Errors
    // ========================================================================
    /// glTF parsing or validation error.
    #[error("glTF error: {0}")]
    Gltf(String),

    /// A GLB file declared a binary buffer but carried no `BIN` chunk.
    #[error("missing GLB binary chunk")]
    MissingBlob,

    /// Data URI parsing error.
    #[error("data URI error: {0}")]
    DataUri(String),

    /// Base64 decoding error.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ========================================================================
    // Skinning Errors
    // ========================================================================
    /// A vertex accumulated more bone influences than a binding can hold.
    ///
    /// The 4-influence cap is a hard constraint of the binding format;
    /// silently dropping influences would corrupt skinning data, so the
    /// whole pass fails instead.
    #[error("vertex {vertex} already carries the maximum number of bone influences (while adding bone '{bone}')")]
    BoneInfluenceOverflow {
        /// Global vertex index whose binding is full.
        vertex: u32,
        /// Name of the bone whose weight could not be placed.
        bone: String,
    },

    /// A bone weight referenced a vertex outside its mesh.
    #[error("bone '{bone}' references vertex {vertex}, but mesh '{mesh}' has only {vertex_count} vertices")]
    VertexOutOfRange {
        /// Offending bone name.
        bone: String,
        /// Local vertex index named by the weight.
        vertex: u32,
        /// Mesh the bone belongs to.
        mesh: String,
        /// The mesh's vertex count.
        vertex_count: u32,
    },
}

impl From<gltf::Error> for RigError {
    fn from(err: gltf::Error) -> Self {
        RigError::Gltf(err.to_string())
    }
}

/// Alias for `Result<T, RigError>`.
pub type Result<T> = std::result::Result<T, RigError>;
