//! Block type metadata: ids, physical states, atlas textures and the registry that compiles them.
#![forbid(unsafe_code)]

pub mod config;
pub mod registry;
pub mod tables;
pub mod types;

pub use registry::{BlockRegistry, RegistryError};
pub use tables::BlockTables;
pub use types::{AtlasIndex, BlockId, BlockState, FaceTextures};
