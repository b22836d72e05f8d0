//! Greedy chunk mesher: culls hidden faces, merges them into quads and packs the vertices.
#![forbid(unsafe_code)]

pub mod buffer;
pub mod constants;
pub mod cull;
pub mod face;
pub mod greedy;
pub mod mesher;
pub mod vertex;

pub use buffer::VertexBuffer;
pub use cull::{count_visible_faces, is_face_visible};
pub use face::{Face, GridPoint};
pub use greedy::{CursorAdvance, Rectangle, SliceMask, build_mask, merge_plane, merge_slice};
pub use mesher::{
    MeshError, MeshOptions, TableKind, check_table_coverage, render_chunk_blocks,
    render_chunk_blocks_with, try_render_chunk_blocks,
};
pub use vertex::{FACE_UVS, FACE_VERTICES, PackedVertex, encode_rectangle};
