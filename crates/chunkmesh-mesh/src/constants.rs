//! Shared constants for chunkmesh-mesh: buffer sizing and the packed vertex bit layout.

pub use chunkmesh_chunk::CHUNK_SIZE;

pub const VERTICES_PER_QUAD: usize = 6;
pub const INITIAL_VERTEX_CAPACITY: usize = 6 * VERTICES_PER_QUAD;
/// Upper bound of rectangles a single 32x32 slice can produce.
pub const MAX_RECTS_PER_SLICE: usize = CHUNK_SIZE * CHUNK_SIZE;

// Word 0
pub const NORMAL_SHIFT: u32 = 0;
pub const VERTEX_SHIFT: u32 = 3;
pub const X_SHIFT: u32 = 7;
pub const Y_SHIFT: u32 = 12;
pub const Z_SHIFT: u32 = 17;
pub const AO_SHIFT: u32 = 22;
pub const DAMAGE_U_SHIFT: u32 = 27;
pub const DAMAGE_V_SHIFT: u32 = 31;

// Word 1
pub const U_SHIFT: u32 = 0;
pub const V_SHIFT: u32 = 5;
pub const ALPHA_SHIFT: u32 = 10;
pub const RED_SHIFT: u32 = 14;
pub const GREEN_SHIFT: u32 = 18;
pub const BLUE_SHIFT: u32 = 22;
pub const LIGHT_SHIFT: u32 = 26;

pub(crate) const NORMAL_MASK: u32 = 0x7;
pub(crate) const VERTEX_MASK: u32 = 0xF;
pub(crate) const COORD_MASK: u32 = 0x1F;
pub(crate) const UV_MASK: u32 = 0x1F;
pub(crate) const NIBBLE_MASK: u32 = 0xF;

/// Alpha/brightness is always written at full scale.
pub const FULL_ALPHA: u32 = 0xF;
