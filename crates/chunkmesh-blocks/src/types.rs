use serde::{Deserialize, Serialize};

pub type BlockId = u16;
pub type AtlasIndex = u32;

/// Number of distinct block-type ids addressable by a 16-bit id.
pub const BLOCK_TYPES: usize = 1 << 16;

/// Faces per block; texture tables carry one atlas index per face.
pub const FACE_COUNT: usize = 6;

/// Atlas index per face, in mesher face order (left, right, top, bottom, back, front).
pub type FaceTextures = [AtlasIndex; FACE_COUNT];

/// Texture sheets are laid out 16 tiles wide.
pub const ATLAS_COLUMNS: u32 = 16;
/// Highest usable atlas row: the V field is 5 bits wide and a quad reaches one tile past its base row.
pub const ATLAS_ROWS: u32 = 31;

// Coarse physical category of a block type. Only `Gas` changes meshing (it never emits faces).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockState {
    #[default]
    Solid = 0,
    Liquid = 1,
    Gas = 2,
    Plasma = 3,
}

impl BlockState {
    #[inline]
    pub fn from_u8(v: u8) -> Option<BlockState> {
        match v {
            0 => Some(BlockState::Solid),
            1 => Some(BlockState::Liquid),
            2 => Some(BlockState::Gas),
            3 => Some(BlockState::Plasma),
            _ => None,
        }
    }

    /// Liquids and plasma mesh exactly like solids; only gas is skipped.
    #[inline]
    pub fn emits_geometry(self) -> bool {
        !matches!(self, BlockState::Gas)
    }
}

/// Splits an atlas index into its `(column, row)` tile offset.
#[inline]
pub fn atlas_offset(index: AtlasIndex) -> (u32, u32) {
    (index % ATLAS_COLUMNS, index / ATLAS_COLUMNS)
}

#[inline]
pub fn atlas_index_fits(index: AtlasIndex) -> bool {
    index < ATLAS_COLUMNS * ATLAS_ROWS
}
