//! Borrowed view over the three per-type metadata tables the mesher reads.

use crate::types::{AtlasIndex, BlockId, BlockState, FaceTextures};

/// Parallel tables indexed by block-type id.
///
/// Every id that appears in a chunk must be covered by these tables; lookups index the slices
/// directly and panic on an uncovered id rather than inventing a default.
#[derive(Copy, Clone, Debug)]
pub struct BlockTables<'a> {
    pub is_transparent: &'a [bool],
    pub state: &'a [BlockState],
    pub texture: &'a [FaceTextures],
}

impl<'a> BlockTables<'a> {
    pub const fn new(
        is_transparent: &'a [bool],
        state: &'a [BlockState],
        texture: &'a [FaceTextures],
    ) -> Self {
        Self {
            is_transparent,
            state,
            texture,
        }
    }

    /// # Panics
    /// Panics if `id` is not covered by the transparency table.
    #[inline]
    pub fn is_transparent(&self, id: BlockId) -> bool {
        self.is_transparent[id as usize]
    }

    /// # Panics
    /// Panics if `id` is not covered by the state table.
    #[inline]
    pub fn state(&self, id: BlockId) -> BlockState {
        self.state[id as usize]
    }

    /// # Panics
    /// Panics if `id` is not covered by the texture table or `face >= 6`.
    #[inline]
    pub fn texture(&self, id: BlockId, face: usize) -> AtlasIndex {
        self.texture[id as usize][face]
    }

    /// Number of leading ids covered by all three tables.
    pub fn coverage(&self) -> usize {
        self.is_transparent
            .len()
            .min(self.state.len())
            .min(self.texture.len())
    }

    #[inline]
    pub fn covers(&self, id: BlockId) -> bool {
        (id as usize) < self.coverage()
    }
}
