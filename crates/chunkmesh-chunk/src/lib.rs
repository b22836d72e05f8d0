//! Chunk block storage: a 6-byte header followed by 32³ seven-byte block records.
#![forbid(unsafe_code)]

pub mod record;

pub use record::{BLOCK_SIZE, BlockRecord, Direction, MAX_HEALTH, Rotation};

use chunkmesh_blocks::types::{BLOCK_TYPES, BlockId};

pub const CHUNK_SIZE: usize = 32;
pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;
pub const BLOCKS_HEADER_SIZE: usize = 6;
pub const CHUNK_BYTES: usize = BLOCKS_HEADER_SIZE + CHUNK_VOLUME * BLOCK_SIZE;

pub const VACUUM_TYPE: BlockId = 0;
pub const SOLID_TYPE: BlockId = 65535;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    WrongLength { expected: usize, actual: usize },
    OutOfBounds { x: usize, y: usize, z: usize },
}

impl std::fmt::Display for ChunkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChunkError::WrongLength { expected, actual } => {
                write!(f, "chunk data is {} bytes, expected {}", actual, expected)
            }
            ChunkError::OutOfBounds { x, y, z } => {
                write!(f, "cell ({}, {}, {}) lies outside the chunk", x, y, z)
            }
        }
    }
}

impl std::error::Error for ChunkError {}

/// Linear cell index, x fastest.
#[inline]
pub const fn idx(x: usize, y: usize, z: usize) -> usize {
    x + y * CHUNK_SIZE + z * CHUNK_SIZE * CHUNK_SIZE
}

#[inline]
fn record_offset(x: usize, y: usize, z: usize) -> usize {
    BLOCKS_HEADER_SIZE + idx(x, y, z) * BLOCK_SIZE
}

/// Reads the block-type id of cell (x, y, z) from raw chunk bytes.
///
/// # Panics
/// Panics if a coordinate is 32 or more, or if `bytes` is shorter than [`CHUNK_BYTES`].
#[inline]
pub fn block_type_at(bytes: &[u8], x: usize, y: usize, z: usize) -> BlockId {
    assert!(
        x < CHUNK_SIZE && y < CHUNK_SIZE && z < CHUNK_SIZE,
        "cell ({x}, {y}, {z}) lies outside the chunk"
    );
    let o = record_offset(x, y, z);
    u16::from_le_bytes([bytes[o], bytes[o + 1]])
}

/// Owned chunk bytes with a fixed length of [`CHUNK_BYTES`].
#[derive(Clone, PartialEq, Eq)]
pub struct ChunkData {
    bytes: Vec<u8>,
}

impl Default for ChunkData {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChunkData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkData")
            .field("header", &self.header())
            .field("non_vacuum", &self.has_non_vacuum())
            .finish()
    }
}

impl ChunkData {
    /// A chunk where every cell is vacuum and the header is zeroed.
    pub fn new() -> Self {
        ChunkData {
            bytes: vec![0; CHUNK_BYTES],
        }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ChunkError> {
        if bytes.len() != CHUNK_BYTES {
            return Err(ChunkError::WrongLength {
                expected: CHUNK_BYTES,
                actual: bytes.len(),
            });
        }
        Ok(ChunkData { bytes })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn header(&self) -> &[u8] {
        &self.bytes[..BLOCKS_HEADER_SIZE]
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        idx(x, y, z)
    }

    #[inline]
    pub fn in_bounds(x: usize, y: usize, z: usize) -> bool {
        x < CHUNK_SIZE && y < CHUNK_SIZE && z < CHUNK_SIZE
    }

    /// # Panics
    /// Panics if a coordinate is 32 or more.
    #[inline]
    pub fn block_type_at(&self, x: usize, y: usize, z: usize) -> BlockId {
        block_type_at(&self.bytes, x, y, z)
    }

    pub fn record_at(&self, x: usize, y: usize, z: usize) -> Result<BlockRecord, ChunkError> {
        let o = self.checked_offset(x, y, z)?;
        let mut raw = [0u8; BLOCK_SIZE];
        raw.copy_from_slice(&self.bytes[o..o + BLOCK_SIZE]);
        Ok(BlockRecord::decode(&raw))
    }

    /// Overwrites the type id only; the rest of the record is left as is.
    pub fn set_block_type(
        &mut self,
        x: usize,
        y: usize,
        z: usize,
        block_type: BlockId,
    ) -> Result<(), ChunkError> {
        let o = self.checked_offset(x, y, z)?;
        self.bytes[o..o + 2].copy_from_slice(&block_type.to_le_bytes());
        Ok(())
    }

    pub fn set_record(
        &mut self,
        x: usize,
        y: usize,
        z: usize,
        record: &BlockRecord,
    ) -> Result<(), ChunkError> {
        let o = self.checked_offset(x, y, z)?;
        self.bytes[o..o + BLOCK_SIZE].copy_from_slice(&record.encode());
        Ok(())
    }

    pub fn fill(&mut self, record: &BlockRecord) {
        let raw = record.encode();
        for cell in self.bytes[BLOCKS_HEADER_SIZE..].chunks_exact_mut(BLOCK_SIZE) {
            cell.copy_from_slice(&raw);
        }
    }

    pub fn has_non_vacuum(&self) -> bool {
        self.type_ids().any(|t| t != VACUUM_TYPE)
    }

    /// Distinct type ids in the chunk, ascending.
    pub fn block_types_present(&self) -> Vec<BlockId> {
        let mut seen = vec![false; BLOCK_TYPES];
        for t in self.type_ids() {
            seen[t as usize] = true;
        }
        seen.iter()
            .enumerate()
            .filter(|(_, s)| **s)
            .map(|(i, _)| i as BlockId)
            .collect()
    }

    fn type_ids(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.bytes[BLOCKS_HEADER_SIZE..]
            .chunks_exact(BLOCK_SIZE)
            .map(|r| u16::from_le_bytes([r[0], r[1]]))
    }

    fn checked_offset(&self, x: usize, y: usize, z: usize) -> Result<usize, ChunkError> {
        if !Self::in_bounds(x, y, z) {
            return Err(ChunkError::OutOfBounds { x, y, z });
        }
        Ok(record_offset(x, y, z))
    }
}
