//! The 7-byte per-cell block record.
//!
//! Layout, little-endian:
//! - bytes 0–1: block type id
//! - bytes 2–3: health (bits 0..11), direction (bits 11..14), rotation (bits 14..16)
//! - byte 4: ambient (low nibble), red (high nibble)
//! - byte 5: green (low nibble), blue (high nibble)
//! - byte 6: light (low nibble)
//!
//! Only the type id matters to meshing; the rest is carried for the engine.

use chunkmesh_blocks::types::BlockId;

pub const BLOCK_SIZE: usize = 7;
pub const MAX_HEALTH: u16 = 2047;

const HEALTH_MASK: u16 = 0x07FF;
const DIRECTION_SHIFT: u16 = 11;
const DIRECTION_MASK: u16 = 0x7;
const ROTATION_SHIFT: u16 = 14;
const ROTATION_MASK: u16 = 0x3;
const NIBBLE: u8 = 0x0F;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Up = 0,
    Down = 1,
    Right = 2,
    Left = 3,
    Forward = 4,
    Backward = 5,
}

impl Direction {
    /// Values 6 and 7 are unassigned and decode as `Up`.
    #[inline]
    pub fn from_bits(v: u16) -> Direction {
        match v {
            1 => Direction::Down,
            2 => Direction::Right,
            3 => Direction::Left,
            4 => Direction::Forward,
            5 => Direction::Backward,
            _ => Direction::Up,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    Identity = 0,
    Left = 1,
    Right = 2,
    Half = 3,
}

impl Rotation {
    #[inline]
    pub fn from_bits(v: u16) -> Rotation {
        match v & ROTATION_MASK {
            1 => Rotation::Left,
            2 => Rotation::Right,
            3 => Rotation::Half,
            _ => Rotation::Identity,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockRecord {
    pub block_type: BlockId,
    /// 11 bits; values above `MAX_HEALTH` are truncated on encode.
    pub health: u16,
    pub direction: Direction,
    pub rotation: Rotation,
    /// 4-bit channels; high bits are dropped on encode.
    pub ambient: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub light: u8,
}

impl BlockRecord {
    pub const VACUUM: BlockRecord = BlockRecord {
        block_type: 0,
        health: 0,
        direction: Direction::Up,
        rotation: Rotation::Identity,
        ambient: 0,
        red: 0,
        green: 0,
        blue: 0,
        light: 0,
    };

    pub fn with_type(block_type: BlockId) -> Self {
        BlockRecord {
            block_type,
            ..Self::VACUUM
        }
    }

    pub fn encode(&self) -> [u8; BLOCK_SIZE] {
        let [t0, t1] = self.block_type.to_le_bytes();
        let meta = (self.health & HEALTH_MASK)
            | ((self.direction as u16 & DIRECTION_MASK) << DIRECTION_SHIFT)
            | ((self.rotation as u16 & ROTATION_MASK) << ROTATION_SHIFT);
        let [m0, m1] = meta.to_le_bytes();
        [
            t0,
            t1,
            m0,
            m1,
            (self.ambient & NIBBLE) | ((self.red & NIBBLE) << 4),
            (self.green & NIBBLE) | ((self.blue & NIBBLE) << 4),
            self.light & NIBBLE,
        ]
    }

    pub fn decode(bytes: &[u8; BLOCK_SIZE]) -> Self {
        let meta = u16::from_le_bytes([bytes[2], bytes[3]]);
        BlockRecord {
            block_type: u16::from_le_bytes([bytes[0], bytes[1]]),
            health: meta & HEALTH_MASK,
            direction: Direction::from_bits((meta >> DIRECTION_SHIFT) & DIRECTION_MASK),
            rotation: Rotation::from_bits(meta >> ROTATION_SHIFT),
            ambient: bytes[4] & NIBBLE,
            red: bytes[4] >> 4,
            green: bytes[5] & NIBBLE,
            blue: bytes[5] >> 4,
            light: bytes[6] & NIBBLE,
        }
    }
}
