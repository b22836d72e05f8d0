use chunkmesh_chunk::{BlockRecord, ChunkData, ChunkError, Direction};

use crate::cli::Pattern;

// Ids as laid out in assets/blocks.toml.
const STONE: u16 = 1;
const DIRT: u16 = 2;
const GRASS: u16 = 3;

pub fn build(pattern: Pattern) -> Result<ChunkData, ChunkError> {
    let mut chunk = ChunkData::new();
    for z in 0..32 {
        for y in 0..32 {
            for x in 0..32 {
                let Some(ty) = cell(pattern, x, y, z) else {
                    continue;
                };
                let rec = BlockRecord {
                    health: chunkmesh_chunk::MAX_HEALTH,
                    direction: Direction::Up,
                    ..BlockRecord::with_type(ty)
                };
                chunk.set_record(x, y, z, &rec)?;
            }
        }
    }
    Ok(chunk)
}

fn cell(pattern: Pattern, x: usize, y: usize, z: usize) -> Option<u16> {
    match pattern {
        Pattern::Cube => {
            let inside = |v: usize| (8..24).contains(&v);
            if !(inside(x) && inside(y) && inside(z)) {
                None
            } else if y == 23 {
                Some(GRASS)
            } else {
                Some(STONE)
            }
        }
        Pattern::Checker => Some(if (x + y + z) % 2 == 0 { STONE } else { DIRT }),
        Pattern::Slab => match y {
            0..=5 => Some(STONE),
            6 => Some(DIRT),
            7 => Some(GRASS),
            _ => None,
        },
    }
}
