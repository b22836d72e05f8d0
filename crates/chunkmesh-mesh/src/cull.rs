//! Per-face visibility: a face is drawn when its block emits geometry and the neighbor it faces
//! does not hide it.

use chunkmesh_blocks::BlockTables;
use chunkmesh_chunk::{CHUNK_SIZE, ChunkData};

use crate::face::Face;

/// Whether the `face` side of the cell at `(slice, a, b)` is a candidate for emission.
///
/// Neighbors past the chunk boundary count as transparent.
///
/// # Panics
/// Panics if the cell's type is not covered by the state table, or if the neighbor's type is not
/// covered by the transparency table.
#[inline]
pub fn is_face_visible(
    chunk: &ChunkData,
    tables: &BlockTables<'_>,
    face: Face,
    slice: usize,
    a: usize,
    b: usize,
) -> bool {
    let p = face.point_in_slice(slice, a, b);
    let ty = chunk.block_type_at(p.x, p.y, p.z);
    if !tables.state(ty).emits_geometry() {
        return false;
    }
    match face.neighbor_slice(slice) {
        None => true,
        Some(n) => {
            let q = face.point_in_slice(n, a, b);
            tables.is_transparent(chunk.block_type_at(q.x, q.y, q.z))
        }
    }
}

/// Number of unmerged faces the culler approves across the whole chunk.
pub fn count_visible_faces(chunk: &ChunkData, tables: &BlockTables<'_>) -> usize {
    let mut n = 0;
    for face in Face::ALL {
        for slice in 0..CHUNK_SIZE {
            for b in 0..CHUNK_SIZE {
                for a in 0..CHUNK_SIZE {
                    if is_face_visible(chunk, tables, face, slice, a, b) {
                        n += 1;
                    }
                }
            }
        }
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use chunkmesh_blocks::types::{BlockState, FaceTextures};

    const TRANSPARENT: [bool; 4] = [true, false, true, false];
    const STATE: [BlockState; 4] = [
        BlockState::Gas,
        BlockState::Solid,
        BlockState::Liquid,
        BlockState::Plasma,
    ];
    const TEXTURE: [FaceTextures; 4] = [[0; 6]; 4];

    fn tables() -> BlockTables<'static> {
        BlockTables::new(&TRANSPARENT, &STATE, &TEXTURE)
    }

    #[test]
    fn gas_never_emits() {
        let chunk = ChunkData::new();
        for face in Face::ALL {
            assert!(!is_face_visible(&chunk, &tables(), face, 0, 0, 0));
        }
    }

    #[test]
    fn opaque_neighbor_hides_face() {
        let mut chunk = ChunkData::new();
        chunk.set_block_type(4, 4, 4, 1).unwrap();
        chunk.set_block_type(5, 4, 4, 3).unwrap();
        let t = tables();
        // Right face of (4,4,4) looks at the plasma block at x=5
        assert!(!is_face_visible(&chunk, &t, Face::Right, 4, 4, 4));
        assert!(is_face_visible(&chunk, &t, Face::Left, 4, 4, 4));
        // Plasma behaves like solid, its left face looks at the solid block
        assert!(!is_face_visible(&chunk, &t, Face::Left, 5, 4, 4));
        assert!(is_face_visible(&chunk, &t, Face::Right, 5, 4, 4));
    }

    #[test]
    fn liquid_next_to_solid() {
        let mut chunk = ChunkData::new();
        chunk.set_block_type(0, 10, 0, 2).unwrap();
        chunk.set_block_type(0, 11, 0, 1).unwrap();
        let t = tables();
        // Liquid is transparent so the solid's bottom shows; the solid hides the liquid's top
        assert!(is_face_visible(&chunk, &t, Face::Bottom, 11, 0, 0));
        assert!(!is_face_visible(&chunk, &t, Face::Top, 10, 0, 0));
        assert!(is_face_visible(&chunk, &t, Face::Bottom, 10, 0, 0));
    }

    #[test]
    fn chunk_edge_is_visible() {
        let mut chunk = ChunkData::new();
        chunk.fill(&chunkmesh_chunk::BlockRecord::with_type(1));
        let t = tables();
        // Only the six outer shells survive: 6 * 32 * 32
        assert_eq!(count_visible_faces(&chunk, &t), 6 * 1024);
    }
}
