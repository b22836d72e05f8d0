use std::time::Instant;

use chunkmesh_blocks::BlockTables;
use chunkmesh_blocks::types::{AtlasIndex, BlockId, atlas_index_fits};
use chunkmesh_chunk::{CHUNK_SIZE, ChunkData};

use crate::buffer::VertexBuffer;
use crate::constants::MAX_RECTS_PER_SLICE;
use crate::face::Face;
use crate::greedy::{CursorAdvance, Rectangle, merge_slice};
use crate::vertex::encode_rectangle;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MeshOptions {
    pub cursor: CursorAdvance,
}

/// Which metadata table failed to cover a block type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TableKind {
    Transparency,
    State,
    Texture,
}

impl TableKind {
    fn as_str(self) -> &'static str {
        match self {
            TableKind::Transparency => "transparency",
            TableKind::State => "state",
            TableKind::Texture => "texture",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    UncoveredBlockType {
        id: BlockId,
        table: TableKind,
        table_len: usize,
    },
    /// The atlas tile lies past the last row the 5-bit V field can address.
    AtlasOutOfRange {
        id: BlockId,
        face: Face,
        index: AtlasIndex,
    },
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::UncoveredBlockType {
                id,
                table,
                table_len,
            } => write!(
                f,
                "block type {} is not covered by the {} table ({} entries)",
                id,
                table.as_str(),
                table_len
            ),
            MeshError::AtlasOutOfRange { id, face, index } => write!(
                f,
                "block type {} uses atlas index {} on its {} face, past the addressable rows",
                id,
                index,
                face.name()
            ),
        }
    }
}

impl std::error::Error for MeshError {}

fn elapsed_ms(start: Instant) -> u32 {
    start.elapsed().as_millis().min(u128::from(u32::MAX)) as u32
}

/// Meshes one chunk into a packed vertex stream using the default options.
///
/// Every atlas index used by an emitting type must be below `16 * 31`; texture U and V are 5-bit
/// fields and larger indices wrap to the wrong tile.
///
/// # Panics
/// Panics if a block type present in `chunk` is not covered by the tables it is looked up in; see
/// [`try_render_chunk_blocks`] for a checked variant.
pub fn render_chunk_blocks(chunk: &ChunkData, tables: BlockTables<'_>) -> VertexBuffer {
    render_chunk_blocks_with(chunk, tables, &MeshOptions::default())
}

/// Meshes one chunk: six faces by 32 slices, each culled, merged and encoded in order.
///
/// # Panics
/// Same conditions as [`render_chunk_blocks`].
pub fn render_chunk_blocks_with(
    chunk: &ChunkData,
    tables: BlockTables<'_>,
    opts: &MeshOptions,
) -> VertexBuffer {
    let start = Instant::now();
    let mut buf = VertexBuffer::new();
    let mut rects: Vec<Rectangle> = Vec::with_capacity(MAX_RECTS_PER_SLICE);
    let mut total_rects = 0usize;

    for face in Face::ALL {
        let mut face_rects = 0usize;
        for slice in 0..CHUNK_SIZE {
            merge_slice(chunk, &tables, face, slice, opts.cursor, &mut rects);
            for r in &rects {
                log::trace!(
                    target: "rects",
                    "face={} slice={} a={} b={} w={} h={} type={}",
                    face.name(),
                    slice,
                    r.a,
                    r.b,
                    r.width,
                    r.height,
                    r.block_type
                );
                let atlas = tables.texture(r.block_type, face.index());
                buf.push_quad(&encode_rectangle(face, slice, r, atlas));
            }
            face_rects += rects.len();
        }
        log::debug!("face {} merged into {} rects", face.name(), face_rects);
        total_rects += face_rects;
    }

    log::info!(
        target: "perf",
        "ms={} chunkmesh_render rects={} verts={} cap={} cursor={:?}",
        elapsed_ms(start),
        total_rects,
        buf.len(),
        buf.capacity(),
        opts.cursor
    );
    buf
}

/// Verifies that the tables cover every block type the mesher may look up for `chunk`.
///
/// Every present type needs a state entry. When any present type emits geometry, every present
/// type may be looked up as a neighbor and needs a transparency entry, and the emitting types need
/// texture entries whose atlas indices fit the packed UV fields.
pub fn check_table_coverage(chunk: &ChunkData, tables: &BlockTables<'_>) -> Result<(), MeshError> {
    let present = chunk.block_types_present();
    let uncovered = |id: BlockId, table: TableKind, table_len: usize| {
        Err(MeshError::UncoveredBlockType {
            id,
            table,
            table_len,
        })
    };

    if let Some(&id) = present.iter().find(|&&id| id as usize >= tables.state.len()) {
        return uncovered(id, TableKind::State, tables.state.len());
    }
    let emitting: Vec<BlockId> = present
        .iter()
        .copied()
        .filter(|&id| tables.state(id).emits_geometry())
        .collect();
    if emitting.is_empty() {
        return Ok(());
    }
    let transparency_len = tables.is_transparent.len();
    if let Some(&id) = present.iter().find(|&&id| id as usize >= transparency_len) {
        return uncovered(id, TableKind::Transparency, transparency_len);
    }
    if let Some(&id) = emitting.iter().find(|&&id| id as usize >= tables.texture.len()) {
        return uncovered(id, TableKind::Texture, tables.texture.len());
    }
    for &id in &emitting {
        for face in Face::ALL {
            let index = tables.texture(id, face.index());
            if !atlas_index_fits(index) {
                return Err(MeshError::AtlasOutOfRange { id, face, index });
            }
        }
    }
    Ok(())
}

/// Checked variant of [`render_chunk_blocks_with`]: validates table coverage and atlas range
/// before meshing.
pub fn try_render_chunk_blocks(
    chunk: &ChunkData,
    tables: BlockTables<'_>,
    opts: &MeshOptions,
) -> Result<VertexBuffer, MeshError> {
    check_table_coverage(chunk, &tables)?;
    Ok(render_chunk_blocks_with(chunk, tables, opts))
}
