//! Greedy rectangle merging over one 32x32 face slice.
//!
//! Each row of the occupancy mask is a `u32` with bit `a` set when the culler approved cell
//! `(a, b)`. The scan is row-major; a run is grown along `a` first and then extended downwards
//! row by row while every cell in the span is masked and carries the same block type.

use chunkmesh_blocks::BlockTables;
use chunkmesh_blocks::types::BlockId;
use chunkmesh_chunk::{CHUNK_SIZE, ChunkData};

use crate::cull::is_face_visible;
use crate::face::Face;

/// How the column cursor moves after a rectangle has been emitted.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CursorAdvance {
    /// Advance by `width + 1`. A masked cell of another type that directly follows a run is
    /// skipped for that row and never emitted.
    #[default]
    SkipNext,
    /// Advance by `width`, so every masked cell ends up in some rectangle.
    Contiguous,
}

impl CursorAdvance {
    #[inline]
    pub fn step(self, width: usize) -> usize {
        match self {
            CursorAdvance::SkipNext => width + 1,
            CursorAdvance::Contiguous => width,
        }
    }
}

/// Occupancy bitmask for one (face, slice) plane.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SliceMask {
    rows: [u32; CHUNK_SIZE],
}

impl SliceMask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full() -> Self {
        SliceMask {
            rows: [u32::MAX; CHUNK_SIZE],
        }
    }

    #[inline]
    pub fn get(&self, a: usize, b: usize) -> bool {
        (self.rows[b] >> a) & 1 != 0
    }

    #[inline]
    pub fn set(&mut self, a: usize, b: usize) {
        self.rows[b] |= 1 << a;
    }

    /// Clears `width` bits starting at `a` in rows `b..b + height`.
    #[inline]
    pub fn clear_rect(&mut self, a: usize, b: usize, width: usize, height: usize) {
        let bits = if width >= CHUNK_SIZE {
            u32::MAX
        } else {
            ((1u32 << width) - 1) << a
        };
        for row in &mut self.rows[b..b + height] {
            *row &= !bits;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| *r == 0)
    }

    pub fn count(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }

    #[inline]
    pub fn row(&self, b: usize) -> u32 {
        self.rows[b]
    }
}

/// A merged run of same-type visible faces in slice coordinates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rectangle {
    pub a: usize,
    pub b: usize,
    /// Cells along `a`, in `1..=32`.
    pub width: usize,
    /// Cells along `b`, in `1..=32`.
    pub height: usize,
    pub block_type: BlockId,
}

impl Rectangle {
    /// Inclusive extent `(width - 1, height - 1)` as the encoder places corners.
    #[inline]
    pub fn inclusive_extent(&self) -> (usize, usize) {
        (self.width - 1, self.height - 1)
    }
}

/// Builds the occupancy mask for `face` at depth `slice`.
pub fn build_mask(
    chunk: &ChunkData,
    tables: &BlockTables<'_>,
    face: Face,
    slice: usize,
) -> SliceMask {
    let mut mask = SliceMask::new();
    for b in 0..CHUNK_SIZE {
        for a in 0..CHUNK_SIZE {
            if is_face_visible(chunk, tables, face, slice, a, b) {
                mask.set(a, b);
            }
        }
    }
    mask
}

/// Greedily merges the masked cells of one plane, appending rectangles to `out`.
///
/// `type_at(a, b)` supplies the block type of each cell. Consumed bits are cleared from `mask`;
/// whatever is left afterwards was skipped by the cursor.
pub fn merge_plane<F>(
    mask: &mut SliceMask,
    type_at: F,
    cursor: CursorAdvance,
    out: &mut Vec<Rectangle>,
) where
    F: Fn(usize, usize) -> BlockId,
{
    let matches =
        |mask: &SliceMask, a: usize, b: usize, ty: BlockId| mask.get(a, b) && type_at(a, b) == ty;

    for b in 0..CHUNK_SIZE {
        let mut a = 0;
        while a < CHUNK_SIZE {
            if !mask.get(a, b) {
                a += 1;
                continue;
            }
            let block_type = type_at(a, b);

            let mut width = 1;
            while a + width < CHUNK_SIZE && matches(&*mask, a + width, b, block_type) {
                width += 1;
            }

            let mut height = 1;
            while b + height < CHUNK_SIZE
                && (a..a + width).all(|i| matches(&*mask, i, b + height, block_type))
            {
                height += 1;
            }

            mask.clear_rect(a, b, width, height);
            out.push(Rectangle {
                a,
                b,
                width,
                height,
                block_type,
            });
            a += cursor.step(width);
        }
    }
}

/// Culls and merges one (face, slice) of `chunk`. `out` is cleared first.
pub fn merge_slice(
    chunk: &ChunkData,
    tables: &BlockTables<'_>,
    face: Face,
    slice: usize,
    cursor: CursorAdvance,
    out: &mut Vec<Rectangle>,
) {
    out.clear();
    let mut mask = build_mask(chunk, tables, face, slice);
    if mask.is_empty() {
        return;
    }
    merge_plane(
        &mut mask,
        |a, b| {
            let p = face.point_in_slice(slice, a, b);
            chunk.block_type_at(p.x, p.y, p.z)
        },
        cursor,
        out,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_rect_full_width() {
        let mut m = SliceMask::full();
        m.clear_rect(0, 3, 32, 2);
        assert_eq!(m.row(3), 0);
        assert_eq!(m.row(4), 0);
        assert_eq!(m.row(5), u32::MAX);
        assert_eq!(m.count(), 30 * 32);
    }

    #[test]
    fn width_grows_before_height() {
        // An L shape: row 0 spans 0..3, row 1 only 0..1
        let mut m = SliceMask::new();
        for a in 0..3 {
            m.set(a, 0);
        }
        m.set(0, 1);
        let mut out = Vec::new();
        merge_plane(&mut m, |_, _| 1, CursorAdvance::Contiguous, &mut out);
        assert_eq!(
            out,
            vec![
                Rectangle { a: 0, b: 0, width: 3, height: 1, block_type: 1 },
                Rectangle { a: 0, b: 1, width: 1, height: 1, block_type: 1 },
            ]
        );
        assert!(m.is_empty());
    }

    #[test]
    fn skip_next_drops_adjacent_run() {
        let mut m = SliceMask::new();
        for a in 0..5 {
            m.set(a, 0);
        }
        let ty = |a: usize, _b: usize| -> BlockId { if a < 3 { 1 } else { 2 } };
        let mut skip = Vec::new();
        let mut first = m;
        merge_plane(&mut first, ty, CursorAdvance::SkipNext, &mut skip);
        assert_eq!(skip.len(), 2);
        assert_eq!((skip[1].a, skip[1].width), (4, 1));

        let mut contiguous = Vec::new();
        merge_plane(&mut m, ty, CursorAdvance::Contiguous, &mut contiguous);
        assert_eq!(contiguous.len(), 2);
        assert_eq!((contiguous[1].a, contiguous[1].width), (3, 2));
    }
}
