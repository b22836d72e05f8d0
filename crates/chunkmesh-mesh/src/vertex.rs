//! Bit-packed vertex records.
//!
//! Word 0: `[0:3)` normal id, `[3:7)` cube-corner id, `[7:12)` x, `[12:17)` y, `[17:22)` z,
//! `[22:27)` ambient occlusion, `[27:31)` damage U, `[31]` damage V.
//! Word 1: `[0:5)` texture U, `[5:10)` texture V, `[10:14)` alpha, `[14:18)` red, `[18:22)` green,
//! `[22:26)` blue, `[26:30)` light.
//!
//! Occlusion, damage, color and light are reserved and always zero; alpha is always full.

use chunkmesh_blocks::types::{AtlasIndex, atlas_offset};

use crate::constants::*;
use crate::face::{Face, GridPoint};
use crate::greedy::Rectangle;

/// Logical cube-corner id of each of the six emitted vertices, per face.
pub const FACE_VERTICES: [[u8; VERTICES_PER_QUAD]; 6] = [
    [2, 0, 1, 5, 2, 1], // left
    [7, 6, 3, 4, 7, 3], // right
    [2, 5, 7, 4, 2, 7], // top
    [1, 0, 3, 6, 1, 3], // bottom
    [5, 1, 6, 7, 5, 6], // back
    [4, 3, 0, 2, 4, 0], // front
];

/// UV corner offset of each emitted vertex; shared by all faces.
///
/// The same pairs select which extreme of the rectangle each vertex sits on: `(0, 1)` is
/// `(a, b + h)`, `(1, 0)` is `(a + w, b)` and so on.
pub const FACE_UVS: [[u32; 2]; VERTICES_PER_QUAD] =
    [[0, 1], [0, 0], [1, 0], [1, 1], [0, 1], [1, 0]];

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct PackedVertex {
    pub word0: u32,
    pub word1: u32,
}

impl PackedVertex {
    /// Packs one vertex; reserved fields are zero and alpha is full.
    #[inline]
    pub fn pack(face: Face, corner: u8, p: GridPoint, u: u32, v: u32) -> Self {
        let word0 = ((face as u32 & NORMAL_MASK) << NORMAL_SHIFT)
            | ((corner as u32 & VERTEX_MASK) << VERTEX_SHIFT)
            | ((p.x as u32 & COORD_MASK) << X_SHIFT)
            | ((p.y as u32 & COORD_MASK) << Y_SHIFT)
            | ((p.z as u32 & COORD_MASK) << Z_SHIFT);
        let word1 = ((u & UV_MASK) << U_SHIFT)
            | ((v & UV_MASK) << V_SHIFT)
            | (FULL_ALPHA << ALPHA_SHIFT);
        PackedVertex { word0, word1 }
    }

    #[inline]
    pub fn normal_id(&self) -> u32 {
        (self.word0 >> NORMAL_SHIFT) & NORMAL_MASK
    }

    pub fn face(&self) -> Option<Face> {
        Face::from_index(self.normal_id() as usize)
    }

    #[inline]
    pub fn corner_id(&self) -> u32 {
        (self.word0 >> VERTEX_SHIFT) & VERTEX_MASK
    }

    pub fn position(&self) -> GridPoint {
        GridPoint::new(
            ((self.word0 >> X_SHIFT) & COORD_MASK) as usize,
            ((self.word0 >> Y_SHIFT) & COORD_MASK) as usize,
            ((self.word0 >> Z_SHIFT) & COORD_MASK) as usize,
        )
    }

    pub fn ambient_occlusion(&self) -> u32 {
        (self.word0 >> AO_SHIFT) & COORD_MASK
    }

    pub fn damage(&self) -> (u32, u32) {
        (
            (self.word0 >> DAMAGE_U_SHIFT) & NIBBLE_MASK,
            self.word0 >> DAMAGE_V_SHIFT,
        )
    }

    #[inline]
    pub fn uv(&self) -> (u32, u32) {
        (
            (self.word1 >> U_SHIFT) & UV_MASK,
            (self.word1 >> V_SHIFT) & UV_MASK,
        )
    }

    pub fn alpha(&self) -> u32 {
        (self.word1 >> ALPHA_SHIFT) & NIBBLE_MASK
    }

    /// `(red, green, blue, light)`.
    pub fn color(&self) -> (u32, u32, u32, u32) {
        (
            (self.word1 >> RED_SHIFT) & NIBBLE_MASK,
            (self.word1 >> GREEN_SHIFT) & NIBBLE_MASK,
            (self.word1 >> BLUE_SHIFT) & NIBBLE_MASK,
            (self.word1 >> LIGHT_SHIFT) & NIBBLE_MASK,
        )
    }

    pub fn to_le_bytes(&self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out[..4].copy_from_slice(&self.word0.to_le_bytes());
        out[4..].copy_from_slice(&self.word1.to_le_bytes());
        out
    }

    pub fn from_le_bytes(bytes: [u8; 8]) -> Self {
        PackedVertex {
            word0: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            word1: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        }
    }
}

/// Encodes `rect` on `face` at depth `slice` into six vertices (two triangles).
///
/// Corners use the inclusive extent, so a 1x1 rectangle puts every vertex on the cell origin and
/// the corner id tells the renderer which cube corner to expand to.
pub fn encode_rectangle(
    face: Face,
    slice: usize,
    rect: &Rectangle,
    atlas: AtlasIndex,
) -> [PackedVertex; VERTICES_PER_QUAD] {
    let (w, h) = rect.inclusive_extent();
    let (du, dv) = atlas_offset(atlas);
    let corners = &FACE_VERTICES[face.index()];
    std::array::from_fn(|i| {
        let [cu, cv] = FACE_UVS[i];
        let a = rect.a + w * cu as usize;
        let b = rect.b + h * cv as usize;
        PackedVertex::pack(
            face,
            corners[i],
            face.point_in_slice(slice, a, b),
            du + cu,
            dv + cv,
        )
    })
}
