use crate::constants::CHUNK_SIZE;

/// Cube face ids as they appear in the packed normal field.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Left = 0,
    Right = 1,
    Top = 2,
    Bottom = 3,
    Back = 4,
    Front = 5,
}

/// A cell coordinate inside the chunk, each axis in `[0, 32)`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct GridPoint {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl GridPoint {
    #[inline]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        GridPoint { x, y, z }
    }
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
        Face::Back,
        Face::Front,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index back into a `Face`; `None` for 6 and up.
    #[inline]
    pub fn from_index(i: usize) -> Option<Face> {
        Face::ALL.get(i).copied()
    }

    /// Outward sign along the face axis: -1 for left/bottom/back, +1 otherwise.
    #[inline]
    pub fn direction(self) -> i32 {
        match self {
            Face::Left | Face::Bottom | Face::Back => -1,
            Face::Right | Face::Top | Face::Front => 1,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Face::Left => "left",
            Face::Right => "right",
            Face::Top => "top",
            Face::Bottom => "bottom",
            Face::Back => "back",
            Face::Front => "front",
        }
    }

    /// Maps an in-slice coordinate `(a, b)` at depth `slice` to a grid cell.
    ///
    /// Left/right slice along x with `(a, b) = (z, y)`; top/bottom along y with `(x, z)`;
    /// back/front along z with `(x, y)`.
    #[inline]
    pub fn point_in_slice(self, slice: usize, a: usize, b: usize) -> GridPoint {
        match self {
            Face::Left | Face::Right => GridPoint::new(slice, b, a),
            Face::Top | Face::Bottom => GridPoint::new(a, slice, b),
            Face::Back | Face::Front => GridPoint::new(a, b, slice),
        }
    }

    /// Inverse of [`Face::point_in_slice`]: returns `(slice, a, b)`.
    #[inline]
    pub fn slice_coords(self, p: GridPoint) -> (usize, usize, usize) {
        match self {
            Face::Left | Face::Right => (p.x, p.z, p.y),
            Face::Top | Face::Bottom => (p.y, p.x, p.z),
            Face::Back | Face::Front => (p.z, p.x, p.y),
        }
    }

    /// Depth of the neighboring slice this face looks into, if it lies inside the chunk.
    #[inline]
    pub fn neighbor_slice(self, slice: usize) -> Option<usize> {
        let n = slice as i32 + self.direction();
        if (0..CHUNK_SIZE as i32).contains(&n) {
            Some(n as usize)
        } else {
            None
        }
    }
}
