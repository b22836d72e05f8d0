use crate::constants::{INITIAL_VERTEX_CAPACITY, VERTICES_PER_QUAD};
use crate::vertex::PackedVertex;

/// Output vertex stream with an explicit doubling capacity.
///
/// Capacity starts at [`INITIAL_VERTEX_CAPACITY`] and doubles whenever a quad brings the length up
/// to it, so a write never lands past the current capacity. The capacity is not trimmed when
/// meshing finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexBuffer {
    data: Vec<PackedVertex>,
    capacity: usize,
}

impl Default for VertexBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexBuffer {
    pub fn new() -> Self {
        VertexBuffer {
            data: Vec::with_capacity(INITIAL_VERTEX_CAPACITY),
            capacity: INITIAL_VERTEX_CAPACITY,
        }
    }

    /// Appends one quad and grows if the buffer is now full.
    pub fn push_quad(&mut self, quad: &[PackedVertex; VERTICES_PER_QUAD]) {
        debug_assert!(self.data.len() + VERTICES_PER_QUAD <= self.capacity);
        self.data.extend_from_slice(quad);
        if self.data.len() >= self.capacity {
            let old = self.capacity;
            self.capacity *= 2;
            self.data.reserve_exact(self.capacity - self.data.len());
            log::trace!("vertex buffer grew cap={} -> {}", old, self.capacity);
        }
    }

    /// Vertices written; always a multiple of 6.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn quads(&self) -> usize {
        self.data.len() / VERTICES_PER_QUAD
    }

    #[inline]
    pub fn as_slice(&self) -> &[PackedVertex] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PackedVertex> {
        self.data.iter()
    }

    /// Flattened `word0, word1` pairs in vertex order.
    pub fn words(&self) -> impl Iterator<Item = u32> + '_ {
        self.data.iter().flat_map(|v| [v.word0, v.word1])
    }

    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 8);
        for v in &self.data {
            out.extend_from_slice(&v.to_le_bytes());
        }
        out
    }
}
