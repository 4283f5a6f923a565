//! The record the demo moves through a file.

use bytepin::{Immutable, IntoBytes, KnownLayout, ZcFromBytes};

/// Describes one Z slice taken from a voxel field.
#[derive(ZcFromBytes, IntoBytes, Immutable, KnownLayout, Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct SliceHeader {
    /// Field size in voxels (x, y, z).
    pub dims: [u32; 3],
    /// Index of the slice along z.
    pub slice_index: u32,
    /// Edge length of one voxel in millimetres.
    pub voxel_size_mm: f32,
}

impl SliceHeader {
    /// Header for the middle slice of a field of the given size.
    pub fn centered(dims: [u32; 3], voxel_size_mm: f32) -> Self {
        Self {
            dims,
            slice_index: dims[2] / 2,
            voxel_size_mm,
        }
    }

    /// Pixels in one slice image.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.dims[0]) * u64::from(self.dims[1])
    }
}
