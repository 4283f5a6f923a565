//! Read and write plain structs as their raw native bytes.
//!
//! A view binds to one fixed-layout, pointer-free value and moves exactly
//! `size_of::<T>()` bytes per operation, in the host's native layout.
//!
//! # Direct aliasing
//!
//! ```
//! use bytepin::{DirectView, StructView};
//!
//! let mut value: [u32; 2] = [42, 7];
//! let mut buf = Vec::new();
//! DirectView::new(&mut value).write_to(&mut buf).unwrap();
//! assert_eq!(buf.len(), 8);
//!
//! let mut decoded = [0u32; 2];
//! DirectView::new(&mut decoded).read_from(&mut buf.as_slice()).unwrap();
//! assert_eq!(decoded, [42, 7]);
//! ```
//!
//! # Pinned copy
//!
//! ```
//! use bytepin::{PinnedView, StructView, ViewError};
//!
//! let mut value = 0xDEAD_BEEFu32;
//! let short = [1u8, 2];
//!
//! // A short read leaves the value alone.
//! let err = PinnedView::new(&mut value).read_from(&mut &short[..]).unwrap_err();
//! assert!(matches!(err, ViewError::IncompleteRead { needed: 4, available: 2 }));
//! assert_eq!(value, 0xDEAD_BEEF);
//! ```

#![no_std]

pub use bytepin_core::*;
