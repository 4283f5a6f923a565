//! Core implementation for bytepin: plain structs as raw native bytes.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod error;
mod pin;
mod plain;
pub mod stream;
mod view;

#[cfg(test)]
mod tests;

pub use error::{Result, StreamError, ViewError};
pub use pin::{BorrowPin, PinGuard, Pinner};
pub use plain::{Plain, plain_size};
#[cfg(feature = "std")]
pub use stream::IoStream;
pub use stream::{ByteSink, ByteSource};
pub use view::{DefaultView, DirectView, PinnedView, StructView, read_new, read_struct, write_struct};

#[cfg(feature = "derive")]
pub use zerocopy::{FromBytes as ZcFromBytes, Immutable, IntoBytes, KnownLayout};
