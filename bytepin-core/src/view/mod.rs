//! Byte views over a single plain value.
//!
//! Two strategies implement [`StructView`]:
//!
//! - [`DirectView`] aliases the value's memory as a byte slice. No copies,
//!   but a short read leaves the value partially overwritten.
//! - [`PinnedView`] pins the value and goes through a temporary buffer of
//!   exactly `size` bytes. A short read leaves the value untouched.
//!
//! The `pinned-copy` feature picks which one [`DefaultView`] and the free
//! helpers ([`write_struct`], [`read_struct`], [`read_new`]) use.

mod direct;
mod pinned;

pub use direct::DirectView;
pub use pinned::PinnedView;
#[cfg(test)]
pub(crate) use pinned::copy_buffer;

use crate::{ByteSink, ByteSource, Plain, Result};

/// Reads and writes one plain value as its raw native bytes.
///
/// The byte layout is whatever the host platform lays `T` out as. No
/// endianness normalization happens, so the bytes are not a portable format.
pub trait StructView {
    /// Number of bytes moved by every read or write.
    fn size(&self) -> usize;

    /// Write exactly [`size`](Self::size) bytes of the bound value to `sink`.
    fn write_to<S: ByteSink + ?Sized>(&self, sink: &mut S) -> Result<()>;

    /// Read exactly [`size`](Self::size) bytes from `source` into the bound
    /// value.
    ///
    /// Fails with [`ViewError::IncompleteRead`](crate::ViewError::IncompleteRead)
    /// if the source is exhausted first. What the value holds afterwards
    /// depends on the strategy; see [`DirectView`] and [`PinnedView`].
    fn read_from<S: ByteSource + ?Sized>(&mut self, source: &mut S) -> Result<()>;

    /// End the view and give up the borrow of the bound value.
    ///
    /// Consuming `self` means a view can be released at most once.
    #[inline]
    fn release(self)
    where
        Self: Sized,
    {
    }
}

/// The strategy selected at build time.
#[cfg(not(feature = "pinned-copy"))]
pub type DefaultView<'a, T> = DirectView<'a, T>;

/// The strategy selected at build time.
#[cfg(feature = "pinned-copy")]
pub type DefaultView<'a, T> = PinnedView<'a, T>;

/// Write `value` to `sink` through [`DefaultView`]'s strategy.
#[cfg(not(feature = "pinned-copy"))]
#[inline]
pub fn write_struct<T: Plain, S: ByteSink + ?Sized>(sink: &mut S, value: &T) -> Result<()> {
    direct::write(value, sink)
}

/// Write `value` to `sink` through [`DefaultView`]'s strategy.
#[cfg(feature = "pinned-copy")]
#[inline]
pub fn write_struct<T: Plain, S: ByteSink + ?Sized>(sink: &mut S, value: &T) -> Result<()> {
    pinned::write(value, &crate::BorrowPin, sink)
}

/// Overwrite `value` with bytes from `source` through [`DefaultView`]'s
/// strategy.
#[inline]
pub fn read_struct<T: Plain, S: ByteSource + ?Sized>(source: &mut S, value: &mut T) -> Result<()> {
    DefaultView::new(value).read_from(source)
}

/// Read a fresh `T` from `source`, starting from an all-zero value.
pub fn read_new<T: Plain, S: ByteSource + ?Sized>(source: &mut S) -> Result<T> {
    let mut value = T::new_zeroed();
    read_struct(source, &mut value)?;
    Ok(value)
}
