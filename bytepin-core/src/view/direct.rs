use snafu::ensure;

use super::StructView;
use crate::error::IncompleteReadSnafu;
use crate::stream::{drain, fill};
use crate::{ByteSink, ByteSource, Plain, Result};

/// Aliases the bound value's memory directly.
///
/// Writes stream straight out of the value and reads land straight in it.
///
/// # Short reads
///
/// Bytes are written into the value as they arrive. If the source runs dry
/// after `k` bytes, the first `k` bytes of the value hold new data, the rest
/// hold the old data, and the error reports `available: k`. Use
/// [`PinnedView`](crate::PinnedView) when a failed read must leave the value
/// alone.
#[derive(Debug)]
pub struct DirectView<'a, T: Plain> {
    value: &'a mut T,
}

impl<'a, T: Plain> DirectView<'a, T> {
    /// Bind a view to `value`.
    #[inline]
    pub fn new(value: &'a mut T) -> Self {
        Self { value }
    }

    /// Get a reference to the bound value.
    #[inline]
    pub fn get(&self) -> &T {
        &*self.value
    }

    /// Consume the view and return the borrow of the bound value.
    #[inline]
    pub fn into_inner(self) -> &'a mut T {
        self.value
    }
}

impl<T: Plain> StructView for DirectView<'_, T> {
    #[inline]
    fn size(&self) -> usize {
        core::mem::size_of::<T>()
    }

    #[inline]
    fn write_to<S: ByteSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        write(&*self.value, sink)
    }

    fn read_from<S: ByteSource + ?Sized>(&mut self, source: &mut S) -> Result<()> {
        let bytes = self.value.as_mut_bytes();
        let needed = bytes.len();
        let available = fill(source, bytes)?;
        ensure!(available == needed, IncompleteReadSnafu { needed, available });
        Ok(())
    }
}

#[inline]
pub(super) fn write<T: Plain, S: ByteSink + ?Sized>(value: &T, sink: &mut S) -> Result<()> {
    drain(sink, value.as_bytes())
}
