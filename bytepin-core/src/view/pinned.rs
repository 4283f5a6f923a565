use alloc::vec::Vec;
use core::ptr::NonNull;

use snafu::ensure;

use super::StructView;
use crate::error::{AllocationFailureSnafu, IncompleteReadSnafu};
use crate::stream::{drain, fill};
use crate::{BorrowPin, ByteSink, ByteSource, PinGuard, Pinner, Plain, Result};

/// Pins the bound value and copies through a temporary buffer.
///
/// Each read or write acquires one pin from the view's [`Pinner`], allocates
/// a buffer of exactly `size` bytes, and releases the pin before returning,
/// whether the operation succeeded or not.
///
/// # Short reads
///
/// The whole value is read into the buffer first and copied into the bound
/// value in one step. If the source runs dry, the copy never happens and the
/// value keeps its previous contents.
pub struct PinnedView<'a, T: Plain, P: Pinner = BorrowPin> {
    value: &'a mut T,
    pinner: P,
}

impl<'a, T: Plain> PinnedView<'a, T> {
    /// Bind a view to `value`, pinning by borrow.
    #[inline]
    pub fn new(value: &'a mut T) -> Self {
        Self::with_pinner(value, BorrowPin)
    }
}

impl<'a, T: Plain, P: Pinner> PinnedView<'a, T, P> {
    /// Bind a view to `value`, taking pins from `pinner`.
    #[inline]
    pub fn with_pinner(value: &'a mut T, pinner: P) -> Self {
        Self { value, pinner }
    }

    /// Get a reference to the bound value.
    #[inline]
    pub fn get(&self) -> &T {
        &*self.value
    }

    /// Get a reference to the pinner.
    #[inline]
    pub fn pinner(&self) -> &P {
        &self.pinner
    }

    /// Consume the view and return the borrow of the bound value.
    #[inline]
    pub fn into_inner(self) -> &'a mut T {
        self.value
    }
}

impl<T: Plain, P: Pinner> StructView for PinnedView<'_, T, P> {
    #[inline]
    fn size(&self) -> usize {
        core::mem::size_of::<T>()
    }

    #[inline]
    fn write_to<S: ByteSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        write(&*self.value, &self.pinner, sink)
    }

    fn read_from<S: ByteSource + ?Sized>(&mut self, source: &mut S) -> Result<()> {
        let size = core::mem::size_of::<T>();
        let _pin = PinGuard::acquire(
            &self.pinner,
            NonNull::from(&mut *self.value).cast::<u8>(),
            size,
        );

        let mut buf = copy_buffer(size)?;
        let available = fill(source, &mut buf)?;
        ensure!(
            available == size,
            IncompleteReadSnafu {
                needed: size,
                available,
            }
        );

        self.value.as_mut_bytes().copy_from_slice(&buf);
        Ok(())
    }
}

impl<T: Plain + core::fmt::Debug, P: Pinner + core::fmt::Debug> core::fmt::Debug
    for PinnedView<'_, T, P>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PinnedView")
            .field("value", &self.value)
            .field("pinner", &self.pinner)
            .finish()
    }
}

pub(super) fn write<T: Plain, P: Pinner, S: ByteSink + ?Sized>(
    value: &T,
    pinner: &P,
    sink: &mut S,
) -> Result<()> {
    let size = core::mem::size_of::<T>();
    let _pin = PinGuard::acquire(pinner, NonNull::from(value).cast::<u8>(), size);

    let mut buf = copy_buffer(size)?;
    buf.copy_from_slice(value.as_bytes());
    drain(sink, &buf)
}

/// Zeroed scratch buffer of exactly `size` bytes.
pub(crate) fn copy_buffer(size: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    if buf.try_reserve_exact(size).is_err() {
        return AllocationFailureSnafu { size }.fail();
    }
    buf.resize(size, 0);
    Ok(buf)
}
