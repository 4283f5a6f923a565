//! Minimal byte streams.
//!
//! The core stays `no_std`, so views talk to [`ByteSource`] and [`ByteSink`]
//! rather than `std::io`. Wrap `std::io` streams in [`IoStream`] (feature
//! `std`).

use alloc::vec::Vec;

use crate::error::{IncompleteWriteSnafu, Result};

/// Produces bytes.
pub trait ByteSource {
    /// Read up to `buf.len()` bytes into `buf`.
    ///
    /// Returns the number of bytes read. `Ok(0)` means the source is
    /// exhausted (or `buf` is empty).
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize>;
}

/// Consumes bytes.
pub trait ByteSink {
    /// Write up to `buf.len()` bytes from `buf`.
    ///
    /// Returns the number of bytes accepted. `Ok(0)` means the sink is full.
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize>;
}

impl ByteSource for &[u8] {
    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = buf.len().min(self.len());
        let (head, tail) = self.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = tail;
        Ok(n)
    }
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize> {
        self.extend_from_slice(buf);
        Ok(buf.len())
    }
}

impl ByteSink for &mut [u8] {
    #[inline]
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize> {
        let n = buf.len().min(self.len());
        let (head, tail) = core::mem::take(self).split_at_mut(n);
        head.copy_from_slice(&buf[..n]);
        *self = tail;
        Ok(n)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read_bytes(buf)
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    #[inline]
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize> {
        (**self).write_bytes(buf)
    }
}

/// Read from `source` until `buf` is full or the source is exhausted.
///
/// Returns the number of bytes filled. A result smaller than `buf.len()`
/// is a short read; bytes past that point are left as they were.
pub fn fill<S: ByteSource + ?Sized>(source: &mut S, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read_bytes(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}

/// Write all of `buf` to `sink`.
pub fn drain<S: ByteSink + ?Sized>(sink: &mut S, buf: &[u8]) -> Result<()> {
    let mut written = 0;
    while written < buf.len() {
        match sink.write_bytes(&buf[written..])? {
            0 => {
                return IncompleteWriteSnafu {
                    needed: buf.len(),
                    written,
                }
                .fail();
            }
            n => written += n,
        }
    }
    Ok(())
}

/// Adapts a `std::io` reader or writer into a [`ByteSource`] / [`ByteSink`].
///
/// `Interrupted` errors are retried. Every other I/O error surfaces as
/// [`ViewError::Stream`](crate::ViewError::Stream).
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct IoStream<S> {
    inner: S,
}

#[cfg(feature = "std")]
impl<S> IoStream<S> {
    /// Wrap a `std::io` stream.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Get a reference to the wrapped stream.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Get a mutable reference to the wrapped stream.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consume and return the wrapped stream.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<S: std::io::Read> ByteSource for IoStream<S> {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        use snafu::ResultExt;

        loop {
            match self.inner.read(buf) {
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                other => {
                    return other
                        .map_err(crate::StreamError::from)
                        .context(crate::error::StreamSnafu);
                }
            }
        }
    }
}

#[cfg(feature = "std")]
impl<S: std::io::Write> ByteSink for IoStream<S> {
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize> {
        use snafu::ResultExt;

        loop {
            match self.inner.write(buf) {
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                other => {
                    return other
                        .map_err(crate::StreamError::from)
                        .context(crate::error::StreamSnafu);
                }
            }
        }
    }
}
