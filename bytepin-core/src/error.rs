//! Error types for struct byte views.

use core::fmt;

use snafu::Snafu;

/// Error while moving a plain value to or from a byte stream.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum ViewError {
    /// The source ran dry before the whole value was read.
    #[snafu(display("incomplete read: needed {needed} bytes, only {available} available"))]
    IncompleteRead {
        /// Bytes needed.
        needed: usize,
        /// Bytes the source yielded before it was exhausted.
        available: usize,
    },

    /// The sink stopped accepting bytes before the whole value was written.
    #[snafu(display("incomplete write: needed {needed} bytes, only {written} written"))]
    IncompleteWrite {
        /// Bytes needed.
        needed: usize,
        /// Bytes the sink accepted.
        written: usize,
    },

    /// The temporary copy buffer could not be allocated.
    #[snafu(display("failed to allocate a {size} byte copy buffer"))]
    AllocationFailure {
        /// Requested buffer size.
        size: usize,
    },

    /// The underlying stream failed.
    #[snafu(display("stream error"))]
    Stream {
        /// Error reported by the stream.
        source: StreamError,
    },
}

impl ViewError {
    /// Returns `true` for [`ViewError::IncompleteRead`].
    #[inline]
    pub fn is_incomplete_read(&self) -> bool {
        matches!(self, Self::IncompleteRead { .. })
    }
}

/// Failure reported by a stream adapter.
///
/// Wraps [`std::io::Error`] when the `std` feature is enabled. Without it,
/// the provided streams never fail and this type is never constructed.
#[derive(Debug)]
pub struct StreamError {
    #[cfg(feature = "std")]
    inner: std::io::Error,
}

#[cfg(feature = "std")]
impl StreamError {
    /// The wrapped I/O error.
    pub fn io(&self) -> &std::io::Error {
        &self.inner
    }

    /// Consume and return the wrapped I/O error.
    pub fn into_io(self) -> std::io::Error {
        self.inner
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for StreamError {
    fn from(inner: std::io::Error) -> Self {
        Self { inner }
    }
}

impl fmt::Display for StreamError {
    #[cfg(feature = "std")]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }

    #[cfg(not(feature = "std"))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("stream failure")
    }
}

impl core::error::Error for StreamError {
    #[cfg(feature = "std")]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.inner)
    }
}

/// Result type for view operations.
pub type Result<T, E = ViewError> = core::result::Result<T, E>;
