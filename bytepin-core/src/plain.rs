//! The `Plain` bound: fixed-size, pointer-free values.
//!
//! A view only ever reinterprets memory that zerocopy has proven safe to
//! reinterpret. Every check happens at compile time: a struct with implicit
//! padding, references, or heap pointers does not derive the required traits,
//! so it cannot be bound to a view at all.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Marker for values whose raw memory can be dumped and reloaded verbatim.
///
/// Implemented automatically for every type that derives zerocopy's
/// `FromBytes`, `IntoBytes`, `Immutable` and `KnownLayout`. With the `derive`
/// feature those derives are re-exported from this crate.
///
/// # Example
/// ```
/// # #[cfg(feature = "derive")] {
/// use bytepin_core::{Immutable, IntoBytes, KnownLayout, Plain, ZcFromBytes};
///
/// #[derive(ZcFromBytes, IntoBytes, Immutable, KnownLayout)]
/// #[repr(C)]
/// struct Sample {
///     id: i32,
///     weight: f32,
/// }
///
/// fn assert_plain<T: Plain>() {}
/// assert_plain::<Sample>();
/// # }
/// ```
///
/// Structs with implicit padding are rejected; declare the padding as an
/// explicit `[u8; N]` field instead.
pub trait Plain: FromBytes + IntoBytes + Immutable + KnownLayout {}

impl<T> Plain for T where T: FromBytes + IntoBytes + Immutable + KnownLayout {}

/// Number of bytes a view of `T` reads or writes.
#[inline]
pub const fn plain_size<T: Plain>() -> usize {
    core::mem::size_of::<T>()
}
