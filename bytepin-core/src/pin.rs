//! Scoped memory pins.
//!
//! A [`PinnedView`](crate::PinnedView) holds a pin on the bound value for the
//! duration of each read or write. Pins are taken through a [`Pinner`] and
//! released by dropping the [`PinGuard`], so every exit path (including `?`
//! early returns) releases exactly once.

use core::ptr::NonNull;

/// Fixes a memory region in place for the duration of an operation.
pub trait Pinner {
    /// Handle returned by [`pin`](Self::pin) and handed back to
    /// [`unpin`](Self::unpin).
    type Token;

    /// Pin `len` bytes starting at `addr`.
    fn pin(&self, addr: NonNull<u8>, len: usize) -> Self::Token;

    /// Release a pin previously returned by [`pin`](Self::pin).
    fn unpin(&self, token: Self::Token);
}

/// Pins by borrowing.
///
/// A value behind `&mut T` cannot move until the borrow ends, so the borrow
/// held by the view already is the pin.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorrowPin;

impl Pinner for BorrowPin {
    type Token = ();

    #[inline]
    fn pin(&self, _addr: NonNull<u8>, _len: usize) -> Self::Token {}

    #[inline]
    fn unpin(&self, _token: Self::Token) {}
}

impl<P: Pinner + ?Sized> Pinner for &P {
    type Token = P::Token;

    #[inline]
    fn pin(&self, addr: NonNull<u8>, len: usize) -> Self::Token {
        (**self).pin(addr, len)
    }

    #[inline]
    fn unpin(&self, token: Self::Token) {
        (**self).unpin(token)
    }
}

/// A live pin. Released on drop.
#[must_use = "the pin is released as soon as the guard is dropped"]
pub struct PinGuard<'p, P: Pinner> {
    pinner: &'p P,
    token: Option<P::Token>,
}

impl<'p, P: Pinner> PinGuard<'p, P> {
    /// Pin `len` bytes at `addr` until the guard is dropped.
    #[inline]
    pub fn acquire(pinner: &'p P, addr: NonNull<u8>, len: usize) -> Self {
        let token = pinner.pin(addr, len);
        Self {
            pinner,
            token: Some(token),
        }
    }
}

impl<P: Pinner> Drop for PinGuard<'_, P> {
    #[inline]
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            self.pinner.unpin(token);
        }
    }
}

impl<P: Pinner> core::fmt::Debug for PinGuard<'_, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PinGuard")
            .field("held", &self.token.is_some())
            .finish()
    }
}
