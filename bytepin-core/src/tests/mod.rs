extern crate std;


use core::cell::{Cell, RefCell};
use core::ptr::NonNull;
use std::vec::Vec;

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{Pinner, ViewError, plain_size, read_new, read_struct, write_struct};

/// One `i32` followed by one `f32`: 8 bytes, no padding.
#[derive(FromBytes, IntoBytes, Immutable, KnownLayout, Debug, Clone, Copy, PartialEq)]
#[repr(C)]
struct Sample {
    id: i32,
    weight: f32,
}

const SAMPLE: Sample = Sample {
    id: 42,
    weight: 3.5,
};

/// Explicit padding keeps the layout free of uninitialized bytes.
#[derive(FromBytes, IntoBytes, Immutable, KnownLayout, Debug, Clone, Copy, PartialEq)]
#[repr(C)]
struct Padded {
    tag: u8,
    _pad: [u8; 3],
    count: u32,
    dims: [u16; 4],
}

/// Records every pin and unpin.
#[derive(Default)]
struct CountingPin {
    acquired: Cell<usize>,
    released: Cell<usize>,
    lens: RefCell<Vec<usize>>,
}

impl CountingPin {
    fn acquired(&self) -> usize {
        self.acquired.get()
    }

    fn released(&self) -> usize {
        self.released.get()
    }
}

impl Pinner for CountingPin {
    type Token = usize;

    fn pin(&self, _addr: NonNull<u8>, len: usize) -> usize {
        let id = self.acquired.get();
        self.acquired.set(id + 1);
        self.lens.borrow_mut().push(len);
        id
    }

    fn unpin(&self, token: usize) {
        assert!(token < self.acquired.get(), "unpin of a pin never taken");
        self.released.set(self.released.get() + 1);
    }
}

/// Yields at most one byte per call.
struct Trickle<'a>(&'a [u8]);

impl crate::ByteSource for Trickle<'_> {
    fn read_bytes(&mut self, buf: &mut [u8]) -> crate::Result<usize> {
        if buf.is_empty() || self.0.is_empty() {
            return Ok(0);
        }
        buf[0] = self.0[0];
        self.0 = &self.0[1..];
        Ok(1)
    }
}

#[test]
fn plain_size_matches_layout() {
    assert_eq!(plain_size::<Sample>(), 8);
    assert_eq!(plain_size::<Padded>(), 16);
    assert_eq!(plain_size::<[u64; 3]>(), 24);
}

#[test]
fn free_helpers_roundtrip() {
    let mut out = Vec::<u8>::new();
    write_struct(&mut out, &SAMPLE).unwrap();
    assert_eq!(out.len(), 8);
    assert_eq!(out, SAMPLE.as_bytes());

    let mut decoded = Sample { id: 0, weight: 0.0 };
    read_struct(&mut out.as_slice(), &mut decoded).unwrap();
    assert_eq!(decoded, SAMPLE);
}

#[test]
fn read_new_starts_from_zero() {
    let bytes = SAMPLE.as_bytes().to_vec();
    let decoded: Sample = read_new(&mut bytes.as_slice()).unwrap();
    assert_eq!(decoded.id, 42);
    assert_eq!(decoded.weight, 3.5);
}

#[test]
fn read_new_reports_short_read() {
    let bytes = [0u8; 3];
    let err = read_new::<Sample, _>(&mut &bytes[..]).unwrap_err();
    assert!(matches!(
        err,
        ViewError::IncompleteRead {
            needed: 8,
            available: 3
        }
    ));
}

#[test]
fn free_helpers_consume_one_value_at_a_time() {
    let values = [
        Sample { id: 1, weight: 0.5 },
        Sample { id: 2, weight: 1.5 },
        Sample { id: 3, weight: 2.5 },
    ];
    let mut out = Vec::<u8>::new();
    for v in &values {
        write_struct(&mut out, v).unwrap();
    }
    assert_eq!(out.len(), 24);

    let mut source = out.as_slice();
    for v in &values {
        let decoded: Sample = read_new(&mut source).unwrap();
        assert_eq!(&decoded, v);
    }
    assert!(source.is_empty());
}

#[cfg(not(feature = "pinned-copy"))]
#[test]
fn default_short_read_overwrites_received_prefix() {
    let bytes = &SAMPLE.as_bytes()[..5];
    let mut value = Sample { id: 7, weight: 9.0 };
    let before = value;

    assert!(read_struct(&mut &bytes[..], &mut value).is_err());
    assert_eq!(value.id, 42);
    assert_eq!(&value.as_bytes()[..5], bytes);
    assert_eq!(&value.as_bytes()[5..], &before.as_bytes()[5..]);
}

#[cfg(feature = "pinned-copy")]
#[test]
fn default_short_read_leaves_value_untouched() {
    let bytes = &SAMPLE.as_bytes()[..5];
    let mut value = Sample { id: 7, weight: 9.0 };

    assert!(read_struct(&mut &bytes[..], &mut value).is_err());
    assert_eq!(value, Sample { id: 7, weight: 9.0 });
}
