use bytepin_core::{
    DirectView, Immutable, IntoBytes, KnownLayout, PinnedView, StructView, ZcFromBytes,
};

#[derive(ZcFromBytes, IntoBytes, Immutable, KnownLayout, Debug, PartialEq)]
#[repr(C)]
struct Point {
    x: i32,
    y: i32,
}

fn main() {
    let mut p = Point { x: 10, y: 20 };
    let mut buf = Vec::<u8>::new();
    DirectView::new(&mut p).write_to(&mut buf).unwrap();
    println!("serialized: {buf:?}");

    let mut decoded = Point { x: 0, y: 0 };
    PinnedView::new(&mut decoded)
        .read_from(&mut buf.as_slice())
        .unwrap();
    println!("deserialized: {decoded:?}");

    assert_eq!(p, decoded);
}
