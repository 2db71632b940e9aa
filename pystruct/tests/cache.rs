//! Layout cache lifecycle

#![cfg(feature = "cache")]

use pystruct::{Struct, cached_formats, clear_cache};

#[test]
fn clear_keeps_handed_out_layouts() {
    let before = Struct::new("<5d").unwrap();
    assert!(cached_formats() >= 1);

    clear_cache();
    assert_eq!(before.size(), 40);

    let after = Struct::new("<5d").unwrap();
    assert_eq!(after.layout(), before.layout());
    assert!(cached_formats() >= 1);
}
