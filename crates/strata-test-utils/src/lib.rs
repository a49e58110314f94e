//! Test utilities for Strata development.
//!
//! Provides array fixtures ([`fixtures`]) and [`check_occupancy`], which
//! verifies a [`GrowableArray`]'s slot invariants against its backing store.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use strata_array::GrowableArray;
use strata_core::Element;

/// Describes the first broken occupancy invariant, if any.
///
/// Checks `len <= capacity`, that every live slot is occupied, and that
/// every slot past the live prefix is empty.
pub fn check_occupancy<T: Element>(array: &GrowableArray<T>) -> Result<(), String> {
    if array.len() > array.capacity() {
        return Err(format!(
            "len {} exceeds capacity {}",
            array.len(),
            array.capacity()
        ));
    }
    if array.backing().len() != array.capacity() {
        return Err(format!(
            "backing length {} differs from capacity {}",
            array.backing().len(),
            array.capacity()
        ));
    }
    for (i, slot) in array.backing().iter().enumerate() {
        let live = i < array.len();
        if slot.is_some() != live {
            return Err(format!(
                "slot {i} is {} but should be {}",
                if slot.is_some() { "occupied" } else { "empty" },
                if live { "occupied" } else { "empty" },
            ));
        }
    }
    Ok(())
}

/// Panics with a diagnostic if [`check_occupancy`] fails.
#[track_caller]
pub fn assert_occupancy<T: Element>(array: &GrowableArray<T>) {
    if let Err(msg) = check_occupancy(array) {
        panic!("occupancy invariant violated: {msg}");
    }
}
