//! Reusable array fixtures.
//!
//! - [`int_array`]: a growable `i64` array with exact capacity.
//! - [`text_array`]: a growable `String` array with exact capacity.
//! - [`mixed_values`]: one [`Value`] of every tag.
//! - [`sparse_fixed`]: a fixed `i64` array with every other slot empty.

use strata_array::{FixedArray, GrowableArray};
use strata_core::{ElementType, Value};

pub fn int_array(values: &[i64]) -> GrowableArray<i64> {
    GrowableArray::from_sequence(ElementType::Int, values.iter().copied())
        .expect("i64 values always conform to Int")
}

pub fn text_array(values: &[&str]) -> GrowableArray<String> {
    GrowableArray::from_sequence(ElementType::Text, values.iter().map(|s| (*s).to_owned()))
        .expect("strings always conform to Text")
}

/// One value per concrete tag, in declaration order.
pub fn mixed_values() -> Vec<Value> {
    vec![
        Value::Int(1),
        Value::Float(2.5),
        Value::Bool(true),
        Value::from("three"),
        Value::from(b"4".to_vec()),
    ]
}

/// `len` slots where even indices hold their index and odd ones are empty.
pub fn sparse_fixed(len: usize) -> FixedArray<i64> {
    let items = (0..len).map(|i| (i % 2 == 0).then_some(i as i64));
    FixedArray::from_sequence(ElementType::Int, items).expect("i64 values always conform to Int")
}
