//! Strata quickstart: both array types from scratch.
//!
//! Demonstrates:
//!   1. A fixed array with empty slots, a slice, and a search
//!   2. A growable array growing past its initial capacity
//!   3. Popping from either end and the data-loss guard on resize
//!   4. Runtime type checks with dynamic `Value`s
//!
//! Run with:
//!   cargo run --example quickstart

use strata::prelude::*;

fn main() -> Result<(), ArrayError> {
    // ─── Fixed array ────────────────────────────────────────────

    let mut slots = FixedArray::<String>::new(ElementType::Text, 4)?;
    slots.set(0, Some("north".into()))?;
    slots.set(2, Some("south".into()))?;
    println!("fixed:   {slots}");
    println!("slice:   {}", slots.slice(1, 3));
    println!("south @  {}", slots.index_of(&"south".to_owned())?);

    if let Err(e) = slots.set(5, Some("east".into())) {
        println!("error:   {e}");
    }

    // ─── Growable array ─────────────────────────────────────────

    let mut arr = GrowableArray::<i64>::with_capacity(ElementType::Int, 2)?;
    for v in [10, 20, 30, 40, 50] {
        arr.append(v)?;
        println!("append {v:>2} -> len {} / capacity {}", arr.len(), arr.capacity());
    }

    println!("pop(0)   = {}", arr.pop(0)?);
    println!("pop(-1)  = {}", arr.pop_last()?);
    println!("remaining {arr}");

    match arr.resize(1, DataLoss::Refuse) {
        Err(e @ ArrayError::DataLossWarning { .. }) => {
            println!("refused: {e}");
            arr.resize(1, DataLoss::Accept)?;
        }
        other => other?,
    }
    println!("after truncating resize: {arr}");

    // ─── Dynamic values ─────────────────────────────────────────

    let mut mixed = GrowableArray::<Value>::new(ElementType::Any)?;
    mixed.append(Value::Int(1))?;
    mixed.append(Value::from("two"))?;
    mixed.append(Value::Float(3.0))?;
    println!("any:     {mixed}");

    let mut ints = GrowableArray::<Value>::new(ElementType::Int)?;
    if let Err(e) = ints.append(Value::from("x")) {
        println!("error:   {e}");
    }

    Ok(())
}
