//! Fixed-length and growable typed arrays.
//!
//! Two layered containers share one element-type contract from
//! `strata-core`:
//!
//! ```text
//! GrowableArray (count + config)
//! └── FixedArray (exclusively owned, replaced wholesale on resize)
//!     └── Box<[Option<T>]> (slots: empty or a conforming value)
//! ```
//!
//! - [`FixedArray`]: allocated to full length once, mutated in place.
//! - [`GrowableArray`]: appends with doubling growth, pops with shifting,
//!   and refuses shrinking resizes that would drop live elements unless the
//!   caller passes [`DataLoss::Accept`].
//!
//! Resize events are reported through `tracing` at `debug` level and
//! automatic growth at `trace` level. No subscriber is installed here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod fixed;
pub mod growable;

// Public re-exports for the primary API surface.
pub use config::{ArrayConfig, DataLoss};
pub use fixed::FixedArray;
pub use growable::{GrowableArray, Iter};
pub use strata_core::{ArrayError, Element, ElementType, Result, Value};
