//! Strata: fixed-length and growable typed arrays.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Strata sub-crates. For most users, adding `strata` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! // A growable array of integers, starting with room for two.
//! let mut arr = GrowableArray::<i64>::with_capacity(ElementType::Int, 2).unwrap();
//! arr.append(1).unwrap();
//! arr.append(2).unwrap();
//! arr.append(3).unwrap(); // full: the backing store doubles
//! assert_eq!(arr.capacity(), 4);
//! assert_eq!(arr.to_string(), "[1, 2, 3]");
//!
//! // Shrinking below the live count must be acknowledged.
//! assert!(matches!(
//!     arr.resize(1, DataLoss::Refuse),
//!     Err(ArrayError::DataLossWarning { .. })
//! ));
//! arr.resize(1, DataLoss::Accept).unwrap();
//! assert_eq!(arr.len(), 1);
//!
//! // Dynamic values are checked against the tag at runtime.
//! let mut fixed = FixedArray::<Value>::new(ElementType::Int, 2).unwrap();
//! assert!(matches!(
//!     fixed.set(0, Some(Value::from("x"))),
//!     Err(ArrayError::TypeMismatch { .. })
//! ));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Element tags, `Value`, `ArrayError` |
//! | [`array`] | `strata-array` | `FixedArray`, `GrowableArray`, `ArrayConfig` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element tags, dynamic values, and errors (`strata-core`).
pub use strata_core as types;

/// Fixed-length and growable arrays (`strata-array`).
///
/// [`array::FixedArray`] is the leaf store; [`array::GrowableArray`] owns
/// one and replaces it on growth.
pub use strata_array as array;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    pub use strata_array::{ArrayConfig, DataLoss, FixedArray, GrowableArray};
    pub use strata_core::{ArrayError, Element, ElementType, Value};
}
