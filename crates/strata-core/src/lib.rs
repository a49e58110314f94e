//! Core types for the Strata container library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! pieces shared by every array type in the workspace: the runtime element
//! type tag, the [`Element`] trait that ties Rust types to tags, the dynamic
//! [`Value`] variant for heterogeneous data, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod value;

pub use element::{Element, ElementType};
pub use error::{ArrayError, Result};
pub use value::Value;
