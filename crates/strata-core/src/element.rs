//! Element type tags and the [`Element`] trait.
//!
//! Every array carries an [`ElementType`] chosen at construction. For plain
//! Rust element types the tag is fixed by the type itself, so a
//! non-conforming value cannot even be written. For per-value types such as
//! [`Value`](crate::Value) the tag is checked at runtime on every write.

use std::fmt;

use crate::error::{ArrayError, Result};

/// Runtime tag describing which values an array admits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// Signed or unsigned integers.
    Int,
    /// Floating-point numbers.
    Float,
    /// Booleans.
    Bool,
    /// UTF-8 text.
    Text,
    /// Raw byte strings.
    Bytes,
    /// Admits every value.
    Any,
}

impl ElementType {
    /// Whether a value tagged `found` may be stored under this tag.
    pub fn admits(self, found: ElementType) -> bool {
        self == ElementType::Any || self == found
    }

    /// Check that this tag can describe elements of type `T`.
    ///
    /// Fails with [`ArrayError::InvalidArgument`] when `T` always carries a
    /// different tag, e.g. an `i64` array declared as [`ElementType::Text`].
    pub fn validate_for<T: Element>(self) -> Result<()> {
        match T::STATIC_TYPE {
            Some(fixed) if !self.admits(fixed) => Err(ArrayError::invalid_argument(format!(
                "element type {self} cannot describe values of type {fixed}"
            ))),
            _ => Ok(()),
        }
    }

    /// Check that `value` conforms to this tag.
    pub fn check<T: Element>(self, value: &T) -> Result<()> {
        let found = value.element_type();
        if self.admits(found) {
            Ok(())
        } else {
            Err(ArrayError::TypeMismatch {
                expected: self,
                found,
            })
        }
    }

    /// Lower-case name of the tag.
    pub fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A type that can be stored in a Strata array.
pub trait Element: Clone + PartialEq + fmt::Debug {
    /// The tag every value of this type carries, or `None` when the tag
    /// varies per value and must be checked at runtime.
    const STATIC_TYPE: Option<ElementType>;

    /// The tag of this particular value.
    fn element_type(&self) -> ElementType;

    /// Render this value inside an array's display form.
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

macro_rules! impl_element {
    ($tag:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl Element for $ty {
                const STATIC_TYPE: Option<ElementType> = Some(ElementType::$tag);

                fn element_type(&self) -> ElementType {
                    ElementType::$tag
                }
            }
        )+
    };
}

impl_element!(Int: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_element!(Float: f32, f64);
impl_element!(Bool: bool);
impl_element!(Text: String);
impl_element!(Bytes: Vec<u8>);
