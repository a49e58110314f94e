//! Growable arrays backed by a [`FixedArray`].
//!
//! A [`GrowableArray`] tracks a live element count over a fixed-length
//! backing store. When the store is full, `append` replaces it with one of
//! double the length; explicit [`resize`](GrowableArray::resize) does the
//! same to any length, guarded against silently dropping live elements.
//!
//! ```text
//! GrowableArray
//! ├── count ──────────────┐
//! └── backing: FixedArray  │
//!     [ a | b | c | None | None ]
//!       live prefix ◄─────┘  spare capacity
//! ```

use std::fmt;
use std::iter::FusedIterator;

use strata_core::{ArrayError, Element, ElementType, Result};
use tracing::{debug, trace};

use crate::config::{ArrayConfig, DataLoss};
use crate::fixed::{write_slots, FixedArray};

/// A growable, typed array with amortized doubling growth.
///
/// Invariants, upheld by every operation:
/// - `len() <= capacity()`;
/// - backing slots `[0, len())` are occupied;
/// - backing slots `[len(), capacity())` are empty.
///
/// Failed operations leave the array unchanged.
#[derive(Clone, Debug)]
pub struct GrowableArray<T> {
    /// Current backing store; exactly `capacity()` slots long.
    backing: FixedArray<T>,
    /// Number of live elements.
    count: usize,
    config: ArrayConfig,
}

impl<T: Element> GrowableArray<T> {
    /// Create an empty array with the default initial capacity (4).
    pub fn new(element_type: ElementType) -> Result<Self> {
        Self::with_config(element_type, ArrayConfig::default())
    }

    /// Create an empty array with the given initial capacity.
    pub fn with_capacity(element_type: ElementType, initial_capacity: usize) -> Result<Self> {
        Self::with_config(element_type, ArrayConfig::new(initial_capacity))
    }

    /// Create an empty array from a full configuration.
    ///
    /// Fails with [`ArrayError::InvalidArgument`] if the configuration is
    /// invalid or `element_type` cannot describe values of `T`, and with
    /// [`ArrayError::CapacityExceeded`] if the initial store cannot be
    /// allocated.
    pub fn with_config(element_type: ElementType, config: ArrayConfig) -> Result<Self> {
        config.validate()?;
        element_type.validate_for::<T>()?;
        Ok(Self {
            backing: FixedArray::alloc(element_type, config.initial_capacity)?,
            count: 0,
            config,
        })
    }

    /// Build an array holding `items` in order, with capacity equal to
    /// their number.
    ///
    /// Fails with [`ArrayError::TypeMismatch`] on the first item that does
    /// not conform to `element_type`.
    pub fn from_sequence<I>(element_type: ElementType, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let items = items.into_iter();
        let mut array = Self::with_capacity(element_type, items.size_hint().0)?;
        for item in items {
            array.append(item)?;
        }
        Ok(array)
    }

    /// The declared element type.
    pub fn element_type(&self) -> ElementType {
        self.backing.element_type()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Length of the current backing store.
    pub fn capacity(&self) -> usize {
        self.backing.len()
    }

    /// The configuration this array was built with.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Read-only view of the backing store, spare capacity included.
    pub fn backing(&self) -> &FixedArray<T> {
        &self.backing
    }

    /// Replace the backing store with one of `new_capacity` slots.
    ///
    /// A no-op when `new_capacity == capacity()`. Otherwise the first
    /// `min(capacity(), new_capacity)` slots move into the new store and the
    /// live count is clamped to the new capacity.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::CapacityExceeded`] if `new_capacity` is above the
    ///   configured maximum or cannot be allocated.
    /// - [`ArrayError::DataLossWarning`] if `new_capacity < len()` and
    ///   `data_loss` is [`DataLoss::Refuse`]. Retry with
    ///   [`DataLoss::Accept`] to truncate.
    pub fn resize(&mut self, new_capacity: usize, data_loss: DataLoss) -> Result<()> {
        if new_capacity == self.capacity() {
            return Ok(());
        }
        if new_capacity > self.config.max_capacity {
            return Err(ArrayError::CapacityExceeded {
                requested: new_capacity,
                max: self.config.max_capacity,
            });
        }
        if new_capacity < self.count && data_loss == DataLoss::Refuse {
            debug!(
                requested = new_capacity,
                count = self.count,
                "refused resize that would drop live elements"
            );
            return Err(ArrayError::DataLossWarning {
                requested: new_capacity,
                count: self.count,
            });
        }
        self.replace_backing(new_capacity)
    }

    /// Append `value` after the last live element, growing if full.
    ///
    /// Growth doubles the capacity (an empty store grows to one slot),
    /// clamped to the configured maximum. Fails with
    /// [`ArrayError::TypeMismatch`] for a non-conforming value and
    /// [`ArrayError::CapacityExceeded`] when already at the maximum.
    pub fn append(&mut self, value: T) -> Result<()> {
        self.element_type().check(&value)?;
        let capacity = self.capacity();
        if self.count == capacity {
            let grown = self.config.grown(capacity);
            if grown == capacity {
                return Err(ArrayError::CapacityExceeded {
                    requested: capacity.saturating_add(1),
                    max: self.config.max_capacity,
                });
            }
            trace!(from = capacity, to = grown, "growing full array on append");
            self.replace_backing(grown)?;
        }
        *self.backing.slot_mut(self.count) = Some(value);
        self.count += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements
    /// left.
    ///
    /// A negative index counts from the end, wrapping exactly once:
    /// `-1` is the last element and `-len()` the first; anything below that
    /// is out of range. Fails with [`ArrayError::IndexOutOfRange`] unless the
    /// resolved index lies in `[0, len())`.
    pub fn pop(&mut self, index: isize) -> Result<T> {
        let count = self.count;
        let resolved = if index < 0 {
            count.checked_sub(index.unsigned_abs())
        } else {
            usize::try_from(index).ok()
        };
        let resolved = resolved
            .filter(|&i| i < count)
            .ok_or(ArrayError::IndexOutOfRange { index, len: count })?;

        let removed = self
            .backing
            .remove_shift(resolved, count)
            .expect("live prefix slots are never empty");
        self.count -= 1;
        Ok(removed)
    }

    /// Remove and return the last element. Same as `pop(-1)`.
    pub fn pop_last(&mut self) -> Result<T> {
        self.pop(-1)
    }

    /// Read the live element at `index`.
    ///
    /// Only `[0, len())` is addressable, whatever the capacity. Indices are
    /// not wrapped; see [`pop`](GrowableArray::pop) for end-relative access.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.live()
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| ArrayError::out_of_range(index, self.count))
    }

    /// Overwrite the live element at `index`.
    ///
    /// The value is type-checked before the index is bounds-checked.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.element_type().check(&value)?;
        if index >= self.count {
            return Err(ArrayError::out_of_range(index, self.count));
        }
        *self.backing.slot_mut(index) = Some(value);
        Ok(())
    }

    /// Index of the first live element equal to `value`.
    ///
    /// Fails with [`ArrayError::TypeMismatch`] if `value` does not conform,
    /// or [`ArrayError::NotFound`] if no live element matches.
    pub fn index_of(&self, value: &T) -> Result<usize> {
        self.backing.position_within(value, self.count)
    }

    /// Iterate over the live elements in order.
    ///
    /// Each call starts a fresh pass.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            live: self.live().iter(),
        }
    }

    /// Copy the live elements into a [`FixedArray`] of exactly `len()` slots.
    pub fn to_fixed(&self) -> FixedArray<T> {
        self.backing.slice(0, self.count)
    }

    fn live(&self) -> &[Option<T>] {
        &self.backing.slots()[..self.count]
    }

    /// Move the first `min(capacity, new_capacity)` slots into a freshly
    /// allocated store. The old store is dropped.
    ///
    /// Allocation happens before any state changes, so a failure leaves the
    /// array untouched.
    fn replace_backing(&mut self, new_capacity: usize) -> Result<()> {
        let old_capacity = self.capacity();
        let next = FixedArray::alloc(self.element_type(), new_capacity)?;
        let old = std::mem::replace(&mut self.backing, next);
        for (index, slot) in old.into_slots().into_iter().take(new_capacity).enumerate() {
            *self.backing.slot_mut(index) = slot;
        }
        self.count = self.count.min(new_capacity);
        debug!(
            from = old_capacity,
            to = new_capacity,
            count = self.count,
            "replaced backing store"
        );
        Ok(())
    }
}

impl<T: Element> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.element_type() == other.element_type() && self.iter().eq(other.iter())
    }
}

impl<T: Element> fmt::Display for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_slots(f, self.iter().map(Some))
    }
}

impl<'a, T: Element> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Iterator over the live elements of a [`GrowableArray`].
///
/// Created by [`GrowableArray::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    live: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.live.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.live.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.live.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
