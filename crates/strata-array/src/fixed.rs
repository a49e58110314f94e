//! Fixed-length typed arrays.
//!
//! A [`FixedArray`] is a contiguous run of optional slots allocated to full
//! length at creation and never resized. It is both a container in its own
//! right and the backing store of every [`GrowableArray`](crate::GrowableArray).

use std::fmt;

use strata_core::{ArrayError, Element, ElementType, Result};

/// A fixed-length store of homogeneously-typed optional elements.
///
/// Every slot is either empty or holds a value conforming to the array's
/// [`ElementType`]. Slots start empty; [`set`](FixedArray::set) overwrites
/// one in place and [`clear`](FixedArray::clear) empties all of them. The
/// length is set at construction and never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedArray<T> {
    element_type: ElementType,
    /// Backing storage. Allocated to full length at creation.
    slots: Box<[Option<T>]>,
}

impl<T: Element> FixedArray<T> {
    /// Create an array of `length` empty slots.
    ///
    /// Fails with [`ArrayError::InvalidArgument`] if `element_type` cannot
    /// describe values of `T`, or [`ArrayError::CapacityExceeded`] if
    /// `length` slots cannot be allocated. Zero-length arrays are allowed.
    pub fn new(element_type: ElementType, length: usize) -> Result<Self> {
        element_type.validate_for::<T>()?;
        Self::alloc(element_type, length)
    }

    /// Build an array sized to `items`, copying each item into its slot.
    ///
    /// Items may be plain values or `Option`s; `None` leaves the slot empty.
    /// Fails with [`ArrayError::TypeMismatch`] on the first non-empty item
    /// that does not conform to `element_type`.
    pub fn from_sequence<I>(element_type: ElementType, items: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        element_type.validate_for::<T>()?;
        let slots = items
            .into_iter()
            .map(|item| {
                let item: Option<T> = item.into();
                if let Some(value) = &item {
                    element_type.check(value)?;
                }
                Ok(item)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            element_type,
            slots: slots.into_boxed_slice(),
        })
    }

    /// Largest slot count whose allocation stays within `isize::MAX` bytes.
    pub fn max_len() -> usize {
        isize::MAX as usize / std::mem::size_of::<Option<T>>().max(1)
    }

    /// Allocate without validating the tag. Callers have already done so.
    ///
    /// Fails with [`ArrayError::CapacityExceeded`] instead of aborting when
    /// the allocator cannot provide `length` slots.
    pub(crate) fn alloc(element_type: ElementType, length: usize) -> Result<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(length)
            .map_err(|_| ArrayError::CapacityExceeded {
                requested: length,
                max: Self::max_len(),
            })?;
        slots.resize_with(length, || None);
        Ok(Self {
            element_type,
            slots: slots.into_boxed_slice(),
        })
    }

    /// The declared element type.
    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the array has zero slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read the slot at `index`.
    ///
    /// Returns `Ok(None)` for an empty slot and
    /// [`ArrayError::IndexOutOfRange`] unless `index < len()`.
    pub fn get(&self, index: usize) -> Result<Option<&T>> {
        self.slots
            .get(index)
            .map(Option::as_ref)
            .ok_or_else(|| ArrayError::out_of_range(index, self.len()))
    }

    /// Overwrite the slot at `index`.
    ///
    /// `None` is always legal and empties the slot. A value is type-checked
    /// before the index is bounds-checked.
    pub fn set(&mut self, index: usize, value: Option<T>) -> Result<()> {
        if let Some(v) = &value {
            self.element_type.check(v)?;
        }
        let len = self.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or_else(|| ArrayError::out_of_range(index, len))?;
        *slot = value;
        Ok(())
    }

    /// Copy the sub-run `[start, stop)` into a new array.
    ///
    /// Bounds are clamped to `len()` and `start > stop` selects nothing, so
    /// this never fails; the result may be empty.
    pub fn slice(&self, start: usize, stop: usize) -> Self {
        let stop = stop.min(self.len());
        let start = start.min(stop);
        Self {
            element_type: self.element_type,
            slots: self.slots[start..stop].into(),
        }
    }

    /// Index of the first slot holding `value`.
    ///
    /// Fails with [`ArrayError::TypeMismatch`] if `value` does not conform,
    /// or [`ArrayError::NotFound`] if no slot matches.
    pub fn index_of(&self, value: &T) -> Result<usize> {
        self.position_within(value, self.len())
    }

    /// Reset every slot to empty. The length is unchanged.
    pub fn clear(&mut self) {
        self.slots.fill_with(|| None);
    }

    /// Iterate over all slots in order.
    pub fn iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = Option<&T>> + ExactSizeIterator + '_ {
        self.slots.iter().map(Option::as_ref)
    }

    /// Search restricted to the prefix `[0, end)`.
    pub(crate) fn position_within(&self, value: &T, end: usize) -> Result<usize> {
        self.element_type.check(value)?;
        self.slots[..end.min(self.len())]
            .iter()
            .position(|slot| slot.as_ref() == Some(value))
            .ok_or(ArrayError::NotFound)
    }

    pub(crate) fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Mutable access to a slot whose index and value the caller has
    /// already validated.
    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Option<T> {
        &mut self.slots[index]
    }

    /// Take the slot at `index` and close the gap by shifting `(index, end)`
    /// one place left. Slot `end - 1` is empty afterwards.
    ///
    /// # Panics
    ///
    /// Panics unless `index < end <= len()`.
    pub(crate) fn remove_shift(&mut self, index: usize, end: usize) -> Option<T> {
        let removed = self.slots[index].take();
        self.slots[index..end].rotate_left(1);
        removed
    }

    pub(crate) fn into_slots(self) -> Vec<Option<T>> {
        self.slots.into_vec()
    }
}

impl<T: Element> fmt::Display for FixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_slots(f, self.slots.iter().map(Option::as_ref))
    }
}

/// Render slots as `[a, None, c]`.
pub(crate) fn write_slots<'a, T: Element + 'a>(
    f: &mut fmt::Formatter<'_>,
    slots: impl Iterator<Item = Option<&'a T>>,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, slot) in slots.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        match slot {
            Some(value) => value.fmt_element(f)?,
            None => f.write_str("None")?,
        }
    }
    f.write_str("]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strata_core::Value;

    #[test]
    fn new_starts_with_empty_slots() {
        let arr = FixedArray::<i64>::new(ElementType::Int, 3).unwrap();
        assert_eq!(arr.len(), 3);
        assert!(arr.iter().all(|slot| slot.is_none()));
    }

    #[test]
    fn zero_length_is_allowed() {
        let arr = FixedArray::<i64>::new(ElementType::Int, 0).unwrap();
        assert!(arr.is_empty());
        assert_eq!(arr.to_string(), "[]");
    }

    #[test]
    fn new_rejects_tag_that_cannot_describe_t() {
        let result = FixedArray::<i64>::new(ElementType::Text, 3);
        assert!(matches!(result, Err(ArrayError::InvalidArgument { .. })));
    }

    #[test]
    fn set_then_get() {
        let mut arr = FixedArray::<String>::new(ElementType::Text, 3).unwrap();
        arr.set(1, Some("x".to_owned())).unwrap();
        assert_eq!(arr.get(1).unwrap(), Some(&"x".to_owned()));
        assert_eq!(arr.get(0).unwrap(), None);
    }

    #[test]
    fn unallocatable_length_is_an_error() {
        let result = FixedArray::<i64>::new(ElementType::Int, isize::MAX as usize / 8);
        assert!(matches!(
            result,
            Err(ArrayError::CapacityExceeded { requested, .. })
                if requested == isize::MAX as usize / 8
        ));
    }

    #[test]
    fn set_past_end_is_out_of_range() {
        let mut arr = FixedArray::<String>::new(ElementType::Text, 3).unwrap();
        let err = arr.set(5, Some("x".to_owned())).unwrap_err();
        assert_eq!(err, ArrayError::IndexOutOfRange { index: 5, len: 3 });
        assert!(arr.iter().all(|slot| slot.is_none()));
    }

    #[test]
    fn get_past_end_is_out_of_range() {
        let arr = FixedArray::<i64>::new(ElementType::Int, 2).unwrap();
        assert!(matches!(
            arr.get(2),
            Err(ArrayError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn set_wrong_type_is_mismatch() {
        let mut arr = FixedArray::<Value>::new(ElementType::Int, 2).unwrap();
        let err = arr.set(0, Some(Value::from("x"))).unwrap_err();
        assert_eq!(
            err,
            ArrayError::TypeMismatch {
                expected: ElementType::Int,
                found: ElementType::Text,
            }
        );
        assert_eq!(arr.get(0).unwrap(), None);
    }

    #[test]
    fn type_is_checked_before_bounds() {
        let mut arr = FixedArray::<Value>::new(ElementType::Int, 2).unwrap();
        let err = arr.set(9, Some(Value::from("x"))).unwrap_err();
        assert!(matches!(err, ArrayError::TypeMismatch { .. }));
    }

    #[test]
    fn setting_none_empties_a_slot() {
        let mut arr = FixedArray::<Value>::new(ElementType::Int, 2).unwrap();
        arr.set(0, Some(Value::Int(1))).unwrap();
        arr.set(0, None).unwrap();
        assert_eq!(arr.get(0).unwrap(), None);
    }

    #[test]
    fn any_tag_accepts_mixed_values() {
        let mut arr = FixedArray::<Value>::new(ElementType::Any, 2).unwrap();
        arr.set(0, Some(Value::Int(1))).unwrap();
        arr.set(1, Some(Value::from("a"))).unwrap();
        assert_eq!(arr.to_string(), "[1, 'a']");
    }

    #[test]
    fn clear_keeps_length() {
        let mut arr = FixedArray::<i64>::from_sequence(ElementType::Int, [1, 2, 3]).unwrap();
        arr.clear();
        assert_eq!(arr.len(), 3);
        assert!(arr.iter().all(|slot| slot.is_none()));
    }

    #[test]
    fn from_sequence_copies_items_and_gaps() {
        let arr =
            FixedArray::<i64>::from_sequence(ElementType::Int, [Some(1), None, Some(3)]).unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.to_string(), "[1, None, 3]");
    }

    #[test]
    fn from_sequence_fails_on_first_mismatch() {
        let items = vec![Some(Value::Int(1)), None, Some(Value::Bool(true))];
        let err = FixedArray::<Value>::from_sequence(ElementType::Int, items).unwrap_err();
        assert_eq!(
            err,
            ArrayError::TypeMismatch {
                expected: ElementType::Int,
                found: ElementType::Bool,
            }
        );
    }

    #[test]
    fn from_empty_sequence_is_allowed() {
        let arr = FixedArray::<i64>::from_sequence(ElementType::Int, Vec::<i64>::new()).unwrap();
        assert!(arr.is_empty());
    }

    #[test]
    fn index_of_finds_first_match() {
        let arr =
            FixedArray::<i64>::from_sequence(ElementType::Int, [Some(7), None, Some(7)]).unwrap();
        assert_eq!(arr.index_of(&7).unwrap(), 0);
        assert_eq!(arr.index_of(&8), Err(ArrayError::NotFound));
    }

    #[test]
    fn index_of_wrong_type_is_mismatch() {
        let arr = FixedArray::<Value>::from_sequence(ElementType::Int, [Value::Int(1)]).unwrap();
        assert!(matches!(
            arr.index_of(&Value::from("1")),
            Err(ArrayError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn slice_copies_sub_run() {
        let arr = FixedArray::<i64>::from_sequence(ElementType::Int, [1, 2, 3, 4]).unwrap();
        let sub = arr.slice(1, 3);
        assert_eq!(sub.len(), 2);
        assert_eq!(sub.to_string(), "[2, 3]");
        assert_eq!(sub.element_type(), ElementType::Int);
    }

    #[test]
    fn slice_clamps_and_allows_empty() {
        let arr = FixedArray::<i64>::from_sequence(ElementType::Int, [1, 2, 3]).unwrap();
        assert_eq!(arr.slice(1, 99).len(), 2);
        assert!(arr.slice(2, 1).is_empty());
        assert!(arr.slice(5, 9).is_empty());
    }

    #[test]
    fn remove_shift_closes_gap() {
        let mut arr =
            FixedArray::<i64>::from_sequence(ElementType::Int, [Some(1), Some(2), Some(3), None])
                .unwrap();
        let removed = arr.remove_shift(0, 3);
        assert_eq!(removed, Some(1));
        assert_eq!(arr.to_string(), "[2, 3, None, None]");
    }

    proptest! {
        #[test]
        fn writes_match_slot_model(
            len in 0usize..16,
            writes in proptest::collection::vec((0usize..20, proptest::option::of(any::<i64>())), 0..48),
        ) {
            let mut arr = FixedArray::<i64>::new(ElementType::Int, len).unwrap();
            let mut model: Vec<Option<i64>> = vec![None; len];
            for (index, value) in writes {
                let result = arr.set(index, value);
                if index < len {
                    prop_assert!(result.is_ok());
                    model[index] = value;
                    prop_assert_eq!(arr.get(index).unwrap(), value.as_ref());
                } else {
                    prop_assert_eq!(
                        result,
                        Err(ArrayError::IndexOutOfRange { index: index as isize, len })
                    );
                }
                let slots: Vec<Option<i64>> = arr.iter().map(|slot| slot.copied()).collect();
                prop_assert_eq!(&slots, &model);
            }
        }

        #[test]
        fn slice_matches_vec_slicing(
            items in proptest::collection::vec(any::<i32>(), 0..32),
            start in 0usize..40,
            stop in 0usize..40,
        ) {
            let arr = FixedArray::<i32>::from_sequence(ElementType::Int, items.clone()).unwrap();
            let sub = arr.slice(start, stop);
            let hi = stop.min(items.len());
            let lo = start.min(hi);
            let expected: Vec<Option<&i32>> = items[lo..hi].iter().map(Some).collect();
            prop_assert_eq!(sub.iter().collect::<Vec<_>>(), expected);
        }

        #[test]
        fn index_of_is_smallest_match(
            items in proptest::collection::vec(0i64..5, 0..32),
            needle in 0i64..5,
        ) {
            let arr = FixedArray::<i64>::from_sequence(ElementType::Int, items.clone()).unwrap();
            match items.iter().position(|&v| v == needle) {
                Some(pos) => prop_assert_eq!(arr.index_of(&needle), Ok(pos)),
                None => prop_assert_eq!(arr.index_of(&needle), Err(ArrayError::NotFound)),
            }
        }
    }
}
