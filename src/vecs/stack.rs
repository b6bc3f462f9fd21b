//! Growable `i32` buffer with stack semantics.
//!
//! Provides [`IntStack`]: an owned, contiguous run of integers with amortized O(1)
//! [`push`](IntStack::push), explicit capacity reservation, and copying or in-place
//! structural operations (slice, split, append, reverse, sort, map, filter, fold).
//!
//! [`AnyIntVec`] is a slice-view trait implemented by `IntStack`, `Vec<i32>`, slices and
//! arrays so they can be compared against and extended from one another.
//!
//! # Capacity
//! Capacity is exact: [`with_capacity(c)`](IntStack::with_capacity) allocates `c` slots
//! and [`from_slice`](IntStack::from_slice) allocates exactly the input length. When an
//! insertion would overflow the allocation, capacity doubles (repeatedly, if needed) and
//! the elements move once. Capacity never shrinks.
//!
//! # Contract violations
//! Index-taking methods panic when the index is out of range. Use
//! [`try_get`](IntStack::try_get) / [`try_set`](IntStack::try_set) to get a
//! [`CollectionError`] instead. [`pop`](IntStack::pop) always reports emptiness through
//! its `Result`.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};
use core::slice;

use crate::error::{CollectionError, Result, violated};
use crate::raw::{RawBuf, Single};

/// Capacity of a buffer created with `new()`.
pub const DEFAULT_CAPACITY: usize = 32;

/// A trait generalizing any contiguous run of `i32`.
pub trait AnyIntVec {
    fn as_slice(&self) -> &[i32];

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    fn get(&self, index: usize) -> Option<i32> {
        self.as_slice().get(index).copied()
    }

    fn contains(&self, value: i32) -> bool {
        self.as_slice().contains(&value)
    }

    fn iter(&self) -> slice::Iter<'_, i32> {
        self.as_slice().iter()
    }
}

impl AnyIntVec for Vec<i32> {
    fn as_slice(&self) -> &[i32] {
        self.as_slice()
    }
}

impl AnyIntVec for [i32] {
    fn as_slice(&self) -> &[i32] {
        self
    }
}

impl<const N: usize> AnyIntVec for [i32; N] {
    fn as_slice(&self) -> &[i32] {
        self.as_slice()
    }
}

impl AnyIntVec for IntStack {
    fn as_slice(&self) -> &[i32] {
        self.as_slice()
    }
}

/// An owned, growable stack of `i32`.
///
/// Elements `[0, len)` are live; the remaining `capacity - len` slots are spare.
#[derive(Clone)]
pub struct IntStack {
    buf: RawBuf<Single>,
}

impl IntStack {
    /// Creates an empty stack with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty stack with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(capacity),
        }
    }

    /// Copies `items`; capacity and length both equal `items.len()`.
    pub fn from_slice(items: &[i32]) -> Self {
        Self {
            buf: RawBuf::from_vec(items.to_vec()),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns `true` when the next push has to grow the allocation.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.buf.is_full()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Guarantees room for at least `additional` more elements.
    ///
    /// Capacity doubles until it fits; the elements move at most once.
    ///
    /// # Panics
    /// Panics if the new capacity overflows `usize`.
    #[track_caller]
    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    /// Fallible counterpart of [`reserve`](Self::reserve).
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.buf.try_reserve(additional)
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[inline(always)]
    #[track_caller]
    pub fn get(&self, index: usize) -> i32 {
        *self.buf.get_ref(index)
    }

    #[inline(always)]
    pub fn try_get(&self, index: usize) -> Result<i32> {
        self.buf.get(index).ok_or(CollectionError::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Overwrites the element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[inline(always)]
    #[track_caller]
    pub fn set(&mut self, index: usize, value: i32) {
        *self.buf.get_ref_mut(index) = value;
    }

    pub fn try_set(&mut self, index: usize, value: i32) -> Result<()> {
        let len = self.len();
        let slot = self
            .buf
            .get_mut(index)
            .ok_or(CollectionError::IndexOutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    /// # Panics
    /// Panics if the stack is empty.
    #[track_caller]
    pub fn first(&self) -> i32 {
        match self.as_slice().first() {
            Some(&v) => v,
            None => violated(CollectionError::Empty),
        }
    }

    /// # Panics
    /// Panics if the stack is empty.
    #[track_caller]
    pub fn last(&self) -> i32 {
        match self.as_slice().last() {
            Some(&v) => v,
            None => violated(CollectionError::Empty),
        }
    }

    /// Appends `value`, doubling capacity first if the stack is full.
    #[inline(always)]
    #[track_caller]
    pub fn push(&mut self, value: i32) {
        self.buf.push_back(value);
    }

    /// Removes and returns the top element.
    ///
    /// Returns [`CollectionError::Empty`] if there is nothing to pop.
    #[inline(always)]
    pub fn pop(&mut self) -> Result<i32> {
        self.buf.pop_back()
    }

    /// Removes the element at `index`, shifting later elements left.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> i32 {
        self.buf.remove(index)
    }

    /// Inserts `value` before `index`; `index == len` appends.
    ///
    /// # Panics
    /// Panics if `index > len`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: i32) {
        self.buf.insert(index, value);
    }

    /// Copies `[start, stop)` into a new stack whose capacity equals its length.
    ///
    /// `stop` may equal `len`, so `slice(0, len)` copies everything.
    ///
    /// # Panics
    /// Panics unless `start <= stop <= len`.
    #[track_caller]
    pub fn slice(&self, start: usize, stop: usize) -> IntStack {
        Self {
            buf: self.buf.copy_range(start, stop),
        }
    }

    /// Keeps `[0, index)` and returns `[index, len)` as a new stack.
    ///
    /// # Panics
    /// Panics if `index > len`.
    #[track_caller]
    pub fn split(&mut self, index: usize) -> IntStack {
        Self {
            buf: self.buf.split_off_back(index),
        }
    }

    /// Moves every element of `other` onto the end of `self`.
    ///
    /// `other` is left empty but keeps its allocation.
    #[track_caller]
    pub fn append(&mut self, other: &mut IntStack) {
        self.buf.append_back(&mut other.buf);
    }

    /// Shortens the stack to `size` elements.
    ///
    /// # Panics
    /// Panics if `size > len`.
    #[track_caller]
    pub fn truncate(&mut self, size: usize) {
        self.buf.truncate_back(size);
    }

    /// Grows to `size` with copies of `filler`, or truncates to `size`.
    #[track_caller]
    pub fn resize(&mut self, size: usize, filler: i32) {
        self.buf.resize_back(size, filler);
    }

    /// Fills every spare slot with `filler`; afterwards the stack is full.
    pub fn fill(&mut self, filler: i32) {
        self.buf.fill_with(|| filler);
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// # Panics
    /// Panics if either index is out of range.
    #[track_caller]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.buf.swap(a, b);
    }

    pub fn reverse(&mut self) {
        self.buf.reverse();
    }

    /// Sorts ascending. Not stable, which is unobservable for plain integers.
    pub fn sort(&mut self) {
        self.as_mut_slice().sort_unstable();
    }

    /// Shifts every element `amount` places towards the bottom, wrapping around.
    pub fn rotate_left(&mut self, amount: usize) {
        self.buf.rotate_left(amount);
    }

    pub fn rotate_right(&mut self, amount: usize) {
        self.buf.rotate_right(amount);
    }

    /// Linear scan for `value`.
    pub fn contains(&self, value: i32) -> bool {
        self.as_slice().contains(&value)
    }

    /// Binary search for `value`, returning its index.
    ///
    /// The stack must already be sorted ascending (see [`sort`](Self::sort)); on
    /// unsorted contents the answer is unspecified. With duplicates, any matching
    /// index may be returned.
    pub fn search(&self, value: i32) -> Option<usize> {
        self.as_slice().binary_search(&value).ok()
    }

    /// Replaces each element with `f(element)`.
    pub fn map<F>(&mut self, f: F)
    where
        F: FnMut(i32) -> i32,
    {
        self.buf.map_in_place(f);
    }

    /// Keeps only the elements for which `predicate` holds, preserving order.
    pub fn filter<F>(&mut self, predicate: F)
    where
        F: FnMut(i32) -> bool,
    {
        self.buf.retain(predicate);
    }

    /// Returns the first element matching `predicate`.
    pub fn find<F>(&self, mut predicate: F) -> Option<&i32>
    where
        F: FnMut(i32) -> bool,
    {
        self.as_slice().iter().find(|&&v| predicate(v))
    }

    /// Mutable counterpart of [`find`](Self::find). The borrow ends before the next
    /// call that could reallocate.
    pub fn find_mut<F>(&mut self, mut predicate: F) -> Option<&mut i32>
    where
        F: FnMut(i32) -> bool,
    {
        self.as_mut_slice().iter_mut().find(|v| predicate(**v))
    }

    pub fn position<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(i32) -> bool,
    {
        self.buf.position(predicate)
    }

    /// Folds every element left to right into an accumulator seeded with `init`.
    pub fn fold<B, F>(&self, init: B, f: F) -> B
    where
        F: FnMut(B, i32) -> B,
    {
        self.buf.fold(init, f)
    }

    /// Wrapping sum of all elements; `0` when empty.
    pub fn sum(&self) -> i32 {
        self.fold(0, i32::wrapping_add)
    }

    /// Wrapping product of all elements; `1` when empty.
    pub fn product(&self) -> i32 {
        self.fold(1, i32::wrapping_mul)
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[i32] {
        self.buf.as_slice()
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        self.buf.as_mut_slice()
    }

    pub fn iter(&self) -> slice::Iter<'_, i32> {
        self.as_slice().iter()
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.as_slice().to_vec()
    }

    pub fn extend_from_slice(&mut self, other: &[i32]) {
        self.reserve(other.len());
        for &value in other {
            self.push(value);
        }
    }

    pub fn extend_from_any<V: AnyIntVec + ?Sized>(&mut self, other: &V) {
        self.extend_from_slice(other.as_slice());
    }

    pub fn eq_any<V: AnyIntVec + ?Sized>(&self, other: &V) -> bool {
        self.as_slice() == other.as_slice()
    }

    pub fn cmp_any<V: AnyIntVec + ?Sized>(&self, other: &V) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl Default for IntStack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IntStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

/// Space-separated elements, bottom first.
impl fmt::Display for IntStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl PartialEq for IntStack {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl Eq for IntStack {}

impl Hash for IntStack {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl PartialOrd for IntStack {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IntStack {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl Extend<i32> for IntStack {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<i32> for IntStack {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            buf: RawBuf::from_vec(iter.into_iter().collect()),
        }
    }
}

impl From<&[i32]> for IntStack {
    fn from(items: &[i32]) -> Self {
        Self::from_slice(items)
    }
}

impl<const N: usize> From<[i32; N]> for IntStack {
    fn from(items: [i32; N]) -> Self {
        Self::from_slice(&items)
    }
}

impl From<Vec<i32>> for IntStack {
    fn from(items: Vec<i32>) -> Self {
        Self {
            buf: RawBuf::from_vec(items),
        }
    }
}

impl<'a> IntoIterator for &'a IntStack {
    type Item = &'a i32;
    type IntoIter = slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AsRef<[i32]> for IntStack {
    fn as_ref(&self) -> &[i32] {
        self.as_slice()
    }
}

impl AsMut<[i32]> for IntStack {
    fn as_mut(&mut self) -> &mut [i32] {
        self.as_mut_slice()
    }
}

impl Index<usize> for IntStack {
    type Output = i32;
    #[inline(always)]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.buf.get_ref(index)
    }
}

impl IndexMut<usize> for IntStack {
    #[inline(always)]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.buf.get_ref_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(value: i32) -> i32 {
        value * 3
    }

    fn is_even(value: i32) -> bool {
        value % 2 == 0
    }

    #[test]
    fn test_stack_create_defaults() {
        let stack = IntStack::new();
        assert_eq!(stack.capacity(), 32);
        assert_eq!(stack.len(), 0);
        assert!(stack.is_empty());

        let with_capacity = IntStack::with_capacity(64);
        assert_eq!(with_capacity.capacity(), 64);
        assert_eq!(with_capacity.len(), 0);

        let from = IntStack::from_slice(&[0, 1, 2, 3, 4]);
        assert_eq!(from.capacity(), 5);
        assert_eq!(from.len(), 5);
        assert_eq!(from.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_stack_conditionals() {
        let stack = IntStack::new();
        assert!(stack.is_empty());
        assert!(!stack.is_full());

        let full = IntStack::from([0, 1, 2]);
        assert!(full.is_full());
    }

    #[test]
    fn test_stack_push_pop_basic() {
        let mut stack = IntStack::with_capacity(2);
        stack.push(3);
        stack.push(2);
        stack.push(1);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.capacity(), 4);
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Err(CollectionError::Empty));
    }

    #[test]
    fn test_stack_access_get_set_first_last() {
        let mut stack = IntStack::from([10, 20, 30]);
        assert_eq!(stack.get(1), 20);
        stack.set(1, 25);
        assert_eq!(stack[1], 25);
        stack[2] = 35;
        assert_eq!(stack.first(), 10);
        assert_eq!(stack.last(), 35);
        assert_eq!(
            stack.try_get(3),
            Err(CollectionError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert!(stack.try_set(3, 0).is_err());
        assert_eq!(stack.try_set(0, 5), Ok(()));
        assert_eq!(stack.try_get(0), Ok(5));
    }

    #[test]
    #[should_panic(expected = "index 3 out of bounds for length 3")]
    fn test_stack_access_get_out_of_range() {
        let stack = IntStack::from([1, 2, 3]);
        stack.get(3);
    }

    #[test]
    #[should_panic(expected = "container is empty")]
    fn test_stack_access_first_on_empty() {
        IntStack::new().first();
    }

    #[test]
    #[should_panic(expected = "container is empty")]
    fn test_stack_access_last_on_empty() {
        IntStack::new().last();
    }

    #[test]
    fn test_stack_reserve_doubles() {
        let mut stack = IntStack::from([1, 2, 3]);
        stack.reserve(0);
        assert_eq!(stack.capacity(), 3);
        stack.reserve(4);
        assert_eq!(stack.capacity(), 12);
        assert_eq!(stack.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_stack_insert_remove() {
        let mut stack = IntStack::from([10, 20, 30]);
        stack.insert(1, 15);
        assert_eq!(stack.as_slice(), &[10, 15, 20, 30]);
        stack.insert(4, 40);
        assert_eq!(stack.as_slice(), &[10, 15, 20, 30, 40]);
        assert_eq!(stack.remove(2), 20);
        assert_eq!(stack.as_slice(), &[10, 15, 30, 40]);
        assert_eq!(stack.remove(3), 40);
        assert_eq!(stack.remove(0), 10);
        assert_eq!(stack.as_slice(), &[15, 30]);
    }

    #[test]
    #[should_panic(expected = "index 4 out of bounds for length 3")]
    fn test_stack_insert_past_end() {
        IntStack::from([1, 2, 3]).insert(4, 0);
    }

    #[test]
    fn test_stack_slice() {
        let stack = IntStack::from([0, 1, 2, 3, 4]);
        let slice = stack.slice(1, 4);
        assert_eq!(slice.as_slice(), &[1, 2, 3]);
        assert_eq!(slice.capacity(), 3);

        let whole = stack.slice(0, stack.len());
        assert_eq!(whole, stack);
        assert!(stack.slice(2, 2).is_empty());
    }

    #[test]
    #[should_panic(expected = "invalid range 1..6 for length 5")]
    fn test_stack_slice_past_end() {
        let _ = IntStack::from([0, 1, 2, 3, 4]).slice(1, 6);
    }

    #[test]
    fn test_stack_split_and_append() {
        let mut stack = IntStack::from([3, 2, 1, 4, 5, 1, 1]);
        let mut tail = stack.split(4);
        assert_eq!(stack.as_slice(), &[3, 2, 1, 4]);
        assert_eq!(tail.as_slice(), &[5, 1, 1]);

        let tail_capacity = tail.capacity();
        stack.append(&mut tail);
        assert_eq!(stack.as_slice(), &[3, 2, 1, 4, 5, 1, 1]);
        assert!(tail.is_empty());
        assert_eq!(tail.capacity(), tail_capacity);

        tail.push(9);
        assert_eq!(tail.as_slice(), &[9]);
    }

    #[test]
    fn test_stack_split_at_ends() {
        let mut stack = IntStack::from([1, 2]);
        assert!(stack.split(2).is_empty());
        let all = stack.split(0);
        assert!(stack.is_empty());
        assert_eq!(all.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_stack_truncate_resize_fill() {
        let mut stack = IntStack::from([1, 2, 3, 4, 5]);
        stack.truncate(3);
        assert_eq!(stack.as_slice(), &[1, 2, 3]);
        stack.resize(6, 9);
        assert_eq!(stack.as_slice(), &[1, 2, 3, 9, 9, 9]);
        stack.resize(2, 0);
        assert_eq!(stack.as_slice(), &[1, 2]);

        let cap = stack.capacity();
        stack.fill(7);
        assert!(stack.is_full());
        assert_eq!(stack.capacity(), cap);
        assert!(stack.iter().skip(2).all(|&v| v == 7));

        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_stack_truncate_longer_than_len() {
        IntStack::from([1]).truncate(2);
    }

    #[test]
    fn test_stack_sort_reverse_swap() {
        let mut stack = IntStack::from([4, 1, 0, 3, 2]);
        stack.sort();
        assert_eq!(stack.as_slice(), &[0, 1, 2, 3, 4]);
        stack.reverse();
        assert_eq!(stack.as_slice(), &[4, 3, 2, 1, 0]);
        stack.swap(0, 4);
        assert_eq!(stack.as_slice(), &[0, 3, 2, 1, 4]);

        let mut empty = IntStack::new();
        empty.reverse();
        empty.sort();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_stack_rotate() {
        let mut stack = IntStack::from([0, 1, 2, 3, 4]);
        stack.rotate_left(2);
        assert_eq!(stack.as_slice(), &[2, 3, 4, 0, 1]);
        stack.rotate_right(7);
        assert_eq!(stack.as_slice(), &[0, 1, 2, 3, 4]);
        let mut empty = IntStack::new();
        empty.rotate_left(3);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_stack_search_sorted() {
        let stack = IntStack::from([-4, 0, 3, 8, 15, 16]);
        assert_eq!(stack.search(-4), Some(0));
        assert_eq!(stack.search(8), Some(3));
        assert_eq!(stack.search(16), Some(5));
        assert_eq!(stack.search(5), None);
        assert_eq!(IntStack::new().search(1), None);
        assert!(stack.contains(15));
        assert!(!stack.contains(14));
    }

    #[test]
    fn test_stack_functional_pipeline() {
        let mut stack = IntStack::from([0, 1, 2, 3, 4]);
        stack.map(triple);
        assert_eq!(stack.as_slice(), &[0, 3, 6, 9, 12]);
        stack.filter(is_even);
        assert_eq!(stack.as_slice(), &[0, 6, 12]);
        assert_eq!(stack.fold(0, |acc, v| acc + v), 18);
        assert_eq!(stack.sum(), 18);
    }

    #[test]
    fn test_stack_filter_adjacent_rejects() {
        let mut stack = IntStack::from([1, 3, 5, 2, 7, 4]);
        stack.filter(is_even);
        assert_eq!(stack.as_slice(), &[2, 4]);
    }

    #[test]
    fn test_stack_find_and_find_mut() {
        let mut stack = IntStack::from([1, 4, 6, 9]);
        assert_eq!(stack.find(is_even), Some(&4));
        assert_eq!(stack.position(is_even), Some(1));
        assert_eq!(stack.find(|v| v > 100), None);
        if let Some(v) = stack.find_mut(|v| v > 5) {
            *v = 60;
        }
        assert_eq!(stack.as_slice(), &[1, 4, 60, 9]);
    }

    #[test]
    fn test_stack_sum_product() {
        let stack = IntStack::from([1, 2, 3, 4]);
        assert_eq!(stack.sum(), 10);
        assert_eq!(stack.product(), 24);
        assert_eq!(IntStack::new().sum(), 0);
        assert_eq!(IntStack::new().product(), 1);
        assert_eq!(IntStack::from([i32::MAX, 1]).sum(), i32::MIN);
    }

    #[test]
    fn test_stack_traits_display_debug() {
        let stack = IntStack::from([3, 2, 1]);
        assert_eq!(stack.to_string(), "3 2 1");
        assert_eq!(format!("{stack:?}"), "[3, 2, 1]");
        assert_eq!(IntStack::new().to_string(), "");
    }

    #[test]
    fn test_stack_traits_collect_extend_into_iter() {
        let mut stack: IntStack = (0..4).collect();
        assert_eq!(stack.capacity(), 4);
        stack.extend([4, 5]);
        assert_eq!(stack.to_vec(), vec![0, 1, 2, 3, 4, 5]);
        let doubled: Vec<i32> = (&stack).into_iter().map(|v| v * 2).collect();
        assert_eq!(doubled, vec![0, 2, 4, 6, 8, 10]);
        assert_eq!(IntStack::from(vec![7, 8]).as_slice(), &[7, 8]);
    }

    #[test]
    fn test_stack_traits_ordering() {
        let a = IntStack::from([1, 2, 3]);
        let b = IntStack::from([1, 2, 4]);
        let c = IntStack::from([1, 2]);
        assert!(a < b);
        assert!(a > c);
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn test_stack_traits_interop() {
        let mut stack = IntStack::from([1, 2, 3]);
        assert!(stack.eq_any(&vec![1, 2, 3]));
        assert!(!stack.eq_any(&[1, 2, 4]));
        assert_eq!(stack.cmp_any(&[1, 2, 4]), Ordering::Less);
        stack.extend_from_any(&vec![4, 5]);
        assert_eq!(stack.as_slice(), &[1, 2, 3, 4, 5]);

        let any: &dyn AnyIntVec = &stack;
        assert_eq!(any.len(), 5);
        assert_eq!(any.get(4), Some(5));
        assert!(any.contains(3));
        assert_eq!(any.iter().sum::<i32>(), 15);
    }
}
