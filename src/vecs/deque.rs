//! Growable double-ended queue of `i32`.
//!
//! [`IntDeque`] shares its growth and reservation logic with
//! [`IntStack`](crate::IntStack) but lets `head` move, so pushes and pops at the front
//! are O(1) instead of shifting the whole buffer.
//!
//! # Ring representation
//! Elements live in a ring over exactly `capacity` slots. Logical index 0 is the
//! front. After front operations the live run may wrap past the end of the allocation;
//! [`as_slices`](IntDeque::as_slices) then returns two runs, and
//! [`is_contiguous`](IntDeque::is_contiguous) reports `false` until
//! [`make_contiguous`](IntDeque::make_contiguous) (or a growth) moves the front back to
//! slot zero.
//!
//! # Directional operations
//! | Method | Acts on |
//! |--------|---------|
//! | `split_front(n)` / `split_back(n)` | detaches the first / last `n` elements |
//! | `truncate_front(n)` / `truncate_back(n)` | drops from the front / back until `len == n` |
//! | `resize_front(n, x)` / `resize_back(n, x)` | grows or truncates at the front / back |
//! | `slice_front(a, b)` / `slice_back(a, b)` | copies offsets `[a, b)` counted from the front / back |

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};
use core::slice;
use std::collections::VecDeque;

use crate::error::{CollectionError, Result, violated};
use crate::raw::{Double, RawBuf};
use crate::vecs::stack::DEFAULT_CAPACITY;

// ─── AnyIntDeque ──────────────────────────────────────────────────────────────

/// An object-safe abstraction over double-ended queues of `i32`.
///
/// Implemented by both `VecDeque<i32>` and [`IntDeque`], so callers (and tests) can
/// drive either one through the same interface.
pub trait AnyIntDeque {
    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;
    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Appends an element to the back.
    fn push_back(&mut self, value: i32);
    /// Prepends an element to the front.
    fn push_front(&mut self, value: i32);
    /// Removes and returns the back element, or `None` if empty.
    fn pop_back(&mut self) -> Option<i32>;
    /// Removes and returns the front element, or `None` if empty.
    fn pop_front(&mut self) -> Option<i32>;
    /// Returns the front element, or `None` if empty.
    fn front(&self) -> Option<i32>;
    /// Returns the back element, or `None` if empty.
    fn back(&self) -> Option<i32>;
    /// Removes all elements.
    fn clear(&mut self);
}

impl AnyIntDeque for VecDeque<i32> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, value: i32) {
        self.push_back(value);
    }
    fn push_front(&mut self, value: i32) {
        self.push_front(value);
    }
    fn pop_back(&mut self) -> Option<i32> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<i32> {
        self.pop_front()
    }
    fn front(&self) -> Option<i32> {
        self.front().copied()
    }
    fn back(&self) -> Option<i32> {
        self.back().copied()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl AnyIntDeque for IntDeque {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, value: i32) {
        self.push_back(value);
    }
    fn push_front(&mut self, value: i32) {
        self.push_front(value);
    }
    fn pop_back(&mut self) -> Option<i32> {
        self.pop_back().ok()
    }
    fn pop_front(&mut self) -> Option<i32> {
        self.pop_front().ok()
    }
    fn front(&self) -> Option<i32> {
        self.try_get(0).ok()
    }
    fn back(&self) -> Option<i32> {
        self.len().checked_sub(1).and_then(|i| self.try_get(i).ok())
    }
    fn clear(&mut self) {
        self.clear();
    }
}

/// A growable double-ended queue of `i32` backed by a ring buffer.
#[derive(Clone)]
pub struct IntDeque {
    buf: RawBuf<Double>,
}

impl IntDeque {
    /// Creates an empty deque with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty deque with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(capacity),
        }
    }

    /// Copies `items` front to back; capacity and length both equal `items.len()`.
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

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.buf.is_full()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `true` when the elements occupy one run starting at slot zero.
    pub fn is_contiguous(&self) -> bool {
        self.buf.is_empty() || self.buf.head() == 0
    }

    /// Guarantees room for at least `additional` more elements at either end.
    ///
    /// # Panics
    /// Panics if the new capacity overflows `usize`.
    #[track_caller]
    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.buf.try_reserve(additional)
    }

    /// Moves the elements so they start at slot zero and returns them as one slice.
    pub fn make_contiguous(&mut self) -> &mut [i32] {
        self.buf.make_contiguous()
    }

    /// Returns the elements as up to two runs in front-to-back order.
    ///
    /// The second run is empty unless the ring currently wraps.
    pub fn as_slices(&self) -> (&[i32], &[i32]) {
        self.buf.as_slices()
    }

    pub fn as_mut_slices(&mut self) -> (&mut [i32], &mut [i32]) {
        self.buf.as_mut_slices()
    }

    /// Returns the element at logical `index` (0 is the front).
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

    /// Front element.
    ///
    /// # Panics
    /// Panics if the deque is empty.
    #[track_caller]
    pub fn first(&self) -> i32 {
        match self.buf.get(0) {
            Some(v) => v,
            None => violated(CollectionError::Empty),
        }
    }

    /// Back element.
    ///
    /// # Panics
    /// Panics if the deque is empty.
    #[track_caller]
    pub fn last(&self) -> i32 {
        match self.len().checked_sub(1).and_then(|i| self.buf.get(i)) {
            Some(v) => v,
            None => violated(CollectionError::Empty),
        }
    }

    #[inline(always)]
    #[track_caller]
    pub fn push_back(&mut self, value: i32) {
        self.buf.push_back(value);
    }

    #[inline(always)]
    #[track_caller]
    pub fn push_front(&mut self, value: i32) {
        self.buf.push_front(value);
    }

    /// Removes and returns the back element, or [`CollectionError::Empty`].
    #[inline(always)]
    pub fn pop_back(&mut self) -> Result<i32> {
        self.buf.pop_back()
    }

    /// Removes and returns the front element, or [`CollectionError::Empty`].
    #[inline(always)]
    pub fn pop_front(&mut self) -> Result<i32> {
        self.buf.pop_front()
    }

    /// Removes the element at `index`, shifting whichever side is shorter.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> i32 {
        self.buf.remove(index)
    }

    /// Inserts `value` before `index`; `index == len` pushes to the back.
    ///
    /// # Panics
    /// Panics if `index > len`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: i32) {
        self.buf.insert(index, value);
    }

    /// Detaches the first `n` elements into a new deque.
    ///
    /// # Panics
    /// Panics if `n > len`.
    #[track_caller]
    pub fn split_front(&mut self, n: usize) -> IntDeque {
        if n > self.len() {
            violated(CollectionError::IndexOutOfBounds {
                index: n,
                len: self.len(),
            });
        }
        Self {
            buf: self.buf.split_off_front(n),
        }
    }

    /// Detaches the last `n` elements into a new deque.
    ///
    /// # Panics
    /// Panics if `n > len`.
    #[track_caller]
    pub fn split_back(&mut self, n: usize) -> IntDeque {
        let at = match self.len().checked_sub(n) {
            Some(at) => at,
            None => violated(CollectionError::IndexOutOfBounds {
                index: n,
                len: self.len(),
            }),
        };
        Self {
            buf: self.buf.split_off_back(at),
        }
    }

    /// Drops elements from the front until `len == size`.
    ///
    /// # Panics
    /// Panics if `size > len`.
    #[track_caller]
    pub fn truncate_front(&mut self, size: usize) {
        self.buf.truncate_front(size);
    }

    /// Drops elements from the back until `len == size`.
    ///
    /// # Panics
    /// Panics if `size > len`.
    #[track_caller]
    pub fn truncate_back(&mut self, size: usize) {
        self.buf.truncate_back(size);
    }

    /// Pushes `filler` at the front until `len == size`, or truncates the front.
    #[track_caller]
    pub fn resize_front(&mut self, size: usize, filler: i32) {
        self.buf.resize_front(size, filler);
    }

    /// Pushes `filler` at the back until `len == size`, or truncates the back.
    #[track_caller]
    pub fn resize_back(&mut self, size: usize, filler: i32) {
        self.buf.resize_back(size, filler);
    }

    /// Copies the elements at front offsets `[start, stop)`.
    ///
    /// # Panics
    /// Panics unless `start <= stop <= len`.
    #[track_caller]
    pub fn slice_front(&self, start: usize, stop: usize) -> IntDeque {
        Self {
            buf: self.buf.copy_range(start, stop),
        }
    }

    /// Copies the elements at back offsets `[start, stop)`, where offset 0 is the
    /// last element. The copy keeps front-to-back order.
    ///
    /// # Panics
    /// Panics unless `start <= stop <= len`.
    #[track_caller]
    pub fn slice_back(&self, start: usize, stop: usize) -> IntDeque {
        self.buf.check_range(start, stop);
        let len = self.len();
        Self {
            buf: self.buf.copy_range(len - stop, len - start),
        }
    }

    /// Moves every element of `other` onto the back, leaving `other` empty.
    #[track_caller]
    pub fn append(&mut self, other: &mut IntDeque) {
        self.buf.append_back(&mut other.buf);
    }

    /// Moves every element of `other` onto the front, keeping `other`'s order.
    #[track_caller]
    pub fn prepend(&mut self, other: &mut IntDeque) {
        self.buf.prepend_front(&mut other.buf);
    }

    /// Fills every spare slot at the back with `filler`.
    pub fn fill(&mut self, filler: i32) {
        self.buf.fill_with(|| filler);
    }

    /// Fills every spare slot at the back with successive values from `generator`.
    pub fn fill_with<F>(&mut self, generator: F)
    where
        F: FnMut() -> i32,
    {
        self.buf.fill_with(generator);
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

    /// Moves the element at `amount % len` to the front.
    pub fn rotate_left(&mut self, amount: usize) {
        self.buf.rotate_left(amount);
    }

    /// Moves the element at `len - amount % len` to the front.
    pub fn rotate_right(&mut self, amount: usize) {
        self.buf.rotate_right(amount);
    }

    /// Sorts ascending. Leaves the deque contiguous.
    pub fn sort(&mut self) {
        self.buf.sort_by(i32::cmp);
    }

    /// Sorts with a caller-supplied ordering. Leaves the deque contiguous.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&i32, &i32) -> Ordering,
    {
        self.buf.sort_by(compare);
    }

    pub fn contains(&self, value: i32) -> bool {
        self.buf.contains(value)
    }

    /// Binary search for `value`; the deque must be sorted ascending front to back.
    pub fn search(&self, value: i32) -> Option<usize> {
        self.buf.binary_search(value)
    }

    pub fn map<F>(&mut self, f: F)
    where
        F: FnMut(i32) -> i32,
    {
        self.buf.map_in_place(f);
    }

    pub fn filter<F>(&mut self, predicate: F)
    where
        F: FnMut(i32) -> bool,
    {
        self.buf.retain(predicate);
    }

    pub fn find<F>(&self, mut predicate: F) -> Option<&i32>
    where
        F: FnMut(i32) -> bool,
    {
        self.iter().find(|&&v| predicate(v))
    }

    pub fn find_mut<F>(&mut self, mut predicate: F) -> Option<&mut i32>
    where
        F: FnMut(i32) -> bool,
    {
        let (front, back) = self.buf.as_mut_slices();
        front
            .iter_mut()
            .chain(back.iter_mut())
            .find(|v| predicate(**v))
    }

    pub fn position<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(i32) -> bool,
    {
        self.buf.position(predicate)
    }

    pub fn fold<B, F>(&self, init: B, f: F) -> B
    where
        F: FnMut(B, i32) -> B,
    {
        self.buf.fold(init, f)
    }

    /// Wrapping sum; `0` when empty.
    pub fn sum(&self) -> i32 {
        self.fold(0, i32::wrapping_add)
    }

    /// Wrapping product; `1` when empty.
    pub fn product(&self) -> i32 {
        self.fold(1, i32::wrapping_mul)
    }

    pub fn iter(&self) -> Iter<'_> {
        let (front, back) = self.as_slices();
        Iter {
            front: front.iter(),
            back: back.iter(),
        }
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().copied().collect()
    }
}

/// Front-to-back iterator over an [`IntDeque`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    front: slice::Iter<'a, i32>,
    back: slice::Iter<'a, i32>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.front.next().or_else(|| self.back.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.front.len() + self.back.len();
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a IntDeque {
    type Item = &'a i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for IntDeque {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IntDeque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Space-separated elements, front first.
impl fmt::Display for IntDeque {
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

impl PartialEq for IntDeque {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}
impl Eq for IntDeque {}

impl Hash for IntDeque {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self {
            value.hash(state);
        }
    }
}

impl PartialOrd for IntDeque {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IntDeque {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl Extend<i32> for IntDeque {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl FromIterator<i32> for IntDeque {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            buf: RawBuf::from_vec(iter.into_iter().collect()),
        }
    }
}

impl From<&[i32]> for IntDeque {
    fn from(items: &[i32]) -> Self {
        Self::from_slice(items)
    }
}

impl<const N: usize> From<[i32; N]> for IntDeque {
    fn from(items: [i32; N]) -> Self {
        Self::from_slice(&items)
    }
}

impl From<Vec<i32>> for IntDeque {
    fn from(items: Vec<i32>) -> Self {
        Self {
            buf: RawBuf::from_vec(items),
        }
    }
}

impl Index<usize> for IntDeque {
    type Output = i32;
    #[inline(always)]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.buf.get_ref(index)
    }
}

impl IndexMut<usize> for IntDeque {
    #[inline(always)]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.buf.get_ref_mut(index)
    }
}
