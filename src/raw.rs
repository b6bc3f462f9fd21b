//! Shared growable storage behind [`IntStack`](crate::IntStack) and
//! [`IntDeque`](crate::IntDeque).
//!
//! [`RawBuf`] owns exactly `capacity` slots and views `len` of them, starting at
//! `head`, as a ring. Logical index `i` lives in physical slot `(head + i) % capacity`.
//! Growth always doubles the capacity and re-linearizes the ring into a fresh
//! allocation, so amortized pushes at either end stay O(1).
//!
//! The [`Ends`] parameter records which ends may grow:
//!
//! | Marker | `head` | Layout |
//! |--------|--------|--------|
//! | [`Single`] | always `0` | one contiguous run, exposed as a slice |
//! | [`Double`] | moves on front operations | may wrap around the end of `slots` |

use core::cmp::Ordering;
use core::marker::PhantomData;

use tracing::trace;

use crate::error::{CollectionError, Result, violated};

mod sealed {
    pub trait Sealed {}
}

/// Which ends of a [`RawBuf`] accept insertions and removals.
pub trait Ends: sealed::Sealed + Copy + core::fmt::Debug + 'static {
    /// `true` when the front end is live and `head` may move.
    const DOUBLE_ENDED: bool;
}

/// Growth only at the back. `head` never leaves slot zero.
#[derive(Debug, Clone, Copy)]
pub struct Single;

/// Growth at both ends over a wrapping ring.
#[derive(Debug, Clone, Copy)]
pub struct Double;

impl sealed::Sealed for Single {}
impl sealed::Sealed for Double {}

impl Ends for Single {
    const DOUBLE_ENDED: bool = false;
}

impl Ends for Double {
    const DOUBLE_ENDED: bool = true;
}

#[derive(Debug, Clone)]
pub struct RawBuf<E: Ends> {
    slots: Box<[i32]>,
    head: usize,
    len: usize,
    _ends: PhantomData<E>,
}

impl<E: Ends> RawBuf<E> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity].into_boxed_slice(),
            head: 0,
            len: 0,
            _ends: PhantomData,
        }
    }

    /// Takes ownership of `items`; capacity equals their count.
    pub fn from_vec(items: Vec<i32>) -> Self {
        let slots = items.into_boxed_slice();
        Self {
            len: slots.len(),
            slots,
            head: 0,
            _ends: PhantomData,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    #[inline(always)]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Physical slot for `offset` steps past `from`. Requires `from < cap` and `offset <= cap`.
    #[inline(always)]
    fn wrap_add(&self, from: usize, offset: usize) -> usize {
        let cap = self.slots.len();
        let idx = from + offset;
        if idx >= cap { idx - cap } else { idx }
    }

    #[inline(always)]
    fn wrap_sub(&self, from: usize, offset: usize) -> usize {
        if from >= offset {
            from - offset
        } else {
            from + self.slots.len() - offset
        }
    }

    #[inline(always)]
    fn slot(&self, index: usize) -> usize {
        self.wrap_add(self.head, index)
    }

    #[inline(always)]
    #[track_caller]
    pub fn check_index(&self, index: usize) {
        if index >= self.len {
            violated(CollectionError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
    }

    #[inline(always)]
    #[track_caller]
    pub fn check_range(&self, start: usize, stop: usize) {
        if start > stop || stop > self.len {
            violated(CollectionError::InvalidRange {
                start,
                stop,
                len: self.len,
            });
        }
    }

    #[inline(always)]
    #[track_caller]
    fn check_len(&self, size: usize) {
        if size > self.len {
            violated(CollectionError::IndexOutOfBounds {
                index: size,
                len: self.len,
            });
        }
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<i32> {
        (index < self.len).then(|| self.slots[self.slot(index)])
    }

    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut i32> {
        if index < self.len {
            let slot = self.slot(index);
            Some(&mut self.slots[slot])
        } else {
            None
        }
    }

    #[inline(always)]
    #[track_caller]
    pub fn get_ref(&self, index: usize) -> &i32 {
        self.check_index(index);
        &self.slots[self.slot(index)]
    }

    #[inline(always)]
    #[track_caller]
    pub fn get_ref_mut(&mut self, index: usize) -> &mut i32 {
        self.check_index(index);
        let slot = self.slot(index);
        &mut self.slots[slot]
    }

    /// Unchecked logical read for internal shifting loops.
    #[inline(always)]
    fn read(&self, index: usize) -> i32 {
        self.slots[self.slot(index)]
    }

    #[inline(always)]
    fn write(&mut self, index: usize, value: i32) {
        let slot = self.slot(index);
        self.slots[slot] = value;
    }

    /// Ensures `capacity - len >= additional`, doubling until it holds.
    ///
    /// Doubling from an empty allocation starts at one slot. At most one
    /// reallocation happens per call.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let needed = self
            .len
            .checked_add(additional)
            .ok_or(CollectionError::CapacityOverflow)?;
        let cap = self.slots.len();
        if needed <= cap {
            return Ok(());
        }
        let mut new_cap = cap.max(1);
        while new_cap < needed {
            new_cap = new_cap
                .checked_mul(2)
                .ok_or(CollectionError::CapacityOverflow)?;
        }
        self.realloc(new_cap);
        Ok(())
    }

    #[track_caller]
    pub fn reserve(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve(additional) {
            violated(err);
        }
    }

    /// Moves the live window into a fresh allocation of `new_cap` slots at head 0.
    #[inline(never)]
    fn realloc(&mut self, new_cap: usize) {
        let mut slots = vec![0; new_cap].into_boxed_slice();
        let (front, back) = self.as_slices();
        slots[..front.len()].copy_from_slice(front);
        slots[front.len()..self.len].copy_from_slice(back);
        trace!(
            old_capacity = self.slots.len(),
            new_capacity = new_cap,
            len = self.len,
            "grew int buffer"
        );
        self.slots = slots;
        self.head = 0;
    }

    /// Returns the live elements as up to two runs in logical order.
    pub fn as_slices(&self) -> (&[i32], &[i32]) {
        let cap = self.slots.len();
        if self.head + self.len <= cap {
            (&self.slots[self.head..self.head + self.len], &[])
        } else {
            let tail_len = self.len - (cap - self.head);
            let (wrapped, rest) = self.slots.split_at(self.head);
            (rest, &wrapped[..tail_len])
        }
    }

    pub fn as_mut_slices(&mut self) -> (&mut [i32], &mut [i32]) {
        let cap = self.slots.len();
        if self.head + self.len <= cap {
            (&mut self.slots[self.head..self.head + self.len], &mut [])
        } else {
            let tail_len = self.len - (cap - self.head);
            let (wrapped, rest) = self.slots.split_at_mut(self.head);
            (rest, &mut wrapped[..tail_len])
        }
    }

    /// Rotates storage so the live elements start at slot zero and returns them.
    pub fn make_contiguous(&mut self) -> &mut [i32] {
        if self.head != 0 {
            trace!(head = self.head, len = self.len, "linearizing ring");
            self.slots.rotate_left(self.head);
            self.head = 0;
        }
        &mut self.slots[..self.len]
    }

    #[inline(always)]
    #[track_caller]
    pub fn push_back(&mut self, value: i32) {
        if self.is_full() {
            self.reserve(1);
        }
        let slot = self.slot(self.len);
        self.slots[slot] = value;
        self.len += 1;
    }

    #[inline(always)]
    pub fn pop_back(&mut self) -> Result<i32> {
        if self.len == 0 {
            return Err(CollectionError::Empty);
        }
        self.len -= 1;
        Ok(self.read(self.len))
    }

    /// Inserts before `index`, shifting whichever side is shorter.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: i32) {
        if index > self.len {
            violated(CollectionError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        if self.is_full() {
            self.reserve(1);
        }
        if E::DOUBLE_ENDED && index < self.len / 2 {
            self.head = self.wrap_sub(self.head, 1);
            self.len += 1;
            for i in 0..index {
                let next = self.read(i + 1);
                self.write(i, next);
            }
        } else {
            for i in (index..self.len).rev() {
                let prev = self.read(i);
                self.write(i + 1, prev);
            }
            self.len += 1;
        }
        self.write(index, value);
    }

    /// Removes the element at `index`, shifting whichever side is shorter.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> i32 {
        self.check_index(index);
        let value = self.read(index);
        if E::DOUBLE_ENDED && index < self.len / 2 {
            for i in (0..index).rev() {
                let prev = self.read(i);
                self.write(i + 1, prev);
            }
            self.head = self.wrap_add(self.head, 1);
        } else {
            for i in index..self.len - 1 {
                let next = self.read(i + 1);
                self.write(i, next);
            }
        }
        self.len -= 1;
        value
    }

    /// Keeps the first `size` elements.
    #[track_caller]
    pub fn truncate_back(&mut self, size: usize) {
        self.check_len(size);
        self.len = size;
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.head = 0;
    }

    #[track_caller]
    pub fn resize_back(&mut self, size: usize, filler: i32) {
        if size > self.len {
            self.reserve(size - self.len);
            while self.len < size {
                self.push_back(filler);
            }
        } else {
            self.truncate_back(size);
        }
    }

    /// Pushes values from `generator` until the current allocation is full.
    pub fn fill_with<F>(&mut self, mut generator: F)
    where
        F: FnMut() -> i32,
    {
        while !self.is_full() {
            let value = generator();
            let slot = self.slot(self.len);
            self.slots[slot] = value;
            self.len += 1;
        }
    }

    /// Copies logical `[start, stop)` into a new buffer sized exactly to fit.
    #[track_caller]
    pub fn copy_range(&self, start: usize, stop: usize) -> Self {
        self.check_range(start, stop);
        Self::from_vec((start..stop).map(|i| self.read(i)).collect())
    }

    /// Detaches logical `[at, len)` into a new exact-capacity buffer.
    #[track_caller]
    pub fn split_off_back(&mut self, at: usize) -> Self {
        let tail = self.copy_range(at, self.len);
        self.len = at;
        tail
    }

    /// Moves every element of `other` onto the back, leaving `other` empty
    /// with its capacity untouched.
    #[track_caller]
    pub fn append_back<O: Ends>(&mut self, other: &mut RawBuf<O>) {
        self.reserve(other.len);
        let (front, back) = other.as_slices();
        for &value in front.iter().chain(back) {
            let slot = self.slot(self.len);
            self.slots[slot] = value;
            self.len += 1;
        }
        other.clear();
    }

    #[track_caller]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.check_index(a);
        self.check_index(b);
        let (a, b) = (self.slot(a), self.slot(b));
        self.slots.swap(a, b);
    }

    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let (mut l, mut r) = (0, self.len - 1);
        while l < r {
            let (sl, sr) = (self.slot(l), self.slot(r));
            self.slots.swap(sl, sr);
            l += 1;
            r -= 1;
        }
    }

    pub fn rotate_left(&mut self, amount: usize) {
        if self.len == 0 {
            return;
        }
        let amount = amount % self.len;
        if amount == 0 {
            return;
        }
        if E::DOUBLE_ENDED && self.is_full() {
            self.head = self.wrap_add(self.head, amount);
        } else {
            self.make_contiguous().rotate_left(amount);
        }
    }

    pub fn rotate_right(&mut self, amount: usize) {
        if self.len == 0 {
            return;
        }
        let amount = amount % self.len;
        if amount == 0 {
            return;
        }
        if E::DOUBLE_ENDED && self.is_full() {
            self.head = self.wrap_sub(self.head, amount);
        } else {
            self.make_contiguous().rotate_right(amount);
        }
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&i32, &i32) -> Ordering,
    {
        self.make_contiguous().sort_unstable_by(compare);
    }

    pub fn contains(&self, value: i32) -> bool {
        let (front, back) = self.as_slices();
        front.contains(&value) || back.contains(&value)
    }

    /// Binary search over logical order. Only meaningful when sorted ascending.
    pub fn binary_search(&self, value: i32) -> Option<usize> {
        let (mut lo, mut hi) = (0, self.len);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match self.read(mid).cmp(&value) {
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
                Ordering::Equal => return Some(mid),
            }
        }
        None
    }

    pub fn map_in_place<F>(&mut self, mut f: F)
    where
        F: FnMut(i32) -> i32,
    {
        let (front, back) = self.as_mut_slices();
        for value in front.iter_mut().chain(back.iter_mut()) {
            *value = f(*value);
        }
    }

    /// Keeps the elements matching `predicate`, in order, in a single pass.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(i32) -> bool,
    {
        let live = self.make_contiguous();
        let mut kept = 0;
        for i in 0..live.len() {
            let value = live[i];
            if predicate(value) {
                live[kept] = value;
                kept += 1;
            }
        }
        self.len = kept;
    }

    pub fn position<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(i32) -> bool,
    {
        let (front, back) = self.as_slices();
        front.iter().chain(back).position(|&v| predicate(v))
    }

    pub fn fold<B, F>(&self, init: B, mut f: F) -> B
    where
        F: FnMut(B, i32) -> B,
    {
        let (front, back) = self.as_slices();
        front.iter().chain(back).fold(init, |acc, &v| f(acc, v))
    }
}

impl RawBuf<Single> {
    #[inline(always)]
    pub fn as_slice(&self) -> &[i32] {
        &self.slots[..self.len]
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.slots[..self.len]
    }
}

impl RawBuf<Double> {
    #[inline(always)]
    #[track_caller]
    pub fn push_front(&mut self, value: i32) {
        if self.is_full() {
            self.reserve(1);
        }
        self.head = self.wrap_sub(self.head, 1);
        self.slots[self.head] = value;
        self.len += 1;
    }

    #[inline(always)]
    pub fn pop_front(&mut self) -> Result<i32> {
        if self.len == 0 {
            return Err(CollectionError::Empty);
        }
        let value = self.slots[self.head];
        self.head = self.wrap_add(self.head, 1);
        self.len -= 1;
        Ok(value)
    }

    /// Keeps the last `size` elements.
    #[track_caller]
    pub fn truncate_front(&mut self, size: usize) {
        self.check_len(size);
        let dropped = self.len - size;
        if dropped > 0 {
            self.head = self.wrap_add(self.head, dropped);
            self.len = size;
        }
    }

    #[track_caller]
    pub fn resize_front(&mut self, size: usize, filler: i32) {
        if size > self.len {
            self.reserve(size - self.len);
            while self.len < size {
                self.push_front(filler);
            }
        } else {
            self.truncate_front(size);
        }
    }

    /// Detaches logical `[0, at)` into a new exact-capacity buffer.
    #[track_caller]
    pub fn split_off_front(&mut self, at: usize) -> Self {
        let head = self.copy_range(0, at);
        self.truncate_front(self.len - at);
        head
    }

    /// Moves every element of `other` onto the front in order, leaving `other` empty.
    #[track_caller]
    pub fn prepend_front(&mut self, other: &mut RawBuf<Double>) {
        self.reserve(other.len);
        let (front, back) = other.as_slices();
        for &value in front.iter().chain(back).rev() {
            self.head = self.wrap_sub(self.head, 1);
            self.slots[self.head] = value;
            self.len += 1;
        }
        other.clear();
    }
}
