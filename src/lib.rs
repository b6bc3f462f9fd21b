//! # Int Collections
//!
//! Growable `i32` containers built on one shared doubling buffer.
//!
//! This crate provides [`IntStack`], a contiguous buffer with stack semantics, and
//! [`IntDeque`], a ring-buffered double-ended queue. Both grow by doubling their
//! capacity, never shrink, and offer the same slice/split/append/sort/map/filter/fold
//! toolkit.
//!
//! ## Key Features
//!
//! * **Exact capacity:** `with_capacity(c)` allocates exactly `c` slots; `new()` allocates 32.
//! * **Amortized O(1) growth:** a full container doubles once and moves its elements once.
//! * **One core:** both types wrap the same internal ring buffer, the stack simply never
//!   moves its head.
//! * **Loud contract violations:** out-of-range indices panic with a [`CollectionError`]
//!   message; `try_*` accessors and `pop*` return [`Result`] instead.
//! * **Interoperability:** [`AnyIntVec`] and [`AnyIntDeque`] let `Vec<i32>` and
//!   `VecDeque<i32>` stand in wherever the crate's own types are accepted.
//!
//! ## Examples
//!
//! ### IntStack
//!
//! ```rust
//! use int_collections::IntStack;
//!
//! let mut stack = IntStack::from([0, 1, 2, 3, 4]);
//! assert_eq!(stack.capacity(), 5);
//!
//! stack.map(|v| v * 3);
//! stack.filter(|v| v % 2 == 0);
//! assert_eq!(stack.as_slice(), &[0, 6, 12]);
//! assert_eq!(stack.fold(0, |acc, v| acc + v), 18);
//!
//! // Pushing past capacity doubles it.
//! stack.push(1);
//! stack.push(2);
//! stack.push(3);
//! assert_eq!(stack.capacity(), 10);
//! assert_eq!(stack.pop(), Ok(3));
//! ```
//!
//! ### IntDeque
//!
//! ```rust
//! use int_collections::IntDeque;
//!
//! let mut deque = IntDeque::with_capacity(4);
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_front(0);
//! assert!(!deque.is_contiguous());
//!
//! deque.rotate_left(1);
//! assert_eq!(deque.to_vec(), vec![1, 2, 0]);
//! deque.rotate_right(1);
//! assert_eq!(deque.to_vec(), vec![0, 1, 2]);
//!
//! let mut tail = deque.split_back(1);
//! assert_eq!(tail.pop_front(), Ok(2));
//! ```
//!
//! ## Reference invalidation
//!
//! [`IntStack::find_mut`], [`IntStack::as_mut_slice`] and friends hand out borrows into
//! the backing allocation. Any call that may reallocate (`push`, `insert`, `reserve`,
//! `resize`, `append`, ...) takes `&mut self`, so the borrow checker rejects holding such
//! a reference across it.

// --- Module Declarations ---

pub mod error;
mod raw;
pub mod vecs;

// --- Re-exports ---

pub use error::{CollectionError, Result};
pub use vecs::deque::{AnyIntDeque, IntDeque};
pub use vecs::stack::{AnyIntVec, DEFAULT_CAPACITY, IntStack};
