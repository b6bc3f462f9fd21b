//! Error type shared by [`IntStack`](crate::IntStack) and [`IntDeque`](crate::IntDeque).
//!
//! Popping from an empty container is the one recoverable condition and is always
//! reported through [`Result`]. Out-of-range indices and bad ranges are caller bugs:
//! the plain accessors panic with the [`Display`](core::fmt::Display) text of the
//! matching variant, while the `try_*` accessors hand the same value back instead.

use thiserror::Error;

/// Everything that can go wrong when operating on an integer container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CollectionError {
    /// An element was required but the container holds none.
    #[error("container is empty")]
    Empty,
    /// `index` does not address a live element.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Length at the time of the call.
        len: usize,
    },
    /// `start..stop` is reversed or reaches past the end.
    #[error("invalid range {start}..{stop} for length {len}")]
    InvalidRange {
        /// Inclusive start.
        start: usize,
        /// Exclusive stop.
        stop: usize,
        /// Length at the time of the call.
        len: usize,
    },
    /// Doubling the capacity would overflow `usize`.
    #[error("capacity overflow")]
    CapacityOverflow,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, CollectionError>;

/// Panics with the message of `err`, attributing the panic to the caller.
#[cold]
#[track_caller]
pub(crate) fn violated(err: CollectionError) -> ! {
    panic!("{err}")
}
