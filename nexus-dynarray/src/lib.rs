//! Growable array with an explicit, observable growth policy.
//!
//! [`DynArray`] is a contiguous, index-addressed container that owns its
//! elements. Unlike `Vec`, its capacity follows a fixed rule that callers
//! can rely on:
//!
//! ```text
//! capacity 0 ──first growth──> start_size ──full──> ×2 ──full──> ×2 ...
//! ```
//!
//! and every allocation is fallible. A failed growth never panics or aborts:
//! the operation is rejected, the value is handed back, and the array keeps
//! its previous contents.
//!
//! # Quick Start
//!
//! ```
//! use nexus_dynarray::DynArray;
//!
//! let mut array: DynArray<u64> = DynArray::new();
//! assert_eq!(array.capacity(), 0); // lazy: nothing allocated yet
//!
//! array.push_back(2).unwrap();
//! array.push_front(1).unwrap();
//! array.insert(2, 3).unwrap();
//!
//! assert_eq!(array.as_slice(), &[1, 2, 3]);
//! assert_eq!(array.capacity(), 4);
//!
//! // Positions past the end are rejected, not written
//! assert!(array.insert(10, 99).is_err());
//! assert_eq!(array.get(3), None);
//! ```
//!
//! # Operation Costs
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `push_back` / `pop_back` | O(1) amortized |
//! | `push_front` / `pop_front` | O(n), shifts every element |
//! | `insert` / `remove` | O(n) in the middle |
//! | `get` / `set` / `swap` | O(1) |
//!
//! Head operations are intentionally O(n); the array is a plain contiguous
//! buffer, not a ring.

#![warn(missing_docs)]

mod array;
mod builder;
pub mod error;

pub use array::{DynArray, START_SIZE};
pub use builder::DynArrayBuilder;
pub use error::{AllocError, BuildError, Full, PushError, ResizeError};
