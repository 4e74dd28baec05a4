//! Priority min-heap built on [`nexus_dynarray`].
//!
//! [`MinHeap`] stores `(payload, priority)` pairs as [`HeapEntry`] records in
//! a [`DynArray`], reusing its doubling growth. Priorities are primitive
//! integers ([`Priority`]); payloads are any `T` and are never inspected.
//!
//! # Quick Start
//!
//! ```
//! use nexus_minheap::MinHeap;
//!
//! let mut heap: MinHeap<char, u32> = MinHeap::new();
//! for (i, c) in ['d', 'a', 'c', 'b'].into_iter().enumerate() {
//!     heap.insert(c, [3, 0, 2, 1][i]).unwrap();
//! }
//!
//! let sorted: Vec<char> = heap.into_sorted_vec().into_iter().map(|e| e.payload).collect();
//! assert_eq!(sorted, ['a', 'b', 'c', 'd']);
//! ```
//!
//! # Operations
//!
//! | Operation | Cost | Empty heap |
//! |-----------|------|------------|
//! | [`insert`](MinHeap::insert) | O(log n), amortized growth | - |
//! | [`extract_min`](MinHeap::extract_min) | O(log n) | `None` |
//! | [`peek_min`](MinHeap::peek_min) | O(1) | `None` |
//! | [`len`](MinHeap::len) | O(1) | 0 |
//!
//! There is no decrease-key; an entry's priority is fixed once inserted.
//!
//! # Failure
//!
//! `insert` fails only if the backing array cannot grow, returning the
//! entry in [`Full`]. The heap is left exactly as it was.

#![warn(missing_docs)]

pub mod heap;
pub mod priority;

pub use heap::{DrainWhile, MinHeap};
pub use nexus_dynarray::{AllocError, DynArray, DynArrayBuilder, Full};
pub use priority::{HeapEntry, Priority};
