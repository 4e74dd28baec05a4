//! Priority keys and heap entries.
//!
//! The [`Priority`] trait restricts heap keys to totally ordered numeric
//! types. It is implemented for every primitive integer type.

use core::fmt::Debug;

/// Trait for numeric priority keys.
///
/// Lower values are extracted first. Floats are not supported; they have
/// no total order. Wrap them in a fixed-point integer if needed.
///
/// # Example
///
/// ```
/// use nexus_minheap::Priority;
///
/// fn lowest<P: Priority>(a: P, b: P) -> P {
///     a.min(b)
/// }
///
/// assert_eq!(lowest(3u8, 1u8), 1);
/// assert_eq!(lowest(-5i64, 2i64), -5);
/// ```
pub trait Priority: Copy + Ord + Debug {}

macro_rules! impl_priority {
    ($($ty:ty),* $(,)?) => {
        $(impl Priority for $ty {})*
    };
}

impl_priority!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);

/// A payload paired with the priority that positions it in the heap.
///
/// The heap moves entries between slots but never inspects the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapEntry<T, P> {
    /// Caller-supplied value.
    pub payload: T,
    /// Ordering key; smaller is extracted first.
    pub priority: P,
}

impl<T, P: Priority> HeapEntry<T, P> {
    /// Creates an entry.
    #[inline]
    pub const fn new(payload: T, priority: P) -> Self {
        Self { payload, priority }
    }

    /// Splits the entry into `(payload, priority)`.
    #[inline]
    pub fn into_parts(self) -> (T, P) {
        (self.payload, self.priority)
    }
}
