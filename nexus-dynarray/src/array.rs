use core::fmt;
use core::mem;
use core::ops::{Index, IndexMut};

use crate::error::{AllocError, Full, PushError, ResizeError};

/// Capacity chosen on the first growth of an array created with capacity 0.
pub const START_SIZE: usize = 4;

/// A growable, contiguous array with a fixed doubling policy.
///
/// Elements live in a `Vec<T>` whose length is the logical count. Capacity
/// is tracked separately so that growth follows the documented sequence
/// (`start_size`, then doubling) regardless of how the allocator rounds.
/// The backing `Vec` always has at least `capacity` slots reserved, so
/// writes never allocate outside the fallible growth path.
///
/// # Invariants
///
/// - `len() <= capacity()`
/// - capacity only changes through growth or [`set_capacity`](Self::set_capacity)
///
/// # Example
///
/// ```
/// use nexus_dynarray::DynArray;
///
/// let mut array: DynArray<&str> = DynArray::new();
/// array.push_back("b").unwrap();
/// array.push_back("c").unwrap();
/// array.push_front("a").unwrap();
///
/// assert_eq!(array.len(), 3);
/// assert_eq!(array.get(0), Some(&"a"));
/// assert_eq!(array.pop_back(), Some("c"));
/// assert_eq!(array.remove(0), Some("a"));
/// assert_eq!(array.as_slice(), &["b"]);
/// ```
pub struct DynArray<T> {
    buf: Vec<T>,
    capacity: usize,
    start_size: usize,
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynArray<T> {
    /// Creates an empty array. Nothing is allocated until the first push.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            capacity: 0,
            start_size: START_SIZE,
        }
    }

    /// Creates an empty array with exactly `capacity` slots allocated.
    ///
    /// A capacity of 0 behaves like [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the storage could not be allocated.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        let mut array = Self::new();
        if capacity > 0 {
            array.reserve_exact(capacity)?;
        }
        Ok(array)
    }

    /// Returns the number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the capacity used on the first growth from zero.
    #[inline]
    pub fn start_size(&self) -> usize {
        self.start_size
    }

    // ========================================================================
    // Tail operations
    // ========================================================================

    /// Appends a value at the end.
    ///
    /// If the array is full, capacity doubles first (or becomes the start
    /// size if nothing is allocated yet). Amortized O(1).
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the array could not grow. The array is
    /// left unchanged.
    pub fn push_back(&mut self, value: T) -> Result<(), Full<T>> {
        if self.ensure_slot().is_err() {
            return Err(Full(value));
        }
        self.buf.push(value);
        Ok(())
    }

    /// Removes and returns the last element, or `None` if empty. O(1).
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.buf.pop()
    }

    // ========================================================================
    // Head operations
    // ========================================================================

    /// Inserts a value at index 0, shifting every element one slot toward
    /// the tail. O(n).
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the array could not grow.
    pub fn push_front(&mut self, value: T) -> Result<(), Full<T>> {
        if self.ensure_slot().is_err() {
            return Err(Full(value));
        }
        self.buf.insert(0, value);
        Ok(())
    }

    /// Removes and returns the first element, shifting the rest one slot
    /// toward the head. Returns `None` if empty. O(n).
    pub fn pop_front(&mut self) -> Option<T> {
        if self.buf.is_empty() {
            None
        } else {
            Some(self.buf.remove(0))
        }
    }

    // ========================================================================
    // Positional operations
    // ========================================================================

    /// Inserts `value` at `pos`, shifting the suffix toward the tail.
    ///
    /// | `pos` | Behaviour |
    /// |-------|-----------|
    /// | `0` | [`push_front`](Self::push_front) |
    /// | `len()` | [`push_back`](Self::push_back) |
    /// | `0 < pos < len()` | shift suffix, write at `pos` |
    /// | `> len()` | rejected, array unchanged |
    ///
    /// # Errors
    ///
    /// [`PushError::OutOfBounds`] when `pos > len()`,
    /// [`PushError::AllocFailed`] when the array could not grow.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<(), PushError<T>> {
        let len = self.buf.len();
        if pos == 0 {
            self.push_front(value).map_err(PushError::from)
        } else if pos == len {
            self.push_back(value).map_err(PushError::from)
        } else if pos < len {
            if self.ensure_slot().is_err() {
                return Err(PushError::AllocFailed(value));
            }
            self.buf.insert(pos, value);
            Ok(())
        } else {
            Err(PushError::OutOfBounds { pos, len, value })
        }
    }

    /// Removes and returns the element at `pos`, shifting the suffix toward
    /// the head.
    ///
    /// Returns `None` if `pos >= len()`.
    pub fn remove(&mut self, pos: usize) -> Option<T> {
        let len = self.buf.len();
        if pos >= len {
            None
        } else if pos == 0 {
            self.pop_front()
        } else if pos == len - 1 {
            self.pop_back()
        } else {
            Some(self.buf.remove(pos))
        }
    }

    /// Returns a reference to the element at `pos`, or `None` if out of range.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.buf.get(pos)
    }

    /// Returns a mutable reference to the element at `pos`, or `None` if out
    /// of range.
    #[inline]
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.buf.get_mut(pos)
    }

    /// Replaces the element at `pos`, returning the previous value.
    ///
    /// Writing at `pos == len()` appends (returning `Ok(None)`).
    ///
    /// # Errors
    ///
    /// [`PushError::OutOfBounds`] when `pos > len()`,
    /// [`PushError::AllocFailed`] when appending could not grow the array.
    pub fn set(&mut self, pos: usize, value: T) -> Result<Option<T>, PushError<T>> {
        let len = self.buf.len();
        if pos < len {
            Ok(Some(mem::replace(&mut self.buf[pos], value)))
        } else if pos == len {
            self.push_back(value).map(|()| None).map_err(PushError::from)
        } else {
            Err(PushError::OutOfBounds { pos, len, value })
        }
    }

    /// Exchanges the elements at `a` and `b`.
    ///
    /// Returns `false` and leaves the array untouched if either position is
    /// out of range.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        let len = self.buf.len();
        if a >= len || b >= len {
            return false;
        }
        self.buf.swap(a, b);
        true
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Calls `f` on every element in index order.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.buf.iter().for_each(f);
    }

    /// Returns an iterator over the elements in index order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Resizes the storage to exactly `capacity` slots.
    ///
    /// Shrinking below `len()` drops the elements past the new capacity.
    /// Setting 0 releases the storage; the next push grows to the start
    /// size again.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError`] if growing failed. The array keeps its
    /// previous contents and capacity.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), ResizeError> {
        if capacity > self.capacity {
            return self
                .reserve_exact(capacity)
                .map_err(|source| ResizeError {
                    requested: capacity,
                    source,
                });
        }

        if capacity < self.buf.len() {
            log::warn!(
                "dynarray: resize to {} drops {} elements",
                capacity,
                self.buf.len() - capacity
            );
            self.buf.truncate(capacity);
        }
        self.buf.shrink_to(capacity);
        log::trace!("dynarray: capacity {} -> {}", self.capacity, capacity);
        self.capacity = capacity;
        Ok(())
    }

    // ========================================================================
    // Growth
    // ========================================================================

    #[inline]
    pub(crate) fn set_start_size(&mut self, start_size: usize) {
        debug_assert!(start_size > 0, "start size must be > 0");
        self.start_size = start_size;
    }

    /// Grows the storage to exactly `capacity` slots.
    ///
    /// Caller guarantees `capacity >= len()`.
    pub(crate) fn reserve_exact(&mut self, capacity: usize) -> Result<(), AllocError> {
        debug_assert!(capacity >= self.buf.len());

        let additional = capacity - self.buf.len();
        self.buf
            .try_reserve_exact(additional)
            .map_err(|err| AllocError::from_reserve(capacity, err))?;

        log::trace!("dynarray: capacity {} -> {}", self.capacity, capacity);
        self.capacity = capacity;
        Ok(())
    }

    /// Makes room for one more element, growing if the array is full.
    #[inline]
    fn ensure_slot(&mut self) -> Result<(), AllocError> {
        if self.buf.len() < self.capacity {
            return Ok(());
        }
        self.grow()
    }

    fn grow(&mut self) -> Result<(), AllocError> {
        let capacity = if self.capacity == 0 {
            self.start_size
        } else {
            match self.capacity.checked_mul(2) {
                Some(doubled) => doubled,
                None => {
                    log::warn!("dynarray: capacity {} cannot double", self.capacity);
                    return Err(AllocError {
                        requested: usize::MAX,
                    });
                }
            }
        };
        self.reserve_exact(capacity)
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.capacity);
        buf.extend_from_slice(&self.buf);
        Self {
            buf,
            capacity: self.capacity,
            start_size: self.start_size,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("len", &self.buf.len())
            .field("capacity", &self.capacity)
            .field("elements", &self.buf)
            .finish()
    }
}

/// Arrays compare equal when their elements do; capacity is not compared.
impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl<T: Eq> Eq for DynArray<T> {}

/// # Panics
///
/// Panics if `pos >= len()`, like slice indexing.
impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, pos: usize) -> &T {
        &self.buf[pos]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    #[inline]
    fn index_mut(&mut self, pos: usize) -> &mut T {
        &mut self.buf[pos]
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}
