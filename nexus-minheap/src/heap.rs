//! Binary min-heap over a [`DynArray`] of entries.
//!
//! Entries are kept in the usual implicit-tree layout: the children of
//! position `i` live at `2i + 1` and `2i + 2`. Every structural change goes
//! through the array's own operations (push, pop, swap, indexed write).

use core::mem;

use nexus_dynarray::{AllocError, DynArray, Full};

use crate::priority::{HeapEntry, Priority};

/// A min-heap of `(payload, priority)` entries.
///
/// The entry with the smallest priority is always at the root. Payloads are
/// moved in on [`insert`](Self::insert) and handed back on
/// [`extract_min`](Self::extract_min); the heap never inspects them.
///
/// # Ties
///
/// Entries with equal priority come out in an unspecified order. The heap
/// is neither FIFO nor LIFO among ties.
///
/// # Example
///
/// ```
/// use nexus_minheap::MinHeap;
///
/// let mut heap: MinHeap<&str, u32> = MinHeap::new();
/// heap.insert("low", 10).unwrap();
/// heap.insert("high", 1).unwrap();
/// heap.insert("medium", 5).unwrap();
///
/// assert_eq!(heap.peek_min().map(|e| e.payload), Some("high"));
///
/// let order: Vec<_> = std::iter::from_fn(|| heap.extract_min())
///     .map(|e| e.payload)
///     .collect();
/// assert_eq!(order, ["high", "medium", "low"]);
/// ```
#[derive(Debug, Clone)]
pub struct MinHeap<T, P: Priority = i64> {
    /// Heap-ordered entries.
    entries: DynArray<HeapEntry<T, P>>,
}

impl<T, P: Priority> Default for MinHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Priority> MinHeap<T, P> {
    /// Creates an empty heap. The backing array allocates on first insert.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: DynArray::new(),
        }
    }

    /// Creates an empty heap with `capacity` entries pre-allocated.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the storage could not be allocated.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Ok(Self {
            entries: DynArray::try_with_capacity(capacity)?,
        })
    }

    /// Creates a heap over a caller-configured array.
    ///
    /// Entries already in the array are rearranged into heap order in O(n).
    ///
    /// ```
    /// use nexus_minheap::{DynArrayBuilder, HeapEntry, MinHeap};
    ///
    /// let mut array = DynArrayBuilder::default().start_size(64).build().unwrap();
    /// array.push_back(HeapEntry::new('b', 2)).unwrap();
    /// array.push_back(HeapEntry::new('a', 1)).unwrap();
    ///
    /// let mut heap: MinHeap<char, i32> = MinHeap::with_array(array);
    /// assert_eq!(heap.extract_min().map(|e| e.payload), Some('a'));
    /// ```
    pub fn with_array(entries: DynArray<HeapEntry<T, P>>) -> Self {
        let mut heap = Self { entries };
        for pos in (0..heap.entries.len() / 2).rev() {
            heap.sift_down(pos);
        }
        heap
    }

    /// Returns the number of entries in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the capacity of the backing array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns the entry with the smallest priority without removing it.
    ///
    /// Returns `None` if the heap is empty.
    #[inline]
    pub fn peek_min(&self) -> Option<&HeapEntry<T, P>> {
        self.entries.get(0)
    }

    /// Returns the entries in heap order (root first, not sorted).
    #[inline]
    pub fn as_slice(&self) -> &[HeapEntry<T, P>] {
        self.entries.as_slice()
    }

    /// Returns an iterator over the entries in heap order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, HeapEntry<T, P>> {
        self.entries.iter()
    }

    // ========================================================================
    // Insert / extract
    // ========================================================================

    /// Inserts `payload` with the given priority. O(log n).
    ///
    /// The entry is appended at the tail and sifted up while it is strictly
    /// smaller than its parent.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(entry))` if the backing array could not grow. The
    /// heap is unchanged.
    pub fn insert(&mut self, payload: T, priority: P) -> Result<(), Full<HeapEntry<T, P>>> {
        let pos = self.entries.len();
        if let Err(full) = self.entries.push_back(HeapEntry::new(payload, priority)) {
            log::debug!("minheap: insert at len {pos} rejected, backing array full");
            return Err(full);
        }
        self.sift_up(pos);
        Ok(())
    }

    /// Removes and returns the entry with the smallest priority. O(log n).
    ///
    /// Returns `None` if the heap is empty.
    pub fn extract_min(&mut self) -> Option<HeapEntry<T, P>> {
        let last = self.entries.pop_back()?;
        if self.entries.is_empty() {
            return Some(last);
        }

        let root = mem::replace(&mut self.entries[0], last);
        self.sift_down(0);
        Some(root)
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Removes all entries. Capacity is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Extracts minima while the predicate returns `true`.
    ///
    /// The predicate sees the current minimum; entries come out in
    /// priority order.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_minheap::MinHeap;
    ///
    /// let mut heap: MinHeap<u64, u64> = MinHeap::new();
    /// for v in [1, 5, 3, 7] {
    ///     heap.insert(v, v).unwrap();
    /// }
    ///
    /// let due: Vec<_> = heap.drain_while(|e| e.priority < 4).map(|e| e.payload).collect();
    /// assert_eq!(due, vec![1, 3]);
    /// assert_eq!(heap.peek_min().map(|e| e.priority), Some(5));
    /// ```
    #[inline]
    pub fn drain_while<F>(&mut self, pred: F) -> DrainWhile<'_, T, P, F>
    where
        F: FnMut(&HeapEntry<T, P>) -> bool,
    {
        DrainWhile { heap: self, pred }
    }

    /// Consumes the heap, returning its entries in ascending priority order.
    pub fn into_sorted_vec(mut self) -> Vec<HeapEntry<T, P>> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(entry) = self.extract_min() {
            sorted.push(entry);
        }
        sorted
    }

    // ========================================================================
    // Sifting
    // ========================================================================

    #[inline]
    fn priority(&self, pos: usize) -> P {
        self.entries[pos].priority
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.priority(pos) >= self.priority(parent) {
                break;
            }
            let swapped = self.entries.swap(pos, parent);
            debug_assert!(swapped);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.entries.len();

        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let smaller = if right < len && self.priority(right) < self.priority(left) {
                right
            } else {
                left
            };

            if self.priority(smaller) >= self.priority(pos) {
                break;
            }
            let swapped = self.entries.swap(pos, smaller);
            debug_assert!(swapped);
            pos = smaller;
        }
    }

    /// Checks the heap property over the whole array.
    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (1..self.entries.len()).all(|i| self.priority((i - 1) / 2) <= self.priority(i))
    }
}

/// An iterator that extracts minima while a predicate holds.
///
/// Created by [`MinHeap::drain_while`].
pub struct DrainWhile<'a, T, P: Priority, F>
where
    F: FnMut(&HeapEntry<T, P>) -> bool,
{
    heap: &'a mut MinHeap<T, P>,
    pred: F,
}

impl<T, P: Priority, F> Iterator for DrainWhile<'_, T, P, F>
where
    F: FnMut(&HeapEntry<T, P>) -> bool,
{
    type Item = HeapEntry<T, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let min = self.heap.peek_min()?;
        if (self.pred)(min) {
            self.heap.extract_min()
        } else {
            None
        }
    }
}
