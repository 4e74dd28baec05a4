use crate::array::{DynArray, START_SIZE};
use crate::error::BuildError;

/// Builder for [`DynArray`] with a non-default growth configuration.
///
/// # Example
///
/// ```
/// use nexus_dynarray::DynArrayBuilder;
///
/// let array = DynArrayBuilder::default()
///     .start_size(16)
///     .capacity(100)
///     .build::<u64>()
///     .unwrap();
///
/// assert_eq!(array.capacity(), 100);
/// assert_eq!(array.start_size(), 16);
/// ```
#[derive(Clone, Debug)]
pub struct DynArrayBuilder {
    start_size: usize,
    capacity: usize,
}

impl Default for DynArrayBuilder {
    fn default() -> Self {
        Self {
            start_size: START_SIZE,
            capacity: 0,
        }
    }
}

impl DynArrayBuilder {
    /// Capacity chosen on the first growth from zero. Default: [`START_SIZE`].
    pub fn start_size(mut self, slots: usize) -> Self {
        self.start_size = slots;
        self
    }

    /// Slots to allocate up front. Default: 0 (allocate on first push).
    pub fn capacity(mut self, slots: usize) -> Self {
        self.capacity = slots;
        self
    }

    /// Builds the array, allocating the initial capacity if one was set.
    pub fn build<T>(self) -> Result<DynArray<T>, BuildError> {
        if self.start_size == 0 {
            return Err(BuildError::ZeroStartSize);
        }

        let mut array = DynArray::new();
        array.set_start_size(self.start_size);
        if self.capacity > 0 {
            array.reserve_exact(self.capacity)?;
        }
        Ok(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lazy() {
        let array: DynArray<u8> = DynArrayBuilder::default().build().unwrap();
        assert_eq!(array.capacity(), 0);
        assert_eq!(array.start_size(), START_SIZE);
    }

    #[test]
    fn zero_start_size_rejected() {
        let err = DynArrayBuilder::default()
            .start_size(0)
            .build::<u8>()
            .unwrap_err();
        assert_eq!(err, BuildError::ZeroStartSize);
    }

    #[test]
    fn custom_start_size_drives_first_growth() {
        let mut array = DynArrayBuilder::default()
            .start_size(3)
            .build::<u32>()
            .unwrap();
        array.push_back(1).unwrap();
        assert_eq!(array.capacity(), 3);
        for i in 0..3 {
            array.push_back(i).unwrap();
        }
        assert_eq!(array.capacity(), 6);
    }

    #[test]
    fn oversized_capacity_reports_alloc_error() {
        let err = DynArrayBuilder::default()
            .capacity(usize::MAX)
            .build::<u64>()
            .unwrap_err();
        assert!(matches!(err, BuildError::Alloc(e) if e.requested == usize::MAX));
    }
}
