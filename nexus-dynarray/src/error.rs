//! Error types for array operations.
//!
//! Every failure leaves the array in the state it had before the call.
//! Errors that reject a value hand that value back to the caller.

use core::fmt;
use std::collections::TryReserveError;

/// Error returned when the array could not grow to hold another element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "array could not grow to hold another element")
    }
}

impl<T: fmt::Debug> std::error::Error for Full<T> {}

/// Error returned by positional writes ([`insert`](crate::DynArray::insert),
/// [`set`](crate::DynArray::set)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushError<T> {
    /// Position lies past the end of the array. Nothing was written.
    OutOfBounds {
        /// Requested position.
        pos: usize,
        /// Array length at the time of the call.
        len: usize,
        /// The rejected value.
        value: T,
    },
    /// The array was full and could not grow.
    AllocFailed(T),
}

impl<T> PushError<T> {
    /// Returns the value that could not be written.
    pub fn into_inner(self) -> T {
        match self {
            PushError::OutOfBounds { value, .. } => value,
            PushError::AllocFailed(value) => value,
        }
    }
}

impl<T> From<Full<T>> for PushError<T> {
    fn from(full: Full<T>) -> Self {
        PushError::AllocFailed(full.0)
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::OutOfBounds { pos, len, .. } => {
                write!(f, "position {pos} out of bounds for length {len}")
            }
            PushError::AllocFailed(_) => {
                write!(f, "array could not grow to hold another element")
            }
        }
    }
}

impl<T: fmt::Debug> std::error::Error for PushError<T> {}

/// Storage for the requested number of slots could not be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError {
    /// Number of slots that was requested.
    pub requested: usize,
}

impl AllocError {
    pub(crate) fn from_reserve(requested: usize, err: TryReserveError) -> Self {
        log::warn!("dynarray: allocation of {requested} slots failed: {err}");
        Self { requested }
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to allocate {} slots", self.requested)
    }
}

impl std::error::Error for AllocError {}

/// Explicit resize failed. The array keeps its previous contents and capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeError {
    /// Capacity passed to [`set_capacity`](crate::DynArray::set_capacity).
    pub requested: usize,
    /// Underlying allocation failure.
    pub source: AllocError,
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resize to capacity {} failed", self.requested)
    }
}

impl std::error::Error for ResizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Error during array construction through [`DynArrayBuilder`](crate::DynArrayBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// Start size is zero; the array could never grow.
    ZeroStartSize,
    /// Initial capacity could not be allocated.
    Alloc(AllocError),
}

impl From<AllocError> for BuildError {
    fn from(err: AllocError) -> Self {
        BuildError::Alloc(err)
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::ZeroStartSize => write!(f, "start size cannot be zero"),
            BuildError::Alloc(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::ZeroStartSize => None,
            BuildError::Alloc(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_error_hands_value_back() {
        let err = PushError::OutOfBounds {
            pos: 7,
            len: 2,
            value: "x",
        };
        assert_eq!(err.to_string(), "position 7 out of bounds for length 2");
        assert_eq!(err.into_inner(), "x");

        let err: PushError<u32> = Full(9).into();
        assert_eq!(err, PushError::AllocFailed(9));
        assert_eq!(err.into_inner(), 9);
    }

    #[test]
    fn resize_error_exposes_source() {
        use std::error::Error;

        let err = ResizeError {
            requested: 64,
            source: AllocError { requested: 64 },
        };
        assert_eq!(err.to_string(), "resize to capacity 64 failed");
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("failed to allocate 64 slots".to_string())
        );
    }
}
