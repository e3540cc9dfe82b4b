//! Error taxonomy for grid operations.

#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// Errors reported by fallible grid operations.
///
/// Discriminants are stable and match the reference library's error table so
/// they can cross FFI or serialization boundaries unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u32)]
pub enum GridError {
  /// The operation failed for an unspecified internal reason, e.g. an
  /// encoding produced an out-of-range face coordinate at resolution 0.
  #[error("operation failed")]
  Failed = 1,
  /// An argument was outside its acceptable range.
  #[error("argument out of acceptable range")]
  Domain = 2,
  /// A latitude or longitude argument was non-finite or out of range.
  #[error("latitude or longitude out of acceptable range")]
  LatLngDomain = 3,
  /// A resolution argument was outside [0, 15].
  #[error("resolution out of acceptable range")]
  ResDomain = 4,
  /// A cell index argument failed the validity check.
  #[error("cell index is not valid")]
  CellInvalid = 5,
  /// Two resolution arguments were incompatible, e.g. a child resolution
  /// coarser than its parent.
  #[error("incompatible resolutions")]
  ResMismatch = 12,
  /// A provided output buffer was too small for the result.
  #[error("output buffer too small")]
  MemoryBounds = 14,
}
