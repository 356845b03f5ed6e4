//! Run-length coded list elements.

use core::fmt;

/// An element of a run-length coded list.
///
/// [`encoded`](crate::List::encoded) produces only [`Run`](Self::Run)
/// elements, while [`encoded_compact`](crate::List::encoded_compact) keeps
/// values that occurred once as bare [`Single`](Self::Single) elements.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoded<T> {
  /// A value that occurred once.
  Single(T),

  /// A maximal run of equal values, as an occurrence count paired with the
  /// repeated value.
  Run(usize, T),
}

impl<T: fmt::Display> fmt::Display for Encoded<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Encoded::Single(value) => write!(f, "{}", value),
      Encoded::Run(count, value) => write!(f, "({}, {})", count, value),
    }
  }
}
