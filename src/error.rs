//! Errors returned by [`Tree`][crate::Tree] operations.
//!
//! Only removal can fail. Insertion and minimum lookup are total over any tree and any key.

use thiserror::Error;

/// Errors that can occur while mutating a [`Tree`][crate::Tree].
///
/// Every variant is recoverable: the tree is left exactly as it was before the failed call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key passed to [`Tree::remove`][crate::Tree::remove] is not in the tree.
    ///
    /// The search reached an empty slot before finding a matching key. Nothing was unlinked.
    #[error("key not found")]
    KeyNotFound,
}

/// A `Result` alias using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
