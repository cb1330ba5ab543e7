//! Errors reported by [`Tree`][crate::Tree] and [`Node`][crate::Node] operations.

/// An error returned by a tree or node operation. No operation mutates the tree before returning
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A node was requested for a value that was absent.
    #[error("value is absent")]
    InvalidValue,
    /// The value being inserted is already stored in the tree.
    #[error("value is already present in the tree")]
    DuplicateValue,
    /// No node in the tree holds the requested value.
    #[error("no node holds the requested value")]
    NodeNotFound,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
