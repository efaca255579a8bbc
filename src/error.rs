//! Operational failures of suspending validation calls
//!
//! Rule violations are never errors in this crate; they are findings recorded
//! in a [`ValidationResult`](crate::ValidationResult). [`Aborted`] is the other
//! channel: a suspending call that could not produce a complete result.

use thiserror::Error;

/// A suspending validation call ended without a complete result.
///
/// # Examples
///
/// ```
/// use verifast::Aborted;
///
/// let err = Aborted::Cancelled;
/// assert!(err.is_cancelled());
/// assert_eq!(err.to_string(), "validation cancelled");
///
/// let err = Aborted::lookup("directory unreachable");
/// assert!(!err.is_cancelled());
/// assert_eq!(err.to_string(), "lookup failed: directory unreachable");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Aborted {
    /// The cancellation signal fired at a suspension point.
    #[error("validation cancelled")]
    Cancelled,
    /// A lookup collaborator failed and no answer is available.
    #[error("lookup failed: {0}")]
    Lookup(String),
}

impl Aborted {
    /// Build a [`Aborted::Lookup`] from any message.
    pub fn lookup(message: impl Into<String>) -> Self {
        Aborted::Lookup(message.into())
    }

    /// `true` for [`Aborted::Cancelled`].
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Aborted::Cancelled)
    }
}
