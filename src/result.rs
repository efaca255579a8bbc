//! The per-call findings accumulator
//!
//! [`ValidationResult`] collects the errors and warnings a rule set produces
//! while checking one subject. Both sequences stay unallocated until the first
//! finding is written, so validating a clean value costs no heap allocation.
//!
//! # Examples
//!
//! ```
//! use verifast::ValidationResult;
//!
//! let mut result = ValidationResult::<String>::new();
//! assert!(result.is_valid());
//!
//! result.add_warning("Phone looks odd".to_string());
//! assert!(result.is_valid()); // warnings never affect validity
//!
//! result.add_error("Name is required".to_string());
//! assert!(!result.is_valid());
//! assert_eq!(result.errors(), ["Name is required".to_string()]);
//! ```
//!
//! ## Structured messages
//!
//! ```
//! use verifast::ValidationResult;
//!
//! #[derive(Debug, PartialEq)]
//! enum Code {
//!     Required,
//!     TooLong,
//! }
//!
//! let mut result = ValidationResult::<Code>::new();
//! result.add_error(Code::Required);
//! result.add_error(Code::TooLong);
//! assert_eq!(result.errors(), [Code::Required, Code::TooLong]);
//! ```

use std::fmt;

/// Ordered errors and warnings gathered during a single validation call.
///
/// The message type `M` defaults to `String`; any caller-chosen type works
/// (error codes, structured payloads). Messages keep insertion order and
/// duplicates are preserved.
///
/// Callers can only append through [`add_error`](Self::add_error) and
/// [`add_warning`](Self::add_warning); the read accessors hand out shared
/// slices.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult<M = String> {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    errors: Option<Vec<M>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    warnings: Option<Vec<M>>,
}

impl<M> ValidationResult<M> {
    /// Create an empty accumulator. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            errors: None,
            warnings: None,
        }
    }

    /// Append an error. The first call allocates the error storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use verifast::ValidationResult;
    ///
    /// let mut result = ValidationResult::<&str>::new();
    /// result.add_error("dup");
    /// result.add_error("dup");
    /// assert_eq!(result.errors(), ["dup", "dup"]);
    /// ```
    #[inline]
    pub fn add_error(&mut self, message: M) {
        self.errors.get_or_insert_with(Vec::new).push(message);
    }

    /// Append a warning. Warnings never change [`is_valid`](Self::is_valid).
    #[inline]
    pub fn add_warning(&mut self, message: M) {
        self.warnings.get_or_insert_with(Vec::new).push(message);
    }

    /// `true` when no error has been recorded.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.as_ref().is_none_or(Vec::is_empty)
    }

    /// Errors in the order they were added.
    #[inline]
    pub fn errors(&self) -> &[M] {
        self.errors.as_deref().unwrap_or(&[])
    }

    /// Warnings in the order they were added.
    #[inline]
    pub fn warnings(&self) -> &[M] {
        self.warnings.as_deref().unwrap_or(&[])
    }

    /// Number of recorded errors.
    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors().len()
    }

    /// Number of recorded warnings.
    #[inline]
    pub fn warning_count(&self) -> usize {
        self.warnings().len()
    }

    /// `true` when neither errors nor warnings were recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors().is_empty() && self.warnings().is_empty()
    }

    /// Consume the accumulator, returning `(errors, warnings)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use verifast::ValidationResult;
    ///
    /// let mut result = ValidationResult::<&str>::new();
    /// result.add_warning("w");
    /// let (errors, warnings) = result.into_parts();
    /// assert!(errors.is_empty());
    /// assert_eq!(warnings, vec!["w"]);
    /// ```
    pub fn into_parts(self) -> (Vec<M>, Vec<M>) {
        (
            self.errors.unwrap_or_default(),
            self.warnings.unwrap_or_default(),
        )
    }

    #[cfg(test)]
    pub(crate) fn is_allocated(&self) -> bool {
        self.errors.is_some() || self.warnings.is_some()
    }
}

impl<M> Default for ValidationResult<M> {
    fn default() -> Self {
        Self::new()
    }
}

// An allocated-but-empty sequence and an unallocated one are the same result.
impl<M: PartialEq> PartialEq for ValidationResult<M> {
    fn eq(&self, other: &Self) -> bool {
        self.errors() == other.errors() && self.warnings() == other.warnings()
    }
}

impl<M: Eq> Eq for ValidationResult<M> {}

impl<M: fmt::Display> fmt::Display for ValidationResult<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "valid");
        }
        let mut first = true;
        for (label, message) in self
            .errors()
            .iter()
            .map(|m| ("error", m))
            .chain(self.warnings().iter().map(|m| ("warning", m)))
        {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}: {}", label, message)?;
            first = false;
        }
        Ok(())
    }
}
