//! Numeric range membership

/// `true` when `value` lies in `[low, high]`.
///
/// # Example
///
/// ```rust
/// use verifast::predicate::is_in_range;
///
/// assert!(is_in_range(13, 13, 120));
/// assert!(is_in_range(120, 13, 120));
/// assert!(!is_in_range(12, 13, 120));
/// ```
#[inline]
pub fn is_in_range<T: PartialOrd>(value: T, low: T, high: T) -> bool {
    value >= low && value <= high
}

/// `true` when `value` lies in `(low, high)`.
///
/// # Example
///
/// ```rust
/// use verifast::predicate::is_in_range_exclusive;
///
/// assert!(is_in_range_exclusive(0.5, 0.0, 1.0));
/// assert!(!is_in_range_exclusive(0.0, 0.0, 1.0));
/// assert!(!is_in_range_exclusive(1.0, 0.0, 1.0));
/// ```
#[inline]
pub fn is_in_range_exclusive<T: PartialOrd>(value: T, low: T, high: T) -> bool {
    value > low && value < high
}

/// Method form of the range helpers, for inline use in rule bodies.
///
/// # Example
///
/// ```rust
/// use verifast::predicate::RangeExt;
///
/// let age = 34;
/// assert!(age.is_in_range(13, 120));
/// assert!(!age.is_in_range_exclusive(34, 40));
/// ```
pub trait RangeExt: PartialOrd + Sized {
    /// See [`is_in_range`].
    #[inline]
    fn is_in_range(self, low: Self, high: Self) -> bool {
        is_in_range(self, low, high)
    }

    /// See [`is_in_range_exclusive`].
    #[inline]
    fn is_in_range_exclusive(self, low: Self, high: Self) -> bool {
        is_in_range_exclusive(self, low, high)
    }
}

impl<T: PartialOrd> RangeExt for T {}
