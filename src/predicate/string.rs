//! Text length membership

/// `true` when the length of `text` lies in `[min, max]`.
///
/// An absent text counts as length 0. Length is measured in `char`s, not
/// bytes.
///
/// # Example
///
/// ```rust
/// use verifast::predicate::is_length_between;
///
/// assert!(is_length_between(Some("Alice"), 1, 100));
/// assert!(!is_length_between(Some(""), 1, 100));
/// assert!(is_length_between(None, 0, 10));
/// assert!(is_length_between(Some("héllo"), 5, 5));
/// ```
#[inline]
pub fn is_length_between(text: Option<&str>, min: usize, max: usize) -> bool {
    let len = text.map_or(0, |s| s.chars().count());
    len >= min && len <= max
}

/// Method form of [`is_length_between`].
///
/// # Example
///
/// ```rust
/// use verifast::predicate::LengthExt;
///
/// let name: Option<String> = None;
/// assert!(!name.is_length_between(1, 100));
/// assert!("Bob".is_length_between(1, 100));
/// ```
pub trait LengthExt {
    /// See [`is_length_between`].
    fn is_length_between(&self, min: usize, max: usize) -> bool;
}

impl LengthExt for str {
    #[inline]
    fn is_length_between(&self, min: usize, max: usize) -> bool {
        is_length_between(Some(self), min, max)
    }
}

impl LengthExt for String {
    #[inline]
    fn is_length_between(&self, min: usize, max: usize) -> bool {
        is_length_between(Some(self), min, max)
    }
}

impl LengthExt for Option<&str> {
    #[inline]
    fn is_length_between(&self, min: usize, max: usize) -> bool {
        is_length_between(*self, min, max)
    }
}

impl LengthExt for Option<String> {
    #[inline]
    fn is_length_between(&self, min: usize, max: usize) -> bool {
        is_length_between(self.as_deref(), min, max)
    }
}
