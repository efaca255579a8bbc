//! Synchronous validator contract
//!
//! A [`Validator`] inspects a borrowed subject and writes findings into an
//! accumulator owned by the caller. Nothing is returned: the mutated
//! [`ValidationResult`] is the only output.
//!
//! The subject type may be unsized (`str`, slices) or a borrowed view that
//! must never be copied to the heap. Dispatch through [`crate::validate`] is
//! generic, so each validator/subject pair is monomorphized and no validator
//! instance is ever boxed.
//!
//! # Example
//!
//! ```
//! use verifast::{validate, ValidationResult, Validator};
//!
//! struct Celsius(f64);
//!
//! struct ReasonableTemperature;
//!
//! impl Validator<Celsius> for ReasonableTemperature {
//!     fn validate(&self, instance: &Celsius, result: &mut ValidationResult) {
//!         if instance.0 < -273.15 {
//!             result.add_error("Temperature is below absolute zero".to_string());
//!         } else if instance.0 > 60.0 {
//!             result.add_warning("Temperature is unusually high".to_string());
//!         }
//!     }
//! }
//!
//! assert!(validate(&ReasonableTemperature, &Celsius(21.0)).is_valid());
//! assert!(!validate(&ReasonableTemperature, &Celsius(-300.0)).is_valid());
//! ```

use crate::result::ValidationResult;
use std::fmt;

/// Checks a borrowed subject and records findings in `result`.
///
/// Implementations must not block or suspend and must not mutate anything
/// besides `result`. The accumulator arrives in a valid, possibly non-empty
/// state; implementations only append to it.
///
/// # Type Parameters
///
/// * `T` - The subject type. May be unsized.
/// * `M` - The message type, `String` by default.
///
/// # Example
///
/// Validating a borrowed, non-owning view without copying it:
///
/// ```
/// use verifast::{validate, ValidationResult, Validator};
///
/// struct DigitsView<'a> {
///     bytes: &'a [u8],
/// }
///
/// struct AllDigits;
///
/// impl<'a> Validator<DigitsView<'a>> for AllDigits {
///     fn validate(&self, instance: &DigitsView<'a>, result: &mut ValidationResult) {
///         if !instance.bytes.iter().all(u8::is_ascii_digit) {
///             result.add_error("Only digits are allowed".to_string());
///         }
///     }
/// }
///
/// let raw = *b"12a4";
/// let view = DigitsView { bytes: &raw };
/// assert_eq!(validate(&AllDigits, &view).error_count(), 1);
/// ```
pub trait Validator<T: ?Sized, M = String> {
    /// Inspect `instance` and append any findings to `result`.
    fn validate(&self, instance: &T, result: &mut ValidationResult<M>);
}

impl<T, M, V> Validator<T, M> for &V
where
    T: ?Sized,
    V: Validator<T, M> + ?Sized,
{
    #[inline]
    fn validate(&self, instance: &T, result: &mut ValidationResult<M>) {
        (**self).validate(instance, result)
    }
}

/// A validator backed by a closure.
///
/// Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnValidator<F> {
    f: F,
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

impl<T, M, F> Validator<T, M> for FnValidator<F>
where
    T: ?Sized,
    F: Fn(&T, &mut ValidationResult<M>),
{
    #[inline]
    fn validate(&self, instance: &T, result: &mut ValidationResult<M>) {
        (self.f)(instance, result)
    }
}

/// Turn a closure into a [`Validator`].
///
/// A non-capturing closure yields a zero-sized validator.
///
/// # Example
///
/// ```
/// use verifast::{from_fn, validate, ValidationResult};
///
/// let username = from_fn(|name: &str, result: &mut ValidationResult| {
///     if name.is_empty() {
///         result.add_error("Username is required".to_string());
///     }
/// });
///
/// assert!(validate(&username, "alice").is_valid());
/// assert!(!validate(&username, "").is_valid());
/// ```
pub fn from_fn<T, M, F>(f: F) -> FnValidator<F>
where
    T: ?Sized,
    F: Fn(&T, &mut ValidationResult<M>),
{
    FnValidator { f }
}
