//! Dispatch facade
//!
//! Uniform entry points over both validator contracts. Every call creates
//! exactly one fresh [`ValidationResult`], hands it to the validator, and
//! returns it untouched: the facade never adds, drops, or reorders findings.
//!
//! All functions are generic over the validator, the subject and the message
//! type, so dispatch is resolved at compile time and no validator is boxed.
//!
//! # Example
//!
//! ```
//! use verifast::{try_validate, validate, ValidationResult, Validator};
//!
//! struct Positive;
//!
//! impl Validator<i64> for Positive {
//!     fn validate(&self, instance: &i64, result: &mut ValidationResult) {
//!         if *instance <= 0 {
//!             result.add_error("must be positive".to_string());
//!         }
//!     }
//! }
//!
//! let result = validate(&Positive, &-1);
//! assert_eq!(result.errors(), ["must be positive".to_string()]);
//!
//! let (ok, result) = try_validate(&Positive, &5);
//! assert!(ok);
//! assert!(result.is_empty());
//! ```

use crate::async_validator::AsyncValidator;
use crate::error::Aborted;
use crate::result::ValidationResult;
use crate::validator::Validator;
use futures::future::try_join_all;
use tokio_util::sync::CancellationToken;

/// Run a synchronous validator against `instance` and return its findings.
#[inline]
pub fn validate<V, T, M>(validator: &V, instance: &T) -> ValidationResult<M>
where
    V: Validator<T, M> + ?Sized,
    T: ?Sized,
{
    let mut result = ValidationResult::new();
    validator.validate(instance, &mut result);
    trace_completed::<T, M>(&result);
    result
}

/// Like [`validate`], also returning the validity flag.
///
/// The flag always equals `result.is_valid()`.
///
/// # Example
///
/// ```
/// use verifast::{from_fn, try_validate, ValidationResult};
///
/// let even = from_fn(|n: &u32, r: &mut ValidationResult| {
///     if n % 2 == 1 {
///         r.add_error(format!("{} is odd", n));
///     }
/// });
///
/// let (ok, result) = try_validate(&even, &3);
/// assert!(!ok);
/// assert_eq!(result.errors(), ["3 is odd".to_string()]);
/// ```
#[inline]
pub fn try_validate<V, T, M>(validator: &V, instance: &T) -> (bool, ValidationResult<M>)
where
    V: Validator<T, M> + ?Sized,
    T: ?Sized,
{
    let result = validate(validator, instance);
    (result.is_valid(), result)
}

/// Run a synchronous validator over each subject, one result per subject in
/// input order.
///
/// # Example
///
/// ```
/// use verifast::{from_fn, validate_many, ValidationResult};
///
/// let non_empty = from_fn(|s: &str, r: &mut ValidationResult| {
///     if s.is_empty() {
///         r.add_error("empty".to_string());
///     }
/// });
///
/// let results = validate_many(&non_empty, ["a", "", "c"]);
/// let flags: Vec<bool> = results.iter().map(|r| r.is_valid()).collect();
/// assert_eq!(flags, vec![true, false, true]);
/// ```
pub fn validate_many<'a, V, T, M, I>(validator: &V, instances: I) -> Vec<ValidationResult<M>>
where
    V: Validator<T, M> + ?Sized,
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    instances
        .into_iter()
        .map(|instance| validate(validator, instance))
        .collect()
}

/// Run a suspending validator against `instance`.
///
/// Returns the validator's accumulator as-is, or the [`Aborted`] failure it
/// raised.
pub async fn validate_async<V, T, M>(
    validator: &V,
    instance: T,
    cancel: &CancellationToken,
) -> Result<ValidationResult<M>, Aborted>
where
    V: AsyncValidator<T, M>,
{
    match validator.validate_async(instance, cancel).await {
        Ok(result) => {
            trace_completed::<T, M>(&result);
            Ok(result)
        }
        Err(aborted) => {
            trace_aborted::<T>(&aborted);
            Err(aborted)
        }
    }
}

/// Like [`validate_async`], also returning the validity flag.
pub async fn try_validate_async<V, T, M>(
    validator: &V,
    instance: T,
    cancel: &CancellationToken,
) -> Result<(bool, ValidationResult<M>), Aborted>
where
    V: AsyncValidator<T, M>,
{
    let result = validate_async(validator, instance, cancel).await?;
    Ok((result.is_valid(), result))
}

/// Run a suspending validator over each subject concurrently.
///
/// Results come back in input order. The first [`Aborted`] failure aborts
/// the whole batch and the remaining in-flight calls are dropped.
pub async fn validate_many_async<V, T, M, I>(
    validator: &V,
    instances: I,
    cancel: &CancellationToken,
) -> Result<Vec<ValidationResult<M>>, Aborted>
where
    V: AsyncValidator<T, M>,
    I: IntoIterator<Item = T>,
{
    try_join_all(
        instances
            .into_iter()
            .map(|instance| validate_async(validator, instance, cancel)),
    )
    .await
}

/// Method forms of [`validate`] and [`try_validate`].
pub trait ValidatorExt<T: ?Sized, M>: Validator<T, M> {
    /// See [`validate`].
    fn run(&self, instance: &T) -> ValidationResult<M> {
        validate(self, instance)
    }

    /// See [`try_validate`].
    fn try_run(&self, instance: &T) -> (bool, ValidationResult<M>) {
        try_validate(self, instance)
    }
}

impl<T: ?Sized, M, V: Validator<T, M> + ?Sized> ValidatorExt<T, M> for V {}

/// Method forms of [`validate_async`] and [`try_validate_async`].
///
/// The returned futures are `Send`, so they can be handed to `tokio::spawn`.
pub trait AsyncValidatorExt<T, M>: AsyncValidator<T, M> + Sized {
    /// See [`validate_async`].
    fn run_async(
        &self,
        instance: T,
        cancel: &CancellationToken,
    ) -> impl std::future::Future<Output = Result<ValidationResult<M>, Aborted>> + Send
    where
        Self: Sync,
        T: Send,
        M: Send,
    {
        validate_async(self, instance, cancel)
    }

    /// See [`try_validate_async`].
    fn try_run_async(
        &self,
        instance: T,
        cancel: &CancellationToken,
    ) -> impl std::future::Future<Output = Result<(bool, ValidationResult<M>), Aborted>> + Send
    where
        Self: Sync,
        T: Send,
        M: Send,
    {
        try_validate_async(self, instance, cancel)
    }
}

impl<T, M, V: AsyncValidator<T, M>> AsyncValidatorExt<T, M> for V {}

#[cfg(feature = "tracing")]
#[inline]
fn trace_completed<T: ?Sized, M>(result: &ValidationResult<M>) {
    tracing::trace!(
        subject = std::any::type_name::<T>(),
        errors = result.error_count(),
        warnings = result.warning_count(),
        "validated"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn trace_completed<T: ?Sized, M>(_result: &ValidationResult<M>) {}

#[cfg(feature = "tracing")]
fn trace_aborted<T>(aborted: &Aborted) {
    tracing::debug!(
        subject = std::any::type_name::<T>(),
        reason = %aborted,
        "validation aborted"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn trace_aborted<T>(_aborted: &Aborted) {}
