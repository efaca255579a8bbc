//! Suspending validator contract
//!
//! An [`AsyncValidator`] is for rule sets that need an external round-trip
//! (a uniqueness lookup, a blocklist query). Each call builds its own
//! [`ValidationResult`] and hands it back by value.
//!
//! Two channels never mix:
//! - rule violations are findings inside the returned accumulator
//! - cancellation and collaborator outages are [`Aborted`] errors
//!
//! Implementations check the cancellation signal at every suspension point
//! with [`ensure_active`], so a cancelled call never returns a partial
//! accumulator as if it were complete.
//!
//! # Example
//!
//! ```
//! use tokio_util::sync::CancellationToken;
//! use verifast::{ensure_active, Aborted, AsyncValidator, ValidationResult};
//!
//! struct NotReserved;
//!
//! impl AsyncValidator<String> for NotReserved {
//!     async fn validate_async(
//!         &self,
//!         instance: String,
//!         cancel: &CancellationToken,
//!     ) -> Result<ValidationResult, Aborted> {
//!         let mut result = ValidationResult::new();
//!         ensure_active(cancel)?;
//!         // ... await a lookup here ...
//!         ensure_active(cancel)?;
//!         if instance == "admin" {
//!             result.add_error("Username is reserved".to_string());
//!         }
//!         Ok(result)
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let cancel = CancellationToken::new();
//! let result = NotReserved
//!     .validate_async("admin".to_string(), &cancel)
//!     .await
//!     .unwrap();
//! assert!(!result.is_valid());
//!
//! cancel.cancel();
//! let err = NotReserved.validate_async("bob".to_string(), &cancel).await;
//! assert_eq!(err, Err(Aborted::Cancelled));
//! # });
//! ```

use crate::error::Aborted;
use crate::result::ValidationResult;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Validates an owned or shared subject, possibly suspending on lookups.
///
/// Unlike [`Validator`](crate::Validator) the subject is taken by value
/// (pass `&T` or `Arc<T>` as the subject type to share it), since it has to
/// live across suspension points.
///
/// # Type Parameters
///
/// * `T` - The subject type.
/// * `M` - The message type, `String` by default.
pub trait AsyncValidator<T, M = String> {
    /// Validate `instance`, observing `cancel` at every suspension point.
    ///
    /// Returns the complete accumulator, or [`Aborted`] when the call could
    /// not finish. Implementations normally write this as an `async fn`.
    fn validate_async(
        &self,
        instance: T,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<ValidationResult<M>, Aborted>> + Send;
}

impl<T, M, V> AsyncValidator<T, M> for &V
where
    V: AsyncValidator<T, M>,
{
    fn validate_async(
        &self,
        instance: T,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<ValidationResult<M>, Aborted>> + Send {
        (**self).validate_async(instance, cancel)
    }
}

/// Fail with [`Aborted::Cancelled`] once `cancel` has fired.
///
/// Call this before and after every await that talks to a collaborator.
///
/// # Example
///
/// ```
/// use tokio_util::sync::CancellationToken;
/// use verifast::{ensure_active, Aborted};
///
/// let cancel = CancellationToken::new();
/// assert_eq!(ensure_active(&cancel), Ok(()));
/// cancel.cancel();
/// assert_eq!(ensure_active(&cancel), Err(Aborted::Cancelled));
/// ```
#[inline]
pub fn ensure_active(cancel: &CancellationToken) -> Result<(), Aborted> {
    if cancel.is_cancelled() {
        Err(Aborted::Cancelled)
    } else {
        Ok(())
    }
}
