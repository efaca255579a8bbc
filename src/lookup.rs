//! Lookup collaborator boundary
//!
//! Suspending validators that need external answers about an email address
//! talk to an [`EmailLookup`]. The crate only requires the two predicates
//! below; retries, caching and latency are the implementor's business.
//! [`MockUserDirectory`](crate::testing::MockUserDirectory) is an in-memory
//! implementation for tests.

use crate::error::Aborted;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// External lookups over an email address.
///
/// Both methods must resolve to [`Aborted::Cancelled`] promptly once
/// `cancel` fires.
pub trait EmailLookup: Send + Sync {
    /// Whether the domain part of `email` may register.
    fn is_domain_allowed(
        &self,
        email: &str,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<bool, Aborted>> + Send;

    /// Whether no existing account already uses `email`.
    fn is_email_unique(
        &self,
        email: &str,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<bool, Aborted>> + Send;
}

impl<L: EmailLookup> EmailLookup for Arc<L> {
    fn is_domain_allowed(
        &self,
        email: &str,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<bool, Aborted>> + Send {
        (**self).is_domain_allowed(email, cancel)
    }

    fn is_email_unique(
        &self,
        email: &str,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<bool, Aborted>> + Send {
        (**self).is_email_unique(email, cancel)
    }
}

/// Split `email` into its domain part.
///
/// Returns `None` when there is no `@`, nothing before it, or nothing after it.
///
/// # Example
///
/// ```
/// use verifast::lookup::email_domain;
///
/// assert_eq!(email_domain("a@spam.com"), Some("spam.com"));
/// assert_eq!(email_domain("@spam.com"), None);
/// assert_eq!(email_domain("a@"), None);
/// ```
pub fn email_domain(email: &str) -> Option<&str> {
    let at = email.find('@')?;
    if at == 0 || at + 1 >= email.len() {
        return None;
    }
    Some(&email[at + 1..])
}
