//! Testing utilities for validators
//!
//! This module provides an in-memory [`EmailLookup`](crate::lookup::EmailLookup)
//! double, assertion macros over [`ValidationResult`](crate::ValidationResult),
//! and property-based testing support.
//!
//! # Examples
//!
//! ## MockUserDirectory
//!
//! ```rust
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use verifast::lookup::EmailLookup;
//! use verifast::testing::{DirectoryConfig, LookupCall, MockUserDirectory};
//!
//! # tokio_test::block_on(async {
//! let directory = MockUserDirectory::new(
//!     DirectoryConfig::default()
//!         .with_seed_emails(["taken@example.com"])
//!         .with_op_delay(Duration::ZERO),
//! );
//! let cancel = CancellationToken::new();
//!
//! assert!(!directory.is_email_unique("TAKEN@example.com", &cancel).await.unwrap());
//! assert!(!directory.is_domain_allowed("x@spam.com", &cancel).await.unwrap());
//! assert_eq!(
//!     directory.calls(),
//!     vec![
//!         LookupCall::EmailUnique("TAKEN@example.com".to_string()),
//!         LookupCall::DomainAllowed("x@spam.com".to_string()),
//!     ]
//! );
//! # });
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use verifast::{assert_errors, assert_invalid, assert_valid, ValidationResult};
//!
//! let ok = ValidationResult::<String>::new();
//! assert_valid!(ok);
//!
//! let mut bad = ValidationResult::new();
//! bad.add_error("Name is required");
//! assert_invalid!(bad);
//! assert_errors!(bad, ["Name is required"]);
//! ```

#[cfg(feature = "async")]
pub use self::directory::{
    DirectoryConfig, LookupCall, MockUserDirectory, DEFAULT_BLACKLISTED_DOMAINS,
};

#[cfg(feature = "async")]
mod directory {
    use crate::async_validator::ensure_active;
    use crate::error::Aborted;
    use crate::lookup::{email_domain, EmailLookup};
    use std::collections::HashSet;
    use std::sync::{Mutex, PoisonError, RwLock};
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    /// Domains every [`MockUserDirectory`] rejects.
    pub const DEFAULT_BLACKLISTED_DOMAINS: [&str; 2] = ["spam.com", "malware.test"];

    /// Configuration for a [`MockUserDirectory`].
    ///
    /// Defaults: no registered emails, only the
    /// [default blacklist](DEFAULT_BLACKLISTED_DOMAINS), 250 µs latency per
    /// operation, no outage.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DirectoryConfig {
        seed_emails: Vec<String>,
        blacklisted_domains: Vec<String>,
        op_delay: Duration,
        outage: Option<String>,
    }

    impl Default for DirectoryConfig {
        fn default() -> Self {
            Self {
                seed_emails: Vec::new(),
                blacklisted_domains: Vec::new(),
                op_delay: Duration::from_micros(250),
                outage: None,
            }
        }
    }

    impl DirectoryConfig {
        /// Emails that already belong to an account.
        pub fn with_seed_emails<I, S>(mut self, emails: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            self.seed_emails.extend(emails.into_iter().map(Into::into));
            self
        }

        /// Domains rejected in addition to the default blacklist.
        pub fn with_blacklisted_domains<I, S>(mut self, domains: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            self.blacklisted_domains
                .extend(domains.into_iter().map(Into::into));
            self
        }

        /// Artificial latency before each operation. `Duration::ZERO` disables it.
        pub fn with_op_delay(mut self, delay: Duration) -> Self {
            self.op_delay = delay;
            self
        }

        /// Make every lookup fail with [`Aborted::Lookup`] carrying `message`.
        pub fn with_outage(mut self, message: impl Into<String>) -> Self {
            self.outage = Some(message.into());
            self
        }
    }

    /// One recorded call against a [`MockUserDirectory`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum LookupCall {
        /// [`EmailLookup::is_domain_allowed`] was invoked with this email.
        DomainAllowed(String),
        /// [`EmailLookup::is_email_unique`] was invoked with this email.
        EmailUnique(String),
        /// [`MockUserDirectory::add`] was invoked with this email.
        Add(String),
    }

    /// In-memory user directory with artificial latency and a call log.
    ///
    /// Email and domain matching is ASCII case-insensitive. Every operation
    /// is recorded on entry, then sleeps for the configured delay while
    /// racing the cancellation token, then yields once before answering.
    #[derive(Debug)]
    pub struct MockUserDirectory {
        emails: RwLock<HashSet<String>>,
        blacklisted_domains: HashSet<String>,
        op_delay: Duration,
        outage: Option<String>,
        calls: Mutex<Vec<LookupCall>>,
    }

    impl Default for MockUserDirectory {
        fn default() -> Self {
            Self::new(DirectoryConfig::default())
        }
    }

    impl MockUserDirectory {
        /// Build a directory from `config`.
        pub fn new(config: DirectoryConfig) -> Self {
            let emails = config
                .seed_emails
                .iter()
                .map(|e| e.to_ascii_lowercase())
                .collect();
            let blacklisted_domains = DEFAULT_BLACKLISTED_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .chain(config.blacklisted_domains)
                .map(|d| d.to_ascii_lowercase())
                .collect();
            Self {
                emails: RwLock::new(emails),
                blacklisted_domains,
                op_delay: config.op_delay,
                outage: config.outage,
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Register `email` so later uniqueness checks report it as taken.
        pub async fn add(&self, email: &str, cancel: &CancellationToken) -> Result<(), Aborted> {
            self.record(LookupCall::Add(email.to_string()));
            self.simulate(cancel).await?;
            self.emails
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(email.to_ascii_lowercase());
            Ok(())
        }

        /// Every call made so far, in order.
        pub fn calls(&self) -> Vec<LookupCall> {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Number of calls made so far.
        pub fn call_count(&self) -> usize {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }

        fn record(&self, call: LookupCall) {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(call);
        }

        async fn simulate(&self, cancel: &CancellationToken) -> Result<(), Aborted> {
            if !self.op_delay.is_zero() {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Err(Aborted::Cancelled),
                    _ = tokio::time::sleep(self.op_delay) => {}
                }
            }
            ensure_active(cancel)?;
            tokio::task::yield_now().await;
            match &self.outage {
                Some(message) => Err(Aborted::lookup(message.clone())),
                None => Ok(()),
            }
        }
    }

    impl EmailLookup for MockUserDirectory {
        async fn is_domain_allowed(
            &self,
            email: &str,
            cancel: &CancellationToken,
        ) -> Result<bool, Aborted> {
            self.record(LookupCall::DomainAllowed(email.to_string()));
            self.simulate(cancel).await?;
            Ok(email_domain(email).is_some_and(|domain| {
                !self
                    .blacklisted_domains
                    .contains(&domain.to_ascii_lowercase())
            }))
        }

        async fn is_email_unique(
            &self,
            email: &str,
            cancel: &CancellationToken,
        ) -> Result<bool, Aborted> {
            self.record(LookupCall::EmailUnique(email.to_string()));
            self.simulate(cancel).await?;
            let taken = self
                .emails
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .contains(&email.to_ascii_lowercase());
            Ok(!taken)
        }
    }

}

/// Assert that a validation result has no errors.
///
/// # Example
///
/// ```rust
/// use verifast::{assert_valid, ValidationResult};
///
/// let mut result = ValidationResult::new();
/// result.add_warning("only a warning");
/// assert_valid!(result);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {{
        let result = &$result;
        if !$crate::ValidationResult::is_valid(result) {
            panic!(
                "Expected valid result, got errors: {:?}",
                $crate::ValidationResult::errors(result)
            );
        }
    }};
}

/// Assert that a validation result has at least one error.
///
/// # Example
///
/// ```rust
/// use verifast::{assert_invalid, ValidationResult};
///
/// let mut result = ValidationResult::new();
/// result.add_error("broken");
/// assert_invalid!(result);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {{
        let result = &$result;
        if $crate::ValidationResult::is_valid(result) {
            panic!(
                "Expected invalid result, got warnings only: {:?}",
                $crate::ValidationResult::warnings(result)
            );
        }
    }};
}

/// Assert that a validation result holds exactly these errors, in order.
///
/// # Example
///
/// ```rust
/// use verifast::{assert_errors, ValidationResult};
///
/// let mut result = ValidationResult::new();
/// result.add_error("a");
/// result.add_error("b");
/// assert_errors!(result, ["a", "b"]);
/// ```
#[macro_export]
macro_rules! assert_errors {
    ($result:expr, $expected:expr) => {{
        let result = &$result;
        let expected = $expected;
        assert_eq!(
            $crate::ValidationResult::errors(result),
            &expected[..],
            "errors differ"
        );
    }};
}

/// Assert that a validation result holds exactly these warnings, in order.
///
/// # Example
///
/// ```rust
/// use verifast::{assert_warnings, ValidationResult};
///
/// let mut result = ValidationResult::new();
/// result.add_warning("w");
/// assert_warnings!(result, ["w"]);
/// ```
#[macro_export]
macro_rules! assert_warnings {
    ($result:expr, $expected:expr) => {{
        let result = &$result;
        let expected = $expected;
        assert_eq!(
            $crate::ValidationResult::warnings(result),
            &expected[..],
            "warnings differ"
        );
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<M> Arbitrary for crate::ValidationResult<M>
where
    M: Arbitrary + 'static,
{
    type Parameters = (M::Parameters, M::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (error_params, warning_params) = args;
        (
            proptest::collection::vec(any_with::<M>(error_params), 0..8),
            proptest::collection::vec(any_with::<M>(warning_params), 0..8),
        )
            .prop_map(|(errors, warnings)| {
                let mut result = crate::ValidationResult::new();
                for e in errors {
                    result.add_error(e);
                }
                for w in warnings {
                    result.add_warning(w);
                }
                result
            })
            .boxed()
    }
}
