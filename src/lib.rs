//! # Verifast
//!
//! Allocation-lean validation for request hot paths.
//!
//! Rule logic is plain Rust code behind one of two contracts:
//! - [`Validator`] - synchronous; borrows the subject and appends findings
//!   to a caller-owned [`ValidationResult`]
//! - [`AsyncValidator`] - suspending; may await lookups, observes a
//!   [`CancellationToken`](tokio_util::sync::CancellationToken), and returns
//!   a freshly built [`ValidationResult`] or an [`Aborted`] failure
//!
//! The [`dispatch`] functions create the accumulator, call the validator and
//! hand the findings back unchanged. A result with no findings never
//! allocates.
//!
//! ## Quick Example
//!
//! ```rust
//! use verifast::predicate::{LengthExt, RangeExt};
//! use verifast::{try_validate, ValidationResult, Validator};
//!
//! struct Signup {
//!     name: String,
//!     age: u32,
//!     phone: Option<String>,
//! }
//!
//! struct SignupValidator;
//!
//! impl Validator<Signup> for SignupValidator {
//!     fn validate(&self, instance: &Signup, result: &mut ValidationResult) {
//!         if !instance.name.trim().is_length_between(1, 100) {
//!             result.add_error("'Name' must be non-empty".to_string());
//!         }
//!         if !instance.age.is_in_range(18, 120) {
//!             result.add_error("'Age' must be between 18 and 120".to_string());
//!         }
//!         if instance.phone.as_deref().is_some_and(|p| p.len() < 10) {
//!             result.add_warning("'Phone' format looks invalid".to_string());
//!         }
//!     }
//! }
//!
//! let signup = Signup {
//!     name: "Alice".to_string(),
//!     age: 30,
//!     phone: Some("123-456".to_string()),
//! };
//!
//! let (ok, result) = try_validate(&SignupValidator, &signup);
//! assert!(ok);
//! assert_eq!(result.warnings(), ["'Phone' format looks invalid".to_string()]);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod async_validator;
pub mod dispatch;
pub mod error;
pub mod lookup;
pub mod predicate;
pub mod result;
pub mod testing;
pub mod validator;

// Re-exports
pub use async_validator::{ensure_active, AsyncValidator};
pub use dispatch::{
    try_validate, try_validate_async, validate, validate_async, validate_many,
    validate_many_async, AsyncValidatorExt, ValidatorExt,
};
pub use error::Aborted;
pub use lookup::EmailLookup;
pub use result::ValidationResult;
pub use validator::{from_fn, FnValidator, Validator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::async_validator::{ensure_active, AsyncValidator};
    pub use crate::dispatch::{
        try_validate, try_validate_async, validate, validate_async, AsyncValidatorExt,
        ValidatorExt,
    };
    pub use crate::error::Aborted;
    pub use crate::lookup::EmailLookup;
    pub use crate::predicate::{
        is_in_range, is_in_range_exclusive, is_length_between, LengthExt, RangeExt,
    };
    pub use crate::result::ValidationResult;
    pub use crate::validator::{from_fn, Validator};
}
