//! Primitive predicate helpers for rule authors
//!
//! Small, allocation-free membership checks meant to be called inline inside
//! a [`Validator`](crate::Validator) body. Each helper has a free-function
//! form and a method form.
//!
//! # Example
//!
//! ```rust
//! use verifast::predicate::*;
//! use verifast::{validate, ValidationResult, Validator};
//!
//! struct Signup {
//!     name: Option<String>,
//!     age: u32,
//! }
//!
//! struct SignupRules;
//!
//! impl Validator<Signup> for SignupRules {
//!     fn validate(&self, instance: &Signup, result: &mut ValidationResult) {
//!         if !instance.name.is_length_between(1, 100) {
//!             result.add_error("Name must be 1-100 characters".to_string());
//!         }
//!         if !instance.age.is_in_range(18, 120) {
//!             result.add_error("Age must be between 18 and 120".to_string());
//!         }
//!     }
//! }
//!
//! let result = validate(&SignupRules, &Signup { name: None, age: 30 });
//! assert_eq!(result.error_count(), 1);
//! ```

mod number;
mod string;

pub use number::{is_in_range, is_in_range_exclusive, RangeExt};
pub use string::{is_length_between, LengthExt};
