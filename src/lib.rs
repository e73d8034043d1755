//! A two-variant container for the result of an operation that either
//! succeeds with a value or fails with a typed error.
//!
//! [`Outcome`] is consumed safely through [`Outcome::match_with`],
//! [`Outcome::fold`] or [`Outcome::unwrap_or`]. The `unwrap` family panics
//! with an [`InvalidState`] message when asked for the side that is not
//! held; each has a `try_` twin that returns the error instead.
//!
//! ```
//! use outcome::Outcome;
//!
//! let found: Outcome<u32, &str> = Outcome::success(42);
//! let mut seen = None;
//! found.match_with(|value| seen = Some(value), |_| unreachable!());
//! assert_eq!(seen, Some(42));
//!
//! let missing: Outcome<u32, &str> = Outcome::failure("bad");
//! assert_eq!(missing.try_unwrap().unwrap_err().message(), "Result is err");
//! ```
#![allow(clippy::must_use_candidate)]

pub mod convert;
pub mod error;
pub mod models;

pub use error::{InvalidState, UNWRAP_ERR_ON_SUCCESS, UNWRAP_ON_FAILURE};
pub use models::{Outcome, Variant};
