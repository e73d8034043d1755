#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Variant;
use crate::error::InvalidState;

/// The outcome of an operation: a success value of type `S` or a typed
/// error of type `E`, never both and never neither.
///
/// Prefer [`match_with`](Self::match_with), [`fold`](Self::fold) or
/// [`unwrap_or`](Self::unwrap_or) over the panicking extractors.
///
/// ```
/// use outcome::Outcome;
///
/// fn parse_port(raw: &str) -> Outcome<u16, String> {
///     match raw.parse() {
///         Ok(port) => Outcome::success(port),
///         Err(_) => Outcome::failure(format!("not a port: {raw}")),
///     }
/// }
///
/// assert_eq!(parse_port("8080").unwrap(), 8080);
/// assert_eq!(parse_port("http").unwrap_or(80), 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Outcome<S, E> {
    Success(S),
    Failure(E),
}

impl<S, E> Outcome<S, E> {
    pub fn success(value: S) -> Self {
        Self::Success(value)
    }

    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    pub fn variant(&self) -> Variant {
        match self {
            Self::Success(_) => Variant::Success,
            Self::Failure(_) => Variant::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn as_ref(&self) -> Outcome<&S, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// The success payload, or `None` for a failure. The error is dropped.
    pub fn success_value(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The error payload, or `None` for a success. The value is dropped.
    pub fn failure_value(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with the message `Result is err` if this is a failure. The
    /// error payload is not included in the message.
    #[track_caller]
    pub fn unwrap(self) -> S {
        match self.try_unwrap() {
            Ok(payload) => payload,
            Err(err) => err.raise(),
        }
    }

    /// Returns the success payload, or `default` for a failure.
    pub fn unwrap_or(self, default: S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success payload, or builds one from the error.
    pub fn unwrap_or_else<F>(self, f: F) -> S
    where
        F: FnOnce(E) -> S,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    /// Returns the error payload.
    ///
    /// # Panics
    ///
    /// Panics with the message `Result is ok` if this is a success.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(payload) => payload,
            Err(err) => err.raise(),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with exactly `message` if this is a failure.
    #[track_caller]
    pub fn expect(self, message: &str) -> S {
        match self.try_expect(message) {
            Ok(payload) => payload,
            Err(err) => err.raise(),
        }
    }

    pub fn try_unwrap(self) -> Result<S, InvalidState> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(InvalidState::unwrap_on_failure()),
        }
    }

    pub fn try_unwrap_err(self) -> Result<E, InvalidState> {
        match self {
            Self::Success(_) => Err(InvalidState::unwrap_err_on_success()),
            Self::Failure(error) => Ok(error),
        }
    }

    pub fn try_expect(self, message: &str) -> Result<S, InvalidState> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(InvalidState::new(message)),
        }
    }

    /// Consumes the outcome, calling exactly one of the handlers with the
    /// payload it holds.
    pub fn match_with<F, G>(self, on_success: F, on_failure: G)
    where
        F: FnOnce(S),
        G: FnOnce(E),
    {
        self.fold(on_success, on_failure);
    }

    /// Like [`match_with`](Self::match_with), but both handlers produce a
    /// value of the same type.
    pub fn fold<R, F, G>(self, on_success: F, on_failure: G) -> R
    where
        F: FnOnce(S) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }
}
