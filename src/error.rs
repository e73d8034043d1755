use thiserror::Error;

/// Message carried by [`InvalidState`] when the success payload is requested
/// from a failure.
pub const UNWRAP_ON_FAILURE: &str = "Result is err";

/// Message carried by [`InvalidState`] when the error payload is requested
/// from a success.
pub const UNWRAP_ERR_ON_SUCCESS: &str = "Result is ok";

/// An extraction was attempted that does not match the variant held.
///
/// This is a programmer error, not a domain failure. The panicking
/// extractors on [`Outcome`](crate::Outcome) abort with exactly this
/// message; the `try_*` extractors hand it back as a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct InvalidState {
    message: String,
}

impl InvalidState {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub(crate) fn unwrap_on_failure() -> Self {
        Self::new(UNWRAP_ON_FAILURE)
    }

    pub(crate) fn unwrap_err_on_success() -> Self {
        Self::new(UNWRAP_ERR_ON_SUCCESS)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Abort the current operation with this error's message as the panic
    /// payload.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{}", self.message)
    }
}
