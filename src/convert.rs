//! Bridges between [`Outcome`] and the standard and `anyhow` result types.

use crate::models::Outcome;

impl<S, E> From<Result<S, E>> for Outcome<S, E> {
    fn from(result: Result<S, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<S, E> From<Outcome<S, E>> for Result<S, E> {
    fn from(outcome: Outcome<S, E>) -> Self {
        outcome.into_result()
    }
}

impl<S, E> Outcome<S, E> {
    /// Hand the outcome to code that propagates with `?`.
    pub fn into_result(self) -> Result<S, E> {
        self.fold(Ok, Err)
    }
}

#[cfg(feature = "anyhow")]
impl<S, E> Outcome<S, E>
where
    E: Into<anyhow::Error>,
{
    pub fn into_anyhow(self) -> anyhow::Result<S> {
        self.into_result().map_err(Into::into)
    }

    /// Like `anyhow::Context::context`: the failure is wrapped with `context`
    /// as its outermost message.
    pub fn context<C>(self, context: C) -> anyhow::Result<S>
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        self.into_anyhow().map_err(|err| err.context(context))
    }

    pub fn with_context<C, F>(self, f: F) -> anyhow::Result<S>
    where
        C: std::fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.into_anyhow().map_err(|err| err.context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::ok(Ok(7))]
    #[case::err(Err("nope"))]
    fn std_result_round_trips(#[case] result: Result<i32, &'static str>) {
        let outcome = Outcome::from(result);
        assert_eq!(outcome.is_success(), result.is_ok());
        assert_eq!(Result::from(outcome), result);
    }

    #[cfg(feature = "anyhow")]
    mod anyhow_interop {
        use super::*;
        use crate::error::InvalidState;

        #[rstest]
        fn success_passes_through() {
            let outcome: Outcome<i32, InvalidState> = Outcome::success(3);
            assert_eq!(outcome.context("loading").unwrap(), 3);
        }

        // Context goes on top; the original error stays in the chain.
        #[rstest]
        fn context_wraps_failure() {
            let outcome: Outcome<i32, InvalidState> =
                Outcome::failure(InvalidState::new("disk full"));
            let err = outcome.context("saving report").unwrap_err();
            assert_eq!(err.to_string(), "saving report");
            assert_eq!(err.root_cause().to_string(), "disk full");
        }

        #[rstest]
        fn with_context_is_lazy_on_success() {
            let outcome: Outcome<i32, InvalidState> = Outcome::success(1);
            let value = outcome
                .with_context(|| -> String { panic!("context built for a success") })
                .unwrap();
            assert_eq!(value, 1);
        }
    }
}
