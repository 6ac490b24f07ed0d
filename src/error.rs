use derive_getters::Getters;
use derive_more::{Display, Error};

/// The single error raised by every failed assertion.
///
/// `message` is always set; `actual`/`expected` are attached when the failed
/// predicate has a meaningful pair to diff (a kind mismatch, a substring
/// search), and left empty for plain accessibility failures. Test frameworks
/// catching this are expected to print `message` and, when present, render
/// `actual` against `expected`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, Getters)]
#[display(fmt = "{}", message)]
pub struct InspectError {
    message: String,
    actual: Option<String>,
    expected: Option<String>,
}

impl InspectError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            actual: None,
            expected: None,
        }
    }

    pub(crate) fn with_actual(message: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            actual: Some(actual.into()),
            expected: None,
        }
    }

    pub(crate) fn with_diff(
        message: impl Into<String>,
        actual: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            actual: Some(actual.into()),
            expected: Some(expected.into()),
        }
    }
}
