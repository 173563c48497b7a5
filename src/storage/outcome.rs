use crate::error::{Error, Result};

/// Outcome of one gateway operation.
///
/// Errors never escape a gateway call; they end up in `Failure` after being
/// logged.
#[must_use]
#[derive(Debug)]
pub enum TransferResult<T> {
    Success(T),
    Failure(Error),
}

impl<T> TransferResult<T> {
    /// Convert an operation result, logging the failure cause.
    pub(crate) fn settle(operation: &str, result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(e) => {
                log::error!("{operation} failed: {e}");
                Self::Failure(e)
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The success payload, discarding any failure.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(e) => Some(e),
        }
    }

    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(e) => Err(e),
        }
    }
}
