// Lifts operation errors into gateway wrapper variants
use crate::error::Error;

/// Implemented by every error an operation step can return, so `wrap_err!`
/// can box it as the source of an operation variant.
pub trait IntoGatewayError {
    fn into_error(self) -> Error;
}

impl IntoGatewayError for Error {
    fn into_error(self) -> Error {
        self
    }
}

impl IntoGatewayError for opendal::Error {
    fn into_error(self) -> Error {
        self.into()
    }
}

impl IntoGatewayError for std::io::Error {
    fn into_error(self) -> Error {
        self.into()
    }
}

impl IntoGatewayError for csv::Error {
    fn into_error(self) -> Error {
        self.into()
    }
}

/// Map the error of a `Result` into an operation variant, boxing the
/// original error as its source:
///
/// wrap_err!(self.try_list(prefix).await, ListFailed { path: prefix.to_string() })
#[macro_export]
macro_rules! wrap_err {
    ($expr:expr, $variant:ident { $($field:ident : $value:expr),* $(,)? }) => {{
        $expr.map_err(|e| {
            let src: $crate::error::Error = $crate::storage::utils::error::IntoGatewayError::into_error(e);
            $crate::error::Error::$variant { $($field: $value),*, source: Box::new(src) }
        })
    }};
}
