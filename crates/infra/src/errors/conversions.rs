//! Conversions from external infrastructure errors into domain errors.

use calamine::Error as WorkbookError;
use reqwest::Error as HttpError;
use saleslens_domain::SalesLensError;
use serde_json::Error as JsonError;
use thiserror::Error;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct InfraError(pub SalesLensError);

impl From<InfraError> for SalesLensError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SalesLensError> for InfraError {
    fn from(value: SalesLensError) -> Self {
        InfraError(value)
    }
}

trait IntoSalesLensError {
    fn into_saleslens(self) -> SalesLensError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SalesLensError */
/* -------------------------------------------------------------------------- */

impl IntoSalesLensError for HttpError {
    fn into_saleslens(self) -> SalesLensError {
        if self.is_timeout() {
            return SalesLensError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return SalesLensError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => SalesLensError::Auth(message),
                404 => SalesLensError::NotFound(message),
                400..=499 if code != 429 => SalesLensError::InvalidInput(message),
                _ => SalesLensError::Network(message),
            };
        }

        if self.is_decode() {
            return SalesLensError::InvalidInput(format!("malformed HTTP response body: {self}"));
        }

        SalesLensError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_saleslens())
    }
}

/* -------------------------------------------------------------------------- */
/* calamine::Error → SalesLensError */
/* -------------------------------------------------------------------------- */

impl IntoSalesLensError for WorkbookError {
    fn into_saleslens(self) -> SalesLensError {
        match self {
            WorkbookError::Io(err) => {
                SalesLensError::SourceUnavailable(format!("workbook could not be read: {err}"))
            }
            other => SalesLensError::InvalidInput(format!("workbook could not be decoded: {other}")),
        }
    }
}

impl From<WorkbookError> for InfraError {
    fn from(value: WorkbookError) -> Self {
        InfraError(value.into_saleslens())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → SalesLensError */
/* -------------------------------------------------------------------------- */

impl IntoSalesLensError for JsonError {
    fn into_saleslens(self) -> SalesLensError {
        SalesLensError::InvalidInput(format!("invalid JSON payload: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_saleslens())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
