//! Request, response and error bodies of the HTTP API

pub mod error;
pub mod json;
pub mod translate;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use translate::{TranslateForm, TranslateRequest, TranslateResponse};
