//! Syntactic SQL checks

mod validator;

pub use validator::{statement_count, validate_syntax};
