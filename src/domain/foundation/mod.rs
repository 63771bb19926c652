//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! checkout domain.

mod errors;
mod money;
mod percentage;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use money::Money;
pub use percentage::Percentage;
