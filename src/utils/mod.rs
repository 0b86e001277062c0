//! Utility functions for code generation, URL processing, and request handling.
//!
//! - [`code_generator`] - Short code generation and format checks
//! - [`url_validator`] - Validation of submitted URLs
//! - [`request_origin`] - Scheme and host of the incoming request
//! - [`db_error`] - Unique-violation classification

pub mod code_generator;
pub mod db_error;
pub mod request_origin;
pub mod url_validator;
