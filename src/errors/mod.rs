//! Error types and error handling for the parser.
//!
//! This module defines the error types raised while parsing a Fusion
//! document. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for scanner and grammar failures
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
