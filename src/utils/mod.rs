//! Shared helpers: input limits and numeric conversions.

pub mod validation;
