//! Shared helpers used across controllers and services.

pub mod parse;
