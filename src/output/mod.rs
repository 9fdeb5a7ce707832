//! Output formatting for function results.
//!
//! - [`terminal`] - JSON rendering with colours, errors and usage text

mod terminal;

pub use terminal::{format_error, format_usage, format_value};
