//! HTTP handlers for the words API.

pub mod words;
pub use words::*;
