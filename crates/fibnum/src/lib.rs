//! Library target backing the `fibnum` binary: configuration, dispatch,
//! presentation, and exit-code mapping.

pub mod app;
pub mod config;
pub mod errors;
pub mod presenter;
