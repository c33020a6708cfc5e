//! Error handling and exit codes.

use fibnum_core::{exit_codes, BignumError};
use fibnum_engine::EngineError;

/// Errors raised by the application layer itself.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No Fibonacci index was given.
    #[error("no index given; pass K as an argument or set FIBNUM_K")]
    MissingIndex,
}

/// Map an error chain to a process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(engine_err) = err.downcast_ref::<EngineError>() {
        return match engine_err {
            EngineError::IndexOutOfRange { .. } => exit_codes::ERROR_RANGE,
            EngineError::Busy => exit_codes::ERROR_GENERIC,
        };
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return exit_codes::ERROR_CONFIG;
    }
    if err.downcast_ref::<BignumError>().is_some() {
        return exit_codes::ERROR_GENERIC;
    }
    exit_codes::ERROR_GENERIC
}
