//! # fibnum-engine
//!
//! The dispatch layer over `fibnum-core`: selects one of the four
//! Fibonacci variants, bounds the requested index to what the variant's
//! result type can represent, serializes access to the computation
//! slot, and measures each core call with a monotonic clock.

pub mod engine;
pub mod mode;
pub mod output;

// Re-exports
pub use engine::{Computation, Engine, EngineConfig, EngineError};
pub use mode::Mode;
pub use output::Output;
