//! The dispatch engine: bounds checking, mode dispatch, timing.
//!
//! The engine owns what used to be ambient state in this kind of
//! dispatcher — the selected mode and the last measured duration — as
//! explicit instance state behind a config object. A single mutex
//! serializes access to the computation slot; the arithmetic underneath
//! is pure and needs no locking of its own.

use std::time::{Duration, Instant};

use parking_lot::Mutex;

use fibnum_core::{fastdoubling, naive, native};

use crate::mode::Mode;
use crate::output::Output;

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EngineConfig {
    /// Which variant `compute` runs.
    pub mode: Mode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: Mode::BignumFast,
        }
    }
}

/// Errors produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The requested index exceeds what the selected variant's result
    /// type can represent.
    #[error("index {k} exceeds limit {max} for mode {mode}")]
    IndexOutOfRange {
        /// Requested index.
        k: u64,
        /// The mode's bound.
        max: u64,
        /// The selected mode.
        mode: Mode,
    },

    /// Another computation currently holds the engine's slot.
    #[error("engine is busy")]
    Busy,
}

/// One finished computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Computation {
    /// The computed value.
    pub output: Output,
    /// Wall-clock time of the core call, monotonic.
    pub elapsed: Duration,
}

/// The Fibonacci dispatch engine.
///
/// # Example
/// ```
/// use fibnum_engine::{Engine, EngineConfig, Mode, Output};
///
/// let engine = Engine::new(EngineConfig { mode: Mode::NativeFast });
/// let comp = engine.compute(10).unwrap();
/// assert_eq!(comp.output, Output::Native(55));
/// ```
pub struct Engine {
    config: EngineConfig,
    slot: Mutex<SlotState>,
}

#[derive(Default)]
struct SlotState {
    last_duration: Option<Duration>,
}

impl Engine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            slot: Mutex::new(SlotState::default()),
        }
    }

    /// The configured mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// Compute F(k) with the configured variant.
    ///
    /// Rejects `k` above the mode's bound before touching the core, and
    /// refuses to start while another computation holds the slot. The
    /// core call is bracketed by a monotonic clock; the elapsed time is
    /// returned and retained for [`last_duration`](Self::last_duration).
    pub fn compute(&self, k: u64) -> Result<Computation, EngineError> {
        let mode = self.config.mode;
        let max = mode.max_index();
        if k > max {
            return Err(EngineError::IndexOutOfRange { k, max, mode });
        }

        let mut slot = self.slot.try_lock().ok_or(EngineError::Busy)?;

        tracing::debug!(k, %mode, "computing");
        let start = Instant::now();
        let output = match mode {
            Mode::BignumFast => Output::Bignum(fastdoubling::fibonacci(k)),
            Mode::BignumNaive => Output::Bignum(naive::fibonacci(k)),
            Mode::NativeFast => Output::Native(native::fast_doubling64(k)),
            Mode::NativeNaive => Output::Native(native::naive64(k)),
        };
        let elapsed = start.elapsed();
        tracing::debug!(k, ?elapsed, "done");

        slot.last_duration = Some(elapsed);
        Ok(Computation { output, elapsed })
    }

    /// The duration of the most recent computation, if any. This is the
    /// timing side channel; it reads the slot without blocking and
    /// returns `None` while a computation is in flight.
    #[must_use]
    pub fn last_duration(&self) -> Option<Duration> {
        self.slot.try_lock().and_then(|slot| slot.last_duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibnum_core::FixedBigInt;

    fn engine(mode: Mode) -> Engine {
        Engine::new(EngineConfig { mode })
    }

    #[test]
    fn computes_each_mode() {
        let expected_big = Output::Bignum(FixedBigInt::from_int(6765));
        assert_eq!(engine(Mode::BignumFast).compute(20).unwrap().output, expected_big);
        assert_eq!(engine(Mode::BignumNaive).compute(20).unwrap().output, expected_big);
        assert_eq!(
            engine(Mode::NativeFast).compute(20).unwrap().output,
            Output::Native(6765)
        );
        assert_eq!(
            engine(Mode::NativeNaive).compute(20).unwrap().output,
            Output::Native(6765)
        );
    }

    #[test]
    fn rejects_out_of_range_indices() {
        let err = engine(Mode::BignumFast).compute(369).unwrap_err();
        assert_eq!(
            err,
            EngineError::IndexOutOfRange {
                k: 369,
                max: 368,
                mode: Mode::BignumFast
            }
        );
        let err = engine(Mode::NativeFast).compute(93).unwrap_err();
        assert!(matches!(err, EngineError::IndexOutOfRange { max: 92, .. }));
    }

    #[test]
    fn accepts_boundary_indices() {
        assert!(engine(Mode::BignumFast).compute(368).is_ok());
        assert_eq!(
            engine(Mode::NativeNaive).compute(92).unwrap().output,
            Output::Native(7_540_113_804_746_346_429)
        );
    }

    #[test]
    fn records_last_duration() {
        let engine = engine(Mode::BignumFast);
        assert_eq!(engine.last_duration(), None);
        engine.compute(100).unwrap();
        assert!(engine.last_duration().is_some());
    }

    #[test]
    fn held_slot_reports_busy() {
        let engine = engine(Mode::BignumFast);
        {
            let _guard = engine.slot.lock();
            assert_eq!(engine.compute(10), Err(EngineError::Busy));
            // the side channel also refuses to block on a held slot
            assert_eq!(engine.last_duration(), None);
        }
        let comp = engine.compute(10).unwrap();
        assert_eq!(comp.output, Output::Bignum(FixedBigInt::from_int(55)));
        assert_eq!(engine.last_duration(), Some(comp.elapsed));
    }

    #[test]
    fn sequential_computations_share_the_slot() {
        let engine = engine(Mode::BignumNaive);
        let first = engine.compute(10).unwrap();
        let second = engine.compute(10).unwrap();
        assert_eq!(first.output, second.output);
    }

    #[test]
    fn error_display() {
        let err = EngineError::IndexOutOfRange {
            k: 400,
            max: 368,
            mode: Mode::BignumFast,
        };
        assert_eq!(
            err.to_string(),
            "index 400 exceeds limit 368 for mode bignum/fast-doubling"
        );
        assert_eq!(EngineError::Busy.to_string(), "engine is busy");
    }
}
