//! Result presentation.

use std::fmt::Write as _;
use std::time::Duration;

use fibnum_engine::{Computation, Mode};

/// Prints computation results in human or quiet form.
pub struct Presenter {
    quiet: bool,
    show_time: bool,
}

impl Presenter {
    #[must_use]
    pub fn new(quiet: bool, show_time: bool) -> Self {
        Self { quiet, show_time }
    }

    /// Print one result. `text` is the already-rendered value (decimal
    /// or hex, depending on the output flags).
    pub fn present(&self, mode: Mode, k: u64, computation: &Computation, text: &str) {
        if self.quiet {
            println!("{text}");
            return;
        }

        println!("Algorithm: {mode}");
        println!("F({k}) = {text}");
        if self.show_time {
            println!("Duration: {}", format_duration(computation.elapsed));
        }
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Lowercase hex of a raw byte block.
#[must_use]
pub fn hex_string(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(s, "{byte:02x}");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_micro() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        assert!(format_duration(Duration::from_millis(42)).contains("ms"));
    }

    #[test]
    fn format_duration_seconds() {
        assert_eq!(format_duration(Duration::from_secs_f64(3.14)), "3.140s");
    }

    #[test]
    fn hex_of_le_bytes() {
        assert_eq!(hex_string(&[0x37, 0x00, 0xff]), "3700ff");
        assert_eq!(hex_string(&[]), "");
    }

    #[test]
    fn presenter_does_not_panic() {
        let computation = Computation {
            output: fibnum_engine::Output::Native(55),
            elapsed: Duration::from_millis(1),
        };
        Presenter::new(false, true).present(Mode::NativeFast, 10, &computation, "55");
        Presenter::new(true, false).present(Mode::NativeFast, 10, &computation, "55");
    }
}
