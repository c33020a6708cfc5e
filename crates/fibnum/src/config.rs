//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

use fibnum_core::DECIMAL_CAPACITY;
use fibnum_engine::Mode;

/// fibnum — fixed-width Fibonacci calculator.
#[derive(Parser, Debug)]
#[command(name = "fibnum", version, about)]
pub struct AppConfig {
    /// Fibonacci index to compute.
    #[arg(env = "FIBNUM_K")]
    pub k: Option<u64>,

    /// Algorithm variant to run.
    #[arg(short, long, value_enum, default_value_t = Algo::Fast)]
    pub algo: Algo,

    /// Output the raw little-endian result bytes as hex instead of decimal.
    #[arg(long)]
    pub raw: bool,

    /// Show the measured computation time.
    #[arg(short, long)]
    pub time: bool,

    /// Decimal output buffer capacity in bytes.
    #[arg(long, default_value_t = DECIMAL_CAPACITY)]
    pub capacity: usize,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Algorithm variant flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algo {
    /// Fast doubling over the 256-bit type (indices up to 368).
    Fast,
    /// Naive recurrence over the 256-bit type (indices up to 368).
    Naive,
    /// Fast doubling over i64 (indices up to 92).
    Fast64,
    /// Naive recurrence over i64 (indices up to 92).
    Naive64,
}

impl Algo {
    /// The engine mode this flag selects.
    #[must_use]
    pub fn mode(self) -> Mode {
        match self {
            Algo::Fast => Mode::BignumFast,
            Algo::Naive => Mode::BignumNaive,
            Algo::Fast64 => Mode::NativeFast,
            Algo::Naive64 => Mode::NativeNaive,
        }
    }
}
