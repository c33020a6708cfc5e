//! Algorithm selection.

use fibnum_core::{MAX_BIGNUM_INDEX, MAX_NATIVE_INDEX};

/// Which Fibonacci variant the engine runs.
///
/// The discriminants form the wire convention for callers that select a
/// variant with a single byte; see [`Mode::from_byte`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Fast doubling over the 256-bit type.
    BignumFast = 0,
    /// Additive recurrence over the 256-bit type.
    BignumNaive = 1,
    /// Fast doubling over `i64`.
    NativeFast = 2,
    /// Additive recurrence over `i64`.
    NativeNaive = 3,
}

impl Mode {
    /// All modes, in byte order.
    pub const ALL: [Mode; 4] = [
        Mode::BignumFast,
        Mode::BignumNaive,
        Mode::NativeFast,
        Mode::NativeNaive,
    ];

    /// Decode a mode-select byte. Out-of-range bytes are rejected rather
    /// than silently mapped to a default.
    #[must_use]
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.get(usize::from(byte)).copied()
    }

    /// The mode-select byte for this mode.
    #[must_use]
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Largest index this mode's result type can represent exactly.
    #[must_use]
    pub fn max_index(self) -> u64 {
        match self {
            Mode::BignumFast | Mode::BignumNaive => MAX_BIGNUM_INDEX,
            Mode::NativeFast | Mode::NativeNaive => MAX_NATIVE_INDEX,
        }
    }

    /// True for the 256-bit variants.
    #[must_use]
    pub fn is_bignum(self) -> bool {
        matches!(self, Mode::BignumFast | Mode::BignumNaive)
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Mode::BignumFast => "bignum/fast-doubling",
            Mode::BignumNaive => "bignum/naive",
            Mode::NativeFast => "native/fast-doubling",
            Mode::NativeNaive => "native/naive",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
