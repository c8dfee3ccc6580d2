/// State stored in one grid cell.
pub trait CellState: Copy + Default + PartialEq + Send + Sync {
    /// Liveness predicate used by neighbor counting.
    fn is_alive(&self) -> bool;
}

/// Binary Life cell: alive iff non-zero.
impl CellState for u32 {
    #[inline]
    fn is_alive(&self) -> bool {
        *self > 0
    }
}

/// Threshold at which either channel of a [`FloatPair`] counts as alive.
pub const ALIVE_THRESHOLD: f32 = 0.5;

/// Two-channel intensity cell. Committed values always lie in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatPair {
    pub blue: f32,
    pub yellow: f32,
}

impl FloatPair {
    pub const ZERO: FloatPair = FloatPair { blue: 0.0, yellow: 0.0 };

    #[inline]
    pub const fn new(blue: f32, yellow: f32) -> Self {
        Self { blue, yellow }
    }

    /// Both channels clamped into [0, 1].
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            blue: self.blue.clamp(0.0, 1.0),
            yellow: self.yellow.clamp(0.0, 1.0),
        }
    }

    /// Bit patterns of both channels, for exact comparisons.
    #[inline]
    pub fn to_bits(self) -> (u32, u32) {
        (self.blue.to_bits(), self.yellow.to_bits())
    }
}

impl CellState for FloatPair {
    #[inline]
    fn is_alive(&self) -> bool {
        self.blue >= ALIVE_THRESHOLD || self.yellow >= ALIVE_THRESHOLD
    }
}
