/// Inclusive `u8` range that wraps around when stepped past either end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrappingRange {
    pub min: u8,
    pub max: u8,
}

/// Percentage channels (saturation, value)
pub const PERCENT: WrappingRange = WrappingRange::new(0, 100);

/// 8-bit color channels (red, green, blue)
pub const COLOR_CHANNEL: WrappingRange = WrappingRange::new(0, 255);

/// Display contrast levels
pub const CONTRAST: WrappingRange = WrappingRange::new(0, 63);

/// Tolerance used when deciding that a unit value reached the upper bound
const UNIT_EPSILON: f64 = 1e-9;

impl WrappingRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Next value, wrapping from `max` to `min`
    pub const fn increment(self, value: u8) -> u8 {
        if value >= self.max { self.min } else { value + 1 }
    }

    /// Previous value, wrapping from `min` to `max`
    pub const fn decrement(self, value: u8) -> u8 {
        if value <= self.min { self.max } else { value - 1 }
    }

    pub const fn contains(self, value: i64) -> bool {
        value >= self.min as i64 && value <= self.max as i64
    }

    /// Clamp an arbitrary integer into the range
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn clamp(self, value: i64) -> u8 {
        if value < self.min as i64 {
            self.min
        } else if value > self.max as i64 {
            self.max
        } else {
            value as u8
        }
    }
}

/// Index of the next item on a cycle of `len` items
///
/// A cycle of 0 or 1 items always yields 0.
pub const fn next_index(index: usize, len: usize) -> usize {
    if index + 1 >= len { 0 } else { index + 1 }
}

/// Index of the previous item on a cycle of `len` items
pub const fn previous_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index == 0 || index >= len {
        len - 1
    } else {
        index - 1
    }
}

/// Wrap a value onto the half-open unit interval `[0, 1)`
pub fn wrap_unit(value: f64) -> f64 {
    let wrapped = value - libm::floor(value);
    if wrapped >= 1.0 - UNIT_EPSILON || wrapped < 0.0 {
        0.0
    } else {
        wrapped
    }
}
