//! Bounded shaft position value type.

/// Shaft position with inclusive `[min, max]` bounds.
///
/// Clamping is **explicit**: the setters are raw overwrites with no
/// validation, and only [`advance`](Self::advance) and
/// [`clamp`](Self::clamp) pull the value back into range. The decoder
/// clamps on every rotation scan, so the bounds invariant holds after each
/// poll even if a caller wrote an out-of-range value in between.
///
/// Callers are responsible for keeping `min <= max`; inverted bounds are a
/// precondition violation. The clamp never panics on them — the min bound
/// wins — but the resulting value is not meaningful.
///
/// # Examples
///
/// ```
/// use rotary_decoder::ShaftPosition;
///
/// // Starts at the midpoint of the bounds.
/// let mut pos = ShaftPosition::new(0, 10);
/// assert_eq!(pos.get(), 5);
///
/// // A large negative step clamps to the min bound.
/// pos.advance(-18);
/// assert_eq!(pos.get(), 0);
///
/// // Raw setters do not clamp; an explicit clamp() restores the invariant.
/// pos.set(99);
/// assert_eq!(pos.get(), 99);
/// pos.clamp();
/// assert_eq!(pos.get(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShaftPosition {
    value: i32,
    min: i32,
    max: i32,
}

impl ShaftPosition {
    /// Create a position bounded by `[min, max]`, starting at the midpoint
    /// `min + (max - min) / 2`.
    pub fn new(min: i32, max: i32) -> Self {
        Self {
            value: min + (max - min) / 2,
            min,
            max,
        }
    }

    /// Current position value.
    pub fn get(&self) -> i32 {
        self.value
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Overwrite the position. No clamping is performed.
    pub fn set(&mut self, value: i32) {
        self.value = value;
    }

    /// Overwrite the lower bound. Neither the value nor the upper bound is
    /// validated against it.
    pub fn set_min(&mut self, min: i32) {
        self.min = min;
    }

    /// Overwrite the upper bound. Neither the value nor the lower bound is
    /// validated against it.
    pub fn set_max(&mut self, max: i32) {
        self.max = max;
    }

    /// Add `delta` to the value, then clamp into `[min, max]`.
    pub fn advance(&mut self, delta: i32) {
        self.value = self.value.saturating_add(delta);
        self.clamp();
    }

    /// Pull the value back into `[min, max]`.
    ///
    /// Two-branch form rather than `i32::clamp`, which panics on inverted
    /// bounds; here the min check runs first and wins.
    pub fn clamp(&mut self) {
        if self.value < self.min {
            self.value = self.min;
        } else if self.value > self.max {
            self.value = self.max;
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
