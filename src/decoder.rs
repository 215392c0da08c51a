//! Polling decoder state machine.
//!
//! [`RotaryDecoder`] turns raw line levels into a clamped position and
//! discrete click events. It holds no interrupt state and never blocks:
//! the host loop calls [`scan_rotate`](RotaryDecoder::scan_rotate) and
//! [`scan_click`](RotaryDecoder::scan_click) at a cadence fast enough to
//! observe individual detent transitions (low single-digit milliseconds
//! for a hand-turned encoder).

use embedded_hal::digital::{self, InputPin};

use crate::clock::MillisClock;
use crate::error::DecoderError;
use crate::line::{NoButton, PullUpLine};
use crate::position::ShaftPosition;
use crate::tuning::{
    CLICK_DEBOUNCE_MS, FASTER_TURN_INTERVAL_MS, FASTER_TURN_STEP, FASTEST_TURN_INTERVAL_MS,
    FASTEST_TURN_STEP,
};

/// Polling quadrature decoder for one physical rotary encoder.
///
/// `A` and `B` are the rotation-sensing lines, `D` the optional push
/// button line (all sharing the pin error type `E`), and `C` the
/// millisecond clock. Construct with [`new`](Self::new) for encoders
/// without a button or [`with_button`](Self::with_button) for those with
/// one, call [`bind_pins`](Self::bind_pins) once, then poll.
///
/// A rotation step is counted only on the low-to-high transition of A,
/// so the two electrical edges of one detent produce exactly one step.
/// Steps taken within [`FASTER_TURN_INTERVAL_MS`] of the previous one are
/// scaled up, which lets a quick flick of the knob cross a wide position
/// range that single steps would make tedious.
///
/// The decoder is single-threaded by design: both scan methods take
/// `&mut self` and finish in bounded time, and any cross-context sharing
/// is the caller's problem to serialize.
pub struct RotaryDecoder<A, B, D, C> {
    line_a: A,
    line_b: B,
    button: Option<D>,
    /// Level of A at the end of the previous `scan_rotate` call.
    /// Starts high: the lines idle pulled-up.
    prev_a: bool,
    position: ShaftPosition,
    /// Timestamp of the last accepted rotation edge.
    last_turn_ms: u32,
    /// Timestamp of the last accepted button click.
    last_click_ms: u32,
    clock: C,
}

impl<A, B, C, E> RotaryDecoder<A, B, NoButton<E>, C>
where
    A: PullUpLine<Error = E>,
    B: PullUpLine<Error = E>,
    C: MillisClock,
    E: digital::Error,
{
    /// Create a decoder for an encoder without a push button.
    ///
    /// Click scanning is permanently disabled;
    /// [`scan_click`](Self::scan_click) always returns `Ok(false)`.
    ///
    /// # Arguments
    /// * `line_a`, `line_b` — quadrature input lines
    /// * `min`, `max` — inclusive position bounds; the position starts at
    ///   their midpoint. `min <= max` is a precondition, not checked here.
    /// * `clock` — millisecond time source
    pub fn new(line_a: A, line_b: B, min: i32, max: i32, clock: C) -> Self {
        Self::from_parts(line_a, line_b, None, min, max, clock)
    }
}

impl<A, B, D, C, E> RotaryDecoder<A, B, D, C>
where
    A: PullUpLine<Error = E>,
    B: PullUpLine<Error = E>,
    D: PullUpLine<Error = E>,
    C: MillisClock,
    E: digital::Error,
{
    /// Create a decoder for an encoder with a push button on `button`.
    ///
    /// Bounds and clock behave as in [`new`](RotaryDecoder::new). The
    /// debounce timer starts at construction time, so a press within the
    /// first [`CLICK_DEBOUNCE_MS`] after construction is ignored.
    pub fn with_button(line_a: A, line_b: B, button: D, min: i32, max: i32, clock: C) -> Self {
        Self::from_parts(line_a, line_b, Some(button), min, max, clock)
    }

    fn from_parts(line_a: A, line_b: B, button: Option<D>, min: i32, max: i32, clock: C) -> Self {
        let now = clock.now_millis();
        Self {
            line_a,
            line_b,
            button,
            prev_a: true,
            position: ShaftPosition::new(min, max),
            last_turn_ms: now,
            last_click_ms: now,
            clock,
        }
    }

    // -----------------------------------------------------------------------
    // Setup
    // -----------------------------------------------------------------------

    /// Configure every bound line as a pulled-up input.
    ///
    /// Must run once before the first scan; the line levels are otherwise
    /// indeterminate. Safe to call again later.
    ///
    /// # Errors
    /// Propagates the first failing line configuration, attributed to the
    /// line that failed.
    pub fn bind_pins(&mut self) -> Result<(), DecoderError<E>> {
        self.line_a.configure_pull_up().map_err(DecoderError::LineA)?;
        self.line_b.configure_pull_up().map_err(DecoderError::LineB)?;

        if let Some(button) = self.button.as_mut() {
            button.configure_pull_up().map_err(DecoderError::Button)?;
        }

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Polling
    // -----------------------------------------------------------------------

    /// Sample the rotation lines and apply any detected step.
    ///
    /// A step is detected only when A has gone from low to high since the
    /// previous call. On a step, B picks the direction (high: clockwise,
    /// +1; low: counter-clockwise, -1) and the interval since the last
    /// accepted step picks the magnitude:
    ///
    /// * under [`FASTEST_TURN_INTERVAL_MS`] — ±[`FASTEST_TURN_STEP`]
    /// * under [`FASTER_TURN_INTERVAL_MS`] — ±[`FASTER_TURN_STEP`]
    /// * otherwise — ±1
    ///
    /// The position is then advanced and clamped into its bounds.
    ///
    /// Returns `Ok(true)` iff an edge was detected. This reports the input
    /// event, not a position change: a step absorbed entirely by the clamp
    /// still returns `Ok(true)`.
    ///
    /// # Errors
    /// Propagates line read failures; the decoder state is left untouched
    /// except for samples already taken.
    pub fn scan_rotate(&mut self) -> Result<bool, DecoderError<E>> {
        let current_a = self.line_a.is_high().map_err(DecoderError::LineA)?;

        let mut delta = 0;
        if current_a && !self.prev_a {
            delta = if self.line_b.is_high().map_err(DecoderError::LineB)? {
                1
            } else {
                -1
            };

            // wrapping_sub keeps the interval correct across a clock wrap.
            let now = self.clock.now_millis();
            let elapsed = now.wrapping_sub(self.last_turn_ms);
            if elapsed < FASTEST_TURN_INTERVAL_MS {
                delta *= FASTEST_TURN_STEP;
            } else if elapsed < FASTER_TURN_INTERVAL_MS {
                delta *= FASTER_TURN_STEP;
            }

            self.last_turn_ms = now;
        }

        // The clamp runs even with delta 0, so a raw out-of-range
        // set_position() is pulled back into bounds on the next poll.
        self.position.advance(delta);
        self.prev_a = current_a;

        Ok(delta != 0)
    }

    /// Sample the button line and report a debounced click.
    ///
    /// Returns `Ok(true)` when the line reads low (pressed, active-low)
    /// and more than [`CLICK_DEBOUNCE_MS`] have passed since the last
    /// accepted click. Always `Ok(false)` without a button line.
    ///
    /// The window is measured from the last *accepted* click, not from the
    /// press edge: a button held low re-fires once per window instead of
    /// once per physical press.
    ///
    /// # Errors
    /// Propagates button line read failures.
    pub fn scan_click(&mut self) -> Result<bool, DecoderError<E>> {
        let Some(button) = self.button.as_mut() else {
            return Ok(false);
        };

        if button.is_low().map_err(DecoderError::Button)? {
            let now = self.clock.now_millis();
            if now.wrapping_sub(self.last_click_ms) > CLICK_DEBOUNCE_MS {
                self.last_click_ms = now;
                return Ok(true);
            }
        }

        Ok(false)
    }

    // -----------------------------------------------------------------------
    // Position access
    // -----------------------------------------------------------------------

    /// Current shaft position.
    pub fn position(&self) -> i32 {
        self.position.get()
    }

    /// Overwrite the shaft position. Not clamped until the next
    /// [`scan_rotate`](Self::scan_rotate).
    pub fn set_position(&mut self, position: i32) {
        self.position.set(position);
    }

    /// Overwrite the lower position bound. No validation or re-clamping.
    pub fn set_min(&mut self, min: i32) {
        self.position.set_min(min);
    }

    /// Overwrite the upper position bound. No validation or re-clamping.
    pub fn set_max(&mut self, max: i32) {
        self.position.set_max(max);
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
