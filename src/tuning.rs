//! Timing constants for step acceleration and click debouncing.
//!
//! These are fixed properties of the decoder, not configuration: the two
//! acceleration tiers and the debounce window were tuned against a common
//! 20-detent mechanical encoder and apply to every instance.

// ---------------------------------------------------------------------------
// Rotation acceleration tiers
// ---------------------------------------------------------------------------

/// Inter-edge interval (ms) below which a turn counts as the fastest tier.
pub const FASTEST_TURN_INTERVAL_MS: u32 = 100;

/// Step multiplier applied in the fastest tier.
pub const FASTEST_TURN_STEP: i32 = 18;

/// Inter-edge interval (ms) below which a turn counts as the faster tier.
/// Checked only after the fastest tier has been ruled out.
pub const FASTER_TURN_INTERVAL_MS: u32 = 250;

/// Step multiplier applied in the faster tier.
pub const FASTER_TURN_STEP: i32 = 9;

// ---------------------------------------------------------------------------
// Button debouncing
// ---------------------------------------------------------------------------

/// Minimum interval (ms) between two accepted button clicks.
///
/// Measured from the last *accepted* click, so a button held low re-fires
/// once per window. See [`RotaryDecoder::scan_click`](crate::RotaryDecoder::scan_click).
pub const CLICK_DEBOUNCE_MS: u32 = 500;
