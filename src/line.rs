//! Input line boundary traits.
//!
//! The decoder never touches hardware registers directly. It reads logical
//! levels through `embedded-hal`'s [`InputPin`] and performs its one-time
//! pin setup through the [`PullUpLine`] extension trait, so the core logic
//! runs unchanged against any HAL — or against plain fakes in unit tests.

use core::marker::PhantomData;

use embedded_hal::digital::{self, ErrorType, InputPin};

/// A digital input line that can enable its internal pull-up resistor.
///
/// Encoder lines are wired open-collector against ground: with the pull-up
/// enabled, an idle (open) line reads high and a closed circuit reads low.
/// `embedded-hal` does not model pull-up configuration, so HALs (or thin
/// wrappers around HAL pin types) implement this on top of [`InputPin`].
pub trait PullUpLine: InputPin {
    /// Place the line into input mode with the internal pull-up enabled.
    ///
    /// Called by [`bind_pins`](crate::RotaryDecoder::bind_pins) once per
    /// line before the first poll. Must be idempotent.
    fn configure_pull_up(&mut self) -> Result<(), Self::Error>;
}

/// Placeholder line type for decoders without a push button.
///
/// [`RotaryDecoder::new`](crate::RotaryDecoder::new) fixes the button type
/// parameter to `NoButton<E>` so that button-less construction needs no
/// type annotations. A value of this type is never actually read — the
/// button slot holds `None` — but the trait impls below keep the generic
/// bounds satisfied. The phantom `E` ties its error type to the error type
/// of the real lines.
pub struct NoButton<E> {
    _error: PhantomData<fn() -> E>,
}

impl<E: digital::Error> ErrorType for NoButton<E> {
    type Error = E;
}

impl<E: digital::Error> InputPin for NoButton<E> {
    // An absent button behaves like an open (pulled-up) circuit.
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }
}

impl<E: digital::Error> PullUpLine for NoButton<E> {
    fn configure_pull_up(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
