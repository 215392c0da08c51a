//! Polling decoder for quadrature rotary encoders with an optional push button.
//!
//! This crate turns raw line levels from a mechanical rotary encoder into a
//! bounded integer position and debounced click events. It is written for
//! resource-constrained targets: `no_std`, no allocation, no interrupts,
//! and no blocking. The host loop polls [`RotaryDecoder::scan_rotate`] and
//! [`RotaryDecoder::scan_click`] at its own cadence and reads the results
//! back to drive a menu, a display, or whatever else the knob controls.
//!
//! ```text
//!     D E   The D line is the push button, E its ground.
//!     | |
//!   -------
//!   |     |  Bottom view of the encoder.
//!   -------
//!    | | |
//!    A C B   A and B carry the quadrature signal, C is their ground.
//! ```
//!
//! # Architecture
//!
//! - **[`RotaryDecoder`]** — the polling state machine: rising-edge
//!   detection on A, direction from B, two-tier velocity acceleration,
//!   and the click debounce timer.
//! - **[`ShaftPosition`]** — the clamped position value type with raw
//!   unchecked setters and an explicit clamp.
//! - **[`PullUpLine`] / [`MillisClock`]** — boundary traits for line
//!   access and time, so the decoder runs against any HAL and against
//!   plain fakes in tests.
//!
//! # Quick start
//!
//! ```
//! # use core::cell::Cell;
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::{ErrorType, InputPin};
//! # use rotary_decoder::{MillisClock, PullUpLine};
//! # struct Line<'a>(&'a Cell<bool>);
//! # impl ErrorType for Line<'_> { type Error = Infallible; }
//! # impl InputPin for Line<'_> {
//! #     fn is_high(&mut self) -> Result<bool, Infallible> { Ok(self.0.get()) }
//! #     fn is_low(&mut self) -> Result<bool, Infallible> { Ok(!self.0.get()) }
//! # }
//! # impl PullUpLine for Line<'_> {
//! #     fn configure_pull_up(&mut self) -> Result<(), Infallible> { Ok(()) }
//! # }
//! # struct Clock<'a>(&'a Cell<u32>);
//! # impl MillisClock for Clock<'_> { fn now_millis(&self) -> u32 { self.0.get() } }
//! # let (a, b, d) = (Cell::new(true), Cell::new(true), Cell::new(true));
//! # let now = Cell::new(0);
//! use rotary_decoder::RotaryDecoder;
//!
//! // Lines A and B carry the quadrature signal, D the push button.
//! // Position is bounded to [0, 10] and starts at the midpoint, 5.
//! let mut decoder = RotaryDecoder::with_button(
//!     Line(&a), Line(&b), Line(&d),
//!     0, 10,
//!     Clock(&now),
//! );
//! decoder.bind_pins()?;
//!
//! // Host polling loop: one rising edge on A with B high steps clockwise.
//! # a.set(false);
//! # decoder.scan_rotate()?;
//! # now.set(300);
//! # a.set(true);
//! if decoder.scan_rotate()? {
//!     assert_eq!(decoder.position(), 6);
//! }
//! # Ok::<(), rotary_decoder::DecoderError<Infallible>>(())
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on public
//!   types for embedded logging.
//! - **`embassy`** — Provide [`EmbassyClock`], a [`MillisClock`] backed
//!   by `embassy-time`.

#![no_std]

#[cfg(feature = "embassy")]
pub use clock::EmbassyClock;
pub use clock::MillisClock;
pub use decoder::RotaryDecoder;
pub use error::DecoderError;
pub use line::{NoButton, PullUpLine};
pub use position::ShaftPosition;
pub use tuning::{
    CLICK_DEBOUNCE_MS, FASTER_TURN_INTERVAL_MS, FASTER_TURN_STEP, FASTEST_TURN_INTERVAL_MS,
    FASTEST_TURN_STEP,
};

mod clock;
mod decoder;
mod error;
mod line;
mod position;
mod tuning;
