//! Error types for the decoder.

use core::fmt;

/// Errors that can occur while sampling the encoder's input lines.
///
/// `E` is the HAL pin error type shared by all configured lines. Each
/// variant records which line the failed read or configuration targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderError<E> {
    /// Reading or configuring rotation line A failed.
    LineA(E),

    /// Reading or configuring rotation line B failed.
    LineB(E),

    /// Reading or configuring the button line failed.
    Button(E),
}

impl<E: fmt::Debug> fmt::Display for DecoderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecoderError::LineA(e) => write!(f, "line A error: {:?}", e),
            DecoderError::LineB(e) => write!(f, "line B error: {:?}", e),
            DecoderError::Button(e) => write!(f, "button line error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for DecoderError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DecoderError::LineA(e) => defmt::write!(f, "line A error: {}", e),
            DecoderError::LineB(e) => defmt::write!(f, "line B error: {}", e),
            DecoderError::Button(e) => defmt::write!(f, "button line error: {}", e),
        }
    }
}
