//! Millisecond clock boundary trait.

/// Source of monotonically non-decreasing milliseconds.
///
/// The decoder only ever compares timestamps by subtraction
/// (`now.wrapping_sub(then)`), so the clock is free to wrap at `u32::MAX`
/// without disturbing elapsed-time measurements — modular arithmetic keeps
/// the differences correct across a single wrap.
///
/// Implementations must not block; the decoder calls this from its poll
/// path on every detected edge.
pub trait MillisClock {
    /// Current time in milliseconds since an arbitrary epoch.
    fn now_millis(&self) -> u32;
}

impl<T: MillisClock + ?Sized> MillisClock for &T {
    fn now_millis(&self) -> u32 {
        (**self).now_millis()
    }
}

/// [`MillisClock`] backed by `embassy-time`'s global instant.
///
/// Truncates [`embassy_time::Instant::as_millis`] to `u32`; the wrap this
/// introduces after ~49.7 days is exactly the wrap the trait contract
/// already tolerates.
#[cfg(feature = "embassy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl MillisClock for EmbassyClock {
    fn now_millis(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}
