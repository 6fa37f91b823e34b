//! Analog axis scaling.

use core::num::NonZeroU16;

/// Largest value the 12-bit ADC can report.
pub const ADC_MAX: u16 = 4095;

/// Maps a raw ADC reading onto a signed range centered on zero.
///
/// `scaled = (raw - midpoint) / divisor`, with integer division truncating
/// toward zero. No clamping or filtering is applied.
///
/// # Example
///
/// ```
/// use joystick_core::AxisScale;
///
/// let scale = AxisScale::DEFAULT;
/// assert_eq!(scale.apply(2048), 0);
/// assert_eq!(scale.apply(0), -102);
/// assert_eq!(scale.apply(4095), 102);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisScale {
    pub midpoint: u16,
    pub divisor: NonZeroU16,
}

impl AxisScale {
    /// Midpoint 2048, divisor 20: maps 0..=4095 onto -102..=102.
    pub const DEFAULT: Self = Self {
        midpoint: 2048,
        divisor: match NonZeroU16::new(20) {
            Some(d) => d,
            None => panic!("divisor must be non-zero"),
        },
    };

    #[must_use]
    pub const fn new(midpoint: u16, divisor: NonZeroU16) -> Self {
        Self { midpoint, divisor }
    }

    /// Scale one raw reading.
    #[inline]
    #[must_use]
    pub fn apply(self, raw: u16) -> i32 {
        (i32::from(raw) - i32::from(self.midpoint)) / i32::from(self.divisor.get())
    }
}

impl Default for AxisScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}
