//! Input source trait, raw sample types and error types.

use crate::axis::AxisScale;
use core::future::Future;
use joystick_proto::{JoystickReading, SampleRecord};

/// Error type for input operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// The ADC reported a failed conversion.
    Conversion,
    /// Pin or bus I/O error.
    Io,
}

/// One joystick module as read from the pins, before scaling.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawJoystick {
    pub switch: bool,
    pub horizontal: u16,
    pub vertical: u16,
}

impl RawJoystick {
    #[must_use]
    pub const fn new(switch: bool, horizontal: u16, vertical: u16) -> Self {
        Self {
            switch,
            horizontal,
            vertical,
        }
    }

    /// Scale both axes; the switch level passes through unchanged.
    #[inline]
    #[must_use]
    pub fn scale(&self, scale: &AxisScale) -> JoystickReading {
        JoystickReading::new(
            self.switch,
            scale.apply(self.horizontal),
            scale.apply(self.vertical),
        )
    }
}

/// All six inputs read in one pass.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    pub joystick1: RawJoystick,
    pub joystick2: RawJoystick,
}

impl RawSample {
    #[must_use]
    pub const fn new(joystick1: RawJoystick, joystick2: RawJoystick) -> Self {
        Self {
            joystick1,
            joystick2,
        }
    }

    /// Build the record emitted for this sample.
    #[must_use]
    pub fn scale(&self, scale: &AxisScale) -> SampleRecord {
        SampleRecord::new(self.joystick1.scale(scale), self.joystick2.scale(scale))
    }
}

/// Async trait for the joystick panel.
///
/// Implementations read S1, H1, V1, S2, H2, V2 in that order and either
/// return all six values or an error; there are no partial samples.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait InputSource {
    /// Read every switch and analog channel once.
    fn sample(&mut self) -> impl Future<Output = Result<RawSample, InputError>>;
}
