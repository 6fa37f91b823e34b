//! Joystick panel: two switch inputs and four ADC channels.
//!
//! # Pins
//!
//! | Input | GPIO | ADC channel |
//! |-------|------|-------------|
//! | S1    | 15   | -           |
//! | H1    | 26   | 0           |
//! | V1    | 27   | 1           |
//! | S2    | 16   | -           |
//! | H2    | 28   | 2           |
//! | V2    | 29   | 3           |
//!
//! GPIO 29 is the fourth ADC input; boards that tie it to a VSYS divider
//! (the Pico does) need the V2 wiper moved to a board that breaks it out.

use embassy_rp::adc::{Adc, Async, Channel, Error as AdcError};
use embassy_rp::gpio::Input;
use joystick_core::{InputError, InputSource, RawJoystick, RawSample};

/// Convert ADC errors to [`InputError`].
///
/// This is a helper function instead of a `From` impl to avoid orphan rule issues
/// (both `AdcError` and `InputError` are defined in external crates).
#[inline]
fn adc_error_to_input_error(e: AdcError) -> InputError {
    match e {
        AdcError::ConversionFailed => InputError::Conversion,
        #[allow(unreachable_patterns)]
        _ => InputError::Io,
    }
}

/// Analog and digital pins of one joystick module.
pub struct JoystickPins<'d> {
    pub switch: Input<'d>,
    pub horizontal: Channel<'d>,
    pub vertical: Channel<'d>,
}

/// Both joystick modules sharing the RP2040 ADC.
pub struct JoystickPanel<'d> {
    adc: Adc<'d, Async>,
    joystick1: JoystickPins<'d>,
    joystick2: JoystickPins<'d>,
}

impl<'d> JoystickPanel<'d> {
    #[must_use]
    pub fn new(adc: Adc<'d, Async>, joystick1: JoystickPins<'d>, joystick2: JoystickPins<'d>) -> Self {
        Self {
            adc,
            joystick1,
            joystick2,
        }
    }

    async fn read_joystick(
        adc: &mut Adc<'d, Async>,
        pins: &mut JoystickPins<'d>,
    ) -> Result<RawJoystick, InputError> {
        let switch = pins.switch.is_high();
        let horizontal = adc
            .read(&mut pins.horizontal)
            .await
            .map_err(adc_error_to_input_error)?;
        let vertical = adc
            .read(&mut pins.vertical)
            .await
            .map_err(adc_error_to_input_error)?;
        Ok(RawJoystick::new(switch, horizontal, vertical))
    }
}

impl InputSource for JoystickPanel<'_> {
    async fn sample(&mut self) -> Result<RawSample, InputError> {
        let joystick1 = Self::read_joystick(&mut self.adc, &mut self.joystick1).await?;
        let joystick2 = Self::read_joystick(&mut self.adc, &mut self.joystick2).await?;
        Ok(RawSample::new(joystick1, joystick2))
    }
}
