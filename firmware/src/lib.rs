//! Dual joystick sampling node for RP2040.
//!
//! # Overview
//!
//! The firmware runs on an RP2040 and:
//! 1. Brings up the serial console (9600 baud, 8N1) and the nRF24L01 on SPI1
//! 2. Halts with a one-line diagnostic if the radio does not answer
//! 3. Otherwise samples both joysticks every 100 ms and writes one JSON line
//!    per sample to the console
//!
//! # Hardware Configuration
//!
//! | Function      | GPIO | Description |
//! |---------------|------|-------------|
//! | UART0 TX      | 0    | Serial console out |
//! | UART0 RX      | 1    | Unused |
//! | SPI1 SCK      | 10   | nRF24L01 SCK |
//! | SPI1 MOSI     | 11   | nRF24L01 MOSI |
//! | SPI1 MISO     | 12   | nRF24L01 MISO |
//! | nRF24 CSN     | 13   | Chip select |
//! | nRF24 CE      | 14   | Chip enable |
//! | S1 / S2       | 15 / 16 | Joystick switches |
//! | H1 / V1       | 26 / 27 | Joystick 1 axes (ADC0, ADC1) |
//! | H2 / V2       | 28 / 29 | Joystick 2 axes (ADC2, ADC3) |
//! | LED           | 25   | On once startup succeeds |
//!
//! # Modules
//!
//! - [`panel`]: ADC/GPIO joystick panel ([`JoystickPanel`])
//! - [`console`]: UART console output ([`SerialConsole`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//!
//! # Re-exports
//!
//! This crate re-exports all public items from [`joystick_core`] for convenience,
//! so consumers only need to depend on this crate.

#![no_std]

#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features - they install conflicting panic handlers");

pub use joystick_core::{
    bring_up, halt, AxisScale, InputError, InputSource, JoystickReading, LineSink, NodeConfig,
    Nrf24, Nrf24Error, OutputError, RawJoystick, RawSample, SampleError, SampleRecord, Sampler,
    StartupError, Transceiver,
};

pub mod console;
pub mod panel;

pub use console::SerialConsole;
pub use panel::{JoystickPanel, JoystickPins};
