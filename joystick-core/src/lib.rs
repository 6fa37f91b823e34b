//! Platform-agnostic joystick sampling, startup sequence and traits.
//!
//! This crate holds everything the joystick node does that does not depend
//! on a particular chip. It builds in `no_std` environments and on the host
//! for testing.
//!
//! # Overview
//!
//! - [`axis`]: Raw ADC to centered axis scaling ([`AxisScale`])
//! - [`config`]: Timing and scaling settings ([`NodeConfig`])
//! - [`input`]: Joystick panel trait ([`InputSource`]) and raw sample types
//! - [`output`]: Console trait ([`LineSink`])
//! - [`transceiver`]: Radio bring-up trait ([`Transceiver`])
//! - [`nrf24`]: nRF24L01 driver over `embedded-hal` SPI ([`Nrf24`])
//! - [`startup`]: Startup sequence and terminal halt ([`bring_up`], [`halt`])
//! - [`sampler`]: The periodic sampling loop ([`Sampler`])
//!
//! # Control Flow
//!
//! ```text
//! bring_up ──ok──> Sampler::run (forever: sample, scale, write line, pause)
//!     │
//!     └──err──> "nRF24L01 not detected!" once, then halt()
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod axis;
pub mod config;
pub mod input;
pub mod nrf24;
pub mod output;
pub mod sampler;
pub mod startup;
pub mod transceiver;

#[cfg(test)]
mod testing;

// Re-export main types at crate root
pub use axis::{AxisScale, ADC_MAX};
pub use config::NodeConfig;
pub use input::{InputError, InputSource, RawJoystick, RawSample};
pub use nrf24::{Nrf24, Nrf24Error};
pub use output::{write_line, LineSink, OutputError};
pub use sampler::{SampleError, Sampler};
pub use startup::{bring_up, halt, StartupError, RADIO_MISSING_MESSAGE, READY_MESSAGE};
pub use transceiver::Transceiver;

pub use joystick_proto::{JoystickReading, SampleRecord};
