//! Sample record types and JSON line serialization for the joystick node.
//!
//! - **Types**: [`SampleRecord`], [`JoystickReading`], [`Key`]
//! - **Serialization**: [`Serialize`] trait, [`LINE_ENDING`], [`MAX_LINE_SIZE`]
//! - **Parsing**: [`parse()`] for reading emitted lines on the host side
//!
//! # Wire Format
//!
//! One record per line, compact JSON with a fixed key set and order:
//!
//! ```text
//! {"S1":<0|1>,"H1":<int>,"V1":<int>,"S2":<0|1>,"H2":<int>,"V2":<int>}\r\n
//! ```
//!
//! - `S1`, `S2` - switch levels, `0` or `1`
//! - `H1`, `V1` - joystick 1 horizontal/vertical, centered and scaled
//! - `H2`, `V2` - joystick 2 horizontal/vertical, centered and scaled
//!
//! # Example
//!
//! ```
//! use joystick_proto::{parse, JoystickReading, SampleRecord, Serialize, MAX_LINE_SIZE};
//!
//! let record = SampleRecord::new(
//!     JoystickReading::new(true, 1, -1),
//!     JoystickReading::new(false, 0, 102),
//! );
//!
//! let mut buf = [0u8; MAX_LINE_SIZE];
//! let len = record.serialize_line(&mut buf).unwrap();
//! assert_eq!(&buf[..len], b"{\"S1\":1,\"H1\":1,\"V1\":-1,\"S2\":0,\"H2\":0,\"V2\":102}\r\n");
//! assert_eq!(parse(&buf[..len]), Ok(record));
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//! - **`heapless`**: Enable `serialize_to_vec()`
//! - **`embedded-io`**: Enable `serialize_io()` for I/O peripherals

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

mod fmt;
pub mod parser;
pub mod serialize;
pub mod types;

pub use parser::{parse, ParseError};
pub use serialize::{Serialize, SerializeError, LINE_ENDING, MAX_LINE_SIZE, MAX_RECORD_SIZE};
pub use types::{JoystickReading, Key, SampleRecord};
