//! Output sink trait and error types.

use core::future::Future;

/// Error type for output operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// UART/communication I/O error.
    Io,
    /// Transmit buffer overrun.
    Overrun,
}

/// Async trait for the line-oriented output stream (the serial console).
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait LineSink {
    /// Write raw bytes to the stream.
    ///
    /// Callers pass complete lines including the terminator.
    fn write(&mut self, bytes: &[u8]) -> impl Future<Output = Result<(), OutputError>>;
}

/// Write `text` followed by [`LINE_ENDING`](joystick_proto::LINE_ENDING).
pub async fn write_line<O: LineSink>(output: &mut O, text: &str) -> Result<(), OutputError> {
    output.write(text.as_bytes()).await?;
    output.write(joystick_proto::LINE_ENDING).await
}
