//! Serial console on UART0 (TX on GPIO 0).

use embassy_rp::uart::{Async, Error as UartError, UartTx};
use joystick_core::{LineSink, OutputError};

#[inline]
fn uart_error_to_output_error(e: UartError) -> OutputError {
    match e {
        UartError::Overrun => OutputError::Overrun,
        _ => OutputError::Io,
    }
}

/// Transmit half of the console UART.
pub struct SerialConsole<'d> {
    tx: UartTx<'d, Async>,
}

impl<'d> SerialConsole<'d> {
    #[must_use]
    pub fn new(tx: UartTx<'d, Async>) -> Self {
        Self { tx }
    }
}

impl LineSink for SerialConsole<'_> {
    async fn write(&mut self, bytes: &[u8]) -> Result<(), OutputError> {
        self.tx
            .write(bytes)
            .await
            .map_err(uart_error_to_output_error)
    }
}
