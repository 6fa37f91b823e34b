//! One-shot startup sequence and the terminal halt.

use crate::config::NodeConfig;
use crate::output::{write_line, LineSink};
use crate::transceiver::Transceiver;
use embedded_hal_async::delay::DelayNs;

/// Written once when the transceiver does not answer.
pub const RADIO_MISSING_MESSAGE: &str = "nRF24L01 not detected!";

/// Written once when startup completes.
pub const READY_MESSAGE: &str = "nRF24L01 transmitter ready.";

/// Fatal startup failures. Every variant ends in [`halt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError {
    /// The transceiver did not report a valid address width.
    RadioNotDetected,
    /// The SPI bus failed while configuring the transceiver.
    RadioBus,
}

/// Bring the node up: settle, initialize the radio, check it answers.
///
/// On success the ready line is written and the sink is handed back for the
/// sampling loop. On failure the diagnostic line is written once and the sink
/// is dropped, so nothing further can reach the console.
///
/// Console write failures are ignored here; only the radio can fail startup.
pub async fn bring_up<R, O, D>(
    radio: &mut R,
    mut output: O,
    delay: &mut D,
    config: &NodeConfig,
) -> Result<O, StartupError>
where
    R: Transceiver,
    O: LineSink,
    D: DelayNs,
{
    delay.delay_ms(config.settle_ms).await;

    let result = match radio.begin() {
        Err(_) => Err(StartupError::RadioBus),
        Ok(()) if !radio.is_chip_connected() => Err(StartupError::RadioNotDetected),
        Ok(()) => Ok(()),
    };

    match result {
        Ok(()) => {
            let _ = write_line(&mut output, READY_MESSAGE).await;
            Ok(output)
        }
        Err(e) => {
            let _ = write_line(&mut output, RADIO_MISSING_MESSAGE).await;
            Err(e)
        }
    }
}

/// Stop all activity for good.
///
/// Never resolves; the executor parks the core instead of spinning.
pub async fn halt() -> ! {
    match core::future::pending::<core::convert::Infallible>().await {}
}
