//! Wireless transceiver trait used during startup.

/// A radio that can be initialized and probed for presence.
///
/// Only bring-up is modelled; nothing is transmitted.
pub trait Transceiver {
    /// Error type for bus failures while talking to the radio.
    type Error;

    /// Put the radio into its default configuration.
    fn begin(&mut self) -> Result<(), Self::Error>;

    /// Whether the radio answers on its bus.
    fn is_chip_connected(&mut self) -> bool;
}
