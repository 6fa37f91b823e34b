//! Node configuration.

use crate::axis::AxisScale;

/// Timing, scaling and serial settings for the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NodeConfig {
    /// Applied to every analog channel.
    pub scale: AxisScale,
    /// Pause after each sampling iteration.
    pub sample_period_ms: u32,
    /// Wait between console bring-up and transceiver initialization.
    pub settle_ms: u32,
    /// Serial console baud rate.
    pub baud_rate: u32,
}

impl NodeConfig {
    pub const DEFAULT: Self = Self {
        scale: AxisScale::DEFAULT,
        sample_period_ms: 100,
        settle_ms: 1000,
        baud_rate: 9600,
    };
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
