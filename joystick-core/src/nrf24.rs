//! Blocking nRF24L01(+) driver, limited to bring-up and presence detection.
//!
//! Talks to the chip through an [`embedded_hal::spi::SpiDevice`] (which owns
//! CSN) and drives CE through an [`OutputPin`]. Every command is a single SPI
//! transaction: command byte first, the chip clocks STATUS back in parallel.

use crate::transceiver::Transceiver;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

/// Register map (subset used here).
pub mod reg {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const DYNPD: u8 = 0x1C;
    pub const FEATURE: u8 = 0x1D;
}

/// SPI command bytes.
pub mod cmd {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const NOP: u8 = 0xFF;
}

const REGISTER_MASK: u8 = 0x1F;

// CONFIG bits
const EN_CRC: u8 = 1 << 3;
const CRCO: u8 = 1 << 2;
const PWR_UP: u8 = 1 << 1;

// STATUS interrupt flags, write 1 to clear
const STATUS_IRQ_MASK: u8 = 0x70;

/// Auto-retransmit delay 1500us (5), up to 15 retries.
const DEFAULT_RETRIES: u8 = (5 << 4) | 15;
/// 1 Mbps, 0 dBm output, LNA gain on.
const DEFAULT_RF_SETUP: u8 = 0x07;
/// 5-byte addresses.
const ADDRESS_WIDTH_5: u8 = 0x03;

/// Default RF channel (2476 MHz).
pub const DEFAULT_CHANNEL: u8 = 76;

/// Error type for driver operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Nrf24Error<S, P> {
    /// SPI transaction failed.
    Spi(S),
    /// CE pin could not be driven.
    Pin(P),
}

/// nRF24L01 transceiver on an SPI device with a CE line.
pub struct Nrf24<SPI, CE> {
    spi: SPI,
    ce: CE,
}

impl<SPI, CE> Nrf24<SPI, CE>
where
    SPI: SpiDevice,
    CE: OutputPin,
{
    /// Wrap the bus device and CE pin. Nothing is sent until [`begin`](Transceiver::begin).
    #[must_use]
    pub fn new(spi: SPI, ce: CE) -> Self {
        Self { spi, ce }
    }

    /// Read a single-byte register.
    pub fn read_register(&mut self, register: u8) -> Result<u8, SPI::Error> {
        let mut buf = [cmd::R_REGISTER | (register & REGISTER_MASK), cmd::NOP];
        self.spi.transfer_in_place(&mut buf)?;
        Ok(buf[1])
    }

    /// Write a single-byte register.
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), SPI::Error> {
        self.spi
            .write(&[cmd::W_REGISTER | (register & REGISTER_MASK), value])
    }

    /// Read STATUS via a NOP command.
    pub fn status(&mut self) -> Result<u8, SPI::Error> {
        let mut buf = [cmd::NOP];
        self.spi.transfer_in_place(&mut buf)?;
        Ok(buf[0])
    }

    /// Clear PWR_UP, leaving the rest of CONFIG intact.
    pub fn power_down(&mut self) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self.ce.set_low().map_err(Nrf24Error::Pin)?;
        let config = self.read_register(reg::CONFIG).map_err(Nrf24Error::Spi)?;
        self.write_register(reg::CONFIG, config & !PWR_UP)
            .map_err(Nrf24Error::Spi)
    }

    /// Give back the bus device and CE pin.
    pub fn release(self) -> (SPI, CE) {
        (self.spi, self.ce)
    }

    fn command(&mut self, command: u8) -> Result<(), SPI::Error> {
        self.spi.write(&[command])
    }

    fn configure(&mut self) -> Result<(), SPI::Error> {
        // Powered down with 16-bit CRC while the rest is set up
        self.write_register(reg::CONFIG, EN_CRC | CRCO)?;
        self.write_register(reg::SETUP_RETR, DEFAULT_RETRIES)?;
        self.write_register(reg::RF_SETUP, DEFAULT_RF_SETUP)?;
        self.write_register(reg::FEATURE, 0)?;
        self.write_register(reg::DYNPD, 0)?;
        self.write_register(reg::EN_AA, 0x3F)?;
        self.write_register(reg::EN_RXADDR, 0x03)?;
        self.write_register(reg::SETUP_AW, ADDRESS_WIDTH_5)?;
        self.write_register(reg::RF_CH, DEFAULT_CHANNEL)?;
        self.write_register(reg::STATUS, STATUS_IRQ_MASK)?;
        self.command(cmd::FLUSH_RX)?;
        self.command(cmd::FLUSH_TX)?;
        // PRIM_RX stays clear: transmitter role
        self.write_register(reg::CONFIG, EN_CRC | CRCO | PWR_UP)
    }
}

impl<SPI, CE> Transceiver for Nrf24<SPI, CE>
where
    SPI: SpiDevice,
    CE: OutputPin,
{
    type Error = Nrf24Error<SPI::Error, CE::Error>;

    fn begin(&mut self) -> Result<(), Self::Error> {
        self.ce.set_low().map_err(Nrf24Error::Pin)?;
        self.configure().map_err(Nrf24Error::Spi)
    }

    fn is_chip_connected(&mut self) -> bool {
        // SETUP_AW only holds 1..=3; a floating or missing chip reads 0x00 or 0xFF
        matches!(self.read_register(reg::SETUP_AW), Ok(1..=3))
    }
}
