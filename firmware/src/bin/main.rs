#![no_std]
#![no_main]

use core::cell::RefCell;
use defmt::{error, info, trace};
use defmt_rtt as _;
use embassy_embedded_hal::shared_bus::blocking::spi::SpiDevice;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::spi::{self, Spi};
use embassy_rp::uart::{self, Uart};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::Delay;
use joystick_node::{
    bring_up, halt, JoystickPanel, JoystickPins, NodeConfig, Nrf24, Sampler, SerialConsole,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
    UART0_IRQ => uart::InterruptHandler<UART0>;
});

/// nRF24L01 SPI clock (the chip accepts up to 10 MHz).
const RADIO_SPI_FREQUENCY: u32 = 4_000_000;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Joystick node starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());
    let config = NodeConfig::DEFAULT;

    // --- Joystick Panel ---
    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let joystick1 = JoystickPins {
        switch: Input::new(p.PIN_15, Pull::None),
        horizontal: Channel::new_pin(p.PIN_26, Pull::None),
        vertical: Channel::new_pin(p.PIN_27, Pull::None),
    };
    let joystick2 = JoystickPins {
        switch: Input::new(p.PIN_16, Pull::None),
        horizontal: Channel::new_pin(p.PIN_28, Pull::None),
        vertical: Channel::new_pin(p.PIN_29, Pull::None),
    };
    let panel = JoystickPanel::new(adc, joystick1, joystick2);

    // --- Serial Console ---
    let mut uart_config = uart::Config::default();
    uart_config.baudrate = config.baud_rate;

    let uart = Uart::new(
        p.UART0,
        p.PIN_0, // TX
        p.PIN_1, // RX
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        uart_config,
    );
    let (tx, _rx) = uart.split();
    let console = SerialConsole::new(tx);

    // --- Radio on SPI1 ---
    let mut spi_config = spi::Config::default();
    spi_config.frequency = RADIO_SPI_FREQUENCY;

    let spi = Spi::new_blocking(
        p.SPI1,
        p.PIN_10, // SCK
        p.PIN_11, // MOSI
        p.PIN_12, // MISO
        spi_config,
    );
    let spi_bus: Mutex<NoopRawMutex, _> = Mutex::new(RefCell::new(spi));
    let csn = Output::new(p.PIN_13, Level::High);
    let ce = Output::new(p.PIN_14, Level::Low);
    let mut radio = Nrf24::new(SpiDevice::new(&spi_bus, csn), ce);

    // Status LED, lit once startup succeeds
    let mut led = Output::new(p.PIN_25, Level::Low);
    let mut delay = Delay;

    let console = match bring_up(&mut radio, console, &mut delay, &config).await {
        Ok(console) => console,
        Err(e) => {
            error!("Startup failed: {:?}", e);
            halt().await
        }
    };

    led.set_high();
    info!(
        "Joystick node ready, sampling every {} ms",
        config.sample_period_ms
    );

    let mut sampler = Sampler::new(panel, console, delay, config);
    loop {
        match sampler.process_one().await {
            Ok(record) => trace!("Sample: {:?}", record),
            Err(e) => error!("Sampling error: {:?}", e),
        }
    }
}
