use std::time::Duration;

use spi_pwm_core::{
    channel::ChannelState,
    common::Freq,
    frame::{ReadWrite, SerialFrame},
    pins::{SerialInput, UiIn},
};

use crate::{
    error::EmulatorError,
    option::{EmulatorOption, DEFAULT_PWM_PERIOD},
    peripheral::{PeripheralEmulator, RegisterFile},
    spi::SpiDecoder,
};

/// The whole peripheral, advanced one system-clock tick at a time.
pub struct Emulator {
    option: EmulatorOption,
    decoder: SpiDecoder,
    peripheral: PeripheralEmulator,
    input: SerialInput,
    reset: bool,
    ticks: u64,
    last_frame: Option<SerialFrame>,
    frames_committed: usize,
}

impl Emulator {
    /// Creates an emulator with the default 10 MHz clock and 3 kHz PWM.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_period(EmulatorOption::new(), DEFAULT_PWM_PERIOD)
    }

    pub fn with_option(option: EmulatorOption) -> Result<Self, EmulatorError> {
        let period = option.pwm_period()?;
        Ok(Self::with_period(option, period))
    }

    const fn with_period(option: EmulatorOption, period: u32) -> Self {
        Self {
            option,
            decoder: SpiDecoder::new(),
            peripheral: PeripheralEmulator::new(period),
            input: SerialInput::IDLE,
            reset: false,
            ticks: 0,
            last_frame: None,
            frames_committed: 0,
        }
    }

    pub fn set_input(&mut self, input: SerialInput) {
        self.input = input;
    }

    pub fn set_ui_in(&mut self, ui_in: u8) {
        self.input = UiIn::from_bits(ui_in).into();
    }

    /// Drives the reset level. The peripheral is held at its initial state while `reset` is `true`.
    pub fn set_reset(&mut self, reset: bool) {
        if reset != self.reset {
            if reset {
                tracing::info!("Reset asserted.");
            } else {
                tracing::info!("Reset released.");
            }
        }
        self.reset = reset;
    }

    /// Active-low form of [`Emulator::set_reset`].
    pub fn set_rst_n(&mut self, rst_n: bool) {
        self.set_reset(!rst_n);
    }

    pub fn tick(&mut self) {
        self.ticks += 1;

        if self.reset {
            self.decoder.reset();
            self.peripheral.reset();
            self.last_frame = None;
            return;
        }

        if let Some(frame) = self.decoder.clock(self.input) {
            self.dispatch(frame);
        }
        self.peripheral.tick();
    }

    pub fn tick_n(&mut self, n: u64) {
        (0..n).for_each(|_| self.tick());
    }

    fn dispatch(&mut self, frame: SerialFrame) {
        self.last_frame = Some(frame);
        self.frames_committed += 1;
        match frame.direction() {
            ReadWrite::Write => self.peripheral.write(frame.address(), frame.data()),
            ReadWrite::Read => {
                tracing::debug!("Read from {} ignored.", frame.address());
            }
        }
    }

    #[must_use]
    pub const fn option(&self) -> &EmulatorOption {
        &self.option
    }

    #[must_use]
    pub const fn input(&self) -> SerialInput {
        self.input
    }

    #[must_use]
    pub const fn ui_in(&self) -> u8 {
        UiIn::new()
            .with_ncs(!self.input.cs_active)
            .with_copi(self.input.data)
            .with_sclk(self.input.sclk)
            .into_bits()
    }

    #[must_use]
    pub const fn is_reset(&self) -> bool {
        self.reset
    }

    #[must_use]
    pub const fn uo_out(&self) -> u8 {
        self.peripheral.uo_out()
    }

    #[must_use]
    pub const fn uio_out(&self) -> u8 {
        self.peripheral.uio_out()
    }

    #[must_use]
    pub const fn uio_oe(&self) -> u8 {
        self.peripheral.uio_oe()
    }

    /// # Panics
    ///
    /// Panics if `idx` is not a valid channel index.
    #[must_use]
    pub fn channel_state(&self, idx: usize) -> ChannelState {
        self.peripheral.channel(idx).state()
    }

    #[must_use]
    pub const fn registers(&self) -> &RegisterFile {
        self.peripheral.registers()
    }

    #[must_use]
    pub const fn peripheral(&self) -> &PeripheralEmulator {
        &self.peripheral
    }

    #[must_use]
    pub const fn decoder(&self) -> &SpiDecoder {
        &self.decoder
    }

    /// The most recently committed frame, read or write.
    #[must_use]
    pub const fn last_frame(&self) -> Option<SerialFrame> {
        self.last_frame
    }

    #[must_use]
    pub const fn frames_committed(&self) -> usize {
        self.frames_committed
    }

    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn tick_period(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.option.clk_freq().hz() as u64)
    }

    /// Simulation time since construction.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(
            (self.ticks as u128 * 1_000_000_000 / self.option.clk_freq().hz() as u128) as u64,
        )
    }

    #[must_use]
    pub fn clk_freq(&self) -> Freq<u32> {
        self.option.clk_freq()
    }

    #[must_use]
    pub const fn pwm_period(&self) -> u32 {
        self.peripheral.timer().period()
    }

    /// Actual PWM frequency, `clk_freq / pwm_period`.
    #[must_use]
    pub fn pwm_freq(&self) -> Freq<f64> {
        self.option.clk_freq().as_f64() / self.pwm_period() as f64
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
