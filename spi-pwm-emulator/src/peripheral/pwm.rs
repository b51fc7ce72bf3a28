use spi_pwm_core::{
    channel::{ChannelMode, ChannelState, Duty},
    defined::NUM_CHANNELS,
};

use super::PeripheralEmulator;

/// The free-running counter shared by every channel.
///
/// The duty register is latched into `compare` only at phase 0, so a duty change takes effect
/// at the next period boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmTimer {
    period: u32,
    counter: u32,
    compare: u32,
}

impl PwmTimer {
    pub(crate) const fn new(period: u32) -> Self {
        Self {
            period,
            counter: 0,
            compare: 0,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.counter = 0;
        self.compare = 0;
    }

    pub(crate) fn latch(&mut self, duty: Duty) {
        if self.counter == 0 {
            self.compare = duty.compare(self.period);
        }
    }

    pub(crate) fn advance(&mut self) {
        self.counter += 1;
        if self.counter == self.period {
            self.counter = 0;
        }
    }

    #[must_use]
    pub const fn period(&self) -> u32 {
        self.period
    }

    #[must_use]
    pub const fn counter(&self) -> u32 {
        self.counter
    }

    #[must_use]
    pub const fn compare(&self) -> u32 {
        self.compare
    }

    /// Level of the shared waveform at the current phase.
    #[must_use]
    pub const fn waveform(&self) -> bool {
        self.counter < self.compare
    }
}

/// A view of one primary channel: its mode and the shared timer it compares against.
#[derive(Debug, Clone, Copy)]
pub struct Channel<'a> {
    idx: usize,
    mode: ChannelMode,
    timer: &'a PwmTimer,
}

impl Channel<'_> {
    #[must_use]
    pub const fn idx(&self) -> usize {
        self.idx
    }

    #[must_use]
    pub const fn mode(&self) -> ChannelMode {
        self.mode
    }

    #[must_use]
    pub fn state(&self) -> ChannelState {
        self.mode.into()
    }

    #[must_use]
    pub const fn level(&self) -> bool {
        self.mode.level(self.timer.waveform())
    }
}

impl PeripheralEmulator {
    #[must_use]
    pub const fn timer(&self) -> &PwmTimer {
        &self.timer
    }

    /// # Panics
    ///
    /// Panics if `idx` is not less than [`NUM_CHANNELS`].
    #[must_use]
    pub fn channel(&self, idx: usize) -> Channel<'_> {
        assert!(idx < NUM_CHANNELS, "channel index out of range: {}", idx);
        Channel {
            idx,
            mode: ChannelMode::derive(self.mem.output_level(), self.mem.pwm_enable(), idx),
            timer: &self.timer,
        }
    }

    pub fn channels(&self) -> impl Iterator<Item = Channel<'_>> {
        (0..NUM_CHANNELS).map(|i| self.channel(i))
    }

    pub(crate) fn update_pwm(&mut self) {
        self.timer.latch(Duty(self.mem.duty_cycle()));
        self.uo_out = self
            .channels()
            .filter(|ch| ch.level())
            .fold(0x00, |acc, ch| acc | (1 << ch.idx()));
        self.timer.advance();
    }
}
