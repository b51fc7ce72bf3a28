use crate::{defined::NUM_CHANNELS, error::FrameError};

/// A set of channels, one bit per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Channels(u8);

bitflags::bitflags! {
    impl Channels : u8 {
        /// Channel 0
        const CH0 = 1 << 0;
        /// Channel 1
        const CH1 = 1 << 1;
        /// Channel 2
        const CH2 = 1 << 2;
        /// Channel 3
        const CH3 = 1 << 3;
        /// Channel 4
        const CH4 = 1 << 4;
        /// Channel 5
        const CH5 = 1 << 5;
        /// Channel 6
        const CH6 = 1 << 6;
        /// Channel 7
        const CH7 = 1 << 7;
    }
}

impl Channels {
    /// Returns the set containing only channel `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::ChannelOutOfRange`] if `idx` is not a channel of the bank.
    pub const fn single(idx: u8) -> Result<Self, FrameError> {
        if idx as usize >= NUM_CHANNELS {
            return Err(FrameError::ChannelOutOfRange(idx));
        }
        Ok(Self(1 << idx))
    }
}

/// How a channel of the primary bank is driven, derived from the output level and PWM enable
/// registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelMode {
    /// PWM disabled. The output is the held level.
    Static(bool),
    /// PWM enabled. The waveform passes only while the gate is open.
    Gated(bool),
}

impl ChannelMode {
    /// Derives the mode of channel `idx` from the two register bytes.
    #[must_use]
    pub const fn derive(output_level: u8, pwm_enable: u8, idx: usize) -> Self {
        let level = (output_level >> idx) & 1 == 1;
        if (pwm_enable >> idx) & 1 == 1 {
            ChannelMode::Gated(level)
        } else {
            ChannelMode::Static(level)
        }
    }

    /// Resolves the output level, given the state of the shared waveform in this tick.
    #[must_use]
    pub const fn level(self, waveform: bool) -> bool {
        match self {
            ChannelMode::Static(level) => level,
            ChannelMode::Gated(gate) => gate && waveform,
        }
    }
}

/// Observable state of one primary channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelState {
    /// Held low.
    StaticLow,
    /// Held high.
    StaticHigh,
    /// Following the shared waveform. A closed gate holds the output low.
    Waveform,
}

impl From<ChannelMode> for ChannelState {
    fn from(value: ChannelMode) -> Self {
        match value {
            ChannelMode::Static(false) => ChannelState::StaticLow,
            ChannelMode::Static(true) => ChannelState::StaticHigh,
            ChannelMode::Gated(_) => ChannelState::Waveform,
        }
    }
}

/// Duty cycle register value, interpreted as `value / 256` of the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Duty(pub u8);

impl Duty {
    /// Always low.
    pub const ZERO: Duty = Duty(0x00);
    /// Half of the period high.
    pub const HALF: Duty = Duty(0x80);
    /// Always high.
    pub const FULL: Duty = Duty(0xFF);

    /// Returns the counter threshold below which the waveform is high.
    ///
    /// [`Duty::FULL`] maps to the whole `period` so that a 100% setting never produces a falling
    /// edge.
    #[must_use]
    pub const fn compare(self, period: u32) -> u32 {
        match self.0 {
            0xFF => period,
            v => ((v as u64 * period as u64) >> 8) as u32,
        }
    }

    /// Returns the nominal ratio of high time to period.
    #[must_use]
    pub fn ratio(self) -> f64 {
        match self.0 {
            0xFF => 1.0,
            v => v as f64 / 256.0,
        }
    }
}
