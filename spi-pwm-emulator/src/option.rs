use getset::CopyGetters;
use spi_pwm_core::{
    common::Freq,
    defined::{DEFAULT_CLK_FREQ, DEFAULT_PWM_FREQ, PWM_PERIOD_MIN},
};

use crate::error::EmulatorError;

#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
pub struct EmulatorOption {
    #[getset(get_copy = "pub")]
    clk_freq: Freq<u32>,
    #[getset(get_copy = "pub")]
    pwm_freq: Freq<u32>,
}

impl Default for EmulatorOption {
    fn default() -> Self {
        Self::new()
    }
}

impl EmulatorOption {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clk_freq: DEFAULT_CLK_FREQ,
            pwm_freq: DEFAULT_PWM_FREQ,
        }
    }

    #[must_use]
    pub const fn with_clk_freq(mut self, clk_freq: Freq<u32>) -> Self {
        self.clk_freq = clk_freq;
        self
    }

    #[must_use]
    pub const fn with_pwm_freq(mut self, pwm_freq: Freq<u32>) -> Self {
        self.pwm_freq = pwm_freq;
        self
    }

    /// Number of system ticks in one PWM period, rounded to the nearest tick.
    pub fn pwm_period(&self) -> Result<u32, EmulatorError> {
        let clk = self.clk_freq.hz();
        let pwm = self.pwm_freq.hz();
        if clk == 0 || pwm == 0 {
            return Err(EmulatorError::ZeroFrequency);
        }
        let period = pwm_period(clk, pwm);
        if period < PWM_PERIOD_MIN {
            return Err(EmulatorError::PwmFrequencyTooHigh {
                clk: self.clk_freq,
                pwm: self.pwm_freq,
            });
        }
        Ok(period)
    }
}

pub(crate) const fn pwm_period(clk: u32, pwm: u32) -> u32 {
    ((clk as u64 + pwm as u64 / 2) / pwm as u64) as u32
}

pub(crate) const DEFAULT_PWM_PERIOD: u32 = pwm_period(DEFAULT_CLK_FREQ.hz(), DEFAULT_PWM_FREQ.hz());
