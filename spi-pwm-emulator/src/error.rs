use spi_pwm_core::{common::Freq, defined::PWM_PERIOD_MIN};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum EmulatorError {
    #[error("Frequency must not be zero")]
    ZeroFrequency,
    #[error(
        "PWM frequency ({pwm:?}) is too high for the system clock ({clk:?}), the period must be at least {min} ticks",
        min = PWM_PERIOD_MIN
    )]
    PwmFrequencyTooHigh { clk: Freq<u32>, pwm: Freq<u32> },
}
