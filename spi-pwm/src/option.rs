use getset::CopyGetters;
use spi_pwm_core::defined::{DEFAULT_CS_RELEASE_TICKS, DEFAULT_HALF_SCLK_TICKS, FRAME_BITS};

/// Bus timing of [`SpiHost`], in system-clock ticks.
///
/// [`SpiHost`]: crate::SpiHost
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
pub struct HostOption {
    /// Ticks per SCLK half period.
    #[getset(get_copy = "pub")]
    half_sclk: u32,
    /// Idle ticks after chip select is released.
    #[getset(get_copy = "pub")]
    cs_release: u32,
}

impl Default for HostOption {
    fn default() -> Self {
        Self::new()
    }
}

impl HostOption {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            half_sclk: DEFAULT_HALF_SCLK_TICKS,
            cs_release: DEFAULT_CS_RELEASE_TICKS,
        }
    }

    #[must_use]
    pub const fn with_half_sclk(mut self, half_sclk: u32) -> Self {
        self.half_sclk = half_sclk;
        self
    }

    #[must_use]
    pub const fn with_cs_release(mut self, cs_release: u32) -> Self {
        self.cs_release = cs_release;
        self
    }

    /// Ticks spent on one full frame, from chip select assertion to the end of the idle gap.
    #[must_use]
    pub const fn frame_ticks(&self) -> u64 {
        1 + FRAME_BITS as u64 * 2 * self.half_sclk as u64 + self.cs_release as u64
    }
}
