use core::time::Duration;

use crate::common::Freq;

/// The number of channels in each output bank.
pub const NUM_CHANNELS: usize = 8;

/// The number of bits in one serial frame.
pub const FRAME_BITS: u8 = 16;

/// The number of flip-flop stages every input passes through before edge detection.
pub const SYNC_STAGES: usize = 2;

/// The system clock of the reference environment.
pub const DEFAULT_CLK_FREQ: Freq<u32> = Freq { freq: 10_000_000 };

/// The nominal PWM output frequency.
pub const DEFAULT_PWM_FREQ: Freq<u32> = Freq { freq: 3_000 };

/// The smallest PWM period (in ticks) that still gives every duty step its own compare point.
pub const PWM_PERIOD_MIN: u32 = 256;

/// Half of the SCLK period used by the reference host, in system ticks.
pub const DEFAULT_HALF_SCLK_TICKS: u32 = 50;

/// Idle ticks the reference host waits after releasing chip select.
pub const DEFAULT_CS_RELEASE_TICKS: u32 = 600;

/// How long the reference host waits for an output edge.
pub const DEFAULT_EDGE_TIMEOUT: Duration = Duration::from_micros(1000);
