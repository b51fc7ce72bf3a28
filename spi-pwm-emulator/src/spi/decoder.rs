use spi_pwm_core::{defined::FRAME_BITS, frame::SerialFrame, pins::SerialInput};

use super::InputSynchronizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Shifting { buffer: u16, count: u8 },
    Complete,
}

/// Rebuilds 16-bit frames from the sampled serial inputs.
///
/// A frame is committed on the 16th SCLK rising edge of one continuous chip-select window.
/// Releasing chip select earlier drops the partial frame. Edges after the 16th are ignored
/// until chip select is released.
pub struct SpiDecoder {
    sync: InputSynchronizer,
    prev_sclk: bool,
    state: State,
}

impl SpiDecoder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sync: InputSynchronizer::new(),
            prev_sclk: SerialInput::IDLE.sclk,
            state: State::Idle,
        }
    }

    pub fn reset(&mut self) {
        self.sync.reset();
        self.prev_sclk = SerialInput::IDLE.sclk;
        self.state = State::Idle;
    }

    /// Number of bits captured in the current chip-select window.
    #[must_use]
    pub const fn bits_received(&self) -> u8 {
        match self.state {
            State::Idle => 0,
            State::Shifting { count, .. } => count,
            State::Complete => FRAME_BITS,
        }
    }

    /// Whether the decoder sees chip select asserted.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        !matches!(self.state, State::Idle)
    }

    #[must_use]
    pub fn clock(&mut self, input: SerialInput) -> Option<SerialFrame> {
        let input = self.sync.clock(input);
        let rising = input.sclk && !self.prev_sclk;
        self.prev_sclk = input.sclk;

        if !input.cs_active {
            if let State::Shifting { count, .. } = self.state {
                if count > 0 {
                    tracing::trace!("Chip select released after {} bits, frame dropped.", count);
                }
            }
            self.state = State::Idle;
            return None;
        }

        if self.state == State::Idle {
            self.state = State::Shifting {
                buffer: 0,
                count: 0,
            };
        }

        if !rising {
            return None;
        }

        match self.state {
            State::Shifting { buffer, count } => {
                let buffer = (buffer << 1) | input.data as u16;
                let count = count + 1;
                if count < FRAME_BITS {
                    self.state = State::Shifting { buffer, count };
                    return None;
                }
                self.state = State::Complete;
                let frame = SerialFrame::from_bits(buffer);
                tracing::debug!("Frame committed: {:?}.", frame);
                Some(frame)
            }
            State::Complete => {
                tracing::trace!("SCLK edge after a complete frame ignored.");
                None
            }
            State::Idle => None,
        }
    }
}

impl Default for SpiDecoder {
    fn default() -> Self {
        Self::new()
    }
}
