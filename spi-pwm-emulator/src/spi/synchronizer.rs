use spi_pwm_core::{defined::SYNC_STAGES, pins::SerialInput};

/// A chain of flip-flops clocked by the system tick.
#[derive(Debug, Clone, Copy)]
struct Synchronizer<const STAGES: usize> {
    stages: [bool; STAGES],
    init: bool,
}

impl<const STAGES: usize> Synchronizer<STAGES> {
    const fn new(init: bool) -> Self {
        Self {
            stages: [init; STAGES],
            init,
        }
    }

    fn reset(&mut self) {
        self.stages = [self.init; STAGES];
    }

    fn clock(&mut self, input: bool) -> bool {
        self.stages.rotate_right(1);
        self.stages[0] = input;
        self.stages[STAGES - 1]
    }
}

/// Re-samples every serial input into the system tick domain.
#[derive(Debug, Clone, Copy)]
pub(crate) struct InputSynchronizer {
    cs_active: Synchronizer<SYNC_STAGES>,
    data: Synchronizer<SYNC_STAGES>,
    sclk: Synchronizer<SYNC_STAGES>,
}

impl InputSynchronizer {
    pub(crate) const fn new() -> Self {
        Self {
            cs_active: Synchronizer::new(SerialInput::IDLE.cs_active),
            data: Synchronizer::new(SerialInput::IDLE.data),
            sclk: Synchronizer::new(SerialInput::IDLE.sclk),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.cs_active.reset();
        self.data.reset();
        self.sclk.reset();
    }

    pub(crate) fn clock(&mut self, input: SerialInput) -> SerialInput {
        SerialInput {
            cs_active: self.cs_active.clock(input.cs_active),
            data: self.data.clock(input.data),
            sclk: self.sclk.clock(input.sclk),
        }
    }
}
