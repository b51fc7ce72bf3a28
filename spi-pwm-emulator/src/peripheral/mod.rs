mod memory;
mod output;
mod pwm;

pub use memory::RegisterFile;
pub use pwm::{Channel, PwmTimer};

/// Register file and PWM engine.
pub struct PeripheralEmulator {
    mem: RegisterFile,
    timer: PwmTimer,
    uo_out: u8,
}

impl PeripheralEmulator {
    pub(crate) const fn new(period: u32) -> Self {
        Self {
            mem: RegisterFile::new(),
            timer: PwmTimer::new(period),
            uo_out: 0x00,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.mem = RegisterFile::new();
        self.timer.reset();
        self.uo_out = 0x00;
    }

    pub(crate) fn tick(&mut self) {
        self.update_pwm();
    }
}
