use spi_pwm_core::{frame::Address, register::Register};

use super::PeripheralEmulator;

/// Backing store of the four implemented registers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegisterFile {
    output_level: u8,
    aux_output: u8,
    pwm_enable: u8,
    duty_cycle: u8,
}

impl RegisterFile {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            output_level: 0x00,
            aux_output: 0x00,
            pwm_enable: 0x00,
            duty_cycle: 0x00,
        }
    }

    /// Stores `data` if `address` is backed and returns the register written.
    ///
    /// Writes to any other address are accepted and dropped.
    pub fn write(&mut self, address: Address, data: u8) -> Option<Register> {
        let register = Register::from_address(address)?;
        *self.slot_mut(register) = data;
        Some(register)
    }

    #[must_use]
    pub const fn read(&self, register: Register) -> u8 {
        match register {
            Register::OutputLevel => self.output_level,
            Register::AuxOutput => self.aux_output,
            Register::PwmEnable => self.pwm_enable,
            Register::DutyCycle => self.duty_cycle,
        }
    }

    fn slot_mut(&mut self, register: Register) -> &mut u8 {
        match register {
            Register::OutputLevel => &mut self.output_level,
            Register::AuxOutput => &mut self.aux_output,
            Register::PwmEnable => &mut self.pwm_enable,
            Register::DutyCycle => &mut self.duty_cycle,
        }
    }

    #[must_use]
    pub const fn output_level(&self) -> u8 {
        self.output_level
    }

    #[must_use]
    pub const fn aux_output(&self) -> u8 {
        self.aux_output
    }

    #[must_use]
    pub const fn pwm_enable(&self) -> u8 {
        self.pwm_enable
    }

    #[must_use]
    pub const fn duty_cycle(&self) -> u8 {
        self.duty_cycle
    }
}

impl PeripheralEmulator {
    pub(crate) fn write(&mut self, address: Address, data: u8) {
        match self.mem.write(address, data) {
            Some(register) => {
                tracing::debug!("{} ({}) <- 0x{:02X}.", register, address, data)
            }
            None => tracing::debug!("Write to unbacked address {} ignored.", address),
        }
    }

    #[must_use]
    pub const fn registers(&self) -> &RegisterFile {
        &self.mem
    }
}
