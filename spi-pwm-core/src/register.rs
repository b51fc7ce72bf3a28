use crate::frame::Address;

/// Address of the output level / gate register.
pub const ADDR_OUTPUT_LEVEL: u8 = 0x00;
/// Address of the auxiliary output register.
pub const ADDR_AUX_OUTPUT: u8 = 0x01;
/// Address of the PWM enable register.
pub const ADDR_PWM_ENABLE: u8 = 0x02;
/// Address of the duty cycle register.
pub const ADDR_DUTY_CYCLE: u8 = 0x04;

/// A register backed by real state.
///
/// Every other address in `0x00..=0x7F` accepts writes and discards them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[repr(u8)]
pub enum Register {
    /// Per-channel static level, or waveform gate when the channel is PWM-enabled.
    #[display("OutputLevel")]
    OutputLevel = ADDR_OUTPUT_LEVEL,
    /// Per-channel level of the auxiliary bank.
    #[display("AuxOutput")]
    AuxOutput = ADDR_AUX_OUTPUT,
    /// Per-channel selection between static level and waveform.
    #[display("PwmEnable")]
    PwmEnable = ADDR_PWM_ENABLE,
    /// Shared duty cycle, interpreted as `value / 256`.
    #[display("DutyCycle")]
    DutyCycle = ADDR_DUTY_CYCLE,
}

impl Register {
    /// All backed registers in address order.
    pub const ALL: [Register; 4] = [
        Register::OutputLevel,
        Register::AuxOutput,
        Register::PwmEnable,
        Register::DutyCycle,
    ];

    /// Looks up the register at `address`, if that address is backed.
    #[must_use]
    pub const fn from_address(address: Address) -> Option<Self> {
        match address.value() {
            ADDR_OUTPUT_LEVEL => Some(Register::OutputLevel),
            ADDR_AUX_OUTPUT => Some(Register::AuxOutput),
            ADDR_PWM_ENABLE => Some(Register::PwmEnable),
            ADDR_DUTY_CYCLE => Some(Register::DutyCycle),
            _ => None,
        }
    }

    /// Returns the address of this register.
    #[must_use]
    pub const fn address(self) -> Address {
        Address::from_bits(self as u8)
    }
}

impl From<Register> for Address {
    fn from(value: Register) -> Self {
        value.address()
    }
}
