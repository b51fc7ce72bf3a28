use super::PeripheralEmulator;

impl PeripheralEmulator {
    /// Primary bank, updated once per tick.
    #[must_use]
    pub const fn uo_out(&self) -> u8 {
        self.uo_out
    }

    /// Auxiliary bank, follows the register without waiting for a tick.
    #[must_use]
    pub const fn uio_out(&self) -> u8 {
        self.mem.aux_output()
    }

    /// Output enable of the bidirectional bank. Every pin is driven.
    #[must_use]
    pub const fn uio_oe(&self) -> u8 {
        0xFF
    }
}
