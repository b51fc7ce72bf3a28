use crate::frame::SerialFrame;

/// The dedicated input byte (`ui_in`) of the reference pinout.
#[bitfield_struct::bitfield(u8)]
#[derive(PartialEq, Eq)]
pub struct UiIn {
    /// Serial clock.
    pub sclk: bool,
    /// Controller-out / peripheral-in data.
    pub copi: bool,
    /// Chip select, active low.
    pub ncs: bool,
    #[bits(5)]
    __: u8,
}

/// One sample of the serial input signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SerialInput {
    /// `true` while a transaction is in progress (chip select asserted).
    pub cs_active: bool,
    /// Data line.
    pub data: bool,
    /// Serial clock.
    pub sclk: bool,
}

impl SerialInput {
    /// The bus with no transaction in progress.
    pub const IDLE: SerialInput = SerialInput {
        cs_active: false,
        data: false,
        sclk: false,
    };

    /// Creates a sample of an active transaction.
    #[must_use]
    pub const fn active(data: bool, sclk: bool) -> Self {
        Self {
            cs_active: true,
            data,
            sclk,
        }
    }
}

impl Default for SerialInput {
    fn default() -> Self {
        Self::IDLE
    }
}

impl From<UiIn> for SerialInput {
    fn from(value: UiIn) -> Self {
        Self {
            cs_active: !value.ncs(),
            data: value.copi(),
            sclk: value.sclk(),
        }
    }
}

impl From<SerialInput> for UiIn {
    fn from(value: SerialInput) -> Self {
        UiIn::new()
            .with_ncs(!value.cs_active)
            .with_copi(value.data)
            .with_sclk(value.sclk)
    }
}

/// Expands a frame into the input samples of one bit cell per bit, each as a low and a high
/// half of SCLK.
pub fn frame_half_cycles(frame: SerialFrame) -> impl Iterator<Item = SerialInput> {
    frame.bits().flat_map(|bit| {
        [
            SerialInput::active(bit, false),
            SerialInput::active(bit, true),
        ]
    })
}
