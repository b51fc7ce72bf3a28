use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
/// An error produced when building frames or selecting channels on the host side.
pub enum FrameError {
    /// The address does not fit in 7 bits.
    #[error("Address ({0:#04X}) is out of range [0x00, 0x7F]")]
    AddressOutOfRange(u8),
    /// The channel index is not in the output bank.
    #[error("Channel ({0}) is out of range [0, {max})", max = crate::defined::NUM_CHANNELS)]
    ChannelOutOfRange(u8),
}
