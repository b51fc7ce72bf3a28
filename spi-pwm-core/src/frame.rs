use crate::error::FrameError;

/// A 7-bit register address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Address(u8);

impl core::fmt::Debug for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

impl Address {
    /// The lowest address.
    pub const MIN: Address = Address(0x00);
    /// The highest address.
    pub const MAX: Address = Address(0x7F);

    /// Creates a new [`Address`].
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::AddressOutOfRange`] if `address` does not fit in 7 bits.
    pub const fn new(address: u8) -> Result<Self, FrameError> {
        if address > Self::MAX.0 {
            return Err(FrameError::AddressOutOfRange(address));
        }
        Ok(Self(address))
    }

    /// Returns the address value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    // Conversions used by the [`SerialFrame`] bit field.
    #[doc(hidden)]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MAX.0)
    }

    #[doc(hidden)]
    pub const fn into_bits(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Address {
    type Error = FrameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Address> for u8 {
    fn from(value: Address) -> Self {
        value.0
    }
}

/// Direction of a serial transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadWrite {
    /// `read_write` bit is 0. Accepted, but has no effect.
    Read,
    /// `read_write` bit is 1.
    Write,
}

/// One 16-bit serial transaction.
///
/// The frame is shifted most-significant bit first, so the wire order is
/// `read_write`, `address[6:0]`, `data[7:0]`.
#[bitfield_struct::bitfield(u16)]
#[derive(PartialEq, Eq, Hash)]
pub struct SerialFrame {
    /// Payload byte.
    pub data: u8,
    /// Target register address.
    #[bits(7)]
    pub address: Address,
    /// `true` for a write transaction.
    pub write: bool,
}

impl SerialFrame {
    /// Creates a write frame.
    #[must_use]
    pub const fn write_command(address: Address, data: u8) -> Self {
        Self::new()
            .with_write(true)
            .with_address(address)
            .with_data(data)
    }

    /// Creates a read frame.
    #[must_use]
    pub const fn read_command(address: Address, data: u8) -> Self {
        Self::new()
            .with_write(false)
            .with_address(address)
            .with_data(data)
    }

    /// Returns the transaction direction.
    #[must_use]
    pub const fn direction(&self) -> ReadWrite {
        if self.write() {
            ReadWrite::Write
        } else {
            ReadWrite::Read
        }
    }

    /// Iterates over the bits in wire order (MSB first).
    pub fn bits(&self) -> impl Iterator<Item = bool> {
        let raw = self.into_bits();
        (0..crate::defined::FRAME_BITS)
            .rev()
            .map(move |i| (raw >> i) & 1 == 1)
    }
}
