//! Cycle-level emulator of a serially configured PWM peripheral.
//!
//! [`Emulator`] is advanced one system-clock tick at a time. Each tick samples the serial input,
//! commits at most one frame into the register file and updates the primary output bank from the
//! shared PWM counter.

mod emulator;
pub mod error;
pub mod option;
pub mod peripheral;
pub mod spi;

pub use emulator::Emulator;
pub use error::EmulatorError;
pub use option::EmulatorOption;
pub use peripheral::PeripheralEmulator;
pub use spi::SpiDecoder;
