#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Core types for a serially configured PWM peripheral.
//!
//! The peripheral receives 16-bit frames (`read_write | address[6:0] | data[7:0]`) over a
//! chip-select framed serial bus and drives two banks of [`NUM_CHANNELS`] outputs:
//! a primary bank where each channel is either a static level or a gated PWM waveform, and
//! an auxiliary bank that mirrors a register directly.
//!
//! [`NUM_CHANNELS`]: defined::NUM_CHANNELS

/// Channel sets, modes and duty cycle.
pub mod channel;
/// Frequency units.
pub mod common;
/// Common constants.
pub mod defined;
/// Error types.
pub mod error;
/// Serial frame and register address.
pub mod frame;
/// Pin mapping of the serial input.
pub mod pins;
/// Register map.
pub mod register;

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        channel::{ChannelMode, ChannelState, Channels, Duty},
        common::{Freq, Hz, MHz, kHz},
        defined::*,
        error::FrameError,
        frame::{Address, ReadWrite, SerialFrame},
        pins::{SerialInput, UiIn},
        register::Register,
    };
}
