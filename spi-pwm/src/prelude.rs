pub use crate::{
    error::HostError,
    host::{Edge, SpiHost},
    option::HostOption,
    recording::{ChannelRecord, Record},
};

pub use spi_pwm_core::prelude::*;

pub use spi_pwm_emulator::{Emulator, EmulatorError, EmulatorOption};
