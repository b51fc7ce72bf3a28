pub mod error;
pub mod host;
pub mod option;
pub mod prelude;
pub mod recording;

pub use spi_pwm_core as core;
pub use spi_pwm_emulator as emulator;

pub use host::SpiHost;
