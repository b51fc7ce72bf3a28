use spi_pwm_core::common::{MHz, kHz};
use spi_pwm_emulator::{Emulator, EmulatorError, EmulatorOption};

use crate::{capture, rising_edges, write};

#[test]
fn custom_frequency() -> anyhow::Result<()> {
    let mut emu = Emulator::with_option(
        EmulatorOption::default()
            .with_clk_freq(20 * MHz)
            .with_pwm_freq(10 * kHz),
    )?;
    assert_eq!(2000, emu.pwm_period());
    assert_eq!(10_000., emu.pwm_freq().hz());

    write(&mut emu, 0x02, 0x01)?;
    write(&mut emu, 0x00, 0x01)?;
    write(&mut emu, 0x04, 0x80)?;
    let samples = capture(&mut emu, 8000);
    let rises = rising_edges(&samples, 0);
    assert_eq!(2000, rises[1] - rises[0]);
    Ok(())
}

#[test]
fn invalid_option() {
    assert_eq!(
        Some(EmulatorError::PwmFrequencyTooHigh {
            clk: 10 * MHz,
            pwm: 100 * kHz
        }),
        Emulator::with_option(EmulatorOption::default().with_pwm_freq(100 * kHz)).err()
    );
}
