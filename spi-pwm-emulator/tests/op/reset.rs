use spi_pwm_core::{
    frame::{Address, SerialFrame},
    pins::frame_half_cycles,
};
use spi_pwm_emulator::{Emulator, peripheral::RegisterFile};

use crate::write;

#[test]
fn reset_clears_state() -> anyhow::Result<()> {
    let mut emu = Emulator::new();
    write(&mut emu, 0x00, 0xFF)?;
    write(&mut emu, 0x01, 0xFF)?;
    write(&mut emu, 0x02, 0x01)?;
    write(&mut emu, 0x04, 0x80)?;

    emu.set_reset(true);
    emu.tick_n(10);
    assert!(emu.is_reset());
    assert_eq!(0x00, emu.uo_out());
    assert_eq!(0x00, emu.uio_out());
    assert_eq!(RegisterFile::new(), *emu.registers());
    assert_eq!(0, emu.peripheral().timer().counter());

    emu.set_reset(false);
    emu.tick();
    assert_eq!(1, emu.peripheral().timer().counter());
    Ok(())
}

#[test]
fn reset_holds_decoder() -> anyhow::Result<()> {
    let mut emu = Emulator::new();
    emu.set_rst_n(false);
    frame_half_cycles(SerialFrame::write_command(Address::new(0x01)?, 0xFF)).for_each(|input| {
        emu.set_input(input);
        emu.tick_n(50);
    });
    assert_eq!(0, emu.decoder().bits_received());
    assert_eq!(0x00, emu.uio_out());

    emu.set_rst_n(true);
    write(&mut emu, 0x01, 0xA5)?;
    assert_eq!(0xA5, emu.uio_out());
    Ok(())
}

#[test]
fn reset_drops_partial_frame() -> anyhow::Result<()> {
    let mut emu = Emulator::new();
    frame_half_cycles(SerialFrame::write_command(Address::new(0x01)?, 0xFF))
        .take(20)
        .for_each(|input| {
            emu.set_input(input);
            emu.tick_n(50);
        });
    assert!(emu.decoder().bits_received() > 0);

    emu.set_reset(true);
    emu.tick();
    emu.set_reset(false);
    assert_eq!(0, emu.decoder().bits_received());
    Ok(())
}
