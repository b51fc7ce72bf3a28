use rand::Rng;
use spi_pwm_core::{
    frame::{Address, SerialFrame},
    register::Register,
};
use spi_pwm_emulator::{Emulator, peripheral::RegisterFile};

use crate::{send, send_bits, write};

#[test]
fn write_static_banks() -> anyhow::Result<()> {
    let mut emu = Emulator::new();

    write(&mut emu, 0x00, 0xF0)?;
    assert_eq!(0xF0, emu.uo_out());

    write(&mut emu, 0x01, 0xCC)?;
    assert_eq!(0xCC, emu.uio_out());
    assert_eq!(0xF0, emu.uo_out());

    Ok(())
}

#[rstest::rstest]
#[case(0x03)]
#[case(0x05)]
#[case(0x30)]
#[case(0x41)]
#[case(0x7F)]
#[test]
fn write_unbacked_address(#[case] address: u8) -> anyhow::Result<()> {
    let mut emu = Emulator::new();
    write(&mut emu, 0x00, 0xF0)?;
    write(&mut emu, 0x01, 0xCC)?;
    let registers = *emu.registers();

    write(&mut emu, address, 0xAA)?;

    assert_eq!(0xF0, emu.uo_out());
    assert_eq!(0xCC, emu.uio_out());
    assert_eq!(registers, *emu.registers());
    assert_eq!(3, emu.frames_committed());
    Ok(())
}

#[test]
fn read_is_noop() -> anyhow::Result<()> {
    let mut emu = Emulator::new();
    write(&mut emu, 0x00, 0x5A)?;
    let registers = *emu.registers();

    Register::ALL.into_iter().for_each(|r| {
        send(&mut emu, SerialFrame::read_command(r.address(), 0xFF));
    });

    assert_eq!(registers, *emu.registers());
    assert_eq!(0x5A, emu.uo_out());
    assert_eq!(5, emu.frames_committed());
    assert_eq!(
        Some(SerialFrame::read_command(Register::DutyCycle.address(), 0xFF)),
        emu.last_frame()
    );
    Ok(())
}

#[rstest::rstest]
#[case(0)]
#[case(1)]
#[case(10)]
#[case(15)]
#[test]
fn short_frame_discarded(#[case] bits: usize) -> anyhow::Result<()> {
    let mut emu = Emulator::new();
    send_bits(
        &mut emu,
        SerialFrame::write_command(Address::new(0x00)?, 0xFF),
        bits,
    );
    assert_eq!(0x00, emu.uo_out());
    assert_eq!(0, emu.frames_committed());

    write(&mut emu, 0x01, 0x3C)?;
    assert_eq!(0x3C, emu.uio_out());
    assert_eq!(0x00, emu.uo_out());
    Ok(())
}

#[test]
fn ten_bits_of_valid_command_discarded() -> anyhow::Result<()> {
    let mut emu = Emulator::new();
    send_bits(
        &mut emu,
        SerialFrame::write_command(Address::new(0x01)?, 0x00),
        10,
    );
    assert_eq!(0x00, emu.uio_out());
    assert_eq!(RegisterFile::new(), *emu.registers());
    Ok(())
}

#[test]
fn random_frames() -> anyhow::Result<()> {
    let mut rng = rand::rng();
    let mut emu = Emulator::new();

    (0..32).try_for_each(|_| -> anyhow::Result<()> {
        let address = Address::new(rng.random_range(0x00..=0x7F))?;
        let data = rng.random();
        let expected = {
            let mut registers = *emu.registers();
            _ = registers.write(address, data);
            registers
        };
        send(&mut emu, SerialFrame::write_command(address, data));
        assert_eq!(expected, *emu.registers());
        assert_eq!(Some(SerialFrame::write_command(address, data)), emu.last_frame());
        if emu.registers().pwm_enable() == 0 {
            assert_eq!(emu.registers().output_level(), emu.uo_out());
        }
        assert_eq!(emu.registers().aux_output(), emu.uio_out());
        Ok(())
    })
}
