use itertools::Itertools;
use spi_pwm_core::channel::ChannelState;
use spi_pwm_emulator::Emulator;

use crate::{capture, falling_edges, rising_edges, write};

const PERIOD: usize = 3333;

fn setup(channel: usize, duty: u8) -> anyhow::Result<Emulator> {
    let mut emu = Emulator::new();
    write(&mut emu, 0x02, 1 << channel)?;
    write(&mut emu, 0x00, 1 << channel)?;
    write(&mut emu, 0x04, duty)?;
    Ok(emu)
}

#[rstest::rstest]
#[test]
fn half_duty(#[values(0, 3, 7)] channel: usize) -> anyhow::Result<()> {
    let mut emu = setup(channel, 0x80)?;
    assert_eq!(ChannelState::Waveform, emu.channel_state(channel));

    let samples = capture(&mut emu, PERIOD * 4);
    let rises = rising_edges(&samples, channel);
    let falls = falling_edges(&samples, channel);
    assert!(rises.len() >= 3);

    rises.iter().tuple_windows().for_each(|(a, b)| {
        assert_eq!(PERIOD, b - a);
    });
    let rise = rises[0];
    let fall = *falls.iter().find(|&&f| f > rise).unwrap();
    let duty = (fall - rise) as f64 / PERIOD as f64;
    assert!((0.49..=0.51).contains(&duty), "{}", duty);

    let freq = emu.clk_freq().as_f64().hz() / PERIOD as f64;
    assert!((2970.0..=3030.0).contains(&freq));

    samples
        .iter()
        .for_each(|&v| assert_eq!(0, v & !(1 << channel)));
    Ok(())
}

#[test]
fn zero_duty_never_rises() -> anyhow::Result<()> {
    let mut emu = setup(0, 0x00)?;
    let samples = capture(&mut emu, PERIOD * 5);
    assert!(rising_edges(&samples, 0).is_empty());
    assert!(samples.iter().all(|&v| v == 0x00));
    Ok(())
}

#[test]
fn full_duty_never_falls() -> anyhow::Result<()> {
    let mut emu = setup(0, 0xFF)?;
    capture(&mut emu, PERIOD);
    let samples = capture(&mut emu, PERIOD * 5);
    assert!(falling_edges(&samples, 0).is_empty());
    assert!(samples.iter().all(|&v| v == 0x01));
    Ok(())
}

#[rstest::rstest]
#[case(0x01, 13)]
#[case(0x40, 833)]
#[case(0xCF, 2695)]
#[case(0xFE, 3306)]
#[test]
fn high_time(#[case] duty: u8, #[case] expected: usize) -> anyhow::Result<()> {
    let mut emu = setup(0, duty)?;
    let samples = capture(&mut emu, PERIOD * 3);
    let rise = rising_edges(&samples, 0)[0];
    assert_eq!(expected, samples[rise..rise + PERIOD].iter().filter(|&&v| v == 0x01).count());
    Ok(())
}

#[test]
fn frequency_independent_of_duty() -> anyhow::Result<()> {
    [0x01, 0x40, 0x80, 0xCF, 0xFE]
        .into_iter()
        .cartesian_product([0, 5])
        .try_for_each(|(duty, channel)| -> anyhow::Result<()> {
            let mut emu = setup(channel, duty)?;
            let samples = capture(&mut emu, PERIOD * 4);
            rising_edges(&samples, channel)
                .iter()
                .tuple_windows()
                .for_each(|(a, b)| assert_eq!(PERIOD, b - a));
            Ok(())
        })
}

#[test]
fn gate_forces_low() -> anyhow::Result<()> {
    let mut emu = setup(0, 0xFF)?;
    capture(&mut emu, PERIOD);
    assert_eq!(0x01, emu.uo_out());

    write(&mut emu, 0x00, 0x00)?;
    let samples = capture(&mut emu, PERIOD * 2);
    assert!(samples.iter().all(|&v| v == 0x00));
    assert_eq!(ChannelState::Waveform, emu.channel_state(0));
    Ok(())
}

#[test]
fn disable_returns_to_static() -> anyhow::Result<()> {
    let mut emu = setup(0, 0x80)?;
    write(&mut emu, 0x02, 0x00)?;
    assert_eq!(ChannelState::StaticHigh, emu.channel_state(0));
    let samples = capture(&mut emu, PERIOD * 2);
    assert!(samples.iter().all(|&v| v == 0x01));
    Ok(())
}

#[test]
fn channels_share_phase() -> anyhow::Result<()> {
    let mut emu = Emulator::new();
    write(&mut emu, 0x04, 0x80)?;
    write(&mut emu, 0x00, 0xFF)?;
    write(&mut emu, 0x02, 0x0F)?;
    let samples = capture(&mut emu, PERIOD * 3);
    assert!(samples.iter().all(|&v| v == 0xF0 || v == 0xFF));
    Ok(())
}
