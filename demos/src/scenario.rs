use anyhow::Result;

use spi_pwm::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut host = SpiHost::new(Emulator::new());
    host.reset(5);

    host.write_register(Register::OutputLevel, 0xF0);
    tracing::info!("uo_out = 0x{:02X}", host.uo_out());

    host.write_register(Register::AuxOutput, 0xCC);
    tracing::info!("uio_out = 0x{:02X}", host.uio_out());

    host.write(0x30, 0xAA)?;
    tracing::info!(
        "after write to 0x30: uo_out = 0x{:02X}, uio_out = 0x{:02X}",
        host.uo_out(),
        host.uio_out()
    );

    host.write_register(Register::PwmEnable, 0x01);
    host.write_register(Register::OutputLevel, 0x01);
    host.write_register(Register::DutyCycle, 0x80);
    host.idle(host.pwm_period() as u64);

    host.start_recording()?;
    host.idle(host.pwm_period() as u64 * 4);
    let record = host.finish_recording()?;

    let ch0 = record.channel(0)?;
    match (ch0.frequency(), ch0.duty()) {
        (Some(freq), Some(duty)) => {
            tracing::info!("channel 0: frequency = {:?}, duty = {:.4}", freq, duty)
        }
        _ => tracing::warn!("channel 0: no full period in {:?}", record.duration()),
    }

    Ok(())
}
