use anyhow::Result;

use spi_pwm::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut host = SpiHost::new(Emulator::new());
    host.reset(5);

    for ch in 0..NUM_CHANNELS as u8 {
        let mask = Channels::single(ch)?.bits();
        host.write_register(Register::PwmEnable, mask);
        host.write_register(Register::OutputLevel, mask);

        for duty in [0x00, 0x01, 0x40, 0x80, 0xCF, 0xFF] {
            host.write_register(Register::DutyCycle, duty);
            host.idle(host.pwm_period() as u64);

            host.start_recording()?;
            host.idle(host.pwm_period() as u64 * 3);
            let record = host.finish_recording()?.channel(ch)?;

            let high = record.high_ticks() as f64 / record.len() as f64;
            match record.frequency() {
                Some(freq) => tracing::info!(
                    "ch{} duty 0x{:02X}: {:?}, high {:.4}, rising {}, falling {}",
                    ch,
                    duty,
                    freq,
                    high,
                    record.rising_edges().len(),
                    record.falling_edges().len()
                ),
                None => tracing::info!("ch{} duty 0x{:02X}: constant, high {:.4}", ch, duty, high),
            }
        }
    }

    Ok(())
}
