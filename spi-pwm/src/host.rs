use std::time::Duration;

use derive_more::{Deref, Display};
use spi_pwm_core::{
    channel::Channels,
    defined::FRAME_BITS,
    frame::{Address, ReadWrite, SerialFrame},
    pins::{SerialInput, frame_half_cycles},
    register::Register,
};
use spi_pwm_emulator::Emulator;

use crate::{error::HostError, option::HostOption, recording::RawRecord};

/// Direction of a level change on an output pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Edge {
    #[display("rising")]
    Rising,
    #[display("falling")]
    Falling,
}

impl Edge {
    const fn matches(self, prev: bool, curr: bool) -> bool {
        match self {
            Edge::Rising => !prev && curr,
            Edge::Falling => prev && !curr,
        }
    }
}

/// Bench-side driver of an [`Emulator`].
///
/// Frames are bit-banged on the `ui_in` pins with SCLK low while the data bit is set up and high
/// while it is held, each half lasting [`HostOption::half_sclk`] ticks. Every tick goes through
/// the host so that an active recording sees all of them.
#[derive(Deref)]
pub struct SpiHost {
    #[deref]
    emu: Emulator,
    option: HostOption,
    pub(crate) record: Option<RawRecord>,
}

impl SpiHost {
    #[must_use]
    pub fn new(emu: Emulator) -> Self {
        Self::with_option(emu, HostOption::default())
    }

    #[must_use]
    pub fn with_option(emu: Emulator, option: HostOption) -> Self {
        Self {
            emu,
            option,
            record: None,
        }
    }

    #[must_use]
    pub const fn option(&self) -> HostOption {
        self.option
    }

    #[must_use]
    pub fn into_emulator(self) -> Emulator {
        self.emu
    }

    /// Holds reset for `ticks` ticks with the bus idle, then releases it and idles `ticks` more.
    pub fn reset(&mut self, ticks: u64) {
        self.emu.set_input(SerialInput::IDLE);
        self.emu.set_rst_n(false);
        self.idle(ticks);
        self.emu.set_rst_n(true);
        self.idle(ticks);
    }

    pub fn idle(&mut self, ticks: u64) {
        self.hold(SerialInput::IDLE, ticks);
    }

    pub fn transaction(&mut self, rw: ReadWrite, address: u8, data: u8) -> Result<(), HostError> {
        let address = Address::new(address)?;
        let frame = match rw {
            ReadWrite::Write => SerialFrame::write_command(address, data),
            ReadWrite::Read => SerialFrame::read_command(address, data),
        };
        self.send(frame);
        Ok(())
    }

    pub fn write(&mut self, address: u8, data: u8) -> Result<(), HostError> {
        self.transaction(ReadWrite::Write, address, data)
    }

    pub fn write_register(&mut self, register: Register, data: u8) {
        self.send(SerialFrame::write_command(register.address(), data));
    }

    /// Issues a read frame. The peripheral has no read-back path, so nothing is returned.
    pub fn read(&mut self, address: u8) -> Result<(), HostError> {
        self.transaction(ReadWrite::Read, address, 0x00)
    }

    pub fn send(&mut self, frame: SerialFrame) {
        tracing::debug!("Sending {:?}.", frame);
        self.send_bits(frame, FRAME_BITS as usize);
    }

    /// Clocks only the first `bits` bits of `frame` before releasing chip select.
    pub fn send_partial(&mut self, frame: SerialFrame, bits: usize) {
        tracing::debug!("Sending {} bits of {:?}.", bits, frame);
        self.send_bits(frame, bits.min(FRAME_BITS as usize));
    }

    fn send_bits(&mut self, frame: SerialFrame, bits: usize) {
        let half_sclk = self.option.half_sclk() as u64;
        self.hold(SerialInput::active(false, false), 1);
        frame_half_cycles(frame)
            .take(bits * 2)
            .for_each(|input| self.hold(input, half_sclk));
        self.hold(SerialInput::IDLE, self.option.cs_release() as u64);
    }

    /// Advances the clock until `edge` appears on primary output `channel`.
    ///
    /// Returns the simulation time at which the edge was observed.
    pub fn wait_edge(
        &mut self,
        channel: u8,
        edge: Edge,
        timeout: Duration,
    ) -> Result<Duration, HostError> {
        let mask = Channels::single(channel)?.bits();
        let level = |emu: &Emulator| emu.uo_out() & mask != 0;

        let start = self.now();
        let mut prev = level(&self.emu);
        while self.now() - start < timeout {
            self.step();
            let curr = level(&self.emu);
            if edge.matches(prev, curr) {
                return Ok(self.now());
            }
            prev = curr;
        }
        Err(HostError::EdgeTimeout {
            channel,
            edge,
            timeout,
        })
    }

    /// Simulation time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.emu.elapsed()
    }

    fn hold(&mut self, input: SerialInput, ticks: u64) {
        self.emu.set_input(input);
        (0..ticks).for_each(|_| self.step());
    }

    fn step(&mut self) {
        self.emu.tick();
        if let Some(record) = &mut self.record {
            record.push(self.emu.uo_out(), self.emu.uio_out());
        }
    }
}
