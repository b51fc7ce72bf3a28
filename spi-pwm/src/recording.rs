use std::time::Duration;

use derive_more::Deref;
use getset::CopyGetters;
use spi_pwm_core::{channel::Channels, common::Freq};

use crate::{SpiHost, error::HostError};

pub(crate) struct RawRecord {
    uo_out: Vec<u8>,
    uio_out: Vec<u8>,
    start: Duration,
}

impl RawRecord {
    pub(crate) fn push(&mut self, uo_out: u8, uio_out: u8) {
        self.uo_out.push(uo_out);
        self.uio_out.push(uio_out);
    }
}

fn ticks_to_duration(ticks: u64, clk_freq: Freq<u32>) -> Duration {
    Duration::from_nanos((ticks as u128 * 1_000_000_000 / clk_freq.hz() as u128) as u64)
}

/// Both output banks sampled once per tick.
#[derive(Debug, Clone, CopyGetters)]
pub struct Record {
    uo_out: Vec<u8>,
    uio_out: Vec<u8>,
    /// Simulation time at which recording started.
    #[getset(get_copy = "pub")]
    start: Duration,
    #[getset(get_copy = "pub")]
    clk_freq: Freq<u32>,
}

impl Record {
    #[must_use]
    pub fn uo_out(&self) -> &[u8] {
        &self.uo_out
    }

    #[must_use]
    pub fn uio_out(&self) -> &[u8] {
        &self.uio_out
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        ticks_to_duration(self.uo_out.len() as u64, self.clk_freq)
    }

    #[must_use]
    pub fn end(&self) -> Duration {
        self.start + self.duration()
    }

    /// Levels of primary output `channel`.
    pub fn channel(&self, channel: u8) -> Result<ChannelRecord, HostError> {
        let mask = Channels::single(channel)?.bits();
        Ok(ChannelRecord {
            levels: self.uo_out.iter().map(|&v| v & mask != 0).collect(),
            start: self.start,
            clk_freq: self.clk_freq,
        })
    }
}

/// Levels of one output pin over time.
#[derive(Debug, Clone, Deref)]
pub struct ChannelRecord {
    #[deref]
    levels: Vec<bool>,
    start: Duration,
    clk_freq: Freq<u32>,
}

impl ChannelRecord {
    fn rising_ticks(&self) -> impl Iterator<Item = usize> + '_ {
        self.levels
            .windows(2)
            .enumerate()
            .filter(|(_, w)| !w[0] && w[1])
            .map(|(i, _)| i + 1)
    }

    fn falling_ticks(&self) -> impl Iterator<Item = usize> + '_ {
        self.levels
            .windows(2)
            .enumerate()
            .filter(|(_, w)| w[0] && !w[1])
            .map(|(i, _)| i + 1)
    }

    fn time_at(&self, idx: usize) -> Duration {
        self.start + ticks_to_duration(idx as u64 + 1, self.clk_freq)
    }

    #[must_use]
    pub fn rising_edges(&self) -> Vec<Duration> {
        self.rising_ticks().map(|i| self.time_at(i)).collect()
    }

    #[must_use]
    pub fn falling_edges(&self) -> Vec<Duration> {
        self.falling_ticks().map(|i| self.time_at(i)).collect()
    }

    /// Number of high samples.
    #[must_use]
    pub fn high_ticks(&self) -> usize {
        self.levels.iter().filter(|&&l| l).count()
    }

    /// Frequency from the first two rising edges.
    #[must_use]
    pub fn frequency(&self) -> Option<Freq<f64>> {
        let mut rises = self.rising_ticks();
        let r0 = rises.next()?;
        let r1 = rises.next()?;
        Some(self.clk_freq.as_f64() / (r1 - r0) as f64)
    }

    /// High fraction of the first full period.
    #[must_use]
    pub fn duty(&self) -> Option<f64> {
        let r0 = self.rising_ticks().next()?;
        let f = self.falling_ticks().find(|&f| f > r0)?;
        let r1 = self.rising_ticks().find(|&r| r > f)?;
        Some((f - r0) as f64 / (r1 - r0) as f64)
    }
}

impl SpiHost {
    pub fn start_recording(&mut self) -> Result<(), HostError> {
        if self.record.is_some() {
            return Err(HostError::RecordingAlreadyStarted);
        }
        tracing::debug!("Recording started at {:?}.", self.now());
        self.record = Some(RawRecord {
            uo_out: Vec::new(),
            uio_out: Vec::new(),
            start: self.now(),
        });
        Ok(())
    }

    pub fn finish_recording(&mut self) -> Result<Record, HostError> {
        let RawRecord {
            uo_out,
            uio_out,
            start,
        } = self.record.take().ok_or(HostError::RecordingNotStarted)?;
        tracing::debug!("Recording finished after {} ticks.", uo_out.len());
        Ok(Record {
            uo_out,
            uio_out,
            start,
            clk_freq: self.clk_freq(),
        })
    }

    #[must_use]
    pub const fn is_recording(&self) -> bool {
        self.record.is_some()
    }
}
