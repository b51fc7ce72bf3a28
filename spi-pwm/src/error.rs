use std::time::Duration;

use spi_pwm_core::error::FrameError;
use thiserror::Error;

use crate::host::Edge;

#[derive(Error, Debug, PartialEq)]
pub enum HostError {
    #[error("Recording is already started")]
    RecordingAlreadyStarted,
    #[error("Recording is not started")]
    RecordingNotStarted,
    #[error("No {edge} edge on channel {channel} within {timeout:?}")]
    EdgeTimeout {
        channel: u8,
        edge: Edge,
        timeout: Duration,
    },
    #[error("{0}")]
    Frame(#[from] FrameError),
}
