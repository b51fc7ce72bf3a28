mod decoder;
mod synchronizer;

pub use decoder::SpiDecoder;
pub(crate) use synchronizer::InputSynchronizer;
