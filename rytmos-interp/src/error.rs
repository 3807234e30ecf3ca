use thiserror::Error;

use crate::voice::InterpolationMethod;

/// Configuration problems found before a voice is handed to the renderers.
///
/// Rendering itself never fails; a voice that does not pass
/// [`crate::voice::SampleBounds::validate`] must not be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DspError {
    #[error("extension has {bytes} bytes for {words} sample words")]
    ExtensionLength { words: usize, bytes: usize },

    #[error("start {start} lies after end {end}")]
    StartAfterEnd { start: u32, end: u32 },

    #[error("index {index} is outside sample data of length {len}")]
    OutOfRange { index: u32, len: usize },

    #[error("loop start {loopstart} is not before loop end {loopend}")]
    EmptyLoop { loopstart: u32, loopend: u32 },

    #[error("{method:?} needs {needed} samples after the region start, region has {available}")]
    RegionTooShort {
        method: InterpolationMethod,
        needed: u32,
        available: u32,
    },
}
