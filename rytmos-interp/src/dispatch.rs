//! The two render entry points of a voice.

use crate::{
    kernel::{FourthOrder, Kernel, Linear, Nearest, SeventhOrder, Silence},
    sample::{SampleData, Samples16, Samples24},
    voice::{Block, DspVoice, InterpolationMethod},
};

impl DspVoice {
    /// Renders the next block with the voice's interpolation method. Returns
    /// the number of samples written, less than the block size only when a
    /// non-looping voice reached the end of its sample.
    pub fn interpolate(&mut self, data: &SampleData, block: &mut Block, looping: bool) -> usize {
        match self.interpolation {
            InterpolationMethod::None => invoke::<Nearest>(self, data, block, looping),
            InterpolationMethod::Linear => invoke::<Linear>(self, data, block, looping),
            InterpolationMethod::FourthOrder => invoke::<FourthOrder>(self, data, block, looping),
            InterpolationMethod::SeventhOrder => {
                invoke::<SeventhOrder>(self, data, block, looping)
            }
        }
    }

    /// Writes zeros but advances the voice exactly as [`DspVoice::interpolate`]
    /// with [`InterpolationMethod::None`] would.
    pub fn silence(&mut self, data: &SampleData, block: &mut Block, looping: bool) -> usize {
        invoke::<Silence>(self, data, block, looping)
    }
}

/// Picks the bit depth and looping variant of `K` once for the whole block.
fn invoke<K: Kernel>(
    voice: &mut DspVoice,
    data: &SampleData,
    block: &mut Block,
    looping: bool,
) -> usize {
    match (data.extension(), looping) {
        (Some(extension), true) => {
            K::render::<_, true>(voice, &Samples24::new(data.words(), extension), block)
        }
        (Some(extension), false) => {
            K::render::<_, false>(voice, &Samples24::new(data.words(), extension), block)
        }
        (None, true) => K::render::<_, true>(voice, &Samples16::new(data.words()), block),
        (None, false) => K::render::<_, false>(voice, &Samples16::new(data.words()), block),
    }
}
