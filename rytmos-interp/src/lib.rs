#![cfg_attr(not(test), no_std)]
//! Sample playback core of a rytmos voice.
//!
//! A [`DspVoice`] reads a stored waveform at a fractional play position and
//! writes one [`Block`] per call, resampled by its playback speed with one of
//! four interpolation methods. Loops wrap around seamlessly, a sample without
//! a loop ends the voice by returning a short block.
//!
//! ```ignore
//! let data = SampleData::new(&words);
//! let mut voice = DspVoice::make(SampleBounds::one_shot(words.len() as u32), DspSettings::default());
//! voice.validate(&data, false)?;
//!
//! let mut block = [0.0; BLOCK_SIZE];
//! while voice.interpolate(&data, &mut block, false) == BLOCK_SIZE {
//!     // mix `block`
//! }
//! ```

pub mod dispatch;
pub mod error;
pub mod kernel;
pub mod phase;
pub mod sample;
pub mod tables;
pub mod voice;

pub use error::DspError;
pub use phase::Phase;
pub use sample::SampleData;
pub use voice::{Block, DspSettings, DspVoice, InterpolationMethod, SampleBounds, BLOCK_SIZE};
