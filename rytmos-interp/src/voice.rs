#[cfg(feature = "defmt")]
use defmt::warn;
use derivative::Derivative;
#[cfg(not(feature = "defmt"))]
use log::warn;

use crate::{error::DspError, phase::Phase, sample::SampleData};

/// Number of output samples one render call produces at most.
pub const BLOCK_SIZE: usize = 64;

pub type Block = [f32; BLOCK_SIZE];

/// Interpolation quality, cheapest first. The discriminants are the numeric
/// codes used by sound bank and synth settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i32)]
pub enum InterpolationMethod {
    /// Nearest sample, no interpolation.
    None = 0,
    Linear = 1,
    #[default]
    FourthOrder = 4,
    /// 7 point windowed sinc.
    SeventhOrder = 7,
}

impl InterpolationMethod {
    /// Minimum distance between the first and the last readable index of a
    /// region (sample or loop) for this method's kernel.
    pub const fn span(self) -> u32 {
        use crate::kernel::{FourthOrder, Kernel, Linear, Nearest, SeventhOrder};

        match self {
            InterpolationMethod::None => Nearest::SPAN,
            InterpolationMethod::Linear => Linear::SPAN,
            InterpolationMethod::FourthOrder => FourthOrder::SPAN,
            InterpolationMethod::SeventhOrder => SeventhOrder::SPAN,
        }
    }
}

impl From<i32> for InterpolationMethod {
    /// Unknown codes fall back to 4th order, a voice always renders.
    fn from(code: i32) -> Self {
        match code {
            0 => InterpolationMethod::None,
            1 => InterpolationMethod::Linear,
            4 => InterpolationMethod::FourthOrder,
            7 => InterpolationMethod::SeventhOrder,
            code => {
                warn!("Unknown interpolation method {}, using 4th order", code);
                InterpolationMethod::FourthOrder
            }
        }
    }
}

#[derive(Derivative)]
#[derivative(Default)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DspSettings {
    #[derivative(Default(value = "InterpolationMethod::FourthOrder"))]
    pub interpolation: InterpolationMethod,
    /// Playback speed, 1.0 plays the sample at its recorded rate.
    #[derivative(Default(value = "1.0"))]
    pub phase_incr: f32,
}

/// Playable extent of a sample. `end` is the last valid sample, `loopend` is
/// one past the last sample of the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleBounds {
    pub start: u32,
    pub end: u32,
    pub loopstart: u32,
    pub loopend: u32,
}

impl SampleBounds {
    pub fn new(start: u32, end: u32, loopstart: u32, loopend: u32) -> Self {
        Self {
            start,
            end,
            loopstart,
            loopend,
        }
    }

    /// Bounds for a sample that is played once from the first to the last of
    /// `len` samples.
    pub fn one_shot(len: u32) -> Self {
        let end = len.saturating_sub(1);
        Self::new(0, end, 0, len)
    }

    #[inline(always)]
    pub fn loop_len(&self) -> u32 {
        self.loopend - self.loopstart
    }

    /// Last index a renderer may emit before it has to wrap or stop.
    #[inline(always)]
    pub fn last_index(&self, looping: bool) -> u32 {
        if looping {
            self.loopend - 1
        } else {
            self.end
        }
    }

    /// Checks what the renderers take for granted. Voice setup must do this
    /// once before the first render; the renderers do not check again.
    pub fn validate(
        &self,
        data: &SampleData,
        looping: bool,
        method: InterpolationMethod,
    ) -> Result<(), DspError> {
        let span = method.span();

        if self.start > self.end {
            return Err(DspError::StartAfterEnd {
                start: self.start,
                end: self.end,
            });
        }

        if self.end as usize >= data.len() {
            return Err(DspError::OutOfRange {
                index: self.end,
                len: data.len(),
            });
        }

        if self.end - self.start < span {
            return Err(DspError::RegionTooShort {
                method,
                needed: span,
                available: self.end - self.start,
            });
        }

        if !looping {
            return Ok(());
        }

        if self.loopstart >= self.loopend {
            return Err(DspError::EmptyLoop {
                loopstart: self.loopstart,
                loopend: self.loopend,
            });
        }

        if self.loopend as usize > data.len() {
            return Err(DspError::OutOfRange {
                index: self.loopend,
                len: data.len(),
            });
        }

        let last = self.loopend - 1;
        let first = self.loopstart.min(self.start);
        if last - self.loopstart < span || last < first + span {
            return Err(DspError::RegionTooShort {
                method,
                needed: span,
                available: last - self.loopstart,
            });
        }

        Ok(())
    }
}

/// Render state of one voice.
///
/// Position and loop history are only changed by the render calls, and by
/// [`DspVoice::set_phase`] and [`DspVoice::restart`] when the voice is (re)started.
#[derive(Debug, Clone)]
pub struct DspVoice {
    pub(crate) phase: Phase,
    pub(crate) phase_incr: f32,
    pub(crate) has_looped: bool,
    pub(crate) bounds: SampleBounds,
    pub(crate) interpolation: InterpolationMethod,
}

impl DspVoice {
    /// A voice positioned at the start of its sample.
    pub fn make(bounds: SampleBounds, settings: DspSettings) -> Self {
        let phase = Phase::from_index(bounds.start);
        log::trace!(
            "DspVoice::make(bounds={bounds:?}, settings={settings:?}) -> phase={}",
            phase.to_f64()
        );

        Self {
            phase,
            phase_incr: settings.phase_incr,
            has_looped: false,
            bounds,
            interpolation: settings.interpolation,
        }
    }

    pub fn configure(&mut self, settings: DspSettings) {
        self.interpolation = settings.interpolation;
        self.phase_incr = settings.phase_incr;
    }

    /// Playback speed for the coming block(s).
    pub fn set_phase_incr(&mut self, phase_incr: f32) {
        self.phase_incr = phase_incr;
    }

    pub fn set_interpolation(&mut self, interpolation: InterpolationMethod) {
        self.interpolation = interpolation;
    }

    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Back to the start of the sample with no loop history.
    pub fn restart(&mut self) {
        self.phase = Phase::from_index(self.bounds.start);
        self.has_looped = false;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phase_incr(&self) -> f32 {
        self.phase_incr
    }

    pub fn has_looped(&self) -> bool {
        self.has_looped
    }

    pub fn bounds(&self) -> SampleBounds {
        self.bounds
    }

    pub fn interpolation(&self) -> InterpolationMethod {
        self.interpolation
    }

    pub fn validate(&self, data: &SampleData, looping: bool) -> Result<(), DspError> {
        self.bounds.validate(data, looping, self.interpolation)
    }
}
