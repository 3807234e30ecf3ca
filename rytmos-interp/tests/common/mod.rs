#![allow(dead_code)]

use std::sync::Once;

use rand::{rngs::StdRng, Rng};
use rytmos_interp::{
    sample::{SampleSource, Samples16, Samples24},
    tables, Block, InterpolationMethod, Phase, SampleBounds, SampleData, BLOCK_SIZE,
};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

pub const METHODS: [InterpolationMethod; 4] = [
    InterpolationMethod::None,
    InterpolationMethod::Linear,
    InterpolationMethod::FourthOrder,
    InterpolationMethod::SeventhOrder,
];

/// Value written to every block slot before rendering, to spot slots a render
/// call was not supposed to touch.
pub const UNTOUCHED: f32 = -12345.5;

pub fn fresh_block() -> Block {
    [UNTOUCHED; BLOCK_SIZE]
}

/// Owned waveform for tests, with or without 24 bit extension bytes.
pub struct Waveform {
    pub words: Vec<i16>,
    pub extension: Option<Vec<u8>>,
}

impl Waveform {
    pub fn new(words: Vec<i16>) -> Self {
        Self {
            words,
            extension: None,
        }
    }

    pub fn with_extension(words: Vec<i16>, extension: Vec<u8>) -> Self {
        Self {
            words,
            extension: Some(extension),
        }
    }

    pub fn random(rng: &mut StdRng, len: usize, is_24bit: bool) -> Self {
        let words = (0..len).map(|_| rng.gen()).collect();
        if is_24bit {
            let extension = (0..len).map(|_| rng.gen()).collect();
            Self::with_extension(words, extension)
        } else {
            Self::new(words)
        }
    }

    pub fn data(&self) -> SampleData<'_> {
        match &self.extension {
            Some(extension) => SampleData::with_extension(&self.words, extension).unwrap(),
            None => SampleData::new(&self.words),
        }
    }

    /// Sample value as the renderers read it.
    pub fn at(&self, index: u32) -> f32 {
        match &self.extension {
            Some(extension) => Samples24::new(&self.words, extension).at(index),
            None => Samples16::new(&self.words).at(index),
        }
    }

    pub fn len(&self) -> u32 {
        self.words.len() as u32
    }
}

pub fn assert_close(actual: f32, expected: f32, context: &str) {
    let tolerance = 1e-5 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{context}: {actual} is not close to {expected}"
    );
}

/// Straightforward model of a voice: the play position is never wrapped, and
/// a tap outside the sample is mapped to the sample the renderers substitute
/// for it. Before the start it is the first sample, past the end of a one-shot
/// sample the last one, past a loop end it continues from the loop start.
pub struct Reference<'w> {
    pub wave: &'w Waveform,
    pub bounds: SampleBounds,
    pub looping: bool,
    pub method: InterpolationMethod,
    /// Unwrapped play position.
    pub position: u64,
}

impl Reference<'_> {
    fn tap(&self, virtual_index: i64) -> f32 {
        let b = self.bounds;
        let index = if virtual_index < b.start as i64 {
            b.start as i64
        } else if self.looping && virtual_index >= b.loopend as i64 {
            let loopstart = b.loopstart as i64;
            loopstart + (virtual_index - loopstart).rem_euclid(b.loop_len() as i64)
        } else if !self.looping && virtual_index > b.end as i64 {
            b.end as i64
        } else {
            virtual_index
        };

        self.wave.at(index as u32)
    }

    /// Index and coefficient row the method uses at `position`.
    fn locate(&self, position: u64) -> (i64, Phase) {
        let phase = Phase::from_bits(position);
        match self.method {
            InterpolationMethod::None => (phase.index_round() as i64, phase),
            InterpolationMethod::SeventhOrder => {
                let mut shifted = phase;
                shifted.incr(Phase::HALF);
                (shifted.index() as i64, shifted)
            }
            _ => (phase.index() as i64, phase),
        }
    }

    fn value(&self, index: i64, phase: Phase) -> f32 {
        match self.method {
            InterpolationMethod::None => self.tap(index),
            InterpolationMethod::Linear => {
                weigh(tables::linear(phase), (0..2).map(|k| self.tap(index + k)))
            }
            InterpolationMethod::FourthOrder => {
                weigh(tables::cubic(phase), (-1..3).map(|k| self.tap(index + k)))
            }
            InterpolationMethod::SeventhOrder => {
                weigh(tables::sinc7(phase), (-3..4).map(|k| self.tap(index + k)))
            }
        }
    }

    /// Renders one block, returning the produced samples.
    pub fn render(&mut self, phase_incr: f32) -> Vec<f32> {
        let incr = Phase::from_float(phase_incr).to_bits();
        let mut out = Vec::with_capacity(BLOCK_SIZE);

        while out.len() < BLOCK_SIZE {
            let (index, phase) = self.locate(self.position);
            if !self.looping && index > self.bounds.end as i64 {
                break;
            }
            out.push(self.value(index, phase));
            self.position += incr;
        }

        out
    }
}

fn weigh(coeffs: &[f32], taps: impl Iterator<Item = f32>) -> f32 {
    let mut taps = taps;
    let mut sum = coeffs[0] * taps.next().unwrap();
    for (coeff, tap) in coeffs[1..].iter().zip(taps) {
        sum += coeff * tap;
    }
    sum
}
