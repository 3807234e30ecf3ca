use crate::{
    phase::Phase,
    sample::SampleSource,
    voice::{Block, DspVoice, BLOCK_SIZE},
};

mod fourth_order;
mod linear;
mod nearest;
mod seventh_order;
mod silence;

pub use fourth_order::FourthOrder;
pub use linear::Linear;
pub use nearest::Nearest;
pub use seventh_order::SeventhOrder;
pub use silence::Silence;

/// One interpolation scheme.
///
/// `render` fills `block` from the voice's position onward and returns how
/// many samples it wrote. Fewer than [`BLOCK_SIZE`] means a non-looping voice
/// ran past the end of its sample; entries after that are left as they were.
/// Looping voices always fill the block.
///
/// Both the bit depth (`S`) and `LOOPING` are compile time parameters, every
/// combination is its own loop without per-sample branches on either.
pub trait Kernel {
    /// Minimum distance between the first and last readable index of a region,
    /// see [`crate::voice::SampleBounds::validate`].
    const SPAN: u32;

    fn render<S: SampleSource, const LOOPING: bool>(
        voice: &mut DspVoice,
        data: &S,
        block: &mut Block,
    ) -> usize;
}

/// Output position and play position of one render call.
pub(crate) struct Cursor<'b> {
    block: &'b mut Block,
    written: usize,
    phase: Phase,
    incr: Phase,
}

impl<'b> Cursor<'b> {
    pub fn new(block: &'b mut Block, phase: Phase, phase_incr: f32) -> Self {
        Self {
            block,
            written: 0,
            phase,
            incr: Phase::from_float(phase_incr),
        }
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.written >= BLOCK_SIZE
    }

    #[inline(always)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline(always)]
    pub fn index(&self) -> u32 {
        self.phase.index()
    }

    #[inline(always)]
    pub fn index_round(&self) -> u32 {
        self.phase.index_round()
    }

    /// Writes one output sample and advances the play position.
    #[inline(always)]
    pub fn push(&mut self, value: f32) {
        self.block[self.written] = value;
        self.written += 1;
        self.phase.incr(self.incr);
    }

    /// Jumps back one loop length.
    #[inline(always)]
    pub fn wrap(&mut self, loop_len: u32) {
        self.phase.sub_int(loop_len);
    }

    pub fn finish(self) -> (Phase, usize) {
        (self.phase, self.written)
    }
}

/// Weighted sum of the taps, accumulated left to right.
#[inline(always)]
pub(crate) fn dot<const N: usize>(coeffs: &[f32; N], taps: [f32; N]) -> f32 {
    coeffs
        .iter()
        .zip(taps)
        .skip(1)
        .fold(coeffs[0] * taps[0], |sum, (coeff, tap)| sum + coeff * tap)
}
