use fixed::types::U32F32;

/// Number of fractional bits used to pick a coefficient table row.
pub const INTERP_BITS: u32 = 8;

/// Rows in every coefficient table, one per quantized fraction.
pub const INTERP_ROWS: usize = 1 << INTERP_BITS;

const FRACT_BITS: u32 = 32;

/// Play position in a waveform: sample index in the upper 32 bits, position
/// between two samples in the lower 32 bits.
///
/// The same type is used for the per-sample increment. All arithmetic wraps,
/// like the plain 64 bit word it is stored in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Phase(U32F32);

impl Phase {
    pub const ZERO: Phase = Phase(U32F32::ZERO);

    /// Half a sample. The 7th order kernel shifts by this to center on its 4th tap.
    pub const HALF: Phase = Phase(U32F32::from_bits(1 << (FRACT_BITS - 1)));

    pub const fn from_bits(bits: u64) -> Self {
        Self(U32F32::from_bits(bits))
    }

    pub const fn to_bits(self) -> u64 {
        self.0.to_bits()
    }

    /// Position exactly on sample `index`.
    pub const fn from_index(index: u32) -> Self {
        Self::from_bits((index as u64) << FRACT_BITS)
    }

    /// Converts a playback speed (1.0 plays at the recorded rate) into an
    /// increment. Both the integer part and the fraction are truncated, so the
    /// same speed always produces the same bits.
    pub fn from_float(speed: f32) -> Self {
        let speed = speed as f64;
        let index = speed as u32;
        let fract = ((speed - (speed as i32) as f64) * (1u64 << FRACT_BITS) as f64) as u32;

        Self::from_bits(((index as u64) << FRACT_BITS) | fract as u64)
    }

    #[inline(always)]
    pub fn incr(&mut self, by: Phase) {
        self.0 = self.0.wrapping_add(by.0);
    }

    #[inline(always)]
    pub fn decr(&mut self, by: Phase) {
        self.0 = self.0.wrapping_sub(by.0);
    }

    /// Moves the position back by whole samples, leaving the fraction alone.
    #[inline(always)]
    pub fn sub_int(&mut self, samples: u32) {
        self.decr(Phase::from_index(samples));
    }

    /// Sample index, fraction truncated.
    #[inline(always)]
    pub fn index(self) -> u32 {
        (self.0.to_bits() >> FRACT_BITS) as u32
    }

    /// Sample index rounded to the nearest sample.
    #[inline(always)]
    pub fn index_round(self) -> u32 {
        (self.0.to_bits().wrapping_add(Self::HALF.to_bits()) >> FRACT_BITS) as u32
    }

    /// Raw 32 bit fraction.
    #[inline(always)]
    pub fn fract(self) -> u32 {
        self.0.frac().to_bits() as u32
    }

    /// Coefficient table row for the fraction. Quantized, never rounded.
    #[inline(always)]
    pub fn table_row(self) -> usize {
        (self.fract() >> (FRACT_BITS - INTERP_BITS)) as usize
    }

    pub fn to_f64(self) -> f64 {
        self.0.to_num()
    }
}
