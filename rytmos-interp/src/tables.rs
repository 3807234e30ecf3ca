//! Coefficient tables for the interpolating kernels.
//!
//! One row of tap weights per quantized fraction ([`Phase::table_row`]). The
//! rows are generated by the build script and only read here.

use crate::phase::Phase;

include!(concat!(env!("OUT_DIR"), "/coefficients.rs"));

#[inline(always)]
pub fn linear(phase: Phase) -> &'static [f32; 2] {
    &LINEAR[phase.table_row()]
}

#[inline(always)]
pub fn cubic(phase: Phase) -> &'static [f32; 4] {
    &CUBIC[phase.table_row()]
}

/// Row for a phase that already carries the 7th order half sample shift.
#[inline(always)]
pub fn sinc7(phase: Phase) -> &'static [f32; 7] {
    &SINC7[phase.table_row()]
}
