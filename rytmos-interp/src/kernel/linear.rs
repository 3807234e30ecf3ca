use crate::{
    sample::SampleSource,
    tables,
    voice::{Block, DspVoice},
};

use super::{dot, Cursor, Kernel};

/// Straight line between the two samples around the play position.
pub struct Linear;

impl Kernel for Linear {
    const SPAN: u32 = 1;

    fn render<S: SampleSource, const LOOPING: bool>(
        voice: &mut DspVoice,
        data: &S,
        block: &mut Block,
    ) -> usize {
        let bounds = voice.bounds;
        let last_index = bounds.last_index(LOOPING);

        // Second point for the last sample: loop start when looping, else the
        // last sample again.
        let end_point = if LOOPING {
            data.at(bounds.loopstart)
        } else {
            data.at(bounds.end)
        };

        let mut cursor = Cursor::new(block, voice.phase, voice.phase_incr);

        loop {
            while !cursor.is_full() && cursor.index() < last_index {
                let index = cursor.index();
                let coeffs = tables::linear(cursor.phase());
                cursor.push(dot(coeffs, [data.at(index), data.at(index + 1)]));
            }

            if cursor.is_full() {
                break;
            }

            while !cursor.is_full() && cursor.index() <= last_index {
                let index = cursor.index();
                let coeffs = tables::linear(cursor.phase());
                cursor.push(dot(coeffs, [data.at(index), end_point]));
            }

            if !LOOPING {
                break;
            }

            if cursor.index() > last_index {
                cursor.wrap(bounds.loop_len());
                voice.has_looped = true;
            }

            if cursor.is_full() {
                break;
            }
        }

        let (phase, written) = cursor.finish();
        voice.phase = phase;
        written
    }
}
