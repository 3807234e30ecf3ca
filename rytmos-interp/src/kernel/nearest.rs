use crate::{
    sample::SampleSource,
    voice::{Block, DspVoice},
};

use super::{Cursor, Kernel};

/// No interpolation, plays the sample nearest to the play position.
/// Cheapest and lowest quality.
pub struct Nearest;

impl Kernel for Nearest {
    const SPAN: u32 = 0;

    fn render<S: SampleSource, const LOOPING: bool>(
        voice: &mut DspVoice,
        data: &S,
        block: &mut Block,
    ) -> usize {
        let bounds = voice.bounds;
        let last_index = bounds.last_index(LOOPING);
        let mut cursor = Cursor::new(block, voice.phase, voice.phase_incr);

        loop {
            while !cursor.is_full() && cursor.index_round() <= last_index {
                let sample = data.at(cursor.index_round());
                cursor.push(sample);
            }

            if !LOOPING {
                break;
            }

            if cursor.index_round() > last_index {
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
