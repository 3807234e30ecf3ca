use crate::{
    sample::SampleSource,
    voice::{Block, DspVoice},
};

use super::{Cursor, Kernel};

/// Renders zeros while moving the play position exactly like [`super::Nearest`].
/// Used for voices that are silent for now (delayed start, zero amplitude) but
/// have to be in the right place once they become audible.
pub struct Silence;

impl Kernel for Silence {
    const SPAN: u32 = 0;

    fn render<S: SampleSource, const LOOPING: bool>(
        voice: &mut DspVoice,
        _data: &S,
        block: &mut Block,
    ) -> usize {
        let bounds = voice.bounds;
        let last_index = bounds.last_index(LOOPING);
        let mut cursor = Cursor::new(block, voice.phase, voice.phase_incr);

        loop {
            while !cursor.is_full() && cursor.index_round() <= last_index {
                cursor.push(0.0);
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
