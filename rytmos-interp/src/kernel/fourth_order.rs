use crate::{
    sample::SampleSource,
    tables,
    voice::{Block, DspVoice},
};

use super::{dot, Cursor, Kernel};

/// Cubic interpolation over the four samples around the play position, one
/// before and two after the truncated index.
pub struct FourthOrder;

impl Kernel for FourthOrder {
    const SPAN: u32 = 2;

    fn render<S: SampleSource, const LOOPING: bool>(
        voice: &mut DspVoice,
        data: &S,
        block: &mut Block,
    ) -> usize {
        let bounds = voice.bounds;
        let last_index = bounds.last_index(LOOPING);

        // The point before the first one: the end of the loop once the voice
        // has been around it, before that the first sample again.
        let (mut start_index, mut start_point) = if voice.has_looped {
            (bounds.loopstart, data.at(bounds.loopend - 1))
        } else {
            (bounds.start, data.at(bounds.start))
        };

        // The points after the last one.
        let (end_point1, end_point2) = if LOOPING {
            (data.at(bounds.loopstart), data.at(bounds.loopstart + 1))
        } else {
            let end_point = data.at(bounds.end);
            (end_point, end_point)
        };

        let mut cursor = Cursor::new(block, voice.phase, voice.phase_incr);

        loop {
            while !cursor.is_full() && cursor.index() == start_index {
                let index = cursor.index();
                let coeffs = tables::cubic(cursor.phase());
                cursor.push(dot(
                    coeffs,
                    [
                        start_point,
                        data.at(index),
                        data.at(index + 1),
                        data.at(index + 2),
                    ],
                ));
            }

            while !cursor.is_full() && cursor.index() + 2 <= last_index {
                let index = cursor.index();
                let coeffs = tables::cubic(cursor.phase());
                cursor.push(dot(
                    coeffs,
                    [
                        data.at(index - 1),
                        data.at(index),
                        data.at(index + 1),
                        data.at(index + 2),
                    ],
                ));
            }

            if cursor.is_full() {
                break;
            }

            while !cursor.is_full() && cursor.index() < last_index {
                let index = cursor.index();
                let coeffs = tables::cubic(cursor.phase());
                cursor.push(dot(
                    coeffs,
                    [
                        data.at(index - 1),
                        data.at(index),
                        data.at(index + 1),
                        end_point1,
                    ],
                ));
            }

            while !cursor.is_full() && cursor.index() <= last_index {
                let index = cursor.index();
                let coeffs = tables::cubic(cursor.phase());
                cursor.push(dot(
                    coeffs,
                    [data.at(index - 1), data.at(index), end_point1, end_point2],
                ));
            }

            if !LOOPING {
                break;
            }

            if cursor.index() > last_index {
                cursor.wrap(bounds.loop_len());

                if !voice.has_looped {
                    voice.has_looped = true;
                    start_index = bounds.loopstart;
                    start_point = data.at(bounds.loopend - 1);
                }
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
