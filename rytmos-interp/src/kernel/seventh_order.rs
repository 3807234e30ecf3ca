use crate::{
    phase::Phase,
    sample::SampleSource,
    tables,
    voice::{Block, DspVoice},
};

use super::{dot, Cursor, Kernel};

/// 7 point windowed sinc, three samples on either side of the rounded index.
///
/// The kernel is centered on its 4th tap, so the play position is shifted by
/// half a sample while rendering and shifted back afterwards.
pub struct SeventhOrder;

impl Kernel for SeventhOrder {
    const SPAN: u32 = 5;

    fn render<S: SampleSource, const LOOPING: bool>(
        voice: &mut DspVoice,
        data: &S,
        block: &mut Block,
    ) -> usize {
        let bounds = voice.bounds;
        let last_index = bounds.last_index(LOOPING);

        // Stand-ins for the three points before the first one, nearest first.
        let (mut start_index, mut start_points) = if voice.has_looped {
            (bounds.loopstart, loop_tail(data, bounds.loopend))
        } else {
            let start_point = data.at(bounds.start);
            (bounds.start, [start_point; 3])
        };

        // And for the three points after the last one.
        let end_points = if LOOPING {
            [
                data.at(bounds.loopstart),
                data.at(bounds.loopstart + 1),
                data.at(bounds.loopstart + 2),
            ]
        } else {
            [data.at(bounds.end); 3]
        };

        let mut phase = voice.phase;
        phase.incr(Phase::HALF);
        let mut cursor = Cursor::new(block, phase, voice.phase_incr);

        loop {
            while !cursor.is_full() && cursor.index() == start_index {
                let index = cursor.index();
                let coeffs = tables::sinc7(cursor.phase());
                cursor.push(dot(
                    coeffs,
                    [
                        start_points[2],
                        start_points[1],
                        start_points[0],
                        data.at(index),
                        data.at(index + 1),
                        data.at(index + 2),
                        data.at(index + 3),
                    ],
                ));
            }

            while !cursor.is_full() && cursor.index() == start_index + 1 {
                let index = cursor.index();
                let coeffs = tables::sinc7(cursor.phase());
                cursor.push(dot(
                    coeffs,
                    [
                        start_points[1],
                        start_points[0],
                        data.at(index - 1),
                        data.at(index),
                        data.at(index + 1),
                        data.at(index + 2),
                        data.at(index + 3),
                    ],
                ));
            }

            while !cursor.is_full() && cursor.index() == start_index + 2 {
                let index = cursor.index();
                let coeffs = tables::sinc7(cursor.phase());
                cursor.push(dot(
                    coeffs,
                    [
                        start_points[0],
                        data.at(index - 2),
                        data.at(index - 1),
                        data.at(index),
                        data.at(index + 1),
                        data.at(index + 2),
                        data.at(index + 3),
                    ],
                ));
            }

            while !cursor.is_full() && cursor.index() + 3 <= last_index {
                let index = cursor.index();
                let coeffs = tables::sinc7(cursor.phase());
                cursor.push(dot(
                    coeffs,
                    [
                        data.at(index - 3),
                        data.at(index - 2),
                        data.at(index - 1),
                        data.at(index),
                        data.at(index + 1),
                        data.at(index + 2),
                        data.at(index + 3),
                    ],
                ));
            }

            if cursor.is_full() {
                break;
            }

            while !cursor.is_full() && cursor.index() + 2 <= last_index {
                let index = cursor.index();
                let coeffs = tables::sinc7(cursor.phase());
                cursor.push(dot(
                    coeffs,
                    [
                        data.at(index - 3),
                        data.at(index - 2),
                        data.at(index - 1),
                        data.at(index),
                        data.at(index + 1),
                        data.at(index + 2),
                        end_points[0],
                    ],
                ));
            }

            while !cursor.is_full() && cursor.index() < last_index {
                let index = cursor.index();
                let coeffs = tables::sinc7(cursor.phase());
                cursor.push(dot(
                    coeffs,
                    [
                        data.at(index - 3),
                        data.at(index - 2),
                        data.at(index - 1),
                        data.at(index),
                        data.at(index + 1),
                        end_points[0],
                        end_points[1],
                    ],
                ));
            }

            while !cursor.is_full() && cursor.index() <= last_index {
                let index = cursor.index();
                let coeffs = tables::sinc7(cursor.phase());
                cursor.push(dot(
                    coeffs,
                    [
                        data.at(index - 3),
                        data.at(index - 2),
                        data.at(index - 1),
                        data.at(index),
                        end_points[0],
                        end_points[1],
                        end_points[2],
                    ],
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
                    start_points = loop_tail(data, bounds.loopend);
                }
            }

            if cursor.is_full() {
                break;
            }
        }

        let (mut phase, written) = cursor.finish();
        phase.decr(Phase::HALF);
        voice.phase = phase;
        written
    }
}

/// Last three samples of the loop, nearest to the loop end first.
#[inline(always)]
fn loop_tail<S: SampleSource>(data: &S, loopend: u32) -> [f32; 3] {
    [
        data.at(loopend - 1),
        data.at(loopend - 2),
        data.at(loopend - 3),
    ]
}
