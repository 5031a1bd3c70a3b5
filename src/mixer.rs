//! Multi-source mixing engine
//!
//! Combines N independently-volumed, independently-fading PCM sources into
//! one output buffer in a single synchronous pass.
//!
//! # Algorithm
//!
//! Per output sample offset, stepping by the sample byte width:
//!
//! 1. At frame starts, advance every source's active fade exactly once.
//!    Channels after the first reuse the frame's already-updated volume.
//! 2. Fold the decoded, volume-scaled samples left to right with the
//!    soft-clip mix function, starting from 0.0.
//! 3. Encode the folded value into the output buffer.
//!
//! The fold is not commutative or associative for three or more sources,
//! so source list order is part of the output contract and is preserved
//! exactly as given.
//!
//! All length and format preconditions are checked before the loop; a
//! rejected call leaves the output untouched. The pass itself performs no
//! allocation and no I/O.

use crate::error::{Error, Result};
use crate::sample;
use crate::types::{MixFormat, MixSource};
use tracing::{debug, trace};

/// Fold one scaled sample into the running mix value
///
/// `(1 - |a*b|) * (a + b)`: plain summation of full-scale signals clips,
/// so the combined amplitude is scaled down by how loud the pairwise
/// product already is. For inputs in `[-1, 1]` the result stays in
/// `[-1, 1]`, and mixing with silence is the identity.
#[inline]
pub fn soft_clip_mix(a: f64, b: f64) -> f64 {
    (1.0 - (a * b).abs()) * (a + b)
}

/// Mix all sources into the output buffer
///
/// The output buffer's length is the mix length and must divide into
/// whole frames. Every source buffer must be at least that long. Each
/// source's `volume` and `fade` are updated in place so fade progress
/// carries into the caller's next call.
///
/// With no sources the output is written as full-length silence.
///
/// # Errors
/// - `LengthNotFrameAligned` if the output does not divide into frames
/// - `SourceBufferTooShort` if any source buffer is shorter than the output
pub fn mix(output: &mut [u8], sources: &mut [MixSource<'_>], format: &MixFormat) -> Result<()> {
    let byte_size = format.byte_size();
    let frame_size = format.frame_size();
    let length = output.len();

    if length % frame_size != 0 {
        return Err(Error::LengthNotFrameAligned { length, frame_size });
    }

    for (index, source) in sources.iter().enumerate() {
        if source.buffer.len() < length {
            return Err(Error::SourceBufferTooShort {
                index,
                actual: source.buffer.len(),
                required: length,
            });
        }
    }

    debug!(
        length,
        format = %format.width(),
        channels = format.channels(),
        source_count = sources.len(),
        "mixing buffer"
    );

    let width = format.width();
    let mut offset = 0;

    while offset < length {
        // Fades advance once per frame, not once per channel sample
        if offset % frame_size == 0 {
            for source in sources.iter_mut() {
                if let Some(volume) = source.fade.advance() {
                    source.volume = volume;
                    if !source.fade.is_active() {
                        trace!(volume, "fade complete");
                    }
                }
            }
        }

        let mut value = 0.0;
        for source in sources.iter() {
            let sample = sample::decode(&source.buffer[offset..offset + byte_size], width);
            value = soft_clip_mix(value, sample * source.volume);
        }

        sample::encode(value, width, &mut output[offset..offset + byte_size]);
        offset += byte_size;
    }

    Ok(())
}
