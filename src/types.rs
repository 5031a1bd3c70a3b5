//! Core mixing data types
//!
//! Defines the validated per-call format and the per-source record the
//! mixing engine consumes.
//!
//! # Format
//!
//! - Samples are signed little-endian integers, 1 to 4 bytes wide
//! - Buffers are channel-interleaved; one frame is one sample per channel
//! - Source buffers are borrowed read-only for the duration of a call;
//!   only the source's volume and fade fields are mutated

use crate::error::{Error, Result};
use crate::fade::FadeState;
use crate::sample::SampleWidth;
use serde::{Deserialize, Serialize};

/// Validated sample format for one mix call
///
/// Construction is the single point where bit depth and channel count are
/// checked, so the mixing loop itself never revalidates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixFormat {
    width: SampleWidth,
    channels: u32,
}

impl MixFormat {
    /// Create a format from a bit depth and channel count
    ///
    /// # Errors
    /// - Bit depth of zero, not a multiple of 8, or above 32
    /// - Channel count of zero
    pub fn new(bit_depth: u32, channels: u32) -> Result<Self> {
        let width = SampleWidth::from_bit_depth(bit_depth)?;
        if channels == 0 {
            return Err(Error::InvalidChannelCount);
        }
        Ok(Self { width, channels })
    }

    /// Sample width
    pub fn width(&self) -> SampleWidth {
        self.width
    }

    /// Channel count
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Bytes per single-channel sample
    pub fn byte_size(&self) -> usize {
        self.width.bytes()
    }

    /// Bytes per frame (one sample for every channel)
    pub fn frame_size(&self) -> usize {
        self.byte_size() * self.channels as usize
    }
}

/// One input stream being mixed
///
/// The buffer must be at least as long as the output buffer; the mixing
/// engine verifies this before touching any bytes. `volume` and `fade`
/// are updated in place during the call and carry fade continuity from
/// one call to the next.
#[derive(Debug)]
pub struct MixSource<'a> {
    /// Raw interleaved PCM bytes, read-only during the call
    pub buffer: &'a [u8],

    /// Current linear gain
    pub volume: f64,

    /// Volume transition progress
    pub fade: FadeState,
}

impl<'a> MixSource<'a> {
    /// Create a source at a fixed volume with no active fade
    pub fn new(buffer: &'a [u8], volume: f64) -> Self {
        Self {
            buffer,
            volume,
            fade: FadeState::inactive(),
        }
    }

    /// Create a source with a transition already in flight
    pub fn with_fade(buffer: &'a [u8], volume: f64, fade: FadeState) -> Self {
        Self {
            buffer,
            volume,
            fade,
        }
    }

    /// Schedule a fade from the current volume to `target` over `frames`
    pub fn fade_to(&mut self, target: f64, frames: i64) {
        self.fade = FadeState::new(self.volume, target, frames);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_derived_sizes() {
        let format = MixFormat::new(16, 2).unwrap();
        assert_eq!(format.byte_size(), 2);
        assert_eq!(format.frame_size(), 4);
        assert_eq!(format.channels(), 2);

        let format = MixFormat::new(24, 1).unwrap();
        assert_eq!(format.byte_size(), 3);
        assert_eq!(format.frame_size(), 3);
    }

    #[test]
    fn test_format_rejects_bad_parameters() {
        assert!(MixFormat::new(0, 2).is_err());
        assert!(MixFormat::new(12, 2).is_err());
        assert!(MixFormat::new(40, 2).is_err());
        assert!(matches!(
            MixFormat::new(16, 0),
            Err(Error::InvalidChannelCount)
        ));
    }

    #[test]
    fn test_format_serde_round_trip() {
        let format = MixFormat::new(24, 2).unwrap();
        let json = serde_json::to_string(&format).unwrap();
        assert_eq!(json, r#"{"width":"Three","channels":2}"#);

        let back: MixFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, format);
    }

    #[test]
    fn test_fade_to_starts_from_current_volume() {
        let buffer = [0u8; 8];
        let mut source = MixSource::new(&buffer, 0.4);
        source.fade_to(1.0, 100);

        assert!(source.fade.is_active());
        assert_eq!(source.fade.from, 0.4);
        assert_eq!(source.fade.to, 1.0);
        assert_eq!(source.fade.length, 100);
        assert_eq!(source.fade.current, 0);
    }
}
