//! Signed little-endian PCM sample codec
//!
//! Converts fixed-width signed integer samples (1 to 4 bytes) to and from
//! normalized f64 values.
//!
//! # Format
//!
//! - Samples are signed little-endian two's complement
//! - Normalization divides by the maximum positive magnitude for the width
//!   (127, 32767, 8388607, 2147483647)
//! - Decoded values lie in `[-1 - 1/max, 1.0]`: the most negative code has
//!   no positive counterpart, so it decodes slightly below -1.0. This
//!   asymmetry is part of the fixed-point convention and is preserved, not
//!   corrected.
//! - Encoding clamps to `[-1.0, 1.0]` and truncates toward zero, so
//!   out-of-range mix results saturate at the representable extremes.
//!
//! The codec operates on validated byte windows. The mixing engine checks
//! buffer lengths once at its boundary, so every slice handed here is known
//! to hold at least one full sample.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Bytes per sample for one channel
///
/// Constructed from a bit depth, which must be a positive multiple of 8
/// no larger than 32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleWidth {
    /// 8-bit samples
    One = 1,
    /// 16-bit samples
    Two = 2,
    /// 24-bit samples
    Three = 3,
    /// 32-bit samples
    Four = 4,
}

impl SampleWidth {
    /// Parse a bit depth into a sample width
    ///
    /// # Errors
    /// - `InvalidBitDepth` if `bits` is zero or not a multiple of 8
    /// - `UnsupportedBitDepth` if `bits` exceeds 32
    pub fn from_bit_depth(bits: u32) -> Result<Self> {
        if bits == 0 || bits % 8 != 0 {
            return Err(Error::InvalidBitDepth(bits));
        }
        match bits / 8 {
            1 => Ok(SampleWidth::One),
            2 => Ok(SampleWidth::Two),
            3 => Ok(SampleWidth::Three),
            4 => Ok(SampleWidth::Four),
            _ => Err(Error::UnsupportedBitDepth(bits)),
        }
    }

    /// Bytes per sample
    pub fn bytes(self) -> usize {
        self as usize
    }

    /// Bits per sample
    pub fn bit_depth(self) -> u32 {
        self as u32 * 8
    }

    /// Maximum positive sample magnitude for this width
    ///
    /// `2^(bits-1) - 1`, the divisor used for normalization.
    pub fn max_amplitude(self) -> f64 {
        const MAX: [u32; 4] = [0x7f, 0x7fff, 0x7f_ffff, 0x7fff_ffff];
        MAX[self as usize - 1] as f64
    }

    /// All supported widths, useful for exhaustive tests
    pub fn all() -> &'static [SampleWidth] {
        &[
            SampleWidth::One,
            SampleWidth::Two,
            SampleWidth::Three,
            SampleWidth::Four,
        ]
    }
}

impl std::fmt::Display for SampleWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.bit_depth())
    }
}

/// Decode one signed little-endian sample into a normalized value
///
/// `bytes` must hold at least `width.bytes()` bytes. There is no native
/// 24-bit integer type, so the 3-byte case sign-extends through the top
/// bit of the third byte.
pub fn decode(bytes: &[u8], width: SampleWidth) -> f64 {
    let raw: i32 = match width {
        SampleWidth::One => bytes[0] as i8 as i32,
        SampleWidth::Two => i16::from_le_bytes([bytes[0], bytes[1]]) as i32,
        SampleWidth::Three => {
            let ext = if bytes[2] & 0x80 != 0 { 0xff } else { 0x00 };
            i32::from_le_bytes([bytes[0], bytes[1], bytes[2], ext])
        }
        SampleWidth::Four => i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
    };
    raw as f64 / width.max_amplitude()
}

/// Encode a normalized value as one signed little-endian sample
///
/// Clamps to `[-1.0, 1.0]`, scales by the maximum magnitude, truncates
/// toward zero, and writes `width.bytes()` bytes into `out`. For the
/// 3-byte case the sign is injected into bit 7 of the third byte.
pub fn encode(value: f64, width: SampleWidth, out: &mut [u8]) {
    let clamped = value.clamp(-1.0, 1.0);
    let raw = (clamped * width.max_amplitude()) as i32;
    let le = raw.to_le_bytes();

    match width {
        SampleWidth::One => {
            out[0] = le[0];
        }
        SampleWidth::Two => {
            out[..2].copy_from_slice(&le[..2]);
        }
        SampleWidth::Three => {
            out[0] = le[0];
            out[1] = le[1];
            out[2] = le[2] | if raw < 0 { 0x80 } else { 0 };
        }
        SampleWidth::Four => {
            out[..4].copy_from_slice(&le);
        }
    }
}
