//! # softmix
//!
//! Clip-free multi-source PCM mixing core.
//!
//! **Purpose:** Mix N independently-volumed, independently-fading raw PCM
//! sources into one output buffer, sample by sample, for 8/16/24/32-bit
//! signed little-endian audio at any channel count.
//!
//! **Architecture:** Three components composed in one
//! synchronous pass. The sample codec converts fixed-width signed samples
//! to and from normalized f64 values, the easing engine shapes fade
//! progress through a precomputed cubic lookup table, and the mixing
//! engine folds all sources together with a non-linear soft-clip mix
//! function while advancing each source's fade once per output frame.
//!
//! The core holds no state across calls. Fade continuity lives in the
//! caller-owned [`FadeState`] records, which are updated in place by
//! [`mix`] and handed back synchronously.
//!
//! ```
//! use softmix::{mix, FadeState, MixFormat, MixSource};
//!
//! let format = MixFormat::new(16, 2)?;
//! let music = vec![0u8; 1024];
//! let voice = vec![0u8; 1024];
//!
//! // Duck the music under the voice over 128 frames
//! let mut sources = [
//!     MixSource::with_fade(&music, 1.0, FadeState::new(1.0, 0.3, 128)),
//!     MixSource::new(&voice, 1.0),
//! ];
//!
//! let mut output = vec![0u8; 1024];
//! mix(&mut output, &mut sources, &format)?;
//! # Ok::<(), softmix::Error>(())
//! ```

pub mod easing;
pub mod error;
pub mod fade;
pub mod mixer;
pub mod sample;
pub mod types;

pub use error::{Error, Result};
pub use fade::FadeState;
pub use mixer::{mix, soft_clip_mix};
pub use sample::SampleWidth;
pub use types::{MixFormat, MixSource};
