//! Per-source volume transition state machine
//!
//! A fade is a linear-time, cubically-eased change of a source's volume
//! from one value to another over a fixed number of output frames. The
//! state is owned by the caller and threaded through successive mix calls,
//! so a fade can span any number of buffers.
//!
//! Progress is counted in frames, never bytes or per-channel samples. The
//! mixing engine advances each active fade exactly once per output frame
//! regardless of channel count.

use crate::easing;
use serde::{Deserialize, Serialize};

/// Volume transition state for one source
///
/// A negative `length` means no transition is active and the source holds
/// its current volume. While active, the volume is recomputed every frame
/// as `ease(current / length, from, to)`; once `current` reaches `length`
/// the transition snaps to `to` and deactivates itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FadeState {
    /// Total frames the transition runs over, or negative when inactive
    pub length: i64,

    /// Frames elapsed so far
    pub current: i64,

    /// Volume at progress 0
    pub from: f64,

    /// Volume at progress 1
    pub to: f64,
}

impl FadeState {
    /// No active transition
    pub fn inactive() -> Self {
        Self {
            length: -1,
            current: 0,
            from: 0.0,
            to: 0.0,
        }
    }

    /// Start a transition running over `frames` output frames
    pub fn new(from: f64, to: f64, frames: i64) -> Self {
        Self {
            length: frames,
            current: 0,
            from,
            to,
        }
    }

    /// Start a transition over a wall-clock duration
    ///
    /// Converts milliseconds at the given sample rate into frames. This is
    /// how callers typically schedule fades: "go to this volume over half
    /// a second".
    pub fn over_millis(from: f64, to: f64, millis: u64, sample_rate: u32) -> Self {
        let frames = (millis as i64 * sample_rate as i64) / 1000;
        Self::new(from, to, frames)
    }

    /// Whether a transition is in progress
    pub fn is_active(&self) -> bool {
        self.length >= 0
    }

    /// Advance the transition by one frame
    ///
    /// Returns the new volume, or `None` when no transition is active.
    /// On the frame where `current` reaches `length` the returned volume
    /// is exactly `to` and the transition deactivates. A zero-length
    /// transition completes on its very first advance.
    pub fn advance(&mut self) -> Option<f64> {
        if self.length < 0 {
            return None;
        }

        self.current += 1;
        if self.current >= self.length {
            self.length = -1;
            return Some(self.to);
        }

        Some(easing::ease(
            self.current as f64 / self.length as f64,
            self.from,
            self.to,
        ))
    }
}

impl Default for FadeState {
    fn default() -> Self {
        Self::inactive()
    }
}
