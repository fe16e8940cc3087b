//! Animation error types

use thiserror::Error;

/// Errors raised while validating timeline configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    /// A track needs at least one keyframe
    #[error("keyframe track is empty")]
    EmptyTrack,

    /// `times` must have one entry per keyframe
    #[error("times table has {times} entries for {keyframes} keyframes")]
    TimesMismatch { times: usize, keyframes: usize },

    /// `times` must start at 0, end at 1, and never decrease
    #[error("times table must be non-decreasing from 0 to 1")]
    NonMonotonicTimes,

    /// Durations must be positive and finite
    #[error("duration must be positive, got {0}")]
    InvalidDuration(f32),

    /// Mixed value kinds within one track cannot interpolate
    #[error("keyframes mix incompatible value kinds")]
    MixedValueKinds,
}

/// Result type for timeline configuration
pub type Result<T> = std::result::Result<T, TimelineError>;
