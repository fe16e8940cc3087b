//! Declarative timelines
//!
//! A [`TimelineSpec`] is pure data: a keyframe track plus duration, delay,
//! easing, repeat count (finite or infinite), and repeat delay. A
//! [`Timeline`] is a running instance advancing through the phases
//!
//! ```text
//! Pending -> Running -> RepeatWaiting -> Running -> ... -> Completed
//!                                                      \-> Cancelled
//! ```
//!
//! Evaluation is a pure function of the clock: `elapsed = now - start -
//! delay`, the cycle index comes from dividing by `duration + repeat_delay`,
//! and the clamped in-cycle progress is eased and fed to the track. Finite
//! repeats play their last cycle and complete without a trailing repeat
//! wait; infinite repeats only leave `Running`/`RepeatWaiting` through
//! cancellation.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::{Result, TimelineError};
use crate::keyframe::{KeyValue, KeyframeTrack};

/// How many cycles a timeline plays
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Repeat {
    /// Total number of cycles
    Count(u32),
    /// Repeat until cancelled
    Infinite,
}

impl Default for Repeat {
    fn default() -> Self {
        Repeat::Count(1)
    }
}

/// Lifecycle phase of a running timeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelinePhase {
    /// Started but still inside the initial delay
    Pending,
    /// Interpolating inside a cycle
    Running,
    /// Between cycles, waiting out the repeat delay
    RepeatWaiting,
    /// Finite repeat count exhausted; holds the final value
    Completed,
    /// Torn down before completion; produces no further values
    Cancelled,
}

/// Data-only timeline description
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineSpec {
    pub track: KeyframeTrack,
    /// Cycle duration in seconds
    pub duration: f32,
    /// Seconds before the first cycle starts
    #[serde(default)]
    pub delay: f32,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub repeat: Repeat,
    /// Seconds between cycles
    #[serde(default)]
    pub repeat_delay: f32,
}

impl TimelineSpec {
    pub fn new(track: KeyframeTrack, duration: f32) -> Self {
        Self {
            track,
            duration,
            delay: 0.0,
            easing: Easing::default(),
            repeat: Repeat::default(),
            repeat_delay: 0.0,
        }
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Repeat until cancelled.
    pub fn infinite(mut self) -> Self {
        self.repeat = Repeat::Infinite;
        self
    }

    pub fn repeat_delay(mut self, repeat_delay: f32) -> Self {
        self.repeat_delay = repeat_delay;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.duration > 0.0) || !self.duration.is_finite() {
            return Err(TimelineError::InvalidDuration(self.duration));
        }
        if self.repeat_delay < 0.0 || !self.repeat_delay.is_finite() {
            return Err(TimelineError::InvalidDuration(self.repeat_delay));
        }
        Ok(())
    }
}

/// A running timeline instance
#[derive(Clone, Debug)]
pub struct Timeline {
    spec: TimelineSpec,
    start_time: Option<f64>,
    phase: TimelinePhase,
    current: KeyValue,
}

impl Timeline {
    /// Validate the spec and build an instance. Configuration errors
    /// surface here, before the timeline can ever be scheduled.
    pub fn new(spec: TimelineSpec) -> Result<Self> {
        spec.validate()?;
        let current = spec.track.first().clone();
        Ok(Self {
            spec,
            start_time: None,
            phase: TimelinePhase::Pending,
            current,
        })
    }

    pub fn spec(&self) -> &TimelineSpec {
        &self.spec
    }

    pub fn phase(&self) -> TimelinePhase {
        self.phase
    }

    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether the timeline still advances on ticks.
    pub fn is_active(&self) -> bool {
        !matches!(
            self.phase,
            TimelinePhase::Completed | TimelinePhase::Cancelled
        )
    }

    /// Anchor the timeline's clock. The first cycle begins `delay` seconds
    /// after `now`.
    pub fn start(&mut self, now: f64) {
        self.start_time = Some(now);
        self.phase = TimelinePhase::Pending;
    }

    /// Stop producing values. The last observed value is not advanced
    /// further; completed timelines stay completed.
    pub fn cancel(&mut self) {
        if self.phase != TimelinePhase::Completed {
            self.phase = TimelinePhase::Cancelled;
        }
    }

    /// Most recently committed value.
    pub fn value(&self) -> &KeyValue {
        &self.current
    }

    /// Pure evaluation at `now`; does not mutate the instance.
    pub fn sample_at(&self, now: f64) -> (TimelinePhase, KeyValue) {
        match self.phase {
            TimelinePhase::Cancelled => return (TimelinePhase::Cancelled, self.current.clone()),
            TimelinePhase::Completed => return (TimelinePhase::Completed, self.current.clone()),
            _ => {}
        }
        let Some(start) = self.start_time else {
            return (TimelinePhase::Pending, self.current.clone());
        };

        let spec = &self.spec;
        let elapsed = now - start - spec.delay as f64;
        if elapsed < 0.0 {
            return (TimelinePhase::Pending, spec.track.sample(0.0));
        }

        let cycle_len = (spec.duration + spec.repeat_delay) as f64;
        let cycle = (elapsed / cycle_len).floor() as u64;

        if let Repeat::Count(n) = spec.repeat {
            if cycle >= n as u64 {
                return (
                    TimelinePhase::Completed,
                    spec.track.sample(spec.easing.apply(1.0)),
                );
            }
        }

        let local = (elapsed - cycle as f64 * cycle_len) as f32;
        let local_t = (local / spec.duration).clamp(0.0, 1.0);
        let value = spec.track.sample(spec.easing.apply(local_t));

        let phase = if local < spec.duration {
            TimelinePhase::Running
        } else {
            // Past the play window of this cycle. The final finite cycle
            // completes directly instead of waiting out another repeat
            // delay.
            match spec.repeat {
                Repeat::Count(n) if cycle + 1 >= n as u64 => TimelinePhase::Completed,
                _ => TimelinePhase::RepeatWaiting,
            }
        };
        (phase, value)
    }

    /// Advance to `now`, committing phase and value. Returns the committed
    /// value, or `None` once cancelled.
    pub fn tick(&mut self, now: f64) -> Option<&KeyValue> {
        if self.phase == TimelinePhase::Cancelled {
            return None;
        }
        if self.phase == TimelinePhase::Completed {
            return Some(&self.current);
        }
        let (phase, value) = self.sample_at(now);
        self.phase = phase;
        self.current = value;
        Some(&self.current)
    }
}

// ============================================================================
// Stagger
// ============================================================================

/// Direction for stagger delay distribution
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaggerDirection {
    /// First to last
    #[default]
    Forward,
    /// Last to first
    Reverse,
    /// Center outward
    FromCenter,
}

/// Per-index delay offsets for massed choreography
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaggerSpec {
    /// Delay between consecutive items, in seconds
    pub interval: f32,
    pub direction: StaggerDirection,
    /// Cap on the effective index, limiting the total spread
    pub limit: Option<usize>,
}

impl StaggerSpec {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            direction: StaggerDirection::Forward,
            limit: None,
        }
    }

    pub fn reverse(mut self) -> Self {
        self.direction = StaggerDirection::Reverse;
        self
    }

    pub fn from_center(mut self) -> Self {
        self.direction = StaggerDirection::FromCenter;
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Delay for a specific item index.
    pub fn delay_for_index(&self, index: usize, total: usize) -> f32 {
        let effective = match self.direction {
            StaggerDirection::Forward => index,
            StaggerDirection::Reverse => total.saturating_sub(1).saturating_sub(index),
            StaggerDirection::FromCenter => {
                let center = total / 2;
                if index <= center {
                    center - index
                } else {
                    index - center
                }
            }
        };
        let capped = match self.limit {
            Some(limit) => effective.min(limit),
            None => effective,
        };
        self.interval * capped as f32
    }
}
