//! Keyframe tracks
//!
//! A [`KeyframeTrack`] is the data half of a timeline: an ordered list of
//! values with optional explicit time positions for non-uniform spacing.
//! Values are scalars, colors, or path data; a track holds one kind only.
//!
//! Sampling takes an eased progress value, locates the enclosing segment,
//! and interpolates with the segment-local fraction. Overshooting easing
//! curves (eased progress beyond 1) extrapolate scalar values along the
//! last segment, which is what gives pop/overshoot entrances their bounce.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use verve_core::geometry::Color;

use crate::error::{Result, TimelineError};

/// One animatable value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum KeyValue {
    Scalar(f32),
    Color(Color),
    Path(PathData),
}

impl KeyValue {
    fn kind(&self) -> u8 {
        match self {
            KeyValue::Scalar(_) => 0,
            KeyValue::Color(_) => 1,
            KeyValue::Path(_) => 2,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            KeyValue::Scalar(_) => "scalar",
            KeyValue::Color(_) => "color",
            KeyValue::Path(_) => "path",
        }
    }

    /// Interpolate toward `other`. Scalars extrapolate for fractions outside
    /// [0, 1]; colors clamp; mismatched kinds step at the segment boundary.
    pub fn lerp(&self, other: &KeyValue, t: f32) -> KeyValue {
        match (self, other) {
            (KeyValue::Scalar(a), KeyValue::Scalar(b)) => KeyValue::Scalar(a + (b - a) * t),
            (KeyValue::Color(a), KeyValue::Color(b)) => KeyValue::Color(a.lerp(b, t)),
            (KeyValue::Path(a), KeyValue::Path(b)) => KeyValue::Path(a.lerp(b, t)),
            _ => {
                if t < 1.0 {
                    self.clone()
                } else {
                    other.clone()
                }
            }
        }
    }

    pub fn as_scalar(&self) -> Option<f32> {
        match self {
            KeyValue::Scalar(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<f32> for KeyValue {
    fn from(v: f32) -> Self {
        KeyValue::Scalar(v)
    }
}

impl From<Color> for KeyValue {
    fn from(c: Color) -> Self {
        KeyValue::Color(c)
    }
}

// ============================================================================
// Path data
// ============================================================================

/// A token of SVG-style path data
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathToken {
    Verb(char),
    Number(f32),
}

/// Parsed path data that can interpolate numerically.
///
/// Two paths interpolate per-coordinate when their command structures match
/// (same verbs in the same positions, same counts); otherwise the value
/// steps: the from-path holds until the segment completes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    tokens: Vec<PathToken>,
}

impl PathData {
    /// Tokenize path data. Unknown characters are skipped; parsing is
    /// lenient because path strings are opaque content, not configuration.
    pub fn parse(d: &str) -> Self {
        let mut tokens = Vec::new();
        let mut num = String::new();
        let flush = |num: &mut String, tokens: &mut Vec<PathToken>| {
            if !num.is_empty() {
                if let Ok(v) = num.parse::<f32>() {
                    tokens.push(PathToken::Number(v));
                }
                num.clear();
            }
        };
        for c in d.chars() {
            match c {
                // 'e' is never a path verb; mid-number it is an exponent.
                'e' | 'E' if !num.is_empty() && !num.contains(['e', 'E']) => num.push(c),
                'a'..='z' | 'A'..='Z' => {
                    flush(&mut num, &mut tokens);
                    tokens.push(PathToken::Verb(c));
                }
                '0'..='9' | '.' => num.push(c),
                '-' | '+' => {
                    // Sign starts a new number unless it follows an exponent.
                    if !num.ends_with('e') && !num.ends_with('E') {
                        flush(&mut num, &mut tokens);
                    }
                    num.push(c);
                }
                _ => flush(&mut num, &mut tokens),
            }
        }
        flush(&mut num, &mut tokens);
        Self { tokens }
    }

    pub fn tokens(&self) -> &[PathToken] {
        &self.tokens
    }

    /// Whether both paths have the same command structure.
    pub fn structure_matches(&self, other: &Self) -> bool {
        self.tokens.len() == other.tokens.len()
            && self
                .tokens
                .iter()
                .zip(other.tokens.iter())
                .all(|(a, b)| match (a, b) {
                    (PathToken::Verb(v1), PathToken::Verb(v2)) => v1 == v2,
                    (PathToken::Number(_), PathToken::Number(_)) => true,
                    _ => false,
                })
    }

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        if !self.structure_matches(other) {
            return if t < 1.0 { self.clone() } else { other.clone() };
        }
        let tokens = self
            .tokens
            .iter()
            .zip(other.tokens.iter())
            .map(|(a, b)| match (a, b) {
                (PathToken::Number(x), PathToken::Number(y)) => {
                    PathToken::Number(x + (y - x) * t)
                }
                (tok, _) => *tok,
            })
            .collect();
        Self { tokens }
    }

    /// Serialize back to path-data syntax.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for tok in &self.tokens {
            match tok {
                PathToken::Verb(v) => {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    out.push(*v);
                }
                PathToken::Number(n) => {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    out.push_str(&format!("{n}"));
                }
            }
        }
        out
    }
}

impl From<&str> for PathData {
    fn from(d: &str) -> Self {
        PathData::parse(d)
    }
}

// ============================================================================
// Keyframe track
// ============================================================================

/// An ordered list of keyframe values with optional explicit time positions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyframeTrack {
    values: Vec<KeyValue>,
    /// Normalized time position per keyframe; uniform spacing when absent
    times: Option<SmallVec<[f32; 8]>>,
}

impl KeyframeTrack {
    /// Uniformly spaced keyframes.
    pub fn new(values: Vec<KeyValue>) -> Result<Self> {
        if values.is_empty() {
            return Err(TimelineError::EmptyTrack);
        }
        if values.windows(2).any(|w| w[0].kind() != w[1].kind()) {
            return Err(TimelineError::MixedValueKinds);
        }
        Ok(Self {
            values,
            times: None,
        })
    }

    /// Keyframes with an explicit times table: one entry per keyframe,
    /// starting at 0, ending at 1, non-decreasing.
    pub fn with_times(values: Vec<KeyValue>, times: Vec<f32>) -> Result<Self> {
        let mut track = Self::new(values)?;
        if times.len() != track.values.len() {
            return Err(TimelineError::TimesMismatch {
                times: times.len(),
                keyframes: track.values.len(),
            });
        }
        let first = times[0];
        let last = times[times.len() - 1];
        if first != 0.0 || last != 1.0 || times.windows(2).any(|w| w[1] < w[0]) {
            return Err(TimelineError::NonMonotonicTimes);
        }
        track.times = Some(times.into_iter().collect());
        Ok(track)
    }

    /// Convenience constructor for scalar tracks.
    pub fn scalars(values: impl IntoIterator<Item = f32>) -> Result<Self> {
        Self::new(values.into_iter().map(KeyValue::Scalar).collect())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[KeyValue] {
        &self.values
    }

    pub fn times(&self) -> Option<&[f32]> {
        self.times.as_deref()
    }

    pub fn first(&self) -> &KeyValue {
        &self.values[0]
    }

    pub fn last(&self) -> &KeyValue {
        &self.values[self.values.len() - 1]
    }

    /// Sample at eased progress `e`. Values below 0 or above 1 extrapolate
    /// into the boundary segments (overshooting easing curves land here).
    pub fn sample(&self, e: f32) -> KeyValue {
        let n = self.values.len();
        if n == 1 {
            return self.values[0].clone();
        }

        match &self.times {
            Some(times) => {
                // Last segment also catches e >= 1.
                let mut seg = n - 2;
                for i in 0..n - 1 {
                    if e <= times[i + 1] {
                        seg = i;
                        break;
                    }
                }
                let span = times[seg + 1] - times[seg];
                if span < 1e-9 {
                    return self.values[seg + 1].clone();
                }
                let frac = (e - times[seg]) / span;
                self.values[seg].lerp(&self.values[seg + 1], frac)
            }
            None => {
                let pos = e * (n - 1) as f32;
                let seg = (pos.floor() as isize).clamp(0, (n - 2) as isize) as usize;
                let frac = pos - seg as f32;
                self.values[seg].lerp(&self.values[seg + 1], frac)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_track() {
        assert_eq!(KeyframeTrack::new(vec![]), Err(TimelineError::EmptyTrack));
    }

    #[test]
    fn rejects_mixed_kinds() {
        let values = vec![KeyValue::Scalar(0.0), KeyValue::Color(Color::WHITE)];
        assert_eq!(
            KeyframeTrack::new(values),
            Err(TimelineError::MixedValueKinds)
        );
    }

    #[test]
    fn times_table_is_validated() {
        let vals = || vec![KeyValue::Scalar(0.0), KeyValue::Scalar(1.0)];
        assert!(matches!(
            KeyframeTrack::with_times(vals(), vec![0.0]),
            Err(TimelineError::TimesMismatch { .. })
        ));
        assert_eq!(
            KeyframeTrack::with_times(vals(), vec![0.1, 1.0]),
            Err(TimelineError::NonMonotonicTimes)
        );
        assert_eq!(
            KeyframeTrack::with_times(vals(), vec![0.0, 0.9]),
            Err(TimelineError::NonMonotonicTimes)
        );
        assert_eq!(
            KeyframeTrack::with_times(
                vec![KeyValue::Scalar(0.0), KeyValue::Scalar(1.0), KeyValue::Scalar(2.0)],
                vec![0.0, 0.8, 0.5]
            )
            .unwrap_err(),
            TimelineError::NonMonotonicTimes
        );
    }

    #[test]
    fn rest_value_track_is_plain_two_segment_interpolation() {
        // [v0, v1, v0] needs no special casing.
        let track = KeyframeTrack::scalars([0.0, -12.0, 0.0]).unwrap();
        assert_eq!(track.sample(0.0).as_scalar(), Some(0.0));
        assert_eq!(track.sample(0.25).as_scalar(), Some(-6.0));
        assert_eq!(track.sample(0.5).as_scalar(), Some(-12.0));
        assert_eq!(track.sample(0.75).as_scalar(), Some(-6.0));
        assert_eq!(track.sample(1.0).as_scalar(), Some(0.0));
    }

    #[test]
    fn explicit_times_shift_segments() {
        // The blink track: hold, snap shut, snap open, hold.
        let track = KeyframeTrack::with_times(
            vec![
                KeyValue::Scalar(1.0),
                KeyValue::Scalar(1.0),
                KeyValue::Scalar(0.1),
                KeyValue::Scalar(1.0),
                KeyValue::Scalar(1.0),
            ],
            vec![0.0, 0.4, 0.5, 0.6, 1.0],
        )
        .unwrap();
        assert_eq!(track.sample(0.2).as_scalar(), Some(1.0));
        assert_eq!(track.sample(0.5).as_scalar(), Some(0.1));
        let half_open = track.sample(0.55).as_scalar().unwrap();
        assert!((half_open - 0.55).abs() < 1e-6);
        assert_eq!(track.sample(0.8).as_scalar(), Some(1.0));
    }

    #[test]
    fn single_keyframe_is_constant() {
        let track = KeyframeTrack::scalars([7.0]).unwrap();
        assert_eq!(track.sample(0.0).as_scalar(), Some(7.0));
        assert_eq!(track.sample(0.9).as_scalar(), Some(7.0));
    }

    #[test]
    fn overshoot_extrapolates_last_segment() {
        let track = KeyframeTrack::scalars([0.0, 10.0]).unwrap();
        let v = track.sample(1.1).as_scalar().unwrap();
        assert!((v - 11.0).abs() < 1e-5);
    }

    #[test]
    fn color_track_interpolates_componentwise() {
        let track = KeyframeTrack::new(vec![
            KeyValue::Color(Color::from_hex(0x000000)),
            KeyValue::Color(Color::from_hex(0xFFFFFF)),
        ])
        .unwrap();
        match track.sample(0.5) {
            KeyValue::Color(c) => {
                assert!((c.r - 0.5).abs() < 1e-6);
                assert!((c.g - 0.5).abs() < 1e-6);
                assert!((c.b - 0.5).abs() < 1e-6);
            }
            other => panic!("expected color, got {other:?}"),
        }
    }

    #[test]
    fn path_parse_roundtrip() {
        let p = PathData::parse("M305 580Q340 610 375 580");
        assert_eq!(p.tokens().len(), 8);
        assert_eq!(p.to_svg(), "M 305 580 Q 340 610 375 580");
    }

    #[test]
    fn path_lerp_per_coordinate() {
        let a = PathData::parse("M305 580Q340 610 375 580");
        let b = PathData::parse("M305 585Q340 618 375 585");
        let mid = a.lerp(&b, 0.5);
        match mid.tokens()[2] {
            PathToken::Number(v) => assert!((v - 582.5).abs() < 1e-4),
            _ => panic!("expected number"),
        }
    }

    #[test]
    fn path_structure_mismatch_steps() {
        let a = PathData::parse("M0 0L10 10");
        let b = PathData::parse("M0 0Q5 5 10 10");
        assert!(!a.structure_matches(&b));
        assert_eq!(a.lerp(&b, 0.5), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn negative_numbers_tokenize() {
        let p = PathData::parse("M-5-10L3.5 2e-1");
        let nums: Vec<f32> = p
            .tokens()
            .iter()
            .filter_map(|t| match t {
                PathToken::Number(v) => Some(*v),
                _ => None,
            })
            .collect();
        assert_eq!(nums, vec![-5.0, -10.0, 3.5, 0.2]);
    }
}
