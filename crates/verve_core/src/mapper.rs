//! Piecewise-linear range mapping
//!
//! A [`RangeMapper`] maps an input domain onto an output range, segment by
//! segment. Two-point mappers behave like a plain linear scale; longer
//! domains interpolate within the enclosing segment. With `clamp` the input
//! is pinned to the domain boundary before mapping, otherwise values beyond
//! the boundary extrapolate along the boundary segment's slope.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{GraphError, Result};

/// Stops are almost always 2 or 3 entries; keep them inline.
type Stops = SmallVec<[f32; 4]>;

/// Piecewise-linear domain-to-range mapping definition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeMapper {
    domain: Stops,
    range: Stops,
    clamp: bool,
}

impl RangeMapper {
    /// Create a clamping mapper. Domain and range must have equal length
    /// >= 2; domains with more than two points must be non-decreasing.
    pub fn new(
        domain: impl IntoIterator<Item = f32>,
        range: impl IntoIterator<Item = f32>,
    ) -> Result<Self> {
        Self::build(domain, range, true)
    }

    /// Create a mapper that extrapolates beyond the domain boundaries.
    pub fn extrapolating(
        domain: impl IntoIterator<Item = f32>,
        range: impl IntoIterator<Item = f32>,
    ) -> Result<Self> {
        Self::build(domain, range, false)
    }

    fn build(
        domain: impl IntoIterator<Item = f32>,
        range: impl IntoIterator<Item = f32>,
        clamp: bool,
    ) -> Result<Self> {
        let domain: Stops = domain.into_iter().collect();
        let range: Stops = range.into_iter().collect();

        if domain.len() != range.len() {
            return Err(GraphError::InvalidMapper(format!(
                "domain has {} stops but range has {}",
                domain.len(),
                range.len()
            )));
        }
        if domain.len() < 2 {
            return Err(GraphError::InvalidMapper(
                "at least 2 stops are required".into(),
            ));
        }
        if !domain.iter().all(|v| v.is_finite()) || !range.iter().all(|v| v.is_finite()) {
            return Err(GraphError::InvalidMapper("stops must be finite".into()));
        }
        // Two-point domains may run in either direction; longer domains must
        // be sorted so segment lookup is well defined.
        if domain.len() > 2 && domain.windows(2).any(|w| w[1] < w[0]) {
            return Err(GraphError::InvalidMapper(
                "domains with more than 2 stops must be non-decreasing".into(),
            ));
        }

        Ok(Self {
            domain,
            range,
            clamp,
        })
    }

    pub fn clamps(&self) -> bool {
        self.clamp
    }

    pub fn domain(&self) -> &[f32] {
        &self.domain
    }

    pub fn range(&self) -> &[f32] {
        &self.range
    }

    /// Map an input value through the piecewise segments.
    pub fn map(&self, value: f32) -> f32 {
        let (d0, dn) = (self.domain[0], self.domain[self.domain.len() - 1]);

        let v = if self.clamp {
            // Two-point domains may be descending; pin to the nearer bound.
            let (lo, hi) = if d0 <= dn { (d0, dn) } else { (dn, d0) };
            value.clamp(lo, hi)
        } else {
            value
        };

        let seg = self.segment_for(v);
        let (a, b) = (self.domain[seg], self.domain[seg + 1]);
        let span = b - a;
        if span.abs() < 1e-12 {
            return self.range[seg];
        }
        let t = (v - a) / span;
        self.range[seg] + t * (self.range[seg + 1] - self.range[seg])
    }

    /// Index of the segment enclosing `v` (boundary segments for outliers).
    fn segment_for(&self, v: f32) -> usize {
        let last = self.domain.len() - 2;
        if self.domain.len() == 2 {
            return 0;
        }
        for i in 0..=last {
            if v <= self.domain[i + 1] {
                return i;
            }
        }
        last
    }
}
