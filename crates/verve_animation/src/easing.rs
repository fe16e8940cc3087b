//! Easing curves
//!
//! Timelines feed clamped cycle progress through an [`Easing`] before
//! sampling their keyframe track. The engine carries exactly the curve
//! families its scenes declare: the polynomial in/out/in-out family at
//! three strengths, and CSS-style cubic beziers for everything custom
//! (soft idle sways, expo-like entrances).

use serde::{Deserialize, Serialize};

/// Strength of a polynomial curve
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Power {
    Quad,
    Cubic,
    Quart,
}

impl Power {
    fn exponent(self) -> i32 {
        match self {
            Power::Quad => 2,
            Power::Cubic => 3,
            Power::Quart => 4,
        }
    }
}

/// Easing curve applied to normalized progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    /// Accelerate from rest
    In(Power),
    /// Decelerate into the target
    Out(Power),
    /// Accelerate, then decelerate, symmetric about the midpoint
    InOut(Power),
    /// Arbitrary curve through two control points
    Bezier(CubicBezier),
}

impl Easing {
    /// Apply the curve to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::In(power) => rise(t, *power),
            Easing::Out(power) => 1.0 - rise(1.0 - t, *power),
            Easing::InOut(power) => {
                if t < 0.5 {
                    rise(2.0 * t, *power) / 2.0
                } else {
                    1.0 - rise(2.0 - 2.0 * t, *power) / 2.0
                }
            }
            Easing::Bezier(bezier) => bezier.apply(t),
        }
    }
}

#[inline]
fn rise(t: f32, power: Power) -> f32 {
    t.powi(power.exponent())
}

/// A CSS-style timing curve: a cubic bezier from (0,0) to (1,1) shaped by
/// two control points
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress at time `t`: invert the x polynomial to find the
    /// curve parameter, then evaluate y there. Runs in f64 so repeated
    /// per-frame evaluation stays jitter-free.
    pub fn apply(&self, t: f32) -> f32 {
        // Endpoints are exact by definition.
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let x = Poly::for_axis(self.x1, self.x2);
        let y = Poly::for_axis(self.y1, self.y2);
        y.eval(x.invert(t as f64)) as f32
    }
}

/// One axis of the bezier, collapsed to cubic coefficients in Horner form
struct Poly {
    a: f64,
    b: f64,
    c: f64,
}

impl Poly {
    fn for_axis(p1: f32, p2: f32) -> Self {
        let (p1, p2) = (p1 as f64, p2 as f64);
        Self {
            a: 1.0 - 3.0 * p2 + 3.0 * p1,
            b: 3.0 * p2 - 6.0 * p1,
            c: 3.0 * p1,
        }
    }

    fn eval(&self, u: f64) -> f64 {
        ((self.a * u + self.b) * u + self.c) * u
    }

    fn slope(&self, u: f64) -> f64 {
        (3.0 * self.a * u + 2.0 * self.b) * u + self.c
    }

    /// Parameter `u` with `eval(u) == target`. Newton iteration does the
    /// work on well-behaved curves; where the slope flattens out the
    /// search switches to bisection, which the monotone x axis guarantees
    /// to converge.
    fn invert(&self, target: f64) -> f64 {
        const TOLERANCE: f64 = 1e-7;

        let mut u = target;
        for _ in 0..8 {
            let error = self.eval(u) - target;
            if error.abs() < TOLERANCE {
                return u;
            }
            let slope = self.slope(u);
            if slope.abs() < TOLERANCE {
                break;
            }
            u -= error / slope;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        u = target;
        for _ in 0..24 {
            let error = self.eval(u) - target;
            if error.abs() < TOLERANCE {
                break;
            }
            if error < 0.0 {
                lo = u;
            } else {
                hi = u;
            }
            u = 0.5 * (lo + hi);
        }
        u
    }
}
