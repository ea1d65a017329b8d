//! Time-driven animation primitives.
//!
//! Every value here is a pure function of elapsed time, so callers (and tests)
//! can sample any timestamp without a running render loop.

use std::time::Duration;

use crate::geometry::Point;

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    fn lerp(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, other: f32, t: f32) -> f32 {
        self + (other - self) * t
    }
}

impl Lerp for Point {
    fn lerp(self, other: Point, t: f32) -> Point {
        Point::lerp(self, other, t)
    }
}

/// Timing curve mapping linear progress to eased progress, both in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// CSS `ease-out`.
    EaseOut,
    /// CSS `ease-in-out`.
    EaseInOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Curve used for the map's zoom/pan transition.
    pub const VIEWPORT: Easing = Easing::CubicBezier(0.25, 0.46, 0.45, 0.94);

    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn bezier_axis(p1: f32, p2: f32, s: f32) -> f32 {
    // Endpoints fixed at 0 and 1.
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_axis_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Solve the curve for `x` and return its `y`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // Newton first, bisection if the slope flattens out.
    let mut s = x;
    for _ in 0..8 {
        let err = bezier_axis(x1, x2, s) - x;
        if err.abs() < 1e-6 {
            return bezier_axis(y1, y2, s);
        }
        let slope = bezier_axis_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = x;
    for _ in 0..32 {
        let v = bezier_axis(x1, x2, s);
        if (v - x).abs() < 1e-6 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier_axis(y1, y2, s)
}

/// One-shot interpolation between two values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T: Lerp> {
    pub from: T,
    pub to: T,
    pub started_at: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, started_at: Duration, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            easing,
        }
    }

    /// Linear progress in `[0, 1]` at time `now`.
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn value_at(&self, now: Duration) -> T {
        let t = self.easing.apply(self.progress(now));
        self.from.lerp(self.to, t)
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}

/// An infinitely repeating animation clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cycle {
    pub period: Duration,
    /// Start offset; the cycle rests at phase 0 until the delay has elapsed.
    pub delay: Duration,
    /// Run phases backwards (`animation-direction: reverse`).
    pub reverse: bool,
}

impl Cycle {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            delay: Duration::ZERO,
            reverse: false,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Phase in `[0, 1)` at `elapsed`, or `None` while still inside the delay.
    pub fn phase_at(&self, elapsed: Duration) -> Option<f32> {
        if elapsed < self.delay {
            return None;
        }
        if self.period.is_zero() {
            return Some(0.0);
        }
        let local = (elapsed - self.delay).as_nanos() % self.period.as_nanos();
        let phase = local as f64 / self.period.as_nanos() as f64;
        let phase = phase as f32;
        if self.reverse {
            Some(if phase == 0.0 { 0.0 } else { 1.0 - phase })
        } else {
            Some(phase)
        }
    }
}

/// Piecewise keyframe track; each interval uses `easing`, like a CSS animation.
#[derive(Clone, Copy, Debug)]
pub struct Keyframes<'a, T: Lerp> {
    pub stops: &'a [(f32, T)],
    pub easing: Easing,
}

impl<'a, T: Lerp> Keyframes<'a, T> {
    pub const fn new(stops: &'a [(f32, T)], easing: Easing) -> Self {
        Self { stops, easing }
    }

    /// Sample at phase `t` in `[0, 1]`. Stops must be sorted and non-empty.
    pub fn sample(&self, t: f32) -> Option<T> {
        let (first, rest) = self.stops.split_first()?;
        if t <= first.0 {
            return Some(first.1);
        }
        let mut prev = first;
        for stop in rest {
            if t <= stop.0 {
                let span = stop.0 - prev.0;
                let local = if span <= 0.0 { 1.0 } else { (t - prev.0) / span };
                return Some(prev.1.lerp(stop.1, self.easing.apply(local)));
            }
            prev = stop;
        }
        Some(prev.1)
    }
}
