//! Spark path animation
//!
//! A small dot travels along a fixed four-point polyline, looping every
//! few seconds. The path is rebuilt from the surface rect on every paint,
//! so resizing never leaves stale geometry behind.

use crate::animation::{lerp, LoopingClock};
use egui::{Pos2, Rect};
use std::time::Duration;

/// How segment lengths are measured when walking the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentMetric {
    /// True arc length. The spark moves at constant speed.
    #[default]
    Euclidean,
    /// `|dx| + |dy|`. Cheaper, and slightly faster on diagonals.
    Manhattan,
}

impl SegmentMetric {
    pub fn length(self, a: Pos2, b: Pos2) -> f32 {
        let d = b - a;
        match self {
            SegmentMetric::Euclidean => d.length(),
            SegmentMetric::Manhattan => d.x.abs() + d.y.abs(),
        }
    }
}

/// Point at arc-length fraction `p` of the polyline.
///
/// A degenerate path (fewer than two distinct points) yields the first
/// point. `p` is clamped to `[0, 1]`; `p == 1.0` always yields the last
/// point even if rounding would overshoot the final segment.
pub fn spark_point(points: &[Pos2], p: f32, metric: SegmentMetric) -> Pos2 {
    let Some(&first) = points.first() else {
        return Pos2::ZERO;
    };

    let lengths: Vec<f32> = points.windows(2).map(|w| metric.length(w[0], w[1])).collect();
    let total: f32 = lengths.iter().sum();
    if total <= 0.0 {
        return first;
    }

    let p = p.clamp(0.0, 1.0);
    if p >= 1.0 {
        return points[points.len() - 1];
    }
    let target = p * total;
    let mut walked = 0.0;
    for (segment, &length) in points.windows(2).zip(&lengths) {
        if length > 0.0 && walked + length >= target {
            let ratio = ((target - walked) / length).clamp(0.0, 1.0);
            let (a, b) = (segment[0], segment[1]);
            return Pos2::new(lerp(a.x, b.x, ratio), lerp(a.y, b.y, ratio));
        }
        walked += length;
    }

    points[points.len() - 1]
}

/// The decorative arch drawn behind the widget: up the left side, across
/// the top, down the right.
pub fn decorative_path(rect: Rect) -> [Pos2; 4] {
    let at = |fx: f32, fy: f32| rect.min + egui::vec2(rect.width() * fx, rect.height() * fy);
    [at(0.1, 0.9), at(0.2, 0.2), at(0.8, 0.2), at(0.9, 0.9)]
}

/// Drives the spark along [`decorative_path`] from elapsed time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SparkAnimator {
    clock: LoopingClock,
    metric: SegmentMetric,
}

impl SparkAnimator {
    pub fn new(period: Duration, metric: SegmentMetric) -> Self {
        Self {
            clock: LoopingClock::new(period),
            metric,
        }
    }

    /// Normalized spark position, wrapping to 0 at the end of each pass.
    pub fn position(&self, elapsed: Duration) -> f32 {
        self.clock.position(elapsed)
    }

    pub fn point_on(&self, points: &[Pos2], elapsed: Duration) -> Pos2 {
        spark_point(points, self.position(elapsed), self.metric)
    }

    pub fn point_in(&self, rect: Rect, elapsed: Duration) -> Pos2 {
        self.point_on(&decorative_path(rect), elapsed)
    }
}
