//! Bounded sample buffer for the stroke in progress.

use crate::draw::Point;
use log::warn;

/// Default length above which the buffer is trimmed.
pub const DEFAULT_TRIM_THRESHOLD: usize = 100;
/// Default number of most recent samples kept by a trim.
pub const DEFAULT_TRIM_KEEP: usize = 10;
/// Accepted trim thresholds.
pub const TRIM_THRESHOLD_RANGE: std::ops::RangeInclusive<usize> = 4..=100_000;
/// Fewest samples a trim may keep; the curve needs three.
pub const MIN_TRIM_KEEP: usize = 3;

/// When and how far the point buffer is cut back during long strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimPolicy {
    /// Trim once the buffer holds more than this many samples
    pub threshold: usize,
    /// Samples retained by a trim (the newest ones)
    pub keep: usize,
}

impl Default for TrimPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_TRIM_THRESHOLD,
            keep: DEFAULT_TRIM_KEEP,
        }
    }
}

impl TrimPolicy {
    /// Policy with `threshold` in [`TRIM_THRESHOLD_RANGE`] and
    /// `MIN_TRIM_KEEP <= keep < threshold`, so every trim shrinks the buffer
    /// back under the threshold.
    pub fn clamped(self) -> Self {
        let threshold = self
            .threshold
            .clamp(*TRIM_THRESHOLD_RANGE.start(), *TRIM_THRESHOLD_RANGE.end());
        let keep = self.keep.clamp(MIN_TRIM_KEEP, threshold - 1);
        Self { threshold, keep }
    }
}

/// Ordered samples of the in-progress stroke, oldest first.
#[derive(Debug, Clone, Default)]
pub struct PointBuffer {
    points: Vec<Point>,
    policy: TrimPolicy,
}

impl PointBuffer {
    /// Creates an empty buffer, clamping `policy` into its valid range.
    pub fn new(policy: TrimPolicy) -> Self {
        let clamped = policy.clamped();
        if clamped != policy {
            warn!(
                "Invalid trim policy {}→{}, using {}→{}",
                policy.threshold, policy.keep, clamped.threshold, clamped.keep
            );
        }
        Self {
            points: Vec::with_capacity(clamped.threshold.saturating_add(1)),
            policy: clamped,
        }
    }

    pub fn policy(&self) -> TrimPolicy {
        self.policy
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Drops every sample and starts over from `point`.
    pub fn reset_to(&mut self, point: Point) {
        self.points.clear();
        self.points.push(point);
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Whether the buffer has grown past the trim threshold.
    pub fn needs_trim(&self) -> bool {
        self.points.len() > self.policy.threshold
    }

    /// Keeps only the newest `keep` samples, in their original order.
    ///
    /// Returns the number of samples dropped.
    pub fn trim(&mut self) -> usize {
        let excess = self.points.len().saturating_sub(self.policy.keep);
        self.points.drain(..excess);
        excess
    }
}
