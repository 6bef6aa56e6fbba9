//! Quadratic-through-midpoints smoothing.
//!
//! Raw samples act as control points and the midpoints between consecutive
//! samples act as anchors, which turns a jagged polyline into a continuous
//! curve. The geometry is computed here, independent of any drawing backend;
//! [`render`](super::render) paints it.

use super::point::Point;

/// Minimum number of samples needed to fit a curve.
pub const MIN_CURVE_POINTS: usize = 3;

/// One quadratic Bezier segment continuing from the previous end point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadSegment {
    pub control: Point,
    pub end: Point,
}

/// Geometry produced from a point buffer.
#[derive(Clone, Debug, PartialEq)]
pub enum StrokeGeometry {
    /// Fewer than three samples: a filled disc at the first sample.
    Dot { center: Point, radius: f64 },
    /// A path starting at `start` followed by quadratic segments.
    Curve {
        start: Point,
        segments: Vec<QuadSegment>,
    },
}

impl StrokeGeometry {
    /// Builds the geometry for `points` drawn with a brush `width` wide.
    ///
    /// Returns `None` for an empty buffer.
    pub fn from_points(points: &[Point], width: f64) -> Option<Self> {
        let first = *points.first()?;
        if points.len() < MIN_CURVE_POINTS {
            return Some(StrokeGeometry::Dot {
                center: first,
                radius: width / 2.0,
            });
        }

        let last = points.len() - 1;
        let mut segments = Vec::with_capacity(last - 1);
        for i in 1..last - 1 {
            segments.push(QuadSegment {
                control: points[i],
                end: points[i].midpoint(points[i + 1]),
            });
        }

        // The closing segment ends on the real final sample, not on a midpoint.
        segments.push(QuadSegment {
            control: points[last - 1],
            end: points[last],
        });

        Some(StrokeGeometry::Curve {
            start: first,
            segments,
        })
    }

    /// First anchor of the geometry (the dot center for a dot).
    pub fn start(&self) -> Point {
        match self {
            StrokeGeometry::Dot { center, .. } => *center,
            StrokeGeometry::Curve { start, .. } => *start,
        }
    }

    /// Final anchor of the geometry (the dot center for a dot).
    pub fn end(&self) -> Point {
        match self {
            StrokeGeometry::Dot { center, .. } => *center,
            StrokeGeometry::Curve { start, segments } => {
                segments.last().map(|segment| segment.end).unwrap_or(*start)
            }
        }
    }
}

/// Converts a quadratic from `from` to the two cubic control points Cairo needs.
pub fn quad_to_cubic(from: Point, segment: &QuadSegment) -> (Point, Point) {
    const TWO_THIRDS: f64 = 2.0 / 3.0;
    (
        from.lerp(segment.control, TWO_THIRDS),
        segment.end.lerp(segment.control, TWO_THIRDS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(len: usize) -> Vec<Point> {
        (0..len)
            .map(|i| Point::new(i as f64 * 10.0, (i % 3) as f64 * 4.0))
            .collect()
    }

    #[test]
    fn empty_buffer_has_no_geometry() {
        assert_eq!(StrokeGeometry::from_points(&[], 3.0), None);
    }

    #[test]
    fn short_buffers_become_dots_at_first_point() {
        for len in 1..MIN_CURVE_POINTS {
            let points = line(len);
            let geometry = StrokeGeometry::from_points(&points, 6.0).unwrap();
            assert_eq!(
                geometry,
                StrokeGeometry::Dot {
                    center: points[0],
                    radius: 3.0
                }
            );
        }
    }

    #[test]
    fn three_points_emit_only_the_closing_segment() {
        let points = line(3);
        let geometry = StrokeGeometry::from_points(&points, 2.0).unwrap();
        assert_eq!(
            geometry,
            StrokeGeometry::Curve {
                start: points[0],
                segments: vec![QuadSegment {
                    control: points[1],
                    end: points[2],
                }],
            }
        );
    }

    #[test]
    fn interior_segments_end_on_midpoints() {
        let points = line(6);
        let StrokeGeometry::Curve { segments, .. } =
            StrokeGeometry::from_points(&points, 2.0).unwrap()
        else {
            panic!("expected a curve");
        };

        // len - 3 interior segments plus the closing one
        assert_eq!(segments.len(), 4);
        for (i, segment) in segments[..3].iter().enumerate() {
            let idx = i + 1;
            assert_eq!(segment.control, points[idx]);
            assert_eq!(segment.end, points[idx].midpoint(points[idx + 1]));
        }
        assert_eq!(segments[3].control, points[4]);
        assert_eq!(segments[3].end, points[5]);
    }

    #[test]
    fn endpoints_match_buffer_exactly() {
        for len in MIN_CURVE_POINTS..40 {
            let points: Vec<Point> = (0..len)
                .map(|i| Point::new(1.0 + i as f64 * 0.37, 50.0 - (i as f64).sqrt()))
                .collect();
            let geometry = StrokeGeometry::from_points(&points, 4.0).unwrap();
            assert_eq!(geometry.start(), points[0]);
            assert_eq!(geometry.end(), points[len - 1]);
        }
    }

    #[test]
    fn quad_to_cubic_keeps_straight_lines_straight() {
        let from = Point::new(0.0, 0.0);
        let segment = QuadSegment {
            control: Point::new(3.0, 0.0),
            end: Point::new(6.0, 0.0),
        };
        let (c1, c2) = quad_to_cubic(from, &segment);
        assert!((c1.x - 2.0).abs() < 1e-9 && c1.y == 0.0);
        assert!((c2.x - 4.0).abs() < 1e-9 && c2.y == 0.0);
    }
}
