//! Cairo-based rendering of stroke geometry.

use super::brush::BrushConfig;
use super::color::Color;
use super::curve::{StrokeGeometry, quad_to_cubic};
use super::point::Point;

/// Fills the whole target with an opaque background color.
///
/// Used once when the board surface is created; nothing paints over
/// committed ink afterwards.
pub fn render_board_background(ctx: &cairo::Context, fill: Color) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Source);
    fill.apply_source(ctx);
    let _ = ctx.paint(); // Ignore errors - a failed paint leaves the surface transparent
    let _ = ctx.restore();
}

/// Erases the whole target to fully transparent.
pub fn clear_surface(ctx: &cairo::Context) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    let _ = ctx.restore();
}

/// Repaints a preview target from a point buffer.
///
/// Clears the target, then draws either a dot (fewer than three samples) or
/// the smoothed curve through `points`. Calling it twice with the same
/// arguments produces the same pixels.
///
/// # Arguments
/// * `ctx` - Cairo context bound to the preview surface
/// * `points` - Samples of the in-progress stroke, oldest first
/// * `brush` - Current brush style, read at draw time
pub fn render_stroke(ctx: &cairo::Context, points: &[Point], brush: &BrushConfig) {
    clear_surface(ctx);

    if let Some(geometry) = StrokeGeometry::from_points(points, brush.width) {
        render_geometry(ctx, &geometry, brush);
    }
}

/// Paints already computed geometry without clearing first.
pub fn render_geometry(ctx: &cairo::Context, geometry: &StrokeGeometry, brush: &BrushConfig) {
    let _ = ctx.save();

    match geometry {
        StrokeGeometry::Dot { center, radius } => {
            brush.color.apply_source(ctx);
            brush.apply_antialias(ctx);
            ctx.new_path();
            ctx.arc(center.x, center.y, *radius, 0.0, std::f64::consts::PI * 2.0);
            let _ = ctx.fill();
        }
        StrokeGeometry::Curve { start, segments } => {
            brush.apply_stroke_style(ctx);
            ctx.new_path();
            ctx.move_to(start.x, start.y);

            let mut current = *start;
            for segment in segments {
                let (c1, c2) = quad_to_cubic(current, segment);
                ctx.curve_to(c1.x, c1.y, c2.x, c2.y, segment.end.x, segment.end.y);
                current = segment.end;
            }

            let _ = ctx.stroke();
        }
    }

    let _ = ctx.restore();
}
