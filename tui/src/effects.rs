//! Geometry for the breathing circle.

use ratatui::layout::Rect;

use lavender_types::ui::CIRCLE_FULL_SCALE;

/// Headroom around the fully expanded circle, in canvas units.
const CANVAS_MARGIN: f64 = 1.1;

/// Canvas bounds that keep a circle round in a `area`-sized widget.
///
/// Terminal cells are about twice as tall as they are wide, so the x span is
/// widened by `width / (2 * height)`.
#[must_use]
pub fn canvas_bounds(area: Rect) -> ([f64; 2], [f64; 2]) {
    let half_height = f64::from(CIRCLE_FULL_SCALE) * CANVAS_MARGIN;
    let aspect = if area.height == 0 {
        1.0
    } else {
        f64::from(area.width) / (2.0 * f64::from(area.height))
    };
    let half_width = half_height * aspect;
    ([-half_width, half_width], [-half_height, half_height])
}

/// Box standing in for the circle when only ASCII is available.
///
/// The full-scale box fills `area` (keeping a 2:1 cell aspect); smaller scales
/// shrink it around the centre.
#[must_use]
pub fn circle_rect(area: Rect, scale: f32) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height.saturating_mul(2);
    let full = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };
    scale_rect(full, scale / CIRCLE_FULL_SCALE)
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let scale = scale.clamp(0.0, 1.0);
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}
