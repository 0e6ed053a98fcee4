//! Mouse-reactive point grid behind the hero section.
//!
//! The grid model and the per-point intensity math are plain data so they can
//! be exercised without a canvas; `draw_frame` is the only piece that touches
//! the 2d context, and the frame scheduler lives with the hero component.

use web_sys::CanvasRenderingContext2d;

/// Distance between neighboring grid points, in CSS pixels.
pub const GRID_SPACING: f64 = 60.0;
/// Pointer distance at which a point stops reacting.
pub const FADE_RADIUS: f64 = 200.0;
/// Accent color shared by every dot; only the alpha varies.
pub const DOT_RGB: (u8, u8, u8) = (0, 212, 255);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
}

impl GridPoint {
    pub fn distance_to(&self, pointer: Pointer) -> f64 {
        (self.x - pointer.x).hypot(self.y - pointer.y)
    }
}

/// Fixed-spacing grid covering the viewport, rebuilt from scratch whenever
/// the viewport dimensions change.
#[derive(Debug, Clone, Default)]
pub struct PointField {
    pub width: f64,
    pub height: f64,
    pub points: Vec<GridPoint>,
}

impl PointField {
    /// Retile `[0, width) × [0, height)` at `GRID_SPACING`, starting at the
    /// origin.
    pub fn rebuild(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.points.clear();
        let mut x = 0.0;
        while x < width {
            let mut y = 0.0;
            while y < height {
                self.points.push(GridPoint { x, y });
                y += GRID_SPACING;
            }
            x += GRID_SPACING;
        }
    }
}

/// Proximity weight for a point: 1.0 under the pointer, falling linearly to
/// 0.0 at `FADE_RADIUS`.
pub fn intensity(point: GridPoint, pointer: Pointer) -> f64 {
    (1.0 - point.distance_to(pointer) / FADE_RADIUS).max(0.0)
}

pub fn dot_radius(intensity: f64) -> f64 {
    1.0 + intensity * 2.0
}

pub fn dot_alpha(intensity: f64) -> f64 {
    0.06 + intensity * 0.3
}

/// One full render pass: clear the surface, then draw every point with its
/// proximity-weighted radius and opacity. O(points), no culling.
pub fn draw_frame(ctx: &CanvasRenderingContext2d, field: &PointField, pointer: Pointer) {
    ctx.clear_rect(0.0, 0.0, field.width, field.height);

    let (r, g, b) = DOT_RGB;
    for point in &field.points {
        let weight = intensity(*point, pointer);
        ctx.begin_path();
        let _ = ctx.arc(
            point.x,
            point.y,
            dot_radius(weight),
            0.0,
            std::f64::consts::TAU,
        );
        ctx.set_fill_style_str(&format!("rgba({r}, {g}, {b}, {})", dot_alpha(weight)));
        ctx.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuild_tiles_the_viewport() {
        let mut field = PointField::default();
        field.rebuild(180.0, 120.0);
        // 3 columns (0, 60, 120 < 180) by 2 rows (0, 60 < 120)
        assert_eq!(field.points.len(), 6);
        assert_eq!(field.points[0], GridPoint { x: 0.0, y: 0.0 });
        assert!(field
            .points
            .iter()
            .all(|p| p.x < 180.0 && p.y < 120.0 && p.x % GRID_SPACING == 0.0));
    }

    #[test]
    fn rebuild_replaces_previous_grid() {
        let mut field = PointField::default();
        field.rebuild(600.0, 600.0);
        let dense = field.points.len();
        field.rebuild(60.0, 60.0);
        assert!(field.points.len() < dense);
        assert_eq!(field.points.len(), 1);
    }

    #[test]
    fn intensity_peaks_under_the_pointer() {
        let point = GridPoint { x: 120.0, y: 60.0 };
        let weight = intensity(point, Pointer { x: 120.0, y: 60.0 });
        assert_eq!(weight, 1.0);
        assert_eq!(dot_radius(weight), 3.0);
        assert!((dot_alpha(weight) - 0.36).abs() < 1e-12);
    }

    #[test]
    fn intensity_is_zero_at_and_beyond_fade_radius() {
        let point = GridPoint { x: 0.0, y: 0.0 };
        let at_edge = intensity(point, Pointer { x: FADE_RADIUS, y: 0.0 });
        let beyond = intensity(point, Pointer { x: 5000.0, y: 5000.0 });
        assert_eq!(at_edge, 0.0);
        assert_eq!(beyond, 0.0);
        assert_eq!(dot_radius(at_edge), 1.0);
        assert!((dot_alpha(at_edge) - 0.06).abs() < 1e-12);
    }

    #[test]
    fn intensity_falls_linearly() {
        let point = GridPoint { x: 0.0, y: 0.0 };
        let halfway = intensity(point, Pointer { x: FADE_RADIUS / 2.0, y: 0.0 });
        assert!((halfway - 0.5).abs() < 1e-12);
    }
}
