use crate::game::Size;

/// Maps the fixed game surface into a widget of any size, keeping its aspect
/// ratio and centring it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl SurfaceTransform {
    pub const IDENTITY: SurfaceTransform = SurfaceTransform {
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    pub fn fit(width: f64, height: f64, surface: Size) -> Self {
        if width <= 0.0 || height <= 0.0 || surface.w <= 0.0 || surface.h <= 0.0 {
            return Self::IDENTITY;
        }
        let scale = (width / surface.w).min(height / surface.h);
        SurfaceTransform {
            scale,
            offset_x: (width - surface.w * scale) / 2.0,
            offset_y: (height - surface.h * scale) / 2.0,
        }
    }

    /// Widget coordinates to surface coordinates.
    pub fn to_surface(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.offset_x) / self.scale,
            (y - self.offset_y) / self.scale,
        )
    }

    pub fn apply(&self, cr: &cairo::Context) {
        cr.translate(self.offset_x, self.offset_y);
        cr.scale(self.scale, self.scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: Size = Size::new(600.0, 580.0);

    #[test]
    fn exact_size_is_identity() {
        assert_eq!(SurfaceTransform::fit(600.0, 580.0, SURFACE), SurfaceTransform::IDENTITY);
    }

    #[test]
    fn wide_widget_letterboxes_sideways() {
        let t = SurfaceTransform::fit(1800.0, 1160.0, SURFACE);
        assert_eq!(t.scale, 2.0);
        assert_eq!(t.offset_x, 300.0);
        assert_eq!(t.offset_y, 0.0);
        assert_eq!(t.to_surface(300.0, 0.0), (0.0, 0.0));
        assert_eq!(t.to_surface(1500.0, 1160.0), (600.0, 580.0));
    }

    #[test]
    fn degenerate_sizes_fall_back() {
        assert_eq!(SurfaceTransform::fit(0.0, 100.0, SURFACE), SurfaceTransform::IDENTITY);
        assert_eq!(
            SurfaceTransform::fit(100.0, 100.0, Size::new(0.0, 10.0)),
            SurfaceTransform::IDENTITY
        );
    }

    #[test]
    fn mapped_points_land_where_they_were_drawn() {
        let t = SurfaceTransform::fit(450.0, 900.0, SURFACE);
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 450, 900).unwrap();
        let cr = cairo::Context::new(&surface).unwrap();
        t.apply(&cr);
        let (dx, dy) = cr.user_to_device(123.0, 456.0);
        let (sx, sy) = t.to_surface(dx, dy);
        assert!((sx - 123.0).abs() < 1e-9 && (sy - 456.0).abs() < 1e-9);
    }
}
