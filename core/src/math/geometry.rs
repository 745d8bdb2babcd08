/// Plane-geometry helpers shared by the scene builder and drawing backends.
pub struct GeometryHelper;

impl GeometryHelper {
    /// Rotates `point` counter-clockwise about `pivot` by `angle_deg` degrees.
    pub fn rotate_about(point: (f64, f64), pivot: (f64, f64), angle_deg: f64) -> (f64, f64) {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        let dx = point.0 - pivot.0;
        let dy = point.1 - pivot.1;
        (pivot.0 + dx * cos - dy * sin, pivot.1 + dx * sin + dy * cos)
    }

    /// Offset of length `length` along heading `angle_rad`.
    pub fn heading_vector(angle_rad: f64, length: f64) -> (f64, f64) {
        (angle_rad.cos() * length, angle_rad.sin() * length)
    }
}

/// Axis-aligned box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn around(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        points.into_iter().fold(None, |bounds, (x, y)| {
            Some(match bounds {
                None => Bounds {
                    min_x: x,
                    max_x: x,
                    min_y: y,
                    max_y: y,
                },
                Some(b) => Bounds {
                    min_x: b.min_x.min(x),
                    max_x: b.max_x.max(x),
                    min_y: b.min_y.min(y),
                    max_y: b.max_y.max(y),
                },
            })
        })
    }

    pub fn padded(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            max_x: self.max_x + margin,
            min_y: self.min_y - margin,
            max_y: self.max_y + margin,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Grows the shorter side so that width / height equals `aspect`,
    /// keeping the box centered.
    pub fn with_aspect(&self, aspect: f64) -> Self {
        let width = self.width().max(f64::EPSILON);
        let height = self.height().max(f64::EPSILON);
        let (cx, cy) = (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        );
        let (half_w, half_h) = if width / height < aspect {
            (height * aspect / 2.0, height / 2.0)
        } else {
            (width / 2.0, width / aspect / 2.0)
        };
        Self {
            min_x: cx - half_w,
            max_x: cx + half_w,
            min_y: cy - half_h,
            max_y: cy + half_h,
        }
    }

    /// Maps a world point into a `width x height` screen with y pointing down.
    pub fn to_screen(&self, point: (f64, f64), width: f64, height: f64) -> (f64, f64) {
        let fitted = self.with_aspect(width / height.max(f64::EPSILON));
        let scale = width / fitted.width();
        (
            (point.0 - fitted.min_x) * scale,
            height - (point.1 - fitted.min_y) * scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_quarter_turn() {
        let (x, y) = GeometryHelper::rotate_about((2.0, 1.0), (1.0, 1.0), 90.0);
        assert!((x - 1.0).abs() < 1e-12);
        assert!((y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn bounds_cover_all_points() {
        let bounds = Bounds::around(vec![(1.0, 5.0), (-2.0, 3.0), (4.0, -1.0)]).unwrap();
        assert_eq!(bounds.min_x, -2.0);
        assert_eq!(bounds.max_x, 4.0);
        assert_eq!(bounds.min_y, -1.0);
        assert_eq!(bounds.max_y, 5.0);
        assert!(Bounds::around(Vec::new()).is_none());
    }

    #[test]
    fn aspect_fit_keeps_center() {
        let bounds = Bounds {
            min_x: 0.0,
            max_x: 2.0,
            min_y: 0.0,
            max_y: 2.0,
        };
        let wide = bounds.with_aspect(2.0);
        assert!((wide.width() - 4.0).abs() < 1e-12);
        assert!((wide.min_x + 1.0).abs() < 1e-12);
        assert_eq!(wide.height(), 2.0);
    }

    #[test]
    fn screen_mapping_flips_y() {
        let bounds = Bounds {
            min_x: 0.0,
            max_x: 10.0,
            min_y: 0.0,
            max_y: 10.0,
        };
        let (sx, sy) = bounds.to_screen((0.0, 10.0), 100.0, 100.0);
        assert!(sx.abs() < 1e-9);
        assert!(sy.abs() < 1e-9);
        let (_, bottom) = bounds.to_screen((0.0, 0.0), 100.0, 100.0);
        assert!((bottom - 100.0).abs() < 1e-9);
    }
}
