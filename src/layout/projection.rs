// ---------------------------------------------------------------------------
// Orthographic 3D → 2D projection
// ---------------------------------------------------------------------------

/// View angles for projecting a spatial trajectory onto the 2D plot: yaw
/// spins the data about the vertical (z) axis, pitch tilts the camera from
/// side view (0) toward top-down (π/2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub yaw: f64,
    pub pitch: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Projection {
            yaw: 0.6,
            pitch: 0.45,
        }
    }
}

impl Projection {
    pub fn project(&self, p: [f64; 3]) -> [f64; 2] {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        let x1 = p[0] * cy - p[1] * sy;
        let y1 = p[0] * sy + p[1] * cy;
        [x1, y1 * sp + p[2] * cp]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn zero_angles_give_a_side_view() {
        let proj = Projection {
            yaw: 0.0,
            pitch: 0.0,
        };
        let p = proj.project([1.0, 2.0, 3.0]);
        assert!((p[0] - 1.0).abs() < 1e-12);
        assert!((p[1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn quarter_pitch_gives_a_top_view() {
        let proj = Projection {
            yaw: 0.0,
            pitch: FRAC_PI_2,
        };
        let p = proj.project([1.0, 2.0, 3.0]);
        assert!((p[0] - 1.0).abs() < 1e-12);
        assert!((p[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn yaw_rotates_in_the_horizontal_plane() {
        let proj = Projection {
            yaw: FRAC_PI_2,
            pitch: 0.0,
        };
        let p = proj.project([1.0, 0.0, 0.0]);
        assert!(p[0].abs() < 1e-12);
    }

    #[test]
    fn projection_is_linear() {
        let proj = Projection::default();
        let a = proj.project([1.0, 2.0, 3.0]);
        let b = proj.project([2.0, 4.0, 6.0]);
        assert!((b[0] - 2.0 * a[0]).abs() < 1e-12);
        assert!((b[1] - 2.0 * a[1]).abs() < 1e-12);
    }
}
