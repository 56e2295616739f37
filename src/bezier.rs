use crate::vector::Vector;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier {
    pub p0: Vector,
    pub p1: Vector,
    pub p2: Vector,
    pub p3: Vector,
}

impl CubicBezier {
    pub fn new(p0: Vector, p1: Vector, p2: Vector, p3: Vector) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Bernstein blend of the four control points. `t` is not clamped.
    pub fn point(self: &Self, t: f32) -> Vector {
        let u = 1.0 - t;
        let uu = u * u;
        let tt = t * t;

        self.p0 * (uu * u)
            + self.p1 * (3.0 * uu * t)
            + self.p2 * (3.0 * u * tt)
            + self.p3 * (tt * t)
    }

    /// First derivative with respect to `t`, not normalized.
    pub fn tangent(self: &Self, t: f32) -> Vector {
        let u = 1.0 - t;

        (self.p1 - self.p0) * (3.0 * u * u)
            + (self.p2 - self.p1) * (6.0 * u * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }

    pub fn points(self: &Self, segments: u32) -> Vec<Vector> {
        parameters(segments).map(|t| self.point(t)).collect()
    }
}

/// `segments + 1` evenly spaced parameters from 0 to 1, both ends included.
pub fn parameters(segments: u32) -> impl Iterator<Item = f32> {
    let segments = segments.max(1);
    (0..=segments).map(move |i| if i == segments { 1.0 } else { i as f32 / segments as f32 })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use super::*;

    fn arch() -> CubicBezier {
        CubicBezier::new(
            Vector::new(0.0, 0.0),
            Vector::new(0.0, 10.0),
            Vector::new(10.0, 10.0),
            Vector::new(10.0, 0.0),
        )
    }

    #[test]
    fn midpoint_of_arch() {
        assert_eq!(arch().point(0.5), Vector::new(5.0, 7.5));
    }

    #[test]
    fn tangent_at_midpoint_of_arch() {
        assert_eq!(arch().tangent(0.5), Vector::new(15.0, 0.0));
    }

    #[test]
    fn tangents_at_ends_follow_control_legs() {
        let curve = arch();
        assert_eq!(curve.tangent(0.0), (curve.p1 - curve.p0) * 3.0);
        assert_eq!(curve.tangent(1.0), (curve.p3 - curve.p2) * 3.0);
    }

    #[test]
    fn evaluates_outside_unit_interval() {
        let p = arch().point(2.0);
        assert!(p.x.is_finite() && p.y.is_finite());
        assert_relative_eq!(p.x, 10.0 * (3.0 * -1.0 * 4.0) + 10.0 * 8.0);
    }

    #[test]
    fn parameters_hit_both_ends() {
        let ts: Vec<f32> = parameters(100).collect();
        assert_eq!(ts.len(), 101);
        assert_eq!(ts[0], 0.0);
        assert_eq!(ts[100], 1.0);
        assert_relative_eq!(ts[50], 0.5);

        assert_eq!(parameters(10).count(), 11);
    }

    #[test]
    fn points_sample_the_curve() {
        let points = arch().points(4);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], Vector::new(0.0, 0.0));
        assert_eq!(points[2], Vector::new(5.0, 7.5));
        assert_eq!(points[4], Vector::new(10.0, 0.0));
    }
}
