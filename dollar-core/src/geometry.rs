use glam::Vec2;

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: Vec2, q: Vec2) -> f32 {
    p.distance(q)
}

/// Cosine of the angle at `b` between the vectors `b -> a` and `b -> c`.
///
/// Both vectors are normalized before taking the dot product, so the
/// result lies in `[-1, 1]`. If either vector has zero length (`a == b`
/// or `c == b`) it normalizes to zero and the result is `0.0`, which is
/// below any sharpness threshold used for edge rejection.
pub fn normalized_dot(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    let u = (a - b).normalize_or_zero();
    let v = (c - b).normalize_or_zero();
    u.dot(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Vec2::new(7.0, 7.0), Vec2::new(7.0, 7.0)), 0.0);
    }

    #[test]
    fn normalized_dot_is_cosine_at_shared_vertex() {
        let b = Vec2::new(1.0, 1.0);
        // Same direction, different lengths.
        let same = normalized_dot(Vec2::new(2.0, 1.0), b, Vec2::new(11.0, 1.0));
        assert!((same - 1.0).abs() < 1e-6);
        // Right angle.
        let right = normalized_dot(Vec2::new(2.0, 1.0), b, Vec2::new(1.0, 5.0));
        assert!(right.abs() < 1e-6);
        // Opposite.
        let opposite = normalized_dot(Vec2::new(2.0, 1.0), b, Vec2::new(-3.0, 1.0));
        assert!((opposite + 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalized_dot_degenerate_falls_back_to_zero() {
        let d = normalized_dot(Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        assert_eq!(d, 0.0);
        let d = normalized_dot(Vec2::new(1.0, 0.0), Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0));
        assert_eq!(d, 0.0);
    }
}
