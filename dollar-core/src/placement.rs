use crate::geometry::distance;
use glam::Vec2;
use rand::Rng;

/// Side length of the square canvas positions live in (percentage units).
pub const CANVAS_SIZE: f32 = 100.0;

/// Distance kept free along every canvas border.
pub const PLACEMENT_MARGIN: f32 = 10.0;

/// Samples a point uniformly inside the canvas minus its margin.
pub fn random_in_canvas(rng: &mut impl Rng) -> Vec2 {
    let lo = PLACEMENT_MARGIN;
    let hi = CANVAS_SIZE - PLACEMENT_MARGIN;
    Vec2::new(rng.random_range(lo..hi), rng.random_range(lo..hi))
}

/// Tries to find a point at least `min_dist` away from every point in
/// `existing`.
///
/// Up to `max_attempts` candidates are drawn with [`random_in_canvas`]; the
/// first one that keeps the spacing is returned. When all attempts fail
/// the placement is abandoned and `None` is returned. Callers treat that
/// as a smaller graph, not an error.
pub fn place_point(
    existing: &[Vec2],
    min_dist: f32,
    max_attempts: usize,
    rng: &mut impl Rng,
) -> Option<Vec2> {
    for _ in 0..max_attempts {
        let candidate = random_in_canvas(rng);
        if existing.iter().all(|&p| distance(p, candidate) >= min_dist) {
            return Some(candidate);
        }
    }
    tracing::debug!(
        existing = existing.len(),
        max_attempts,
        "placement exhausted, skipping node"
    );
    None
}
