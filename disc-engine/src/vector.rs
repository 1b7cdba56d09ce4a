pub use glam::f64::DVec2 as Vector2;

/// Unit vector pointing from `from` toward `to`.
///
/// Coincident points have no direction, in which case the x axis (angle 0)
/// is returned instead of a NaN vector.
pub fn separation_direction(from: Vector2, to: Vector2) -> Vector2 {
    (to - from).try_normalize().unwrap_or(Vector2::X)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Vector2::new(1., 2.);
        let b = Vector2::new(4., 6.);
        assert_eq!(a.distance(b), 5.);
        assert_eq!(b.distance(a), 5.);
        assert_eq!(a.distance(a), 0.);
    }

    #[test]
    fn test_separation_direction() {
        let dir = separation_direction(Vector2::new(1., 1.), Vector2::new(1., -3.));
        assert_eq!(dir, Vector2::new(0., -1.));
    }

    #[test]
    fn test_separation_direction_coincident() {
        let p = Vector2::new(7., 7.);
        let dir = separation_direction(p, p);
        assert!(dir.is_finite());
        assert_eq!(dir, Vector2::X);
    }
}
