use base::Vec2;

/// Euclidean distance between two points.
pub fn distance(a: Vec2<f32>, b: Vec2<f32>) -> f32 {
    a.distance_to(b)
}

/// Angle at `vertex` between the rays towards `first` and `last`, in degrees
/// within `[0, 180]`.
///
/// Returns exactly `0.0` when either ray has zero length. That value doubles
/// as the "undefined angle" sentinel, so a degenerate joint fails every
/// straightness band.
pub fn angle(first: Vec2<f32>, vertex: Vec2<f32>, last: Vec2<f32>) -> f32 {
    try_angle(first, vertex, last).unwrap_or(0.0)
}

/// Like [`angle`], but `None` for a zero-length ray.
pub fn try_angle(first: Vec2<f32>, vertex: Vec2<f32>, last: Vec2<f32>) -> Option<f32> {
    let a = first - vertex;
    let b = last - vertex;
    let magnitude = a.length() * b.length();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return None;
    }
    let cosine = (a.dot(b) / magnitude).clamp(-1.0, 1.0);
    Some(cosine.acos().to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_right_angle() {
        let vertex = Vec2::new(0.5, 0.5);
        assert!(approx(
            angle(Vec2::new(0.5, 0.2), vertex, Vec2::new(0.9, 0.5)),
            90.0
        ));
    }

    #[test]
    fn test_straight_line_is_180() {
        let a = angle(Vec2::new(0.5, 0.1), Vec2::new(0.5, 0.3), Vec2::new(0.5, 0.9));
        // acos is steep near -1, so one ulp of rounding costs a few hundredths.
        assert!((a - 180.0).abs() < 0.05);
        assert!(!a.is_nan());
    }

    #[test]
    fn test_degenerate_ray_is_zero() {
        let p = Vec2::new(0.4, 0.4);
        assert_eq!(angle(p, p, Vec2::new(0.1, 0.1)), 0.0);
        assert_eq!(angle(Vec2::new(0.1, 0.1), p, p), 0.0);
        assert_eq!(try_angle(p, p, p), None);
    }

    #[test]
    fn test_distance() {
        assert!(approx(distance(Vec2::new(0.1, 0.1), Vec2::new(0.4, 0.5)), 0.5));
    }
}
