use base::Vec2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_arithmetic() {
    let a = Vec2::new(0.25f32, 0.5);
    let b = Vec2::new(0.5f32, 0.25);
    assert_eq!(a + b, Vec2::new(0.75, 0.75));
    assert_eq!(b - a, Vec2::new(0.25, -0.25));
    assert_eq!(-a, Vec2::new(-0.25, -0.5));
    assert_eq!(a * 2.0, Vec2::new(0.5, 1.0));
    assert_eq!(a / 0.5, Vec2::new(0.5, 1.0));
}

#[test]
fn test_dot_and_cross() {
    let x = Vec2::new(1.0f32, 0.0);
    let y = Vec2::new(0.0f32, 1.0);
    assert_eq!(x.dot(y), 0.0);
    assert_eq!(x.cross(y), 1.0);
    assert_eq!(y.cross(x), -1.0);
}

#[test]
fn test_length_and_distance() {
    let a = Vec2::new(0.0f32, 0.0);
    let b = Vec2::new(0.3f32, 0.4);
    assert!(approx(b.length(), 0.5));
    assert!(approx(a.distance_to(b), 0.5));
    assert!(approx(b.distance_to(a), 0.5));
}

#[test]
fn test_midpoint_and_mirror() {
    let a = Vec2::new(0.2f32, 0.4);
    let b = Vec2::new(0.6f32, 0.8);
    let mid = a.midpoint(b);
    assert!(approx(mid.x, 0.4) && approx(mid.y, 0.6));
    let mirrored = a.mirrored();
    assert!(approx(mirrored.x, 0.8));
    assert_eq!(mirrored.y, 0.4);
    let back = mirrored.mirrored();
    assert!(approx(back.x, a.x));
}

#[test]
fn test_is_finite() {
    assert!(Vec2::new(0.1f32, 0.9).is_finite());
    assert!(!Vec2::new(f32::NAN, 0.9).is_finite());
    assert!(!Vec2::new(0.1, f32::INFINITY).is_finite());
}

#[test]
fn test_serde_shape() {
    let point: Vec2<f32> = serde_json::from_str(r#"{"x":0.5,"y":0.25}"#).unwrap();
    assert_eq!(point, Vec2::new(0.5, 0.25));
    let json = serde_json::to_string(&point).unwrap();
    assert_eq!(json, r#"{"x":0.5,"y":0.25}"#);
}
