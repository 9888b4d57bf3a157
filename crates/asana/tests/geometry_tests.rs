mod common;

use {
    asana::{
        Joint, JointFrame, Orientation,
        geometry::{angle, distance, try_angle},
    },
    base::Vec2,
    common::{FrameRng, standing_frame},
};

#[test]
fn test_angle_range() {
    let mut rng = FrameRng::new(42);
    for _ in 0..1000 {
        let a = angle(rng.point(), rng.point(), rng.point());
        assert!(!a.is_nan());
        assert!((0.0..=180.0).contains(&a));
    }
}

#[test]
fn test_angle_is_symmetric() {
    let mut rng = FrameRng::new(3);
    for _ in 0..200 {
        let (a, v, b) = (rng.point(), rng.point(), rng.point());
        assert!((angle(a, v, b) - angle(b, v, a)).abs() < 1e-3);
    }
}

#[test]
fn test_degenerate_angle_is_zero() {
    let p = Vec2::new(0.3, 0.7);
    let q = Vec2::new(0.6, 0.1);
    assert_eq!(angle(p, p, q), 0.0);
    assert_eq!(angle(q, p, p), 0.0);
    assert_eq!(angle(p, p, p), 0.0);
    assert!(try_angle(p, p, q).is_none());
}

#[test]
fn test_collinear_points() {
    let a = angle(Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.5), Vec2::new(1.0, 1.0));
    assert!((a - 180.0).abs() < 0.05);
    let b = angle(Vec2::new(1.0, 1.0), Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.5));
    assert!(b.abs() < 0.05);
}

#[test]
fn test_distance_is_symmetric() {
    let mut rng = FrameRng::new(11);
    for _ in 0..200 {
        let (a, b) = (rng.point(), rng.point());
        assert_eq!(distance(a, b), distance(b, a));
        assert!(distance(a, b) >= 0.0);
    }
}

#[test]
fn test_orientation_front() {
    assert_eq!(Orientation::of_frame(&standing_frame()), Orientation::Front);
}

#[test]
fn test_orientation_sides() {
    let left_shoulder = Vec2::new(0.45, 0.3);
    let right_shoulder = Vec2::new(0.55, 0.3);
    assert_eq!(
        Orientation::classify(Vec2::new(0.3, 0.3), left_shoulder, right_shoulder),
        Orientation::Left
    );
    assert_eq!(
        Orientation::classify(Vec2::new(0.7, 0.3), left_shoulder, right_shoulder),
        Orientation::Right
    );
    assert_eq!(
        Orientation::classify(Vec2::new(0.5, 0.3), left_shoulder, right_shoulder),
        Orientation::Uncertain
    );
}

#[test]
fn test_front_takes_priority() {
    // Nose left of the left shoulder, but straight above the midpoint.
    let nose = Vec2::new(0.5, 0.1);
    assert_eq!(
        Orientation::classify(nose, Vec2::new(0.6, 0.3), Vec2::new(0.4, 0.3)),
        Orientation::Front
    );
    assert_eq!(
        Orientation::classify(nose, Vec2::new(0.7, 0.3), Vec2::new(0.3, 0.3)),
        Orientation::Front
    );
}

fn front_angle(nose: Vec2<f32>, left: Vec2<f32>, right: Vec2<f32>) -> f32 {
    let offset = nose - left.midpoint(right);
    offset.y.atan2(offset.x).to_degrees().abs()
}

#[test]
fn test_orientation_mirror_symmetry() {
    let mut rng = FrameRng::new(99);
    let mut checked = 0;
    for _ in 0..2000 {
        let nose = rng.point();
        let a = rng.point();
        let b = rng.point();
        // Left shoulder at or left of the right shoulder, so at most one
        // positional test can match.
        let (left, right) = if a.x <= b.x { (a, b) } else { (b, a) };
        let degrees = front_angle(nose, left, right);
        if (degrees - 70.0).abs() < 0.5 || (degrees - 110.0).abs() < 0.5 {
            continue;
        }
        let frame = JointFrame::from_points(&[Vec2::new(0.5, 0.5); asana::JOINT_COUNT])
            .unwrap()
            .with(Joint::Nose, nose)
            .with(Joint::LeftShoulder, left)
            .with(Joint::RightShoulder, right);
        let original = Orientation::of_frame(&frame);
        let mirrored = Orientation::of_frame(&frame.mirrored());
        assert_eq!(mirrored, original.mirrored(), "{nose:?} {left:?} {right:?}");
        checked += 1;
    }
    assert!(checked > 1000);
}

#[test]
fn test_mirrored_frame_swaps_sides() {
    let frame = standing_frame();
    let mirrored = frame.mirrored();
    let left = frame[Joint::LeftWrist];
    let right = mirrored[Joint::RightWrist];
    assert!((right.x - (1.0 - left.x)).abs() < 1e-6);
    assert_eq!(right.y, left.y);
}
