#![allow(dead_code)]

use {
    asana::{JOINT_COUNT, Joint, JointFrame, RawLandmark},
    base::Vec2,
    rand::{Rng, SeedableRng, rngs::StdRng},
};

/// Subject facing the camera, standing straight with the arms hanging beside
/// the hips and the feet together. The subject's left side is on the image
/// right.
pub fn standing_points() -> [Vec2<f32>; JOINT_COUNT] {
    let mut points = [Vec2::zero(); JOINT_COUNT];
    let mut set = |joint: Joint, x: f32, y: f32| points[joint.index()] = Vec2::new(x, y);
    set(Joint::Nose, 0.5, 0.15);
    set(Joint::LeftEyeInner, 0.51, 0.13);
    set(Joint::LeftEye, 0.52, 0.13);
    set(Joint::LeftEyeOuter, 0.53, 0.13);
    set(Joint::RightEyeInner, 0.49, 0.13);
    set(Joint::RightEye, 0.48, 0.13);
    set(Joint::RightEyeOuter, 0.47, 0.13);
    set(Joint::LeftEar, 0.55, 0.14);
    set(Joint::RightEar, 0.45, 0.14);
    set(Joint::MouthLeft, 0.52, 0.18);
    set(Joint::MouthRight, 0.48, 0.18);
    set(Joint::LeftShoulder, 0.6, 0.3);
    set(Joint::RightShoulder, 0.4, 0.3);
    set(Joint::LeftElbow, 0.6, 0.42);
    set(Joint::RightElbow, 0.4, 0.42);
    set(Joint::LeftWrist, 0.6, 0.54);
    set(Joint::RightWrist, 0.4, 0.54);
    set(Joint::LeftPinky, 0.61, 0.57);
    set(Joint::RightPinky, 0.39, 0.57);
    set(Joint::LeftIndex, 0.6, 0.58);
    set(Joint::RightIndex, 0.4, 0.58);
    set(Joint::LeftThumb, 0.59, 0.56);
    set(Joint::RightThumb, 0.41, 0.56);
    set(Joint::LeftHip, 0.55, 0.54);
    set(Joint::RightHip, 0.45, 0.54);
    set(Joint::LeftKnee, 0.55, 0.72);
    set(Joint::RightKnee, 0.45, 0.72);
    set(Joint::LeftAnkle, 0.55, 0.9);
    set(Joint::RightAnkle, 0.45, 0.9);
    set(Joint::LeftHeel, 0.55, 0.92);
    set(Joint::RightHeel, 0.45, 0.92);
    set(Joint::LeftFootIndex, 0.56, 0.95);
    set(Joint::RightFootIndex, 0.44, 0.95);
    points
}

pub fn standing_frame() -> JointFrame {
    JointFrame::from_points(&standing_points()).unwrap()
}

/// Subject lying flat across the image in the reference corpse-pose layout.
pub fn lying_frame() -> JointFrame {
    standing_frame()
        .with(Joint::Nose, Vec2::new(0.5, 0.2))
        .with(Joint::LeftEar, Vec2::new(0.45, 0.2))
        .with(Joint::RightEar, Vec2::new(0.55, 0.2))
        .with(Joint::MouthLeft, Vec2::new(0.48, 0.19))
        .with(Joint::MouthRight, Vec2::new(0.52, 0.19))
        .with(Joint::LeftShoulder, Vec2::new(0.3, 0.4))
        .with(Joint::RightShoulder, Vec2::new(0.7, 0.4))
        .with(Joint::LeftWrist, Vec2::new(0.25, 0.45))
        .with(Joint::RightWrist, Vec2::new(0.75, 0.45))
        .with(Joint::LeftHip, Vec2::new(0.45, 0.6))
        .with(Joint::RightHip, Vec2::new(0.55, 0.6))
        .with(Joint::LeftAnkle, Vec2::new(0.1, 0.9))
        .with(Joint::RightAnkle, Vec2::new(0.9, 0.9))
}

pub fn landmarks(frame: &JointFrame) -> Vec<RawLandmark> {
    frame.points().iter().map(|&point| point.into()).collect()
}

/// Seeded source of random points and frames so property loops are
/// reproducible.
pub struct FrameRng(StdRng);

impl FrameRng {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn point(&mut self) -> Vec2<f32> {
        Vec2::new(self.0.gen_range(0.0..1.0), self.0.gen_range(0.0..1.0))
    }

    pub fn frame(&mut self) -> JointFrame {
        let points: Vec<Vec2<f32>> = (0..JOINT_COUNT).map(|_| self.point()).collect();
        JointFrame::from_points(&points).unwrap()
    }

    /// Standing frame with every joint nudged by up to `amount`.
    pub fn jittered(&mut self, amount: f32) -> JointFrame {
        let points: Vec<Vec2<f32>> = standing_points()
            .iter()
            .map(|&p| {
                let dx = self.0.gen_range(-amount..=amount);
                let dy = self.0.gen_range(-amount..=amount);
                p + Vec2::new(dx, dy)
            })
            .collect();
        JointFrame::from_points(&points).unwrap()
    }
}
