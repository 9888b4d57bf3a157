use crate::{Joint::*, rule::*};

/// Raised arms: standing, arms overhead, leaning back from the hips.
pub fn hastauttanasana() -> PostureRule {
    PostureRule::new("Hastauttanasana")
        .separator(" ")
        .on_success("Good job!")
        .require(
            angle_within(LeftWrist, LeftShoulder, LeftHip, Band::STRAIGHT),
            [LeftShoulder],
            "Adjust left shoulder angle.",
        )
        .require(
            angle_within(RightWrist, RightShoulder, RightHip, Band::STRAIGHT),
            [RightShoulder],
            "Adjust right shoulder angle.",
        )
        .require(
            angle_within(LeftShoulder, LeftElbow, LeftWrist, Band::STRAIGHT),
            [LeftElbow],
            "Straighten the left elbow.",
        )
        .require(
            angle_within(RightShoulder, RightElbow, RightWrist, Band::STRAIGHT),
            [RightElbow],
            "Straighten the right elbow.",
        )
        .require(
            all([above(LeftHip, LeftAnkle), above(RightHip, RightAnkle)]),
            [LeftKnee, RightKnee],
            "Keep knees straight.",
        )
        .require(
            angle_below(Nose, RightHip, RightAnkle, 170.0),
            [LeftHip, RightHip],
            "Lean back further to arch the hips.",
        )
}
