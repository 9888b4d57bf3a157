use crate::{Joint::*, rule::*};

/// Chair pose.
pub fn utkatasana() -> PostureRule {
    PostureRule::new("Utkatasana")
        .separator(" ")
        .on_success("Pose is correct.")
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
            angle_within(LeftShoulder, LeftElbow, LeftWrist, Band::STRICT),
            [LeftElbow],
            "Straighten the left elbow.",
        )
        .require(
            angle_within(RightShoulder, RightElbow, RightWrist, Band::STRICT),
            [RightElbow],
            "Straighten the right elbow.",
        )
        .require(
            all([above(LeftHip, LeftAnkle), above(RightHip, RightAnkle)]),
            [LeftKnee, RightKnee],
            "Align hips and ankles properly.",
        )
        .require(
            angle_within(LeftHip, LeftKnee, LeftAnkle, Band::STRAIGHT),
            [LeftKnee],
            "Adjust the curve at the left knee.",
        )
        .require(
            angle_within(RightHip, RightKnee, RightAnkle, Band::STRAIGHT),
            [RightKnee],
            "Adjust the curve at the right knee.",
        )
}
