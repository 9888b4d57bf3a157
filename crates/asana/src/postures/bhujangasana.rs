use crate::{Joint, Joint::*, rule::*};

/// Cobra: chest lifted on the arms, legs long behind.
pub fn bhujangasana() -> PostureRule {
    PostureRule::new("Bhujangasana")
        .separator(" ")
        .on_success("Pose is correct.")
        .require(
            above(LeftShoulder, LeftElbow),
            [LeftShoulder],
            "Left shoulder is below the left elbow.",
        )
        .require(
            above(RightShoulder, RightElbow),
            [RightShoulder],
            "Right shoulder is below the right elbow.",
        )
        .require(
            above(MouthRight, RightShoulder),
            Joint::HEAD,
            "Head is not aligned with shoulders.",
        )
        .require(
            angle_within(LeftHip, LeftKnee, LeftAnkle, Band::STRAIGHT),
            [LeftKnee],
            "Left knee angle is not correct.",
        )
        .require(
            angle_within(RightHip, RightKnee, RightAnkle, Band::STRAIGHT),
            [RightKnee],
            "Right knee angle is not correct.",
        )
}
