use crate::{Joint::*, rule::*};

/// Plank: straight line from shoulders to ankles over straight arms.
pub fn phalakasana() -> PostureRule {
    PostureRule::new("Phalakasana")
        .require(
            angle_within(LeftShoulder, LeftElbow, LeftWrist, Band::STRAIGHT),
            [LeftElbow],
            "Left elbow should be straight",
        )
        .require(
            angle_within(RightShoulder, RightElbow, RightWrist, Band::STRAIGHT),
            [RightElbow],
            "Right elbow should be straight",
        )
        .require(
            angle_within(LeftShoulder, LeftHip, LeftAnkle, Band::STRAIGHT),
            [LeftHip],
            "Left hip is out of line with the shoulder and ankle",
        )
        .require(
            angle_within(RightShoulder, RightHip, RightAnkle, Band::STRAIGHT),
            [RightHip],
            "Right hip is out of line with the shoulder and ankle",
        )
        .require(
            angle_within(LeftHip, LeftKnee, LeftAnkle, Band::STRAIGHT),
            [LeftKnee],
            "Left knee should be straight",
        )
        .require(
            angle_within(RightHip, RightKnee, RightAnkle, Band::STRAIGHT),
            [RightKnee],
            "Right knee should be straight",
        )
        .require(
            above(LeftShoulder, LeftWrist),
            [LeftWrist],
            "Left wrist should be under the left shoulder",
        )
        .require(
            above(RightShoulder, RightWrist),
            [RightWrist],
            "Right wrist should be under the right shoulder",
        )
}
