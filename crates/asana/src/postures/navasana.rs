use crate::{Joint::*, rule::*};

/// Boat: balanced on the sit bones, torso and straight legs forming a V.
pub fn navasana() -> PostureRule {
    PostureRule::new("Navasana")
        .separator(" | ")
        .on_success("Correct pose")
        .require(
            above(LeftWrist, LeftKnee),
            [LeftWrist],
            "Left wrist should be level with or above the left knee.",
        )
        .require(
            above(RightWrist, RightKnee),
            [RightWrist],
            "Right wrist should be level with or above the right knee.",
        )
        .require(
            all([
                angle_within(LeftShoulder, LeftElbow, LeftWrist, Band::new(140.0, 250.0)),
                angle_within(RightShoulder, RightElbow, RightWrist, Band::new(140.0, 250.0)),
            ]),
            [LeftWrist, RightWrist],
            "Keep both arms straight.",
        )
        .require(
            angle_within(RightShoulder, RightHip, RightKnee, Band::new(30.0, 70.0)),
            [LeftHip, RightHip],
            "Hips should form a V between torso and legs.",
        )
        .require(
            angle_within(LeftHip, LeftKnee, LeftAnkle, Band::STRAIGHT),
            [LeftKnee],
            "Left knee should be straight.",
        )
        .require(
            angle_within(RightHip, RightKnee, RightAnkle, Band::STRAIGHT),
            [RightKnee],
            "Right knee should be straight.",
        )
}
