use crate::{Joint::*, rule::*};

/// Legs up the wall: shoulders down, hips and raised legs above them.
pub fn viparita_karani() -> PostureRule {
    PostureRule::new("Viparita Karani")
        .separator(" ")
        .on_success("Good job!")
        .require(
            above(RightWrist, RightElbow),
            [RightWrist],
            "Right wrist should be above the right elbow.",
        )
        .require(
            above(LeftWrist, LeftElbow),
            [LeftWrist],
            "Left wrist should be above the left elbow.",
        )
        .require(
            above(LeftHip, LeftShoulder),
            [LeftShoulder],
            "Left shoulder should be below the left hip.",
        )
        .require(
            above(RightHip, RightShoulder),
            [RightShoulder],
            "Right shoulder should be below the right hip.",
        )
        .require(
            above(LeftAnkle, LeftHip),
            [LeftHip, LeftKnee],
            "Left hip should stay below the raised left ankle.",
        )
        .require(
            above(RightAnkle, RightHip),
            [RightHip, RightKnee],
            "Right hip should stay below the raised right ankle.",
        )
}
