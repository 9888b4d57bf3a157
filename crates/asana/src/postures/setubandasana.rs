use crate::{Joint::*, rule::*};

/// Bridge: shoulders on the floor, hips lifted, hands reaching the ankles.
pub fn setubandasana() -> PostureRule {
    PostureRule::new("Setubandasana")
        .separator(" | ")
        .on_success("Pose is correct.")
        .require(
            above(RightHip, Nose),
            [RightHip],
            "Right hip should be raised above the nose.",
        )
        .require(
            above(LeftHip, Nose),
            [LeftHip],
            "Left hip should be raised above the nose.",
        )
        .require(
            above(LeftHip, LeftShoulder),
            [LeftShoulder],
            "Left shoulder should rest below the left hip.",
        )
        .require(
            above(RightHip, RightShoulder),
            [RightShoulder],
            "Right shoulder should rest below the right hip.",
        )
        .require(
            near(
                LeftWrist,
                LeftAnkle,
                Scale::between(LeftShoulder, LeftHip, 0.5),
            ),
            [LeftWrist, LeftAnkle],
            "Left wrist should be touching the left ankle.",
        )
        .require(
            near(
                RightWrist,
                RightAnkle,
                Scale::between(RightShoulder, RightHip, 0.5),
            ),
            [RightWrist, RightAnkle],
            "Right wrist should be touching the right ankle.",
        )
}
