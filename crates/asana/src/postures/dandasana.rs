use crate::{Joint::*, rule::*};

/// Staff pose: seated upright, legs straight out in front.
pub fn dandasana() -> PostureRule {
    let fold = Band::new(70.0, 110.0);
    PostureRule::new("Dandasana")
        .require(
            angle_within(LeftHip, LeftKnee, LeftAnkle, Band::STRICT),
            [LeftKnee],
            "Straighten the left knee",
        )
        .require(
            angle_within(RightHip, RightKnee, RightAnkle, Band::STRICT),
            [RightKnee],
            "Straighten the right knee",
        )
        .require(
            angle_within(LeftShoulder, LeftHip, LeftKnee, fold),
            [LeftHip],
            "Left hip should fold to ninety degrees between torso and legs",
        )
        .require(
            angle_within(RightShoulder, RightHip, RightKnee, fold),
            [RightHip],
            "Right hip should fold to ninety degrees between torso and legs",
        )
        .require(
            above(LeftShoulder, LeftHip),
            [LeftShoulder],
            "Left shoulder should stack above the left hip",
        )
        .require(
            above(RightShoulder, RightHip),
            [RightShoulder],
            "Right shoulder should stack above the right hip",
        )
        .require(
            near(
                LeftWrist,
                LeftHip,
                Scale::between(LeftShoulder, LeftHip, 0.5),
            ),
            [LeftWrist],
            "Left wrist should rest beside the left hip",
        )
        .require(
            near(
                RightWrist,
                RightHip,
                Scale::between(RightShoulder, RightHip, 0.5),
            ),
            [RightWrist],
            "Right wrist should rest beside the right hip",
        )
}
