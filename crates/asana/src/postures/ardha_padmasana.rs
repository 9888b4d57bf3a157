use crate::{Joint::*, rule::*};

pub fn ardha_padmasana() -> PostureRule {
    PostureRule::new("Ardha Padmasana")
        .separator(" ")
        .on_success("Good job!")
        .require(
            above(RightHip, RightKnee),
            [RightHip],
            "Raise your right hip higher than the right knee.",
        )
        .require(
            above(LeftHip, LeftKnee),
            [LeftHip],
            "Raise your left hip higher than the left knee.",
        )
        .require(
            above(LeftShoulder, LeftWrist),
            [LeftShoulder],
            "Keep your left shoulder above the left hand.",
        )
        .require(
            above(RightShoulder, RightWrist),
            [RightShoulder],
            "Keep your right shoulder above the right hand.",
        )
        .require(
            all([
                near(LeftWrist, LeftKnee, Scale::hips(0.5)),
                near(RightWrist, RightKnee, Scale::hips(0.5)),
            ]),
            [LeftWrist, RightWrist],
            "Ensure both hands are touching the respective knees.",
        )
}
