use crate::{Joint::*, rule::*};

/// Happy baby: on the back, knees drawn up, hands holding the knees.
pub fn ananda_balasana() -> PostureRule {
    PostureRule::new("Ananda Balasana")
        .separator(" ")
        .require(
            above(RightHip, RightKnee),
            [RightHip],
            "Lift your right hip above the right knee.",
        )
        .require(
            above(LeftHip, LeftKnee),
            [LeftHip],
            "Lift your left hip above the left knee.",
        )
        .require(
            above(LeftShoulder, LeftWrist),
            [LeftShoulder],
            "Draw your left hand down below the left shoulder.",
        )
        .require(
            above(RightShoulder, RightWrist),
            [RightShoulder],
            "Draw your right hand down below the right shoulder.",
        )
        .require(
            all([
                near(LeftWrist, LeftKnee, Scale::hips(0.5)),
                near(RightWrist, RightKnee, Scale::hips(0.5)),
            ]),
            [LeftWrist, RightWrist],
            "Make sure your hands are touching your knees.",
        )
}
