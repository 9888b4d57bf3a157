use crate::{Joint::*, rule::*};

/// Half wheel: standing backbend, hands below the shoulders supporting the
/// hips.
pub fn ardha_chakrasana() -> PostureRule {
    PostureRule::new("Ardha Chakrasana")
        .separator(" ")
        .require(
            above(RightHip, RightKnee),
            [RightHip],
            "Keep your right hip above the right knee.",
        )
        .require(
            above(LeftHip, LeftKnee),
            [LeftHip],
            "Keep your left hip above the left knee.",
        )
        .require(
            above(LeftShoulder, LeftWrist),
            [LeftShoulder],
            "Lower your left hand to the hip, below the left shoulder.",
        )
        .require(
            above(RightShoulder, RightWrist),
            [RightShoulder],
            "Lower your right hand to the hip, below the right shoulder.",
        )
        .require(
            all([
                near(LeftWrist, LeftHip, Scale::hips(7.0)),
                near(RightWrist, RightHip, Scale::hips(7.0)),
            ]),
            [LeftWrist, RightWrist],
            "Make sure your hands are touching your hips.",
        )
        .require(
            angle_below(RightEye, RightHip, RightHeel, 175.0),
            [LeftHip, RightHip],
            "Arch your back more to achieve the correct curve.",
        )
}
