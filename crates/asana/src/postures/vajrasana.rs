use crate::{Joint::*, rule::*};

/// Kneeling on the heels, hands resting on the knees.
pub fn vajrasana() -> PostureRule {
    PostureRule::new("Vajrasana")
        .separator(" | ")
        .require(
            above(LeftWrist, LeftKnee),
            [LeftWrist],
            "Left wrist should rest on or above the left knee.",
        )
        .require(
            above(RightWrist, RightKnee),
            [RightWrist],
            "Right wrist should rest on or above the right knee.",
        )
        .require(
            all([
                near(LeftWrist, LeftKnee, Scale::hips(3.0)),
                near(RightWrist, RightKnee, Scale::hips(3.0)),
            ]),
            [LeftWrist, RightWrist],
            "Hands are incorrectly positioned",
        )
        .require(
            all([
                near(RightHeel, RightHip, Scale::hips(3.0)),
                near(LeftHeel, LeftHip, Scale::hips(3.0)),
            ]),
            [LeftHip, RightHip],
            "Legs are incorrectly positioned",
        )
}
