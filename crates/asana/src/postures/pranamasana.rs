use crate::{Joint::*, rule::*};

/// Prayer pose: standing, palms pressed together.
pub fn pranamasana() -> PostureRule {
    PostureRule::new("Pranamasana")
        .require(
            near(LeftWrist, RightWrist, Scale::hips(0.5)),
            [LeftWrist, RightWrist],
            "Hands not touching",
        )
        .require(
            all([above(LeftHip, LeftAnkle), above(RightHip, RightAnkle)]),
            [LeftKnee, RightKnee],
            "Legs not straight",
        )
        .require(
            angle_within(LeftHip, LeftKnee, LeftAnkle, Band::STRAIGHT),
            [LeftKnee],
            "Left knee angle incorrect",
        )
        .require(
            angle_within(RightHip, RightKnee, RightAnkle, Band::STRAIGHT),
            [RightKnee],
            "Right knee angle incorrect",
        )
}
