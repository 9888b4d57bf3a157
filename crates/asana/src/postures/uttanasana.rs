use crate::{Joint::*, rule::*};

/// Standing forward fold, hands reaching the ankles.
pub fn uttanasana() -> PostureRule {
    PostureRule::new("Uttanasana")
        .require(
            above(LeftKnee, LeftWrist),
            [LeftWrist],
            "Left wrist should reach below the left knee",
        )
        .require(
            above(RightKnee, RightWrist),
            [RightWrist],
            "Right wrist should reach below the right knee",
        )
        .require(
            near(
                RightIndex,
                LeftAnkle,
                Scale::between(LeftShoulder, LeftElbow, 1.2),
            ),
            [RightIndex, LeftAnkle],
            "Right index should reach the left ankle",
        )
        .require(
            near(
                LeftIndex,
                RightAnkle,
                Scale::between(RightShoulder, RightElbow, 1.2),
            ),
            [LeftIndex, RightAnkle],
            "Left index should reach the right ankle",
        )
        .require(
            all([above(LeftHip, LeftAnkle), above(RightHip, RightAnkle)]),
            [LeftKnee, RightKnee],
            "Legs not aligned",
        )
        .require(
            angle_within(LeftHip, LeftKnee, LeftAnkle, Band::STRICT),
            [LeftKnee],
            "Leg angle incorrect at the left knee",
        )
        .require(
            angle_within(RightHip, RightKnee, RightAnkle, Band::STRICT),
            [RightKnee],
            "Leg angle incorrect at the right knee",
        )
}
