use crate::{Joint::*, rule::*};

/// Seated forward fold reaching for the feet.
pub fn paschimottanasana() -> PostureRule {
    let reach = Scale::between(LeftShoulder, LeftElbow, 1.0 / 1.2);
    PostureRule::new("Paschimottanasana")
        .separator(" | ")
        .require(
            above(LeftShoulder, LeftElbow),
            [LeftShoulder],
            "Adjust left shoulder position above the left elbow.",
        )
        .require(
            above(RightShoulder, RightElbow),
            [RightShoulder],
            "Adjust right shoulder position above the right elbow.",
        )
        .require(
            near(RightIndex, LeftFootIndex, reach),
            [RightIndex, LeftFootIndex],
            "Fold further: right index should reach the left foot index.",
        )
        .require(
            near(LeftIndex, RightFootIndex, reach),
            [LeftIndex, RightFootIndex],
            "Fold further: left index should reach the right foot index.",
        )
        .require(
            angle_within(LeftHip, LeftKnee, LeftAnkle, Band::STRAIGHT),
            [LeftKnee],
            "Adjust left knee angle.",
        )
        .require(
            angle_within(RightHip, RightKnee, RightAnkle, Band::STRAIGHT),
            [RightKnee],
            "Adjust right knee angle.",
        )
}
