use crate::{Joint::*, rule::*};

/// Warrior II: arms level with the shoulders, front knee bent.
pub fn virabhadrasana_ii() -> PostureRule {
    // Either knee may lead: one leg nearly straight, the other clearly bent.
    let lunge = any([
        all([
            angle_within(RightHip, RightKnee, RightAnkle, Band::STRAIGHT),
            not(angle_within(LeftHip, LeftKnee, LeftAnkle, Band::STRICT)),
        ]),
        all([
            angle_within(LeftHip, LeftKnee, LeftAnkle, Band::STRAIGHT),
            not(angle_within(RightHip, RightKnee, RightAnkle, Band::STRICT)),
        ]),
    ]);
    PostureRule::new("Warrior II")
        .separator(" ")
        .on_success("Pose is correct.")
        .require(
            angle_within(LeftWrist, LeftShoulder, RightShoulder, Band::STRAIGHT),
            [LeftShoulder],
            "Left shoulder angle incorrect.",
        )
        .require(
            angle_within(RightWrist, RightShoulder, LeftShoulder, Band::STRAIGHT),
            [RightShoulder],
            "Right shoulder angle incorrect.",
        )
        .require(
            angle_within(LeftShoulder, LeftElbow, LeftWrist, Band::STRICT),
            [LeftElbow],
            "Left elbow angle incorrect.",
        )
        .require(
            angle_within(RightShoulder, RightElbow, RightWrist, Band::STRICT),
            [RightElbow],
            "Right elbow angle incorrect.",
        )
        .require(
            any([
                all([above(LeftHip, LeftAnkle), above(RightHip, RightAnkle)]),
                lunge,
            ]),
            [LeftKnee, RightKnee],
            "Knees not properly bent.",
        )
}
