use crate::{Joint, Joint::*, rule::*};

/// Maximum distance of a joint from its reference position.
const ANCHOR_RADIUS: f32 = 0.2;

/// Corpse pose, checked against a fixed reference layout of a subject lying
/// flat across the image with the head at the top.
pub fn savasana() -> PostureRule {
    PostureRule::new("Savasana (Corpse Pose)")
        .require(
            anchored(LeftAnkle, 0.1, 0.9, ANCHOR_RADIUS),
            [LeftAnkle],
            "Left ankle position is incorrect",
        )
        .require(
            anchored(RightAnkle, 0.9, 0.9, ANCHOR_RADIUS),
            [RightAnkle],
            "Right ankle position is incorrect",
        )
        .require(
            anchored(LeftShoulder, 0.3, 0.4, ANCHOR_RADIUS),
            [LeftShoulder],
            "Left shoulder position is incorrect",
        )
        .require(
            anchored(RightShoulder, 0.7, 0.4, ANCHOR_RADIUS),
            [RightShoulder],
            "Right shoulder position is incorrect",
        )
        .require(
            anchored(Nose, 0.5, 0.2, ANCHOR_RADIUS),
            [Nose],
            "Head position is incorrect",
        )
        .require(
            not(near(LeftWrist, LeftAnkle, Scale::hips(4.0))),
            [LeftWrist, LeftAnkle],
            "Left wrist should not touch the left ankle",
        )
        .require(
            not(near(RightWrist, RightAnkle, Scale::hips(4.0))),
            [RightWrist, RightAnkle],
            "Right wrist should not touch the right ankle",
        )
        .require(
            all([above(MouthLeft, LeftEar), above(MouthRight, RightEar)]),
            Joint::HEAD
                .into_iter()
                .chain([LeftShoulder, RightShoulder, LeftHip, RightHip]),
            "Body alignment is incorrect",
        )
}
