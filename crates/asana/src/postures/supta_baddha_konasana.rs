use crate::{Joint, Joint::*, rule::*};

/// Reclined bound angle: on the back, soles together, knees dropped open.
pub fn supta_baddha_konasana() -> PostureRule {
    PostureRule::new("Supta Baddha Konasana")
        .on_success("Correct Pose")
        .require(
            near(
                RightAnkle,
                LeftAnkle,
                Scale::between(LeftShoulder, LeftElbow, 0.5),
            ),
            [LeftAnkle, RightAnkle],
            "Feet not touching",
        )
        .require(
            all([above(MouthLeft, LeftEar), above(MouthRight, RightEar)]),
            Joint::HEAD.into_iter().chain([LeftShoulder, RightShoulder]),
            "Keep the head level, mouth should not drop below the ears",
        )
        .require(
            above(LeftKnee, LeftAnkle),
            [LeftKnee],
            "Left knee should be raised above the left ankle",
        )
        .require(
            above(RightKnee, RightAnkle),
            [RightKnee],
            "Right knee should be raised above the right ankle",
        )
        .require(
            not(all([
                angle_within(LeftHip, LeftKnee, LeftAnkle, Band::STRAIGHT),
                angle_within(RightHip, RightKnee, RightAnkle, Band::STRAIGHT),
            ])),
            [LeftKnee, RightKnee],
            "Legs not bent correctly",
        )
}
