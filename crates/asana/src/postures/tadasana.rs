use crate::{Joint::*, rule::*};

/// Mountain pose: standing tall, arms hanging straight beside the hips,
/// feet together.
pub fn tadasana() -> PostureRule {
    PostureRule::new("Tadasana")
        .require(
            all([above(Nose, LeftShoulder), above(Nose, RightShoulder)]),
            [Nose],
            "Keep the head up above the shoulders",
        )
        .require(
            above(LeftShoulder, LeftElbow),
            [LeftElbow],
            "Left elbow should hang below the left shoulder",
        )
        .require(
            above(RightShoulder, RightElbow),
            [RightElbow],
            "Right elbow should hang below the right shoulder",
        )
        .require(
            above(LeftElbow, LeftWrist),
            [LeftWrist],
            "Left wrist should hang below the left elbow",
        )
        .require(
            above(RightElbow, RightWrist),
            [RightWrist],
            "Right wrist should hang below the right elbow",
        )
        .require(
            angle_within(LeftShoulder, LeftElbow, LeftWrist, Band::STRAIGHT),
            [LeftElbow],
            "Straighten the left elbow",
        )
        .require(
            angle_within(RightShoulder, RightElbow, RightWrist, Band::STRAIGHT),
            [RightElbow],
            "Straighten the right elbow",
        )
        .require(
            near(LeftWrist, LeftHip, Scale::hips(1.0)),
            [LeftWrist],
            "Left wrist should rest beside the left hip",
        )
        .require(
            near(RightWrist, RightHip, Scale::hips(1.0)),
            [RightWrist],
            "Right wrist should rest beside the right hip",
        )
        .require(
            all([above(LeftHip, LeftKnee), above(LeftKnee, LeftAnkle)]),
            [LeftKnee],
            "Left knee should stack between the left hip and ankle",
        )
        .require(
            all([above(RightHip, RightKnee), above(RightKnee, RightAnkle)]),
            [RightKnee],
            "Right knee should stack between the right hip and ankle",
        )
        .require(
            angle_within(LeftHip, LeftKnee, LeftAnkle, Band::STRICT),
            [LeftKnee],
            "Straighten the left knee",
        )
        .require(
            angle_within(RightHip, RightKnee, RightAnkle, Band::STRICT),
            [RightKnee],
            "Straighten the right knee",
        )
        .require(
            near(LeftAnkle, RightAnkle, Scale::hips(1.5)),
            [LeftAnkle, RightAnkle],
            "Bring the feet together under the hips",
        )
}
