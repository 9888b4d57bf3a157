use crate::{Joint::*, rule::*};

/// Downward dog: hips high, arms and legs straight.
pub fn svanasana() -> PostureRule {
    PostureRule::new("Svanasana")
        .on_success("Pose looks good")
        .require(
            above(LeftKnee, LeftWrist),
            [LeftWrist],
            "Left wrist should be planted lower than the left knee",
        )
        .require(
            above(RightKnee, RightWrist),
            [RightWrist],
            "Right wrist should be planted lower than the right knee",
        )
        .require(
            all([
                angle_within(LeftShoulder, LeftElbow, LeftWrist, Band::new(140.0, 250.0)),
                angle_within(RightShoulder, RightElbow, RightWrist, Band::new(140.0, 250.0)),
            ]),
            [LeftWrist, RightWrist],
            "Keep both arms straight",
        )
        .require(
            angle_within(RightShoulder, RightHip, RightKnee, Band::new(45.0, 60.0)),
            [LeftHip, RightHip],
            "Hip angle not correct",
        )
        .require(
            angle_within(LeftHip, LeftKnee, LeftAnkle, Band::STRICT),
            [LeftKnee],
            "Left knee angle not correct",
        )
        .require(
            angle_within(RightHip, RightKnee, RightAnkle, Band::STRICT),
            [RightKnee],
            "Right knee angle not correct",
        )
}
