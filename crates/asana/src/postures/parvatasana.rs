use crate::{Joint::*, rule::*};

/// Seated mountain pose: palms joined overhead with straight arms.
pub fn parvatasana() -> PostureRule {
    PostureRule::new("Parvatasana")
        .separator(" ")
        .require(
            above(RightHip, RightKnee),
            [RightHip],
            "Right hip should be above the right knee.",
        )
        .require(
            above(LeftHip, LeftKnee),
            [LeftHip],
            "Left hip should be above the left knee.",
        )
        .require(
            above(LeftWrist, LeftShoulder),
            [LeftShoulder],
            "Left shoulder should sit below the raised left wrist.",
        )
        .require(
            above(RightWrist, RightShoulder),
            [RightShoulder],
            "Right shoulder should sit below the raised right wrist.",
        )
        .require(
            all([
                near(LeftWrist, RightWrist, Scale::hips(0.5)),
                angle_within(LeftShoulder, LeftElbow, LeftWrist, Band::new(160.0, 180.0)),
                angle_within(RightShoulder, RightElbow, RightWrist, Band::new(160.0, 180.0)),
            ]),
            [LeftWrist, RightWrist],
            "Wrists should touch overhead with both elbows straight.",
        )
}
