use crate::{Joint::*, rule::*};

/// Tree: standing on one leg, the other foot at the knee, palms joined
/// overhead. Passes above 80% accuracy.
pub fn vrksasana() -> PostureRule {
    let straight_arm = Band::new(160.0, 180.0);
    PostureRule::new("Vrksasana")
        .separator(" | ")
        .on_success("Pose looks good")
        .pass_when(PassThreshold::Above(80.0))
        .require(
            above(LeftWrist, LeftShoulder),
            [LeftShoulder],
            "Left shoulder too low, raise the left wrist above it",
        )
        .require(
            above(RightWrist, RightShoulder),
            [RightShoulder],
            "Right shoulder too low, raise the right wrist above it",
        )
        .require(
            all([
                near(LeftWrist, RightWrist, Scale::hips(1.0 / 1.2)),
                angle_within(LeftShoulder, LeftElbow, LeftWrist, straight_arm),
                angle_within(RightShoulder, RightElbow, RightWrist, straight_arm),
            ]),
            [LeftWrist, RightWrist],
            "Hands not touching or angles incorrect",
        )
        .require(
            any([
                near(LeftKnee, RightFootIndex, Scale::hips(2.5)),
                near(RightKnee, LeftFootIndex, Scale::hips(2.5)),
            ]),
            [LeftHip, RightHip],
            "Rest one foot against the opposite knee",
        )
}
