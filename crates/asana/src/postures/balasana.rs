use crate::{Joint::*, rule::*};

/// Child's pose: knees folded, hips sinking to the heels, forehead down.
pub fn balasana() -> PostureRule {
    let folded = Band::new(0.0, 60.0);
    PostureRule::new("Balasana")
        .require(
            angle_within(LeftHip, LeftKnee, LeftAnkle, folded),
            [LeftKnee],
            "Fold the left knee fully",
        )
        .require(
            angle_within(RightHip, RightKnee, RightAnkle, folded),
            [RightKnee],
            "Fold the right knee fully",
        )
        .require(
            above(LeftHip, LeftShoulder),
            [LeftShoulder],
            "Left shoulder should rest lower than the left hip",
        )
        .require(
            above(RightHip, RightShoulder),
            [RightShoulder],
            "Right shoulder should rest lower than the right hip",
        )
        .require(
            near(
                LeftHip,
                LeftHeel,
                Scale::between(LeftShoulder, LeftHip, 0.5),
            ),
            [LeftHip],
            "Left hip should sink toward the left heel",
        )
        .require(
            near(
                RightHip,
                RightHeel,
                Scale::between(RightShoulder, RightHip, 0.5),
            ),
            [RightHip],
            "Right hip should sink toward the right heel",
        )
        .require(
            above(LeftHip, Nose),
            [Nose],
            "Rest the forehead down, below the hips",
        )
}
