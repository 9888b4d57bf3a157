use crate::{Joint::*, rule::*};

pub fn purvamatsyasana() -> PostureRule {
    let reach = Scale::between(LeftShoulder, LeftElbow, 0.5);
    PostureRule::new("Purna Matsyasana")
        .separator(" ")
        .on_success("Pose is correct.")
        .require(
            above(LeftShoulder, LeftElbow),
            [LeftShoulder],
            "Left shoulder should be above left elbow.",
        )
        .require(
            above(RightShoulder, RightElbow),
            [RightShoulder],
            "Right shoulder should be above right elbow.",
        )
        .require(
            any([
                near(RightIndex, LeftFootIndex, reach),
                near(LeftIndex, RightFootIndex, reach),
            ]),
            [RightIndex, LeftFootIndex, LeftIndex, RightFootIndex],
            "Hands or feet are not in the correct position.",
        )
        .require(
            any([
                near(RightKnee, LeftHeel, reach),
                near(LeftKnee, RightHeel, reach),
            ]),
            [RightKnee, LeftHeel, LeftKnee, RightHeel],
            "Knees or heels are not aligned correctly.",
        )
}
