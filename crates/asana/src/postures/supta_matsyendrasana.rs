use crate::{Joint, Joint::*, rule::*};

/// Supine twist: shoulders flat, knees dropped to one side.
pub fn supta_matsyendrasana() -> PostureRule {
    let touch = Scale::shoulders(1.0);
    PostureRule::new("Supta Matsyendrasana")
        .separator(" ")
        .require(
            all([above(MouthLeft, LeftEar), above(MouthRight, RightEar)]),
            Joint::HEAD
                .into_iter()
                .chain([LeftShoulder, RightShoulder, LeftHip, RightHip]),
            "Head and shoulders should be aligned.",
        )
        .require(
            not(any([
                near(RightHeel, LeftKnee, touch),
                near(LeftHeel, RightKnee, touch),
            ])),
            [RightHeel, LeftKnee, LeftHeel, RightKnee],
            "Right heel should not touch the left knee and vice versa.",
        )
        .require(
            not(any([
                near(LeftIndex, RightKnee, touch),
                near(RightIndex, LeftKnee, touch),
            ])),
            [LeftIndex, RightKnee, RightIndex, LeftKnee],
            "Left index should not touch the right knee and vice versa.",
        )
        .require(
            angle_within(RightShoulder, RightElbow, RightWrist, Band::STRICT),
            [RightElbow],
            "Straighten the right elbow.",
        )
}
