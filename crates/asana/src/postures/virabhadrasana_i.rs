use crate::{Joint::*, rule::*};

/// Range for the bent front knee of a lunge.
const LUNGE: Band = Band::new(80.0, 130.0);

/// Warrior I: lunge with both arms raised overhead, palms together.
pub fn virabhadrasana_i() -> PostureRule {
    PostureRule::new("Warrior I")
        .separator(" ")
        .on_success("Pose is correct.")
        .require(
            angle_within(LeftWrist, LeftShoulder, LeftHip, Band::STRAIGHT),
            [LeftShoulder],
            "Raise the arm overhead in line with the left shoulder.",
        )
        .require(
            angle_within(RightWrist, RightShoulder, RightHip, Band::STRAIGHT),
            [RightShoulder],
            "Raise the arm overhead in line with the right shoulder.",
        )
        .require(
            angle_within(LeftShoulder, LeftElbow, LeftWrist, Band::STRICT),
            [LeftElbow],
            "Straighten the left elbow.",
        )
        .require(
            angle_within(RightShoulder, RightElbow, RightWrist, Band::STRICT),
            [RightElbow],
            "Straighten the right elbow.",
        )
        .require(
            near(LeftWrist, RightWrist, Scale::shoulders(1.0)),
            [LeftWrist, RightWrist],
            "Bring the hands together overhead.",
        )
        .require(
            any([
                all([
                    angle_within(LeftHip, LeftKnee, LeftAnkle, LUNGE),
                    angle_within(RightHip, RightKnee, RightAnkle, Band::STRAIGHT),
                ]),
                all([
                    angle_within(RightHip, RightKnee, RightAnkle, LUNGE),
                    angle_within(LeftHip, LeftKnee, LeftAnkle, Band::STRAIGHT),
                ]),
            ]),
            [LeftKnee, RightKnee],
            "Bend the front knee and keep the back leg straight.",
        )
}
