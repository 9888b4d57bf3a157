use {
    crate::{Joint, JointFrame},
    base::Vec2,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Facing direction of the subject relative to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Front,
    Left,
    Right,
    Uncertain,
}

/// Nose-to-shoulder-midpoint angles (absolute, degrees) that count as facing
/// the camera.
pub const FRONT_MIN_DEGREES: f32 = 70.0;
pub const FRONT_MAX_DEGREES: f32 = 110.0;

impl Orientation {
    /// Classify from the nose and both shoulders.
    ///
    /// Front wins whenever the nose sits roughly perpendicular to the shoulder
    /// line; only then are the horizontal positions consulted, left first.
    pub fn classify(nose: Vec2<f32>, left_shoulder: Vec2<f32>, right_shoulder: Vec2<f32>) -> Self {
        let offset = nose - left_shoulder.midpoint(right_shoulder);
        let degrees = offset.y.atan2(offset.x).to_degrees().abs();
        if (FRONT_MIN_DEGREES..=FRONT_MAX_DEGREES).contains(&degrees) {
            Orientation::Front
        } else if nose.x < left_shoulder.x {
            Orientation::Left
        } else if nose.x > right_shoulder.x {
            Orientation::Right
        } else {
            Orientation::Uncertain
        }
    }

    pub fn of_frame(frame: &JointFrame) -> Self {
        Self::classify(
            frame[Joint::Nose],
            frame[Joint::LeftShoulder],
            frame[Joint::RightShoulder],
        )
    }

    pub fn mirrored(self) -> Self {
        match self {
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
            other => other,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Front => "Front",
            Orientation::Left => "Left",
            Orientation::Right => "Right",
            Orientation::Uncertain => "Uncertain",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
