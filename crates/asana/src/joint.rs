use {
    crate::AsanaError,
    base::Vec2,
    serde::{Deserialize, Serialize},
    std::{fmt, ops::Index, str::FromStr},
};

/// Number of joints in the canonical landmark layout.
pub const JOINT_COUNT: usize = 33;

/// Which half of the body a joint belongs to, from the subject's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Center,
}

/// Canonical body joints, in landmark order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Joint {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl Joint {
    pub const ALL: [Joint; JOINT_COUNT] = [
        Joint::Nose,
        Joint::LeftEyeInner,
        Joint::LeftEye,
        Joint::LeftEyeOuter,
        Joint::RightEyeInner,
        Joint::RightEye,
        Joint::RightEyeOuter,
        Joint::LeftEar,
        Joint::RightEar,
        Joint::MouthLeft,
        Joint::MouthRight,
        Joint::LeftShoulder,
        Joint::RightShoulder,
        Joint::LeftElbow,
        Joint::RightElbow,
        Joint::LeftWrist,
        Joint::RightWrist,
        Joint::LeftPinky,
        Joint::RightPinky,
        Joint::LeftIndex,
        Joint::RightIndex,
        Joint::LeftThumb,
        Joint::RightThumb,
        Joint::LeftHip,
        Joint::RightHip,
        Joint::LeftKnee,
        Joint::RightKnee,
        Joint::LeftAnkle,
        Joint::RightAnkle,
        Joint::LeftHeel,
        Joint::RightHeel,
        Joint::LeftFootIndex,
        Joint::RightFootIndex,
    ];

    /// Face landmarks: nose, eyes, ears and mouth corners.
    pub const HEAD: [Joint; 11] = [
        Joint::Nose,
        Joint::LeftEyeInner,
        Joint::LeftEye,
        Joint::LeftEyeOuter,
        Joint::RightEyeInner,
        Joint::RightEye,
        Joint::RightEyeOuter,
        Joint::LeftEar,
        Joint::RightEar,
        Joint::MouthLeft,
        Joint::MouthRight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Snake-case name used in configuration and angle-table keys.
    pub fn name(self) -> &'static str {
        match self {
            Joint::Nose => "nose",
            Joint::LeftEyeInner => "left_eye_inner",
            Joint::LeftEye => "left_eye",
            Joint::LeftEyeOuter => "left_eye_outer",
            Joint::RightEyeInner => "right_eye_inner",
            Joint::RightEye => "right_eye",
            Joint::RightEyeOuter => "right_eye_outer",
            Joint::LeftEar => "left_ear",
            Joint::RightEar => "right_ear",
            Joint::MouthLeft => "mouth_left",
            Joint::MouthRight => "mouth_right",
            Joint::LeftShoulder => "left_shoulder",
            Joint::RightShoulder => "right_shoulder",
            Joint::LeftElbow => "left_elbow",
            Joint::RightElbow => "right_elbow",
            Joint::LeftWrist => "left_wrist",
            Joint::RightWrist => "right_wrist",
            Joint::LeftPinky => "left_pinky",
            Joint::RightPinky => "right_pinky",
            Joint::LeftIndex => "left_index",
            Joint::RightIndex => "right_index",
            Joint::LeftThumb => "left_thumb",
            Joint::RightThumb => "right_thumb",
            Joint::LeftHip => "left_hip",
            Joint::RightHip => "right_hip",
            Joint::LeftKnee => "left_knee",
            Joint::RightKnee => "right_knee",
            Joint::LeftAnkle => "left_ankle",
            Joint::RightAnkle => "right_ankle",
            Joint::LeftHeel => "left_heel",
            Joint::RightHeel => "right_heel",
            Joint::LeftFootIndex => "left_foot_index",
            Joint::RightFootIndex => "right_foot_index",
        }
    }

    /// Human-readable name for feedback text, e.g. "left wrist".
    pub fn label(self) -> String {
        self.name().replace('_', " ")
    }

    pub fn side(self) -> Side {
        match self {
            Joint::Nose => Side::Center,
            Joint::LeftEyeInner
            | Joint::LeftEye
            | Joint::LeftEyeOuter
            | Joint::LeftEar
            | Joint::MouthLeft
            | Joint::LeftShoulder
            | Joint::LeftElbow
            | Joint::LeftWrist
            | Joint::LeftPinky
            | Joint::LeftIndex
            | Joint::LeftThumb
            | Joint::LeftHip
            | Joint::LeftKnee
            | Joint::LeftAnkle
            | Joint::LeftHeel
            | Joint::LeftFootIndex => Side::Left,
            _ => Side::Right,
        }
    }

    /// The same joint on the opposite side of the body.
    pub fn mirror(self) -> Joint {
        match self.side() {
            Side::Center => self,
            // Paired joints sit at adjacent indices except the eye groups.
            _ => match self {
                Joint::LeftEyeInner => Joint::RightEyeInner,
                Joint::LeftEye => Joint::RightEye,
                Joint::LeftEyeOuter => Joint::RightEyeOuter,
                Joint::RightEyeInner => Joint::LeftEyeInner,
                Joint::RightEye => Joint::LeftEye,
                Joint::RightEyeOuter => Joint::LeftEyeOuter,
                _ if self.side() == Side::Left => Joint::ALL[self.index() + 1],
                _ => Joint::ALL[self.index() - 1],
            },
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Joint> for usize {
    fn from(joint: Joint) -> usize {
        joint as usize
    }
}

impl TryFrom<usize> for Joint {
    type Error = AsanaError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Joint::ALL
            .get(value)
            .copied()
            .ok_or(AsanaError::InvalidJointIndex(value))
    }
}

impl FromStr for Joint {
    type Err = AsanaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        Joint::ALL
            .iter()
            .copied()
            .find(|joint| joint.name() == wanted)
            .ok_or_else(|| AsanaError::UnknownJoint(s.to_string()))
    }
}

/// One landmark as delivered by a pose estimator. Any field may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLandmark {
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl RawLandmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: None,
            visibility: None,
        }
    }

    /// Both coordinates, if present and finite.
    pub fn point(&self) -> Option<Vec2<f32>> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(Vec2::new(x, y)).filter(|p| p.is_finite()),
            _ => None,
        }
    }
}

impl From<Vec2<f32>> for RawLandmark {
    fn from(point: Vec2<f32>) -> Self {
        RawLandmark::new(point.x, point.y)
    }
}

/// All 33 joint positions of one frame, addressable by `Joint` or index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointFrame {
    points: [Vec2<f32>; JOINT_COUNT],
}

impl JointFrame {
    /// Build a frame from exactly 33 raw landmarks in canonical order.
    pub fn from_landmarks(landmarks: &[RawLandmark]) -> Result<Self, AsanaError> {
        check_count(landmarks.len())?;
        let mut points = [Vec2::zero(); JOINT_COUNT];
        for (index, landmark) in landmarks.iter().enumerate() {
            points[index] = landmark
                .point()
                .ok_or(AsanaError::MissingCoordinate { index })?;
        }
        Ok(Self { points })
    }

    /// Build a frame from exactly 33 points in canonical order.
    pub fn from_points(points: &[Vec2<f32>]) -> Result<Self, AsanaError> {
        check_count(points.len())?;
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(AsanaError::MissingCoordinate { index });
        }
        let mut frame = [Vec2::zero(); JOINT_COUNT];
        frame.copy_from_slice(points);
        Ok(Self { points: frame })
    }

    pub fn get(&self, joint: Joint) -> Vec2<f32> {
        self.points[joint.index()]
    }

    pub fn by_name(&self, name: &str) -> Option<Vec2<f32>> {
        name.parse::<Joint>().ok().map(|joint| self.get(joint))
    }

    pub fn points(&self) -> &[Vec2<f32>; JOINT_COUNT] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = (Joint, Vec2<f32>)> + '_ {
        Joint::ALL.iter().map(|&joint| (joint, self.get(joint)))
    }

    /// Copy of the frame with one joint moved.
    pub fn with(mut self, joint: Joint, point: Vec2<f32>) -> Self {
        self.points[joint.index()] = point;
        self
    }

    /// Horizontal reflection: x is mirrored around 0.5 and every left joint
    /// trades places with its right counterpart.
    pub fn mirrored(&self) -> Self {
        let mut points = [Vec2::zero(); JOINT_COUNT];
        for joint in Joint::ALL {
            points[joint.mirror().index()] = self.get(joint).mirrored();
        }
        Self { points }
    }
}

impl Index<Joint> for JointFrame {
    type Output = Vec2<f32>;

    fn index(&self, joint: Joint) -> &Vec2<f32> {
        &self.points[joint.index()]
    }
}

fn check_count(found: usize) -> Result<(), AsanaError> {
    if found < JOINT_COUNT {
        return Err(AsanaError::MissingJoints {
            expected: JOINT_COUNT,
            found,
        });
    }
    if found > JOINT_COUNT {
        return Err(AsanaError::TooManyJoints {
            expected: JOINT_COUNT,
            found,
        });
    }
    Ok(())
}
