use {
    crate::{JOINT_COUNT, Joint},
    serde::{Deserialize, Serialize},
};

pub const LABEL_NONE: &str = "None";
pub const LABEL_ERROR: &str = "Error";
pub const LABEL_UNKNOWN_POSE: &str = "Unknown pose";
pub const LABEL_NO_POSE: &str = "No pose detected";
pub const LABEL_CORRECT: &str = "Correct";
pub const LABEL_INCORRECT: &str = "Incorrect";

/// Per-joint flags, 1 = correct and 0 = incorrect, in canonical joint order.
///
/// Holds exactly 33 entries for every evaluated frame; only the unknown-pose
/// and no-pose results carry an empty vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Correctness(Vec<u8>);

impl Correctness {
    pub fn all_correct() -> Self {
        Self(vec![1; JOINT_COUNT])
    }

    pub fn all_incorrect() -> Self {
        Self(vec![0; JOINT_COUNT])
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn mark(&mut self, joint: Joint) {
        if let Some(flag) = self.0.get_mut(joint.index()) {
            *flag = 0;
        }
    }

    pub fn is_correct(&self, joint: Joint) -> bool {
        self.0.get(joint.index()) == Some(&1)
    }

    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&flag| flag == 1).count()
    }

    /// Share of correct joints, 0–100. An empty vector scores 0.
    pub fn accuracy(&self) -> f32 {
        if self.0.is_empty() {
            return 0.0;
        }
        self.count_correct() as f32 / self.0.len() as f32 * 100.0
    }

    pub fn incorrect_joints(&self) -> impl Iterator<Item = Joint> + '_ {
        Joint::ALL.into_iter().filter(|&joint| self.0.get(joint.index()) == Some(&0))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

/// Outcome of scoring one frame against one posture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub accuracy: f32,
    pub label: String,
    pub correctness: Correctness,
    pub feedback: String,
}

impl Evaluation {
    pub fn unknown_pose() -> Self {
        Self {
            accuracy: 0.0,
            label: LABEL_UNKNOWN_POSE.to_string(),
            correctness: Correctness::empty(),
            feedback: String::new(),
        }
    }

    pub fn no_pose() -> Self {
        Self {
            accuracy: 0.0,
            label: LABEL_NO_POSE.to_string(),
            correctness: Correctness::empty(),
            feedback: LABEL_NO_POSE.to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            accuracy: 0.0,
            label: LABEL_ERROR.to_string(),
            correctness: Correctness::all_incorrect(),
            feedback: message.into(),
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.accuracy >= 100.0
    }
}

/// Running tally over the frames of one session or video.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionStats {
    pub frames: u64,
    pub perfect_frames: u64,
}

impl SessionStats {
    pub fn record(&mut self, evaluation: &Evaluation) {
        self.frames += 1;
        if evaluation.is_perfect() {
            self.perfect_frames += 1;
        }
    }

    /// Percentage of frames that scored 100.
    pub fn perfect_ratio(&self) -> f32 {
        if self.frames == 0 {
            0.0
        } else {
            self.perfect_frames as f32 / self.frames as f32 * 100.0
        }
    }
}
