use {
    crate::{Correctness, Evaluation, RawLandmark},
    serde::{Deserialize, Serialize},
};

/// Client request: the posture to check and the detected landmark frames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseRequest {
    /// Posture identifier, e.g. "VRKSASANA".
    #[serde(default)]
    pub instructions: String,
    /// One landmark list per detected frame; only the first one is scored.
    #[serde(default, alias = "poseLandmarks")]
    pub pose_landmarks: Vec<Vec<RawLandmark>>,
}

/// Reply sent back to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseFeedback {
    pub accuracy: f32,
    pub label: String,
    pub correct: Correctness,
    pub feedback: String,
}

impl From<Evaluation> for PoseFeedback {
    fn from(evaluation: Evaluation) -> Self {
        Self {
            accuracy: evaluation.accuracy,
            label: evaluation.label,
            correct: evaluation.correctness,
            feedback: evaluation.feedback,
        }
    }
}
