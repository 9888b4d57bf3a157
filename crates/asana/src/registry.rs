use {
    crate::{
        AngleTablePosture, Evaluation, IdealAngleTable, JointFrame, PoseFeedback, PoseRequest,
        Posture, RawLandmark, postures,
    },
    base::log,
    std::collections::HashMap,
};

/// Posture identifier to evaluator table.
///
/// Built once at startup and shared read-only afterwards. Identifiers are
/// matched case-insensitively.
pub struct Registry {
    postures: HashMap<String, Box<dyn Posture>>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            postures: HashMap::new(),
        }
    }

    /// Registry holding the built-in catalog.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (id, rule) in postures::catalog() {
            registry.register(id, rule);
        }
        registry
    }

    /// Add or replace a posture.
    pub fn register(&mut self, id: &str, posture: impl Posture + 'static) {
        self.postures.insert(id.to_uppercase(), Box::new(posture));
    }

    pub fn with_angle_table(mut self, id: &str, label: &str, table: IdealAngleTable) -> Self {
        self.register(id, AngleTablePosture::new(label, table));
        self
    }

    pub fn get(&self, id: &str) -> Option<&dyn Posture> {
        self.postures.get(&id.to_uppercase()).map(|posture| posture.as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Registered identifiers, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.postures.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.postures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postures.is_empty()
    }

    pub fn evaluate(&self, id: &str, frame: &JointFrame) -> Evaluation {
        match self.get(id) {
            Some(posture) => posture.evaluate(frame),
            None => {
                log::warn!("unknown posture: {id}");
                Evaluation::unknown_pose()
            }
        }
    }

    /// Evaluate raw landmarks. Landmark sets that do not form a complete
    /// frame produce the error result instead of a score.
    pub fn evaluate_landmarks(&self, id: &str, landmarks: &[RawLandmark]) -> Evaluation {
        let Some(posture) = self.get(id) else {
            log::warn!("unknown posture: {id}");
            return Evaluation::unknown_pose();
        };
        match JointFrame::from_landmarks(landmarks) {
            Ok(frame) => posture.evaluate(&frame),
            Err(error) => {
                log::warn!("rejected landmarks for {id}: {error}");
                Evaluation::error(error.to_string())
            }
        }
    }

    /// Score the first frame of a client request. An unknown posture wins
    /// over a request without frames.
    pub fn evaluate_request(&self, request: &PoseRequest) -> Evaluation {
        if !self.contains(&request.instructions) {
            log::warn!("unknown posture: {}", request.instructions);
            return Evaluation::unknown_pose();
        }
        match request.pose_landmarks.first() {
            Some(landmarks) => self.evaluate_landmarks(&request.instructions, landmarks),
            None => Evaluation::no_pose(),
        }
    }

    pub fn handle(&self, request: &PoseRequest) -> PoseFeedback {
        self.evaluate_request(request).into()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
