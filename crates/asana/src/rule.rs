use {
    crate::{
        Correctness, Evaluation, Joint, JointFrame, LABEL_NONE,
        geometry::{angle, distance},
    },
    base::{Vec2, log},
};

/// Something that can score a frame.
pub trait Posture: Send + Sync {
    /// Name reported as the label of a passing frame.
    fn name(&self) -> &str;

    fn evaluate(&self, frame: &JointFrame) -> Evaluation;
}

/// Inclusive angle range in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f32,
    pub max: f32,
}

impl Band {
    /// Loose straightness check used by most limbs.
    pub const STRAIGHT: Band = Band::new(150.0, 200.0);
    /// Stricter straightness check.
    pub const STRICT: Band = Band::new(165.0, 190.0);

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, degrees: f32) -> bool {
        (self.min..=self.max).contains(&degrees)
    }
}

/// Distance threshold proportional to a body measurement of the same frame,
/// so proximity checks do not depend on how far the subject stands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub from: Joint,
    pub to: Joint,
    pub factor: f32,
}

impl Scale {
    pub const fn between(from: Joint, to: Joint, factor: f32) -> Self {
        Self { from, to, factor }
    }

    pub const fn hips(factor: f32) -> Self {
        Self::between(Joint::LeftHip, Joint::RightHip, factor)
    }

    pub const fn shoulders(factor: f32) -> Self {
        Self::between(Joint::LeftShoulder, Joint::RightShoulder, factor)
    }

    pub fn resolve(&self, frame: &JointFrame) -> f32 {
        distance(frame[self.from], frame[self.to]) * self.factor
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// First joint is higher in the image than (or level with) the second.
    Above(Joint, Joint),
    Near { a: Joint, b: Joint, scale: Scale },
    Far { a: Joint, b: Joint, scale: Scale },
    AngleWithin { first: Joint, vertex: Joint, last: Joint, band: Band },
    AngleBelow { first: Joint, vertex: Joint, last: Joint, max: f32 },
    /// Joint lies within `radius` of a fixed normalized position.
    Anchored { joint: Joint, target: Vec2<f32>, radius: f32 },
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
    Not(Box<Predicate>),
}

impl Predicate {
    pub fn holds(&self, frame: &JointFrame) -> bool {
        match self {
            Predicate::Above(upper, lower) => frame[*upper].y <= frame[*lower].y,
            Predicate::Near { a, b, scale } => distance(frame[*a], frame[*b]) < scale.resolve(frame),
            Predicate::Far { a, b, scale } => distance(frame[*a], frame[*b]) > scale.resolve(frame),
            Predicate::AngleWithin {
                first,
                vertex,
                last,
                band,
            } => band.contains(angle(frame[*first], frame[*vertex], frame[*last])),
            Predicate::AngleBelow {
                first,
                vertex,
                last,
                max,
            } => angle(frame[*first], frame[*vertex], frame[*last]) < *max,
            Predicate::Anchored {
                joint,
                target,
                radius,
            } => distance(frame[*joint], *target) <= *radius,
            Predicate::All(predicates) => predicates.iter().all(|p| p.holds(frame)),
            Predicate::Any(predicates) => predicates.iter().any(|p| p.holds(frame)),
            Predicate::Not(predicate) => !predicate.holds(frame),
        }
    }

    /// Every joint the predicate reads.
    pub fn operands(&self) -> Vec<Joint> {
        let mut joints = Vec::new();
        self.collect_operands(&mut joints);
        joints.sort();
        joints.dedup();
        joints
    }

    fn collect_operands(&self, joints: &mut Vec<Joint>) {
        match self {
            Predicate::Above(a, b) => joints.extend([*a, *b]),
            Predicate::Near { a, b, .. } | Predicate::Far { a, b, .. } => joints.extend([*a, *b]),
            Predicate::AngleWithin {
                first, vertex, last, ..
            }
            | Predicate::AngleBelow {
                first, vertex, last, ..
            } => joints.extend([*first, *vertex, *last]),
            Predicate::Anchored { joint, .. } => joints.push(*joint),
            Predicate::All(predicates) | Predicate::Any(predicates) => {
                for predicate in predicates {
                    predicate.collect_operands(joints);
                }
            }
            Predicate::Not(predicate) => predicate.collect_operands(joints),
        }
    }
}

// Shorthand constructors for rule tables.

pub fn above(upper: Joint, lower: Joint) -> Predicate {
    Predicate::Above(upper, lower)
}

pub fn near(a: Joint, b: Joint, scale: Scale) -> Predicate {
    Predicate::Near { a, b, scale }
}

pub fn far(a: Joint, b: Joint, scale: Scale) -> Predicate {
    Predicate::Far { a, b, scale }
}

pub fn angle_within(first: Joint, vertex: Joint, last: Joint, band: Band) -> Predicate {
    Predicate::AngleWithin {
        first,
        vertex,
        last,
        band,
    }
}

pub fn angle_below(first: Joint, vertex: Joint, last: Joint, max: f32) -> Predicate {
    Predicate::AngleBelow {
        first,
        vertex,
        last,
        max,
    }
}

pub fn anchored(joint: Joint, x: f32, y: f32, radius: f32) -> Predicate {
    Predicate::Anchored {
        joint,
        target: Vec2::new(x, y),
        radius,
    }
}

pub fn all(predicates: impl IntoIterator<Item = Predicate>) -> Predicate {
    Predicate::All(predicates.into_iter().collect())
}

pub fn any(predicates: impl IntoIterator<Item = Predicate>) -> Predicate {
    Predicate::Any(predicates.into_iter().collect())
}

pub fn not(predicate: Predicate) -> Predicate {
    Predicate::Not(Box::new(predicate))
}

/// One entry of a rule table: if `predicate` fails, every joint in `joints`
/// is flagged and `message` joins the feedback.
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    pub predicate: Predicate,
    pub joints: Vec<Joint>,
    pub message: String,
}

/// When a frame's label switches from "None" to the posture name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PassThreshold {
    /// Every joint must be correct.
    Exact,
    /// Accuracy strictly above the given percentage.
    Above(f32),
}

impl PassThreshold {
    pub fn passes(&self, correctness: &Correctness) -> bool {
        match self {
            PassThreshold::Exact => correctness.count_correct() == correctness.len(),
            PassThreshold::Above(percent) => correctness.accuracy() > *percent,
        }
    }
}

/// A posture described as an ordered table of checks.
#[derive(Debug, Clone, PartialEq)]
pub struct PostureRule {
    name: &'static str,
    checks: Vec<Check>,
    threshold: PassThreshold,
    separator: &'static str,
    success: &'static str,
}

impl PostureRule {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            checks: Vec::new(),
            threshold: PassThreshold::Exact,
            separator: ", ",
            success: "Pose is correct",
        }
    }

    pub fn require(
        mut self,
        predicate: Predicate,
        joints: impl IntoIterator<Item = Joint>,
        message: &str,
    ) -> Self {
        self.checks.push(Check {
            predicate,
            joints: joints.into_iter().collect(),
            message: message.to_string(),
        });
        self
    }

    pub fn pass_when(mut self, threshold: PassThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    pub fn on_success(mut self, message: &'static str) -> Self {
        self.success = message;
        self
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    pub fn threshold(&self) -> PassThreshold {
        self.threshold
    }
}

impl Posture for PostureRule {
    fn name(&self) -> &str {
        self.name
    }

    fn evaluate(&self, frame: &JointFrame) -> Evaluation {
        let mut correctness = Correctness::all_correct();
        let mut feedback = Vec::new();
        for check in &self.checks {
            if !check.predicate.holds(frame) {
                for joint in &check.joints {
                    correctness.mark(*joint);
                }
                feedback.push(check.message.as_str());
            }
        }
        log::debug!(
            "{}: {} of {} checks failed",
            self.name,
            feedback.len(),
            self.checks.len()
        );

        let label = if self.threshold.passes(&correctness) {
            self.name
        } else {
            LABEL_NONE
        };
        let feedback = if feedback.is_empty() {
            self.success.to_string()
        } else {
            feedback.join(self.separator)
        };
        Evaluation {
            accuracy: correctness.accuracy(),
            label: label.to_string(),
            correctness,
            feedback,
        }
    }
}
