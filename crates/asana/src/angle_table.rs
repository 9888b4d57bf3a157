use {
    crate::{
        AsanaError, Correctness, Evaluation, Joint, JointFrame, LABEL_CORRECT, LABEL_INCORRECT,
        Orientation, Posture, geometry::angle,
    },
    base::log,
    serde::{Deserialize, Serialize},
    std::{collections::HashMap, fmt, path::Path, str::FromStr},
};

/// Allowed deviation from the ideal angle, in degrees, either way.
pub const ANGLE_TOLERANCE: f32 = 20.0;

/// Three joints whose angle is measured at the middle one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triplet {
    pub first: Joint,
    pub vertex: Joint,
    pub last: Joint,
}

impl Triplet {
    pub const LEFT_ELBOW: Triplet =
        Triplet::new(Joint::LeftWrist, Joint::LeftElbow, Joint::LeftShoulder);
    pub const RIGHT_ELBOW: Triplet =
        Triplet::new(Joint::RightShoulder, Joint::RightElbow, Joint::RightWrist);

    pub const fn new(first: Joint, vertex: Joint, last: Joint) -> Self {
        Self {
            first,
            vertex,
            last,
        }
    }

    pub fn measure(&self, frame: &JointFrame) -> f32 {
        angle(frame[self.first], frame[self.vertex], frame[self.last])
    }
}

/// Prints the numeric key form, e.g. `15_13_11`.
impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}",
            self.first.index(),
            self.vertex.index(),
            self.last.index()
        )
    }
}

/// Accepts `15_13_11` or `left_wrist/left_elbow/left_shoulder`.
impl FromStr for Triplet {
    type Err = AsanaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let joints: Vec<Joint> = if s.contains('/') {
            s.split('/').map(str::parse::<Joint>).collect::<Result<_, _>>()?
        } else {
            s.split('_')
                .map(|part| {
                    part.trim()
                        .parse::<usize>()
                        .map_err(|_| AsanaError::Table(format!("invalid triplet key: {s:?}")))
                        .and_then(Joint::try_from)
                })
                .collect::<Result<_, _>>()?
        };
        match joints.as_slice() {
            [first, vertex, last] => Ok(Triplet::new(*first, *vertex, *last)),
            _ => Err(AsanaError::Table(format!(
                "triplet key {s:?} must name exactly three joints"
            ))),
        }
    }
}

/// Ideal angle per orientation; `None` means "no constraint".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IdealAngles {
    #[serde(rename = "Front", default, skip_serializing_if = "Option::is_none")]
    pub front: Option<f32>,
    #[serde(rename = "Left", default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    #[serde(rename = "Right", default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f32>,
}

impl IdealAngles {
    pub fn for_orientation(&self, orientation: Orientation) -> Option<f32> {
        match orientation {
            Orientation::Front => self.front,
            Orientation::Left => self.left,
            Orientation::Right => self.right,
            Orientation::Uncertain => None,
        }
    }
}

/// Reference angles keyed by joint triplet. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "HashMap<String, IdealAngles>",
    into = "HashMap<String, IdealAngles>"
)]
pub struct IdealAngleTable {
    entries: HashMap<Triplet, IdealAngles>,
}

impl IdealAngleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, triplet: Triplet, angles: IdealAngles) {
        self.entries.insert(triplet, angles);
    }

    pub fn get(&self, triplet: &Triplet) -> Option<&IdealAngles> {
        self.entries.get(triplet)
    }

    pub fn ideal(&self, triplet: &Triplet, orientation: Orientation) -> Option<f32> {
        self.get(triplet)
            .and_then(|angles| angles.for_orientation(orientation))
    }

    pub fn triplets(&self) -> impl Iterator<Item = &Triplet> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse the tabular layout
    /// `Landmark Pair,Front (degrees),Right (degrees),Left (degrees)`.
    ///
    /// Columns are located by header name, so their order may vary and any
    /// of the three orientation columns may be absent. Empty and `nan` cells
    /// mean no ideal angle.
    pub fn from_csv_str(text: &str) -> Result<Self, AsanaError> {
        let mut rows = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());
        let (_, header) = rows
            .next()
            .ok_or_else(|| AsanaError::Table("empty table".to_string()))?;
        let header = split_row(header.trim_start_matches('\u{feff}'));
        let column = |prefix: &str| header.iter().position(|name| name.starts_with(prefix));
        let key_column = column("Landmark Pair").unwrap_or(0);
        let front = column("Front");
        let left = column("Left");
        let right = column("Right");
        if front.is_none() && left.is_none() && right.is_none() {
            return Err(AsanaError::Table(
                "header names no Front, Left or Right column".to_string(),
            ));
        }

        let mut table = Self::new();
        for (number, line) in rows {
            let cells = split_row(line);
            let line_number = number + 1;
            let key = cells.get(key_column).ok_or_else(|| {
                AsanaError::Table(format!("line {line_number}: missing landmark pair"))
            })?;
            let triplet = key.parse::<Triplet>()?;
            let cell = |column: Option<usize>| -> Result<Option<f32>, AsanaError> {
                match column.and_then(|index| cells.get(index)) {
                    Some(cell) => parse_degrees(cell).map_err(|_| {
                        AsanaError::Table(format!("line {line_number}: invalid angle {cell:?}"))
                    }),
                    None => Ok(None),
                }
            };
            table.insert(
                triplet,
                IdealAngles {
                    front: cell(front)?,
                    left: cell(left)?,
                    right: cell(right)?,
                },
            );
        }
        Ok(table)
    }

    pub fn from_json_str(text: &str) -> Result<Self, AsanaError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load from disk; `.json` files are read as JSON, everything else as CSV.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AsanaError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_csv_str(&text)
        }
    }
}

impl TryFrom<HashMap<String, IdealAngles>> for IdealAngleTable {
    type Error = AsanaError;

    fn try_from(raw: HashMap<String, IdealAngles>) -> Result<Self, Self::Error> {
        let mut table = Self::new();
        for (key, angles) in raw {
            table.insert(key.parse()?, angles);
        }
        Ok(table)
    }
}

impl From<IdealAngleTable> for HashMap<String, IdealAngles> {
    fn from(table: IdealAngleTable) -> Self {
        table
            .entries
            .into_iter()
            .map(|(triplet, angles)| (triplet.to_string(), angles))
            .collect()
    }
}

fn split_row(line: &str) -> Vec<String> {
    line.split(',')
        .map(|cell| cell.trim().trim_matches('"').trim().to_string())
        .collect()
}

fn parse_degrees(cell: &str) -> Result<Option<f32>, std::num::ParseFloatError> {
    if cell.is_empty() || cell.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    cell.parse::<f32>().map(Some)
}

/// Posture scored against an ideal-angle table instead of a rule table.
///
/// The orientation of the frame selects which ideal angle applies to each
/// measured triplet. A triplet deviating by more than the tolerance flags
/// its vertex joint.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleTablePosture {
    name: String,
    table: IdealAngleTable,
    triplets: Vec<Triplet>,
    tolerance: f32,
}

impl AngleTablePosture {
    /// Measures both elbows by default.
    pub fn new(name: impl Into<String>, table: IdealAngleTable) -> Self {
        Self {
            name: name.into(),
            table,
            triplets: vec![Triplet::LEFT_ELBOW, Triplet::RIGHT_ELBOW],
            tolerance: ANGLE_TOLERANCE,
        }
    }

    pub fn with_triplets(mut self, triplets: impl IntoIterator<Item = Triplet>) -> Self {
        self.triplets = triplets.into_iter().collect();
        self
    }

    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn table(&self) -> &IdealAngleTable {
        &self.table
    }
}

impl Posture for AngleTablePosture {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, frame: &JointFrame) -> Evaluation {
        let orientation = Orientation::of_frame(frame);
        let mut correctness = Correctness::all_correct();
        let mut feedback = Vec::new();
        for triplet in &self.triplets {
            let measured = triplet.measure(frame);
            log::debug!("{}: {orientation} angle at {triplet} is {measured:.2}", self.name);
            let Some(ideal) = self.table.ideal(triplet, orientation) else {
                continue;
            };
            let (low, high) = (ideal - self.tolerance, ideal + self.tolerance);
            if !(low..=high).contains(&measured) {
                correctness.mark(triplet.vertex);
                feedback.push(format!(
                    "Angle at {triplet} should be between {low:.2} and {high:.2} degrees, but is {measured:.2}."
                ));
            }
        }

        let label = if correctness.count_correct() == correctness.len() {
            LABEL_CORRECT
        } else {
            LABEL_INCORRECT
        };
        let feedback = if feedback.is_empty() {
            "Pose is correct".to_string()
        } else {
            feedback.join(" ")
        };
        Evaluation {
            accuracy: correctness.accuracy(),
            label: label.to_string(),
            correctness,
            feedback,
        }
    }
}
