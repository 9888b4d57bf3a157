use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AsanaError {
    MissingJoints { expected: usize, found: usize },
    TooManyJoints { expected: usize, found: usize },
    MissingCoordinate { index: usize },
    InvalidJointIndex(usize),
    UnknownJoint(String),
    Table(String),
    Io(String),
}

impl fmt::Display for AsanaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsanaError::MissingJoints { expected, found } => {
                write!(f, "missing joints: expected {expected}, found {found}")
            }
            AsanaError::TooManyJoints { expected, found } => {
                write!(f, "too many joints: expected {expected}, found {found}")
            }
            AsanaError::MissingCoordinate { index } => {
                write!(f, "landmark {index} has no usable x/y coordinates")
            }
            AsanaError::InvalidJointIndex(index) => {
                write!(f, "invalid joint index: {index}, must be in range 0-32")
            }
            AsanaError::UnknownJoint(name) => write!(f, "unknown joint: {name}"),
            AsanaError::Table(msg) => write!(f, "angle table error: {msg}"),
            AsanaError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for AsanaError {}

impl From<std::io::Error> for AsanaError {
    fn from(err: std::io::Error) -> Self {
        AsanaError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AsanaError {
    fn from(err: serde_json::Error) -> Self {
        AsanaError::Table(err.to_string())
    }
}
