//! Posture evaluation: scores one frame of 33 body landmarks against a named
//! posture and reports per-joint correctness with feedback text.

mod error;
pub use error::*;

mod joint;
pub use joint::*;

pub mod geometry;

mod orientation;
pub use orientation::*;

mod evaluation;
pub use evaluation::*;

mod rule;
pub use rule::*;

mod angle_table;
pub use angle_table::*;

pub mod postures;

mod registry;
pub use registry::*;

mod request;
pub use request::*;
