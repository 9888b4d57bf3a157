mod error;
pub use error::*;

pub mod ws;
pub use ws::*;
