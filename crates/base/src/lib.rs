pub mod logging;
pub use logging::*;

mod vec2;
pub use vec2::*;

// Downstream crates log through `base::log::info!` and friends.
pub use log;
