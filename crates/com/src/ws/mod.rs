mod client;
pub use client::*;

mod json;
pub use json::*;

mod server;
pub use server::*;
