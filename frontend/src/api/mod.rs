pub mod client;
mod schedule;
pub mod types;

pub use client::*;
pub use types::*;
