pub mod calculator;
mod error;
pub mod ui;

pub use error::{Error, Position};
