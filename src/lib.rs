pub mod commands;
pub mod error;
pub mod fixtures;
pub mod layout;
pub mod logging;
pub mod manifest;
pub mod report;

pub use error::{EvalError, Result};
