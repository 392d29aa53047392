//! Input layer: which log files to read and how to label them.
//!
//! Kept apart from log parsing and rendering. It owns:
//! - directory scan by naming convention, with an explicit-list override
//! - ProcessLabel (pid / process name from the file name)

pub mod discover;
pub mod label;

pub use discover::resolve_inputs;
pub use label::ProcessLabel;
