/// JsonSweep Core — the directory sweeping engine.
///
/// This crate contains all business logic with zero frontend dependencies.
/// It is designed to be reusable across different frontends (CLI, GUI, TUI).
///
/// # Modules
///
/// - [`sweeper`] — serial top-down deletion walk and completion statistics.
/// - [`error`] — typed failures carrying the offending path and cause.
pub mod error;
pub mod sweeper;

pub use error::SweepError;
pub use sweeper::{sweep, SweepStats};
