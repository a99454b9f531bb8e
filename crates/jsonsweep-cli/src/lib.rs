/// JsonSweep CLI — interactive terminal frontend.
///
/// This crate contains the prompt/confirmation dialogue. Business
/// logic lives in `jsonsweep-core`.
pub mod session;

pub use session::{run_session, TARGET_SUFFIX};
