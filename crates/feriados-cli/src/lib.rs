//! Library components of the `feriados` command: logging setup and the
//! fetch → validate → derive → export → index pipeline.

pub mod error;
pub mod logging;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{Pipeline, PipelineState, RunOutcome};
