//! The relaxation engine.

pub use relaxation::{ParseModeError, Relaxation, RelaxationMode};
pub use result::{DistanceTable, PredecessorTable, RunResult};

mod relaxation;
mod result;
