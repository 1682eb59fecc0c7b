mod color;
mod error;
mod instance;
mod loader;

pub use color::{Color, CostKind};
pub use error::InstanceError;
pub use instance::{DiskSpec, InstanceSpec, Placement, ProblemInstance, ServerSpec};
