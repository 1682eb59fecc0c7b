pub mod descent;

pub use descent::{DescentOptions, DescentOutcome, StopReason};
